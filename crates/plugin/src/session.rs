//! Per-copy-operation aggregation session.

use std::sync::Arc;

use flowbridge_protocol::transfer::{PathPair, TransferSummary};
use url::Url;

use crate::metadata::{MetadataLookup, aggregate_size};
use crate::notify::NotificationSink;
use crate::pairs::PairStore;

/// Host shown when a pair URI cannot be parsed or carries no host.
const UNKNOWN_HOST: &str = "unknown";

/// Aggregation state for one copy operation.
///
/// Listing events drive it through enter, item, exit; the cycle may
/// repeat within one operation (bulk copies list in phases). The machine
/// is permissive: events arriving in unexpected order are tolerated, not
/// rejected.
pub struct TransferSet {
    pairs: PairStore,
    lookup: Arc<dyn MetadataLookup>,
    sink: Arc<dyn NotificationSink>,
    total_bytes: u64,
}

impl TransferSet {
    pub fn new(lookup: Arc<dyn MetadataLookup>, sink: Arc<dyn NotificationSink>) -> Self {
        Self {
            pairs: PairStore::new(),
            lookup,
            sink,
            total_bytes: 0,
        }
    }

    /// A new listing phase begins; pairs from any earlier phase are stale.
    pub fn list_enter(&mut self) {
        self.pairs.clear();
    }

    /// Records one `source => destination` listing item. A description
    /// that does not split is logged and skipped.
    pub fn list_item(&mut self, description: &str) {
        match PathPair::from_description(description) {
            Ok(pair) => self.pairs.push(pair),
            Err(e) => {
                tracing::warn!(description, error = %e, "skipping unparsable listing item");
            }
        }
    }

    /// The listing is complete: aggregate source sizes and announce the
    /// transfer set. An empty listing announces nothing.
    pub fn list_exit(&mut self) {
        let Some(first) = self.pairs.first() else {
            tracing::debug!("listing finished with no pairs, nothing to announce");
            return;
        };

        // One transfer set is assumed to share endpoints, so the first
        // pair names the hosts for the whole listing.
        let source_host = display_host(&first.source);
        let dest_host = display_host(&first.destination);

        self.total_bytes = aggregate_size(&self.pairs, self.lookup.as_ref());

        let summary = TransferSummary {
            source_host,
            dest_host,
            file_count: self.pairs.len() as u64,
            total_bytes: self.total_bytes,
        };
        self.sink.transfer_set(&summary);
    }

    pub fn pair_count(&self) -> usize {
        self.pairs.len()
    }

    /// Total source bytes from the most recent completed listing.
    pub fn total_bytes(&self) -> u64 {
        self.total_bytes
    }
}

/// Best-effort host for display purposes. Partial or malformed URIs
/// produce [`UNKNOWN_HOST`] rather than failing the announcement.
fn display_host(uri: &str) -> String {
    match Url::parse(uri) {
        Ok(url) => match url.host_str() {
            Some(host) => host.to_string(),
            None => {
                tracing::debug!(uri, "URI has no host part");
                UNKNOWN_HOST.to_string()
            }
        },
        Err(e) => {
            tracing::debug!(uri, error = %e, "could not parse URI for host display");
            UNKNOWN_HOST.to_string()
        }
    }
}
