//! Metadata lookup seam and size aggregation.

use crate::pairs::PairStore;

/// File metadata the bridge cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileMeta {
    pub size: u64,
}

/// Errors produced by a metadata backend.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("backend error: {0}")]
    Backend(String),
}

/// Synchronous stat provider for transfer sources.
///
/// Calls block the dispatching context; any timeout handling belongs to
/// the implementor.
pub trait MetadataLookup: Send + Sync {
    fn stat(&self, url: &str) -> Result<FileMeta, LookupError>;
}

/// Sums source file sizes over the whole store.
///
/// A failed lookup is logged and skipped, so one unresolvable source
/// never aborts the rest. The total is computed fresh on every call.
pub fn aggregate_size(pairs: &PairStore, lookup: &dyn MetadataLookup) -> u64 {
    let mut total = 0u64;
    for pair in pairs.iter() {
        match lookup.stat(&pair.source) {
            Ok(meta) => total += meta.size,
            Err(e) => {
                tracing::error!(source = %pair.source, error = %e, "could not stat transfer source");
            }
        }
    }
    total
}
