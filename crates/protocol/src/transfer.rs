use std::fmt;

use serde::{Deserialize, Serialize};

/// Separator between the source and destination URIs in a list-item
/// description.
pub const PAIR_SEPARATOR: &str = " => ";

/// One source/destination URI pair from a transfer listing.
///
/// Values are kept verbatim from the event text. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPair {
    pub source: String,
    pub destination: String,
}

/// Error produced when a list-item description cannot be split.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum PairError {
    #[error("transfer description has no \" => \" separator: {0:?}")]
    MissingSeparator(String),
}

impl PathPair {
    /// Splits a `source => destination` description on the first
    /// separator occurrence; any later separators stay in the
    /// destination. Empty sides are preserved as empty strings.
    pub fn from_description(description: &str) -> Result<Self, PairError> {
        let (source, destination) = description
            .split_once(PAIR_SEPARATOR)
            .ok_or_else(|| PairError::MissingSeparator(description.to_string()))?;
        Ok(Self {
            source: source.to_string(),
            destination: destination.to_string(),
        })
    }
}

/// Aggregate advisory for one copy operation, announced once the
/// transfer listing is complete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferSummary {
    pub source_host: String,
    pub dest_host: String,
    pub file_count: u64,
    pub total_bytes: u64,
}

impl fmt::Display for TransferSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Between {} and {} {} files with a total size of {} bytes",
            self.source_host, self.dest_host, self.file_count, self.total_bytes
        )
    }
}
