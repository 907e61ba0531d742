pub mod endpoint;
pub mod events;
pub mod transfer;

// Re-export primary types for convenience.
pub use endpoint::{MAX_HOST_LEN, MAX_IP_LEN, ParseError, PasvEndpoint};
pub use events::{EngineEvent, EventStage};
pub use transfer::{PAIR_SEPARATOR, PairError, PathPair, TransferSummary};
