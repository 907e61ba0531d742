//! SDN notification bridge: event routing, size aggregation, summary announcement.
//!
//! This crate implements the **observer side** of the bridge. It plugs
//! into a transfer engine's copy operations, watches the listing events,
//! and announces what is about to move so an SDN controller can
//! provision the network path ahead of the data. It never steers the
//! transfer itself: every failure inside the bridge is logged and
//! swallowed.
//!
//! # Event flow
//!
//! 1. **Register** - the copy-enter hook attaches a fresh listener
//! 2. **Listing** - enter clears, items accumulate path pairs, exit seals
//! 3. **Aggregate** - source sizes are summed through [`MetadataLookup`]
//! 4. **Announce** - a [`TransferSummary`] goes out the [`NotificationSink`]
//!
//! Passive-mode endpoint events are announced out of band, whatever the
//! listing state.
//!
//! [`TransferSummary`]: flowbridge_protocol::TransferSummary

pub mod engine;
pub mod listener;
pub mod metadata;
pub mod notify;
pub mod pairs;
pub mod plugin;
pub mod session;

// Re-export primary types for convenience.
pub use engine::{CopyParams, EventListener, RegistrationError};
pub use listener::SdnListener;
pub use metadata::{FileMeta, LookupError, MetadataLookup, aggregate_size};
pub use notify::{LogNotifier, NotificationSink};
pub use pairs::PairStore;
pub use plugin::{PLUGIN_NAME, SdnPlugin};
pub use session::TransferSet;
