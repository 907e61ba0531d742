//! Host-engine boundary traits.
//!
//! The transfer engine owns listener lifetimes: it takes a boxed listener
//! when a copy operation is set up and drops it when the operation is
//! released, whatever the outcome. Events for one operation are delivered
//! serially, which `&mut self` on [`EventListener::on_event`] encodes.

use flowbridge_protocol::EngineEvent;

/// Error returned when a listener cannot be attached to a copy operation.
///
/// Fatal only to enabling the bridge for that one operation; the transfer
/// itself proceeds unobserved.
#[derive(Debug, thiserror::Error)]
pub enum RegistrationError {
    #[error("copy operation rejected the listener: {0}")]
    Rejected(String),
}

/// Receiver for transfer-engine lifecycle events.
///
/// One listener observes exactly one copy operation. Implementations must
/// never fail the operation from inside event handling; anything that goes
/// wrong is logged and swallowed.
pub trait EventListener: Send {
    fn on_event(&mut self, event: &EngineEvent);
}

/// Per-copy-operation registration surface exposed by the engine.
///
/// Several listeners may be attached to the same operation; each receives
/// its own delivery of every event.
pub trait CopyParams {
    fn add_event_listener(
        &mut self,
        listener: Box<dyn EventListener>,
    ) -> Result<(), RegistrationError>;
}
