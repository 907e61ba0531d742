//! Engine event dispatch.

use std::sync::Arc;

use flowbridge_protocol::{EngineEvent, EventStage, PasvEndpoint};

use crate::engine::EventListener;
use crate::notify::NotificationSink;
use crate::session::TransferSet;

/// Listener attached to one copy operation, routing engine events into
/// the transfer-set session.
///
/// Passive-mode events bypass the session entirely: the endpoint is
/// parsed and announced on the spot, whatever listing state the session
/// is in.
pub struct SdnListener {
    session: TransferSet,
    sink: Arc<dyn NotificationSink>,
}

impl SdnListener {
    pub fn new(session: TransferSet, sink: Arc<dyn NotificationSink>) -> Self {
        Self { session, sink }
    }
}

impl EventListener for SdnListener {
    fn on_event(&mut self, event: &EngineEvent) {
        match &event.stage {
            EventStage::ListEnter => self.session.list_enter(),
            EventStage::ListItem => self.session.list_item(&event.description),
            EventStage::ListExit => self.session.list_exit(),
            EventStage::Pasv => match PasvEndpoint::parse(&event.description) {
                Ok(endpoint) => self.sink.pasv_endpoint(&endpoint),
                Err(_) => {
                    tracing::error!("The description could not be parsed: {}", event.description);
                }
            },
            EventStage::Other(_) => {
                tracing::trace!(
                    stage = %event.stage,
                    domain = event.domain.as_str(),
                    timestamp_ms = event.timestamp_ms,
                    "ignoring engine event"
                );
            }
        }
    }
}

impl Drop for SdnListener {
    fn drop(&mut self) {
        tracing::debug!("SDN event listener released");
    }
}
