//! Plugin surface: the named capability and its copy-operation hook.

use std::sync::Arc;

use crate::engine::{CopyParams, RegistrationError};
use crate::listener::SdnListener;
use crate::metadata::MetadataLookup;
use crate::notify::NotificationSink;
use crate::session::TransferSet;

/// Capability name the host plugin loader sees.
pub const PLUGIN_NAME: &str = "SDN";

/// The SDN notification bridge.
///
/// One instance serves the whole process. Each copy operation gets its
/// own listener and session bound to the shared collaborators, so
/// concurrent operations never share mutable state.
pub struct SdnPlugin {
    lookup: Arc<dyn MetadataLookup>,
    sink: Arc<dyn NotificationSink>,
}

impl SdnPlugin {
    pub fn new(lookup: Arc<dyn MetadataLookup>, sink: Arc<dyn NotificationSink>) -> Self {
        Self { lookup, sink }
    }

    pub fn name(&self) -> &'static str {
        PLUGIN_NAME
    }

    /// Copy-operation setup hook: attaches a fresh listener for this one
    /// operation. A registration failure disables observation for the
    /// operation being set up and nothing else; running operations keep
    /// their listeners, and the transfer itself is never failed from
    /// here.
    pub fn copy_enter_hook(&self, params: &mut dyn CopyParams) -> Result<(), RegistrationError> {
        let session = TransferSet::new(self.lookup.clone(), self.sink.clone());
        let listener = SdnListener::new(session, self.sink.clone());
        params.add_event_listener(Box::new(listener))?;

        tracing::info!("SDN event listener registered");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use flowbridge_protocol::{EngineEvent, EventStage, PasvEndpoint, TransferSummary};

    use crate::engine::EventListener;
    use crate::metadata::{FileMeta, LookupError};
    use crate::notify::{LogNotifier, NotificationSink};

    use super::*;

    struct FixedLookup(u64);

    impl MetadataLookup for FixedLookup {
        fn stat(&self, _url: &str) -> Result<FileMeta, LookupError> {
            Ok(FileMeta { size: self.0 })
        }
    }

    /// Copy-operation stand-in that keeps registered listeners.
    #[derive(Default)]
    struct StubParams {
        listeners: Vec<Box<dyn EventListener>>,
        reject: bool,
    }

    impl CopyParams for StubParams {
        fn add_event_listener(
            &mut self,
            listener: Box<dyn EventListener>,
        ) -> Result<(), RegistrationError> {
            if self.reject {
                return Err(RegistrationError::Rejected("operation closed".into()));
            }
            self.listeners.push(listener);
            Ok(())
        }
    }

    fn plugin() -> SdnPlugin {
        SdnPlugin::new(Arc::new(FixedLookup(5)), Arc::new(LogNotifier))
    }

    #[test]
    fn exposes_the_capability_name() {
        assert_eq!(plugin().name(), "SDN");
    }

    #[test]
    fn hook_registers_one_listener_per_operation() {
        let plugin = plugin();
        let mut params = StubParams::default();

        plugin.copy_enter_hook(&mut params).unwrap();
        plugin.copy_enter_hook(&mut params).unwrap();

        assert_eq!(params.listeners.len(), 2);
    }

    #[test]
    fn hook_surfaces_registration_failure() {
        let plugin = plugin();
        let mut params = StubParams {
            reject: true,
            ..Default::default()
        };

        let err = plugin.copy_enter_hook(&mut params).unwrap_err();
        assert!(matches!(err, RegistrationError::Rejected(_)));
        assert!(params.listeners.is_empty());
    }

    #[test]
    fn registered_listener_observes_the_operation() {
        use std::sync::Mutex;

        #[derive(Default)]
        struct RecordingSink {
            summaries: Mutex<Vec<TransferSummary>>,
        }

        impl NotificationSink for RecordingSink {
            fn transfer_set(&self, summary: &TransferSummary) {
                self.summaries.lock().unwrap().push(summary.clone());
            }

            fn pasv_endpoint(&self, _endpoint: &PasvEndpoint) {}
        }

        let sink = Arc::new(RecordingSink::default());
        let plugin = SdnPlugin::new(Arc::new(FixedLookup(8)), sink.clone());
        let mut params = StubParams::default();
        plugin.copy_enter_hook(&mut params).unwrap();

        let listener = &mut params.listeners[0];
        listener.on_event(&EngineEvent::new(EventStage::ListEnter, ""));
        listener.on_event(&EngineEvent::new(
            EventStage::ListItem,
            "gsiftp://a.example.org/f => gsiftp://b.example.org/f",
        ));
        listener.on_event(&EngineEvent::new(EventStage::ListExit, ""));

        let summaries = sink.summaries.lock().unwrap();
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].source_host, "a.example.org");
        assert_eq!(summaries[0].total_bytes, 8);
    }
}
