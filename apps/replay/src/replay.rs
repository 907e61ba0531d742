//! Drive recorded event logs through the bridge.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::Mutex;

use anyhow::Context;

use flowbridge_plugin::engine::{CopyParams, EventListener, RegistrationError};
use flowbridge_plugin::notify::{LogNotifier, NotificationSink};
use flowbridge_protocol::{EngineEvent, PasvEndpoint, TransferSummary};

/// Copy-operation stand-in: collects listeners at registration time and
/// fans events out to them in registration order, the way the engine
/// delivers them.
#[derive(Default)]
pub struct ReplayParams {
    listeners: Vec<Box<dyn EventListener>>,
}

impl ReplayParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delivers one event to every registered listener.
    pub fn dispatch(&mut self, event: &EngineEvent) {
        for listener in &mut self.listeners {
            listener.on_event(event);
        }
    }
}

impl CopyParams for ReplayParams {
    fn add_event_listener(
        &mut self,
        listener: Box<dyn EventListener>,
    ) -> Result<(), RegistrationError> {
        self.listeners.push(listener);
        Ok(())
    }
}

/// Sink that announces like [`LogNotifier`] and keeps the summaries so
/// the driver can print them afterwards.
#[derive(Default)]
pub struct CollectingSink {
    log: LogNotifier,
    summaries: Mutex<Vec<TransferSummary>>,
}

impl CollectingSink {
    /// Returns the summaries collected since the last call.
    pub fn take_summaries(&self) -> Vec<TransferSummary> {
        std::mem::take(&mut *self.summaries.lock().unwrap())
    }
}

impl NotificationSink for CollectingSink {
    fn transfer_set(&self, summary: &TransferSummary) {
        self.log.transfer_set(summary);
        self.summaries.lock().unwrap().push(summary.clone());
    }

    fn pasv_endpoint(&self, endpoint: &PasvEndpoint) {
        self.log.pasv_endpoint(endpoint);
    }
}

/// Replays one event-log file (JSON lines, one event per line) as a
/// single copy operation. Blank lines are skipped; malformed lines are
/// logged and skipped. Returns the number of events delivered.
pub fn replay_file(path: &Path, params: &mut ReplayParams) -> anyhow::Result<usize> {
    let file =
        File::open(path).with_context(|| format!("could not open event log {}", path.display()))?;
    let reader = BufReader::new(file);

    let mut delivered = 0usize;
    for (number, line) in reader.lines().enumerate() {
        let line =
            line.with_context(|| format!("could not read event log {}", path.display()))?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        match serde_json::from_str::<EngineEvent>(trimmed) {
            Ok(event) => {
                params.dispatch(&event);
                delivered += 1;
            }
            Err(e) => {
                tracing::warn!(line = number + 1, error = %e, "skipping malformed event line");
            }
        }
    }

    Ok(delivered)
}
