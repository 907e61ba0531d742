//! Announcement seam toward the SDN controller.
//!
//! The controller wire protocol is deliberately not implemented here;
//! [`NotificationSink`] is the extension point a real controller client
//! plugs into, and [`LogNotifier`] announces through the process log in
//! the meantime.

use flowbridge_protocol::{PasvEndpoint, TransferSummary};

/// Receiver for the advisories the bridge produces.
pub trait NotificationSink: Send + Sync {
    /// Announces an aggregated transfer set.
    fn transfer_set(&self, summary: &TransferSummary);

    /// Announces a negotiated passive-mode data endpoint.
    fn pasv_endpoint(&self, endpoint: &PasvEndpoint);
}

/// Sink that announces advisories on the process log.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl NotificationSink for LogNotifier {
    fn transfer_set(&self, summary: &TransferSummary) {
        tracing::warn!("{summary}");
    }

    fn pasv_endpoint(&self, endpoint: &PasvEndpoint) {
        tracing::warn!(
            "Got {}:{} for host {}",
            endpoint.ip,
            endpoint.port,
            endpoint.host
        );
    }
}
