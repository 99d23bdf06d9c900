//! Notifications produced by successful imports.
//!
//! The orchestrator returns events instead of dispatching them; the caller
//! dispatches after its own commit point. That keeps the pipeline testable
//! without a live bus and lets callers batch or drop notifications.

use reel_vault_catalog::LibraryFile;
use thiserror::Error;

use crate::decision::ImportDecision;

/// One file was committed to the library.
#[derive(Debug, Clone)]
pub struct FileImportedEvent {
    /// The record as persisted.
    pub record: LibraryFile,
    /// The decision that produced it.
    pub decision: ImportDecision,
    /// Whether the batch came from a completed download.
    pub new_download: bool,
}

#[derive(Debug, Error)]
#[error("publish failed: {0}")]
pub struct PublishError(pub String);

/// Receives import notifications. Fire-and-forget, at-least-once delivery is
/// acceptable; a publish failure never fails an import.
pub trait NotificationSink {
    fn publish(&self, event: &FileImportedEvent) -> Result<(), PublishError>;
}

/// Deliver events to a sink, absorbing per-event failures.
///
/// Failed publishes are logged and skipped. Returns the number delivered.
pub fn dispatch_events(events: &[FileImportedEvent], sink: &dyn NotificationSink) -> usize {
    let mut delivered = 0;

    for event in events {
        match sink.publish(event) {
            Ok(()) => delivered += 1,
            Err(e) => {
                log::warn!(
                    "Could not publish import notification for {}: {}",
                    event.record.path,
                    e
                );
            }
        }
    }

    delivered
}
