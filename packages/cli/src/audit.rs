// ABOUTME: Audit sink writing to the tracing pipeline
// ABOUTME: Emits change records under the contactus_email_setting target

use contactus_settings::{AuditSink, AuditSinkError};
use tracing::info;

/// Audit sink that logs formatted change records via `tracing`.
///
/// The target matches the original module's logger channel so the entries
/// can be filtered out of the general server log.
pub struct TracingAuditSink;

impl AuditSink for TracingAuditSink {
    fn record(&self, message: &str) -> Result<(), AuditSinkError> {
        info!(target: "contactus_email_setting", "{}", message);
        Ok(())
    }
}
