// ABOUTME: Collaborator traits consumed by the settings service
// ABOUTME: Settings store, audit sink, and permission checker seams

use async_trait::async_trait;
use thiserror::Error;

use crate::types::{SettingsRecord, StoredSettings};

/// Store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(String),
    #[error("Migration error: {0}")]
    Migration(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence seam for the settings record and its shadow values.
///
/// `save` must write values and shadows together as one commit; partial
/// writes are not acceptable.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SettingsStore: Send + Sync {
    async fn load(&self) -> StoreResult<StoredSettings>;
    async fn save(&self, record: &SettingsRecord) -> StoreResult<()>;
}

#[derive(Debug, Error)]
#[error("Audit sink error: {0}")]
pub struct AuditSinkError(pub String);

/// Destination for formatted audit messages. Best-effort: the service logs
/// and swallows sink failures instead of rolling back the save.
#[cfg_attr(test, mockall::automock)]
pub trait AuditSink: Send + Sync {
    fn record(&self, message: &str) -> Result<(), AuditSinkError>;
}

/// Permission seam, re-checked server-side on every submission
#[cfg_attr(test, mockall::automock)]
pub trait PermissionChecker: Send + Sync {
    fn can(&self, actor_id: &str, permission: &str) -> bool;
}
