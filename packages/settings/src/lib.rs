// ABOUTME: Contact Us email notification settings module
// ABOUTME: Field definitions, validation, change auditing, and the submission service

pub mod audit;
pub mod fields;
pub mod service;
pub mod store;
pub mod types;
pub mod validation;


pub use audit::{diff, format_audit, ChangeEntry};
pub use fields::{FieldKind, SettingField};
pub use service::{
    Actor, RequestContext, SettingsError, SettingsService, SubmitOutcome, EDIT_PERMISSION, FORM_ID,
};
pub use store::{AuditSink, AuditSinkError, PermissionChecker, SettingsStore, StoreError};
pub use types::{FieldSpec, FormView, SettingsRecord, StoredSettings};
pub use validation::{validate_email_list, ValidationError};
