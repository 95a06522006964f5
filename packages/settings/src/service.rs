// ABOUTME: Submission service for the Contact Us settings form
// ABOUTME: Permission check, validation, diff, persist, then best-effort audit

use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::audit::{self, ChangeEntry};
use crate::fields::SettingField;
use crate::store::{AuditSink, PermissionChecker, SettingsStore, StoreError};
use crate::types::{FieldSpec, FormView, SettingsRecord};
use crate::validation::{self, ValidationError};

/// Fixed identifier of the one form this service exposes
pub const FORM_ID: &str = "settings_form_contact_us";

/// Permission required to edit (rather than view) the settings
pub const EDIT_PERMISSION: &str = "edit_contactus_email_setting_permission";

/// Authenticated identity performing a request
#[derive(Debug, Clone)]
pub struct Actor {
    pub id: String,
    pub email: String,
}

/// Request-scoped context for a submission
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub actor: Actor,
    pub client_ip: String,
}

/// Service errors
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Not allowed to edit Contact Us email settings")]
    Forbidden,
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Result of a successful submission
#[derive(Debug)]
pub struct SubmitOutcome {
    pub changes: Vec<ChangeEntry>,
}

/// Orchestrates a form load or submission against the injected collaborators.
///
/// Holds no state of its own; the store is the single source of truth for
/// both current values and the shadow diff baseline.
pub struct SettingsService {
    store: Arc<dyn SettingsStore>,
    audit: Arc<dyn AuditSink>,
    permissions: Arc<dyn PermissionChecker>,
}

impl SettingsService {
    pub fn new(
        store: Arc<dyn SettingsStore>,
        audit: Arc<dyn AuditSink>,
        permissions: Arc<dyn PermissionChecker>,
    ) -> Self {
        Self {
            store,
            audit,
            permissions,
        }
    }

    /// Build the form view for a renderer: current values as defaults, every
    /// field required, all fields disabled for actors without edit permission.
    pub async fn form(&self, actor: &Actor) -> Result<FormView, SettingsError> {
        let stored = self.store.load().await?;
        let disabled = !self.permissions.can(&actor.id, EDIT_PERMISSION);

        let fields = SettingField::ALL
            .iter()
            .map(|field| FieldSpec {
                name: field.key(),
                kind: field.kind(),
                label: field.label(),
                default_value: stored.values.get(*field).to_string(),
                description: field.description(),
                help: field.help(),
                required: true,
                disabled,
            })
            .collect();

        Ok(FormView {
            form_id: FORM_ID,
            fields,
            token_types: vec!["user"],
        })
    }

    /// Process one submission: re-check permission, validate the address
    /// list, diff against the stored shadow values, persist, and audit.
    ///
    /// The shadow baseline is re-read from the store rather than taken from
    /// client-echoed form values, so a stale or forged client copy cannot
    /// suppress audit entries. Store failures abort the submission; audit
    /// sink failures do not.
    pub async fn submit(
        &self,
        ctx: &RequestContext,
        submitted: SettingsRecord,
    ) -> Result<SubmitOutcome, SettingsError> {
        if !self.permissions.can(&ctx.actor.id, EDIT_PERMISSION) {
            warn!(
                actor = %ctx.actor.id,
                client_ip = %ctx.client_ip,
                "rejected settings submission without edit permission"
            );
            return Err(SettingsError::Forbidden);
        }

        validation::validate_email_list(submitted.get(SettingField::EmailAddress))?;

        let stored = self.store.load().await?;
        let changes = audit::diff(&stored.originals, &submitted);

        self.store.save(&submitted).await?;
        info!(
            actor = %ctx.actor.id,
            changed_fields = changes.len(),
            "saved Contact Us email settings"
        );

        if changes.is_empty() {
            debug!("no-op save, skipping audit entry");
        } else {
            let timestamp = Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();
            let message =
                audit::format_audit(&ctx.actor.email, &timestamp, &ctx.client_ip, &changes);
            if let Err(e) = self.audit.record(&message) {
                warn!(error = %e, "failed to record settings audit entry");
            }
        }

        Ok(SubmitOutcome { changes })
    }
}
