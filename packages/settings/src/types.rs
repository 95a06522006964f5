// ABOUTME: Record and form view types for the Contact Us settings form
// ABOUTME: Submitted values, stored values with shadows, and renderer payloads

use serde::{Deserialize, Serialize};

use crate::fields::{FieldKind, SettingField};

/// One string value per field of the fixed field set.
///
/// Used both for submitted form input and for persisted values. Fields a
/// client omits deserialize as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsRecord {
    pub email_address: String,
    pub email_subject: String,
    pub email_message: String,
    #[serde(rename = "email_message_Anonymous")]
    pub email_message_anonymous: String,
    pub email_subject_enduser: String,
    pub email_message_enduser: String,
}

impl SettingsRecord {
    pub fn get(&self, field: SettingField) -> &str {
        match field {
            SettingField::EmailAddress => &self.email_address,
            SettingField::EmailSubject => &self.email_subject,
            SettingField::EmailMessage => &self.email_message,
            SettingField::EmailMessageAnonymous => &self.email_message_anonymous,
            SettingField::EmailSubjectEnduser => &self.email_subject_enduser,
            SettingField::EmailMessageEnduser => &self.email_message_enduser,
        }
    }

    pub fn set(&mut self, field: SettingField, value: String) {
        match field {
            SettingField::EmailAddress => self.email_address = value,
            SettingField::EmailSubject => self.email_subject = value,
            SettingField::EmailMessage => self.email_message = value,
            SettingField::EmailMessageAnonymous => self.email_message_anonymous = value,
            SettingField::EmailSubjectEnduser => self.email_subject_enduser = value,
            SettingField::EmailMessageEnduser => self.email_message_enduser = value,
        }
    }
}

/// Persisted state: current values plus the shadow values from the last save.
///
/// Invariant maintained by the store: immediately after a save,
/// `originals` equals `values` for every field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoredSettings {
    pub values: SettingsRecord,
    pub originals: SettingsRecord,
}

/// Field spec handed to the form renderer
#[derive(Debug, Clone, Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub label: &'static str,
    pub default_value: String,
    pub description: &'static str,
    pub help: &'static str,
    pub required: bool,
    pub disabled: bool,
}

/// Everything a renderer needs to draw the settings form
#[derive(Debug, Clone, Serialize)]
pub struct FormView {
    pub form_id: &'static str,
    pub fields: Vec<FieldSpec>,
    /// Token namespaces the renderer may offer in its token picker
    pub token_types: Vec<&'static str>,
}
