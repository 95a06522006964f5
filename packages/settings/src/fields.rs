// ABOUTME: Fixed field set for the Contact Us settings form
// ABOUTME: Field keys, shadow keys, and renderer metadata

use serde::Serialize;

/// The six configurable fields, in form order.
///
/// This set is closed: fields are never added or removed at runtime, and the
/// change audit walks them in exactly this order. Wire payloads always carry
/// the `key()` spelling, never a serialized variant name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingField {
    EmailAddress,
    EmailSubject,
    EmailMessage,
    EmailMessageAnonymous,
    EmailSubjectEnduser,
    EmailMessageEnduser,
}

/// Input kind hint for the form renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    SingleLine,
    MultiLine,
}

impl SettingField {
    pub const ALL: [SettingField; 6] = [
        SettingField::EmailAddress,
        SettingField::EmailSubject,
        SettingField::EmailMessage,
        SettingField::EmailMessageAnonymous,
        SettingField::EmailSubjectEnduser,
        SettingField::EmailMessageEnduser,
    ];

    /// Storage key for the field value
    pub fn key(self) -> &'static str {
        match self {
            SettingField::EmailAddress => "email_address",
            SettingField::EmailSubject => "email_subject",
            SettingField::EmailMessage => "email_message",
            SettingField::EmailMessageAnonymous => "email_message_Anonymous",
            SettingField::EmailSubjectEnduser => "email_subject_enduser",
            SettingField::EmailMessageEnduser => "email_message_enduser",
        }
    }

    /// Storage key for the shadow value captured at the last save
    pub fn shadow_key(self) -> &'static str {
        match self {
            SettingField::EmailAddress => "email_address_original",
            SettingField::EmailSubject => "email_subject_original",
            SettingField::EmailMessage => "email_message_original",
            SettingField::EmailMessageAnonymous => "email_message_Anonymous_original",
            SettingField::EmailSubjectEnduser => "email_subject_enduser_original",
            SettingField::EmailMessageEnduser => "email_message_enduser_original",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            SettingField::EmailAddress
            | SettingField::EmailSubject
            | SettingField::EmailSubjectEnduser => FieldKind::SingleLine,
            SettingField::EmailMessage
            | SettingField::EmailMessageAnonymous
            | SettingField::EmailMessageEnduser => FieldKind::MultiLine,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SettingField::EmailAddress => "Internal Email Address",
            SettingField::EmailSubject => "Internal Subject",
            SettingField::EmailMessage => "Internal Message for Authenticated User",
            SettingField::EmailMessageAnonymous => "Internal Message for Anonymous User",
            SettingField::EmailSubjectEnduser => "Partner Subject",
            SettingField::EmailMessageEnduser => "Partner Message",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            SettingField::EmailAddress => "Enter multiple email addresses separated by commas.",
            SettingField::EmailSubject => "Subject for internal email notifications.",
            SettingField::EmailMessage => "Message body for authenticated users.",
            SettingField::EmailMessageAnonymous => "Message body for anonymous users.",
            SettingField::EmailSubjectEnduser => "Subject for end-user email notifications.",
            SettingField::EmailMessageEnduser => "Message body for end-user notifications.",
        }
    }

    /// Tooltip text shown on the rendered input
    pub fn help(self) -> &'static str {
        match self {
            SettingField::EmailAddress => {
                "Upon Contact Us submission, a notification will be sent to this email address."
            }
            SettingField::EmailSubject => "Subject line for internal notifications.",
            SettingField::EmailMessage => "Body of the internal message for authenticated users.",
            SettingField::EmailMessageAnonymous => {
                "Body of the internal message for anonymous users."
            }
            SettingField::EmailSubjectEnduser => "Subject line for end-user notifications.",
            SettingField::EmailMessageEnduser => "Body of the message for end users.",
        }
    }
}
