// ABOUTME: Change detection and audit message formatting
// ABOUTME: Diffs submitted values against the stored shadow values

use crate::fields::SettingField;
use crate::types::SettingsRecord;

/// One detected change, produced per submission and discarded after logging
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEntry {
    pub field: SettingField,
    pub old: String,
    pub new: String,
}

/// Compare submitted values against the shadow values from the last save.
///
/// Comparison is exact string inequality with no normalization. Entries come
/// back in the declared field order and the result may be empty (no-op save).
pub fn diff(shadow: &SettingsRecord, submitted: &SettingsRecord) -> Vec<ChangeEntry> {
    SettingField::ALL
        .iter()
        .copied()
        .filter(|field| shadow.get(*field) != submitted.get(*field))
        .map(|field| ChangeEntry {
            field,
            old: shadow.get(field).to_string(),
            new: submitted.get(field).to_string(),
        })
        .collect()
}

/// Render the free-text audit message for a submission with changes.
///
/// The sink is plain text, so old/new values are embedded as-is; entries are
/// joined with newlines in field order. Callers must not invoke this with an
/// empty change set.
pub fn format_audit(
    actor_email: &str,
    timestamp: &str,
    client_ip: &str,
    entries: &[ChangeEntry],
) -> String {
    let mut lines = Vec::with_capacity(entries.len() + 1);
    lines.push(format!(
        "Contact Us settings updated by {actor_email} at {timestamp} from IP: {client_ip}"
    ));
    for entry in entries {
        lines.push(format!(
            "{} — Existing: {} → Modified: {}",
            entry.field.key(),
            entry.old,
            entry.new
        ));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record_with(field: SettingField, value: &str) -> SettingsRecord {
        let mut record = SettingsRecord::default();
        record.set(field, value.to_string());
        record
    }

    #[test]
    fn test_diff_empty_when_nothing_changed() {
        let shadow = record_with(SettingField::EmailAddress, "a@example.com");
        let submitted = shadow.clone();
        assert!(diff(&shadow, &submitted).is_empty());
    }

    #[test]
    fn test_diff_detects_single_change() {
        let shadow = record_with(SettingField::EmailAddress, "old@x.com");
        let submitted = record_with(SettingField::EmailAddress, "new@x.com");
        assert_eq!(
            diff(&shadow, &submitted),
            vec![ChangeEntry {
                field: SettingField::EmailAddress,
                old: "old@x.com".to_string(),
                new: "new@x.com".to_string(),
            }]
        );
    }

    #[test]
    fn test_diff_preserves_field_order() {
        let shadow = record_with(SettingField::EmailAddress, "old@x.com");
        let mut submitted = record_with(SettingField::EmailAddress, "new@x.com");
        submitted.set(SettingField::EmailMessageEnduser, "bye".to_string());
        submitted.set(SettingField::EmailSubject, "S".to_string());

        let entries = diff(&shadow, &submitted);
        let fields: Vec<SettingField> = entries.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![
                SettingField::EmailAddress,
                SettingField::EmailSubject,
                SettingField::EmailMessageEnduser,
            ]
        );
    }

    #[test]
    fn test_diff_is_exact_string_comparison() {
        let shadow = record_with(SettingField::EmailSubject, "Hello");
        let submitted = record_with(SettingField::EmailSubject, "hello ");
        assert_eq!(diff(&shadow, &submitted).len(), 1);
    }

    #[test]
    fn test_unset_field_diffs_against_empty() {
        let shadow = SettingsRecord::default();
        let submitted = record_with(SettingField::EmailSubject, "S");
        assert_eq!(
            diff(&shadow, &submitted),
            vec![ChangeEntry {
                field: SettingField::EmailSubject,
                old: String::new(),
                new: "S".to_string(),
            }]
        );
    }

    #[test]
    fn test_format_names_actor_time_and_ip() {
        let entries = vec![ChangeEntry {
            field: SettingField::EmailAddress,
            old: "old@x.com".to_string(),
            new: "new@x.com".to_string(),
        }];
        let message = format_audit("admin@x.com", "2026-08-23 10:00:00", "10.0.0.7", &entries);
        let mut lines = message.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Contact Us settings updated by admin@x.com at 2026-08-23 10:00:00 from IP: 10.0.0.7"
        );
        assert_eq!(
            lines.next().unwrap(),
            "email_address — Existing: old@x.com → Modified: new@x.com"
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_format_joins_entries_in_order() {
        let entries = vec![
            ChangeEntry {
                field: SettingField::EmailAddress,
                old: "old@x.com".to_string(),
                new: "new@x.com".to_string(),
            },
            ChangeEntry {
                field: SettingField::EmailSubject,
                old: String::new(),
                new: "S".to_string(),
            },
        ];
        let message = format_audit("admin@x.com", "2026-08-23 10:00:00", "10.0.0.7", &entries);
        assert_eq!(message.lines().count(), 3);
        let address_at = message.find("email_address").unwrap();
        let subject_at = message.find("email_subject").unwrap();
        assert!(address_at < subject_at);
    }
}
