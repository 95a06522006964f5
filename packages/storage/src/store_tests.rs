// ABOUTME: Integration tests for the SQLite settings store
// ABOUTME: Verifies shadow invariants and single-commit saves

use contactus_settings::fields::SettingField;
use contactus_settings::store::SettingsStore;
use contactus_settings::types::SettingsRecord;

use crate::SqliteSettingsStore;

fn sample_record() -> SettingsRecord {
    SettingsRecord {
        email_address: "a@example.com,b@example.com".to_string(),
        email_subject: "Internal subject".to_string(),
        email_message: "Hello [user:name]".to_string(),
        email_message_anonymous: "Hello visitor".to_string(),
        email_subject_enduser: "Partner subject".to_string(),
        email_message_enduser: "Thanks for reaching out".to_string(),
    }
}

#[tokio::test]
async fn test_fresh_database_loads_empty_record() {
    let store = SqliteSettingsStore::connect_in_memory().await.unwrap();

    let stored = store.load().await.unwrap();
    assert_eq!(stored.values, SettingsRecord::default());
    assert_eq!(stored.originals, SettingsRecord::default());
}

#[tokio::test]
async fn test_save_then_load_round_trips_all_fields() {
    let store = SqliteSettingsStore::connect_in_memory().await.unwrap();
    let record = sample_record();

    store.save(&record).await.unwrap();

    let stored = store.load().await.unwrap();
    assert_eq!(stored.values, record);
}

#[tokio::test]
async fn test_shadow_equals_value_after_save() {
    let store = SqliteSettingsStore::connect_in_memory().await.unwrap();
    let record = sample_record();

    store.save(&record).await.unwrap();

    let stored = store.load().await.unwrap();
    for field in SettingField::ALL {
        assert_eq!(stored.values.get(field), stored.originals.get(field));
    }
}

#[tokio::test]
async fn test_second_save_replaces_previous_shadow() {
    let store = SqliteSettingsStore::connect_in_memory().await.unwrap();

    let first = sample_record();
    store.save(&first).await.unwrap();

    let mut second = first.clone();
    second.email_address = "c@example.com".to_string();
    store.save(&second).await.unwrap();

    let stored = store.load().await.unwrap();
    assert_eq!(stored.values.email_address, "c@example.com");
    // Shadow follows the latest save, not the first.
    assert_eq!(stored.originals.email_address, "c@example.com");
}

#[tokio::test]
async fn test_empty_values_persist_as_empty() {
    let store = SqliteSettingsStore::connect_in_memory().await.unwrap();

    let mut record = sample_record();
    store.save(&record).await.unwrap();

    record.email_message_enduser = String::new();
    store.save(&record).await.unwrap();

    let stored = store.load().await.unwrap();
    assert_eq!(stored.values.email_message_enduser, "");
    assert_eq!(stored.originals.email_message_enduser, "");
}
