// ABOUTME: SQLite-backed settings store
// ABOUTME: Persists field values and shadow originals in a single table

use std::path::Path;
use std::str::FromStr;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Row, Sqlite, SqlitePool, Transaction};
use tracing::debug;

use contactus_settings::fields::SettingField;
use contactus_settings::store::{SettingsStore, StoreError, StoreResult};
use contactus_settings::types::{SettingsRecord, StoredSettings};

#[cfg(test)]
mod store_tests;

/// Settings store over a SQLite database.
///
/// Twelve rows in `contactus_settings`: one per field value and one per
/// `<field>_original` shadow. Keys absent from the table read as empty
/// strings, so a fresh database behaves like an all-empty record.
pub struct SqliteSettingsStore {
    pool: SqlitePool,
}

impl SqliteSettingsStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (creating if missing) the database at `path` and run migrations.
    pub async fn connect(path: &Path) -> StoreResult<Self> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .map_err(db_err)?;

        Self::with_pool(pool).await
    }

    /// Open an in-memory database, for tests.
    pub async fn connect_in_memory() -> StoreResult<Self> {
        let options = SqliteConnectOptions::from_str(":memory:")
            .map_err(db_err)?
            .create_if_missing(true);

        // A single connection keeps the in-memory database alive.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .map_err(db_err)?;

        Self::with_pool(pool).await
    }

    async fn with_pool(pool: SqlitePool) -> StoreResult<Self> {
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|e| StoreError::Migration(e.to_string()))?;
        Ok(Self::new(pool))
    }
}

#[async_trait]
impl SettingsStore for SqliteSettingsStore {
    async fn load(&self) -> StoreResult<StoredSettings> {
        let rows = sqlx::query("SELECT key, value FROM contactus_settings")
            .fetch_all(&self.pool)
            .await
            .map_err(db_err)?;

        let mut stored = StoredSettings::default();
        for row in rows {
            let key: String = row.try_get("key").map_err(db_err)?;
            let value: String = row.try_get("value").map_err(db_err)?;
            for field in SettingField::ALL {
                if key == field.key() {
                    stored.values.set(field, value.clone());
                } else if key == field.shadow_key() {
                    stored.originals.set(field, value.clone());
                }
            }
        }

        Ok(stored)
    }

    async fn save(&self, record: &SettingsRecord) -> StoreResult<()> {
        let mut tx = self.pool.begin().await.map_err(db_err)?;

        for field in SettingField::ALL {
            upsert(&mut tx, field.key(), record.get(field)).await?;
            // Shadow tracks the value just saved, so the next submission
            // diffs against this save.
            upsert(&mut tx, field.shadow_key(), record.get(field)).await?;
        }

        tx.commit().await.map_err(db_err)?;
        debug!("saved contact us settings and shadow values");
        Ok(())
    }
}

async fn upsert(tx: &mut Transaction<'_, Sqlite>, key: &str, value: &str) -> StoreResult<()> {
    sqlx::query(
        "INSERT INTO contactus_settings (key, value, updated_at)
         VALUES (?, ?, datetime('now', 'utc'))
         ON CONFLICT(key) DO UPDATE SET
             value = excluded.value,
             updated_at = excluded.updated_at",
    )
    .bind(key)
    .bind(value)
    .execute(&mut **tx)
    .await
    .map_err(db_err)?;

    Ok(())
}

fn db_err(e: impl std::fmt::Display) -> StoreError {
    StoreError::Database(e.to_string())
}
