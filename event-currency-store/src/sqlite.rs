//! SQLite metadata store adapter.

use std::str::FromStr;

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::SqliteConnectOptions;

use event_currency_types::{EventId, EventMetadataStore, StoreError, EVENT_CURRENCY_KEY};

/// SQLite-backed [`EventMetadataStore`].
pub struct SqliteMetadataStore {
    pool: SqlitePool,
}

impl SqliteMetadataStore {
    /// Connects and runs the schema migration.
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        // Ensure on-disk SQLite target directory exists (no-op for in-memory).
        if let Some(path) = database_url.strip_prefix("sqlite://") {
            let path = path.split('?').next().unwrap_or(path);
            if path != ":memory:" {
                let p = std::path::Path::new(path);
                if let Some(parent) = p.parent() {
                    if !parent.as_os_str().is_empty() {
                        tokio::fs::create_dir_all(parent).await?;
                    }
                }
            }
        }

        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePool::connect_with(options).await?;

        let ddl = include_str!("../migrations/0001_create_event_meta.sql");
        sqlx::query(ddl).execute(&pool).await?;

        Ok(Self { pool })
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// All events with a stored currency override, as (event id, raw code).
    ///
    /// Admin tooling helper; raw values are returned unvalidated so a
    /// malformed row can be shown and cleared.
    pub async fn list_overrides(&self) -> Result<Vec<(String, String)>, StoreError> {
        let rows: Vec<(String, String)> = sqlx::query_as(
            r#"SELECT event_id, meta_value FROM event_meta WHERE meta_key = ? ORDER BY event_id"#,
        )
        .bind(EVENT_CURRENCY_KEY)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StoreError::Backend(e.to_string()))?;

        Ok(rows)
    }
}

#[async_trait]
impl EventMetadataStore for SqliteMetadataStore {
    async fn get(&self, event: EventId, key: &str) -> Result<Option<String>, StoreError> {
        let row: Option<(String,)> = sqlx::query_as(
            r#"SELECT meta_value FROM event_meta WHERE event_id = ? AND meta_key = ?"#,
        )
        .bind(event.to_string())
        .bind(key)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StoreError::Backend(e.to_string()))?;

        Ok(row.map(|(value,)| value))
    }

    async fn set(&self, event: EventId, key: &str, value: &str) -> Result<(), StoreError> {
        let now = chrono::Utc::now().to_rfc3339();

        sqlx::query(
            r#"INSERT INTO event_meta (event_id, meta_key, meta_value, updated_at)
               VALUES (?, ?, ?, ?)
               ON CONFLICT (event_id, meta_key)
               DO UPDATE SET meta_value = excluded.meta_value, updated_at = excluded.updated_at"#,
        )
        .bind(event.to_string())
        .bind(key)
        .bind(value)
        .bind(&now)
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::Backend(e.to_string()))?;

        Ok(())
    }

    async fn delete(&self, event: EventId, key: &str) -> Result<(), StoreError> {
        sqlx::query(r#"DELETE FROM event_meta WHERE event_id = ? AND meta_key = ?"#)
            .bind(event.to_string())
            .bind(key)
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))?;

        Ok(())
    }
}
