use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use edulearn_core::model::{SessionKey, SessionRecord};
use sqlx::Row;

use crate::repository::{SessionRepository, StorageError};

use super::SqliteRepository;

fn conn_err(err: sqlx::Error) -> StorageError {
    StorageError::Connection(err.to_string())
}

#[async_trait]
impl SessionRepository for SqliteRepository {
    async fn load_session(&self) -> Result<SessionRecord, StorageError> {
        let rows = sqlx::query(
            r"
            SELECT key, value
            FROM local_storage
            WHERE key IN (?1, ?2, ?3)
            ",
        )
        .bind(SessionKey::IsLoggedIn.as_str())
        .bind(SessionKey::UserName.as_str())
        .bind(SessionKey::UserEmail.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(conn_err)?;

        let mut entries = HashMap::with_capacity(rows.len());
        for row in rows {
            let key: String = row
                .try_get("key")
                .map_err(|err| StorageError::Serialization(err.to_string()))?;
            let value: String = row
                .try_get("value")
                .map_err(|err| StorageError::Serialization(err.to_string()))?;
            if let Some(key) = SessionKey::parse(&key) {
                entries.insert(key, value);
            }
        }

        Ok(SessionRecord::from_entries(|key| entries.remove(&key)))
    }

    async fn save_session(&self, record: &SessionRecord) -> Result<(), StorageError> {
        let now = Utc::now();
        let mut tx = self.pool.begin().await.map_err(conn_err)?;

        for (key, value) in record.entries() {
            match value {
                Some(value) => {
                    sqlx::query(
                        r"
                        INSERT INTO local_storage (key, value, updated_at)
                        VALUES (?1, ?2, ?3)
                        ON CONFLICT(key) DO UPDATE SET
                            value = excluded.value,
                            updated_at = excluded.updated_at
                        ",
                    )
                    .bind(key.as_str())
                    .bind(value)
                    .bind(now)
                    .execute(&mut *tx)
                    .await
                    .map_err(conn_err)?;
                }
                None => {
                    sqlx::query("DELETE FROM local_storage WHERE key = ?1")
                        .bind(key.as_str())
                        .execute(&mut *tx)
                        .await
                        .map_err(conn_err)?;
                }
            }
        }

        tx.commit().await.map_err(conn_err)?;
        Ok(())
    }

    async fn clear_session(&self) -> Result<(), StorageError> {
        sqlx::query("DELETE FROM local_storage WHERE key IN (?1, ?2, ?3)")
            .bind(SessionKey::IsLoggedIn.as_str())
            .bind(SessionKey::UserName.as_str())
            .bind(SessionKey::UserEmail.as_str())
            .execute(&self.pool)
            .await
            .map_err(conn_err)?;
        Ok(())
    }
}
