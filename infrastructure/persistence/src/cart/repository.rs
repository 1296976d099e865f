use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::cart::repository::CartSnapshotRepository;
use business::domain::errors::RepositoryError;

/// Cart snapshots stored as JSONB, one row per storage key.
pub struct CartSnapshotRepositoryPostgres {
    pool: PgPool,
}

impl CartSnapshotRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CartSnapshotRepository for CartSnapshotRepositoryPostgres {
    async fn load(&self, key: &str) -> Result<Option<String>, RepositoryError> {
        sqlx::query_scalar::<_, String>(
            "SELECT payload::text FROM cart_snapshots WHERE storage_key = $1",
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)
    }

    async fn save(&self, key: &str, payload: &str) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO cart_snapshots (storage_key, payload, updated_at)
            VALUES ($1, $2::jsonb, NOW())
            ON CONFLICT (storage_key) DO UPDATE SET
                payload = EXCLUDED.payload,
                updated_at = EXCLUDED.updated_at"#,
        )
        .bind(key)
        .bind(payload)
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::Persistence)?;

        Ok(())
    }
}
