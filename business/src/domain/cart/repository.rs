use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

/// Durable key-value slot holding encoded cart snapshots.
#[async_trait]
pub trait CartSnapshotRepository: Send + Sync {
    async fn load(&self, key: &str) -> Result<Option<String>, RepositoryError>;
    async fn save(&self, key: &str, payload: &str) -> Result<(), RepositoryError>;
}
