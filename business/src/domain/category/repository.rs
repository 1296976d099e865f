use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::FlatCategory;

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<FlatCategory>, RepositoryError>;
}
