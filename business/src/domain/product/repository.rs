use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::{Product, ProductFilter};

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn get_all(&self, filter: &ProductFilter) -> Result<Vec<Product>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
    async fn get_by_slug(&self, slug: &str) -> Result<Product, RepositoryError>;
}
