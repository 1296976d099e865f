use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

pub struct GetProductBySlugParams {
    pub slug: String,
}

#[async_trait]
pub trait GetProductBySlugUseCase: Send + Sync {
    async fn execute(&self, params: GetProductBySlugParams) -> Result<Product, ProductError>;
}
