use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_by_slug::{
    GetProductBySlugParams, GetProductBySlugUseCase,
};

pub struct GetProductBySlugUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductBySlugUseCase for GetProductBySlugUseCaseImpl {
    async fn execute(&self, params: GetProductBySlugParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Fetching product by slug: {}", params.slug));

        let product = self
            .repository
            .get_by_slug(&params.slug)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })?;

        // Inactive products keep their detail page out of reach.
        if !product.is_active {
            return Err(ProductError::NotFound);
        }

        Ok(product)
    }
}
