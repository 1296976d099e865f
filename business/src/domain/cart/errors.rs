#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("product.not_found")]
    ProductNotFound,
    #[error("cart.product_unavailable")]
    ProductUnavailable,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
