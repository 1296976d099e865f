use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum CategoryError {
    #[error("category.depth_exceeded")]
    DepthExceeded { id: Uuid },
    #[error("category.orphan")]
    Orphan { id: Uuid, parent_id: Uuid },
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
