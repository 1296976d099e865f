use async_trait::async_trait;

use crate::domain::category::errors::CategoryError;
use uuid::Uuid;

use crate::domain::category::menu::{CategoryMenu, MenuExpansion};

#[derive(Debug, Clone, Default)]
pub struct GetCategoryMenuParams {
    /// Current URL path, e.g. `/catalog/hand-tools`.
    pub path: String,
    /// Manual expansion the client got back from its previous menu request.
    pub manual: Option<MenuExpansion>,
    /// Family or group the user clicked, applied after navigation.
    pub toggle: Option<Uuid>,
}

#[async_trait]
pub trait GetCategoryMenuUseCase: Send + Sync {
    async fn execute(&self, params: GetCategoryMenuParams) -> Result<CategoryMenu, CategoryError>;
}
