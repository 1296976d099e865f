use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartState;
use crate::domain::shared::value_objects::CartSessionId;

pub struct AddProductToCartParams {
    pub session_id: CartSessionId,
    pub product_id: Uuid,
}

#[async_trait]
pub trait AddProductToCartUseCase: Send + Sync {
    async fn execute(&self, params: AddProductToCartParams) -> Result<CartState, CartError>;
}
