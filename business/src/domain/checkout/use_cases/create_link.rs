use async_trait::async_trait;

use crate::domain::checkout::errors::CheckoutError;
use crate::domain::checkout::model::CheckoutLink;
use crate::domain::shared::value_objects::CartSessionId;

pub struct CreateCheckoutLinkParams {
    pub session_id: CartSessionId,
}

#[async_trait]
pub trait CreateCheckoutLinkUseCase: Send + Sync {
    async fn execute(&self, params: CreateCheckoutLinkParams)
    -> Result<CheckoutLink, CheckoutError>;
}
