use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use super::model::{CartState, NewCartItem};
use super::value_objects::PaymentMethod;
use crate::domain::shared::value_objects::CartSessionId;

/// Single writer of a cart. Every operation returns the resulting state
/// and never fails; invalid input leaves the cart untouched.
#[async_trait]
pub trait CartStore: Send + Sync {
    async fn state(&self) -> CartState;
    async fn add_item(&self, item: NewCartItem) -> CartState;
    async fn remove_item(&self, product_id: Uuid) -> CartState;
    async fn update_quantity(&self, product_id: Uuid, quantity: i64) -> CartState;
    async fn set_payment_method(&self, method: PaymentMethod) -> CartState;
    async fn clear(&self) -> CartState;
    async fn open(&self) -> CartState;
    async fn close(&self) -> CartState;
}

/// Hands out the cart of a session, creating it on first access.
#[async_trait]
pub trait CartStoreProvider: Send + Sync {
    async fn store_for(&self, session_id: &CartSessionId) -> Arc<dyn CartStore>;
}
