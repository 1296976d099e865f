use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::domain::cart::model::{CartState, NewCartItem};
use crate::domain::cart::repository::CartSnapshotRepository;
use crate::domain::cart::snapshot::{CartSnapshot, storage_key};
use crate::domain::cart::store::CartStore;
use crate::domain::cart::value_objects::PaymentMethod;
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::CartSessionId;

/// Cart store that writes a snapshot after every mutation.
pub struct PersistentCartStore {
    key: String,
    state: Mutex<CartState>,
    repository: Arc<dyn CartSnapshotRepository>,
    logger: Arc<dyn Logger>,
}

impl PersistentCartStore {
    /// Rehydrates the session's cart. Anything unreadable starts fresh.
    pub async fn load(
        session_id: &CartSessionId,
        repository: Arc<dyn CartSnapshotRepository>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        let key = storage_key(session_id);

        let state = match repository.load(&key).await {
            Ok(Some(payload)) => match CartSnapshot::decode(&payload) {
                Ok(state) => {
                    logger.debug(&format!(
                        "Restored cart {} with {} items",
                        key, state.unique_items
                    ));
                    state
                }
                Err(err) => {
                    logger.warn(&format!("Discarding cart snapshot {}: {}", key, err));
                    CartState::default()
                }
            },
            Ok(None) => CartState::default(),
            Err(err) => {
                logger.warn(&format!("Could not read cart snapshot {}: {}", key, err));
                CartState::default()
            }
        };

        Self {
            key,
            state: Mutex::new(state),
            repository,
            logger,
        }
    }

    async fn mutate<F>(&self, apply: F) -> CartState
    where
        F: FnOnce(&mut CartState) + Send,
    {
        let mut state = self.state.lock().await;
        let before = state.clone();
        apply(&mut *state);
        if *state != before {
            self.persist(&state).await;
        }
        state.clone()
    }

    async fn persist(&self, state: &CartState) {
        let payload = match CartSnapshot::encode(state) {
            Ok(payload) => payload,
            Err(err) => {
                self.logger
                    .error(&format!("Could not encode cart {}: {}", self.key, err));
                return;
            }
        };
        if let Err(err) = self.repository.save(&self.key, &payload).await {
            self.logger
                .error(&format!("Could not save cart {}: {}", self.key, err));
        }
    }
}

#[async_trait]
impl CartStore for PersistentCartStore {
    async fn state(&self) -> CartState {
        self.state.lock().await.clone()
    }

    async fn add_item(&self, item: NewCartItem) -> CartState {
        self.logger.info(&format!(
            "Adding product {} to cart {}",
            item.product_id, self.key
        ));
        self.mutate(|state| state.add_item(item)).await
    }

    async fn remove_item(&self, product_id: Uuid) -> CartState {
        self.mutate(|state| {
            if !state.remove_item(product_id) {
                self.logger.debug(&format!(
                    "Product {} not in cart {}, nothing removed",
                    product_id, self.key
                ));
            }
        })
        .await
    }

    async fn update_quantity(&self, product_id: Uuid, quantity: i64) -> CartState {
        self.mutate(|state| {
            if !state.update_quantity(product_id, quantity) {
                self.logger.debug(&format!(
                    "Ignored quantity {} for product {} in cart {}",
                    quantity, product_id, self.key
                ));
            }
        })
        .await
    }

    async fn set_payment_method(&self, method: PaymentMethod) -> CartState {
        self.mutate(|state| state.set_payment_method(method)).await
    }

    async fn clear(&self) -> CartState {
        self.logger.info(&format!("Clearing cart {}", self.key));
        self.mutate(CartState::clear).await
    }

    async fn open(&self) -> CartState {
        self.mutate(CartState::open).await
    }

    async fn close(&self) -> CartState {
        self.mutate(CartState::close).await
    }
}
