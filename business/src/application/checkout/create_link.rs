use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::store::CartStoreProvider;
use crate::domain::checkout::errors::CheckoutError;
use crate::domain::checkout::message::{build_checkout_url, format_order_message};
use crate::domain::checkout::model::{CheckoutLink, CheckoutSettings};
use crate::domain::checkout::use_cases::create_link::{
    CreateCheckoutLinkParams, CreateCheckoutLinkUseCase,
};
use crate::domain::logger::Logger;

pub struct CreateCheckoutLinkUseCaseImpl {
    pub carts: Arc<dyn CartStoreProvider>,
    pub settings: CheckoutSettings,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateCheckoutLinkUseCase for CreateCheckoutLinkUseCaseImpl {
    async fn execute(
        &self,
        params: CreateCheckoutLinkParams,
    ) -> Result<CheckoutLink, CheckoutError> {
        self.logger.info(&format!(
            "Creating checkout link for session {}",
            params.session_id
        ));

        let state = self.carts.store_for(&params.session_id).await.state().await;
        if state.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let message = format_order_message(
            &state.items,
            &state.total_price,
            &state.payment_method,
            &self.settings,
        );
        let url = build_checkout_url(&self.settings, &message)?;

        self.logger.info(&format!(
            "Checkout link ready: {} items, {} units",
            state.unique_items, state.total_items
        ));

        let shipping = self.settings.shipping_cost.clone();
        Ok(CheckoutLink {
            message,
            url,
            total: &state.total_price + &shipping,
            subtotal: state.total_price,
            shipping,
        })
    }
}
