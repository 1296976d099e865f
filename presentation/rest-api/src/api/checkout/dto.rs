use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use business::domain::checkout::model::CheckoutLink;
use business::domain::shared::money::format_amount;

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct CheckoutResponse {
    /// Plain-text order summary sent to the shop
    pub message: String,
    /// Messaging deep link with the summary pre-filled
    pub url: String,
    pub subtotal: String,
    pub shipping: String,
    pub total: String,
}

impl From<CheckoutLink> for CheckoutResponse {
    fn from(link: CheckoutLink) -> Self {
        Self {
            url: link.url.to_string(),
            subtotal: format_amount(&link.subtotal),
            shipping: format_amount(&link.shipping),
            total: format_amount(&link.total),
            message: link.message,
        }
    }
}
