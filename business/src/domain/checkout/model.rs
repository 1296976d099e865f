use bigdecimal::BigDecimal;
use url::Url;

/// Where and how orders are handed off to the shop.
#[derive(Debug, Clone)]
pub struct CheckoutSettings {
    /// Base of the messaging deep link, e.g. `https://wa.me`.
    pub messaging_base_url: String,
    pub phone_number: String,
    /// Flat shipping surcharge added to every order.
    pub shipping_cost: BigDecimal,
    pub currency_symbol: String,
}

#[derive(Debug, Clone)]
pub struct CheckoutLink {
    pub message: String,
    pub url: Url,
    pub subtotal: BigDecimal,
    pub shipping: BigDecimal,
    pub total: BigDecimal,
}
