#[derive(Debug, thiserror::Error)]
pub enum CheckoutError {
    #[error("checkout.empty_cart")]
    EmptyCart,
    #[error("checkout.invalid_link")]
    InvalidLink(#[from] url::ParseError),
}
