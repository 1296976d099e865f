use poem_openapi::payload::Json;

use business::domain::shared::value_objects::CartSessionId;

use crate::api::error::ErrorResponse;

pub const CART_SESSION_HEADER: &str = "X-Cart-Session";

/// Validates the raw `X-Cart-Session` header value.
pub fn parse_session(raw: &str) -> Result<CartSessionId, Json<ErrorResponse>> {
    CartSessionId::parse(raw).ok_or_else(|| ErrorResponse::validation("cart.invalid_session"))
}
