use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::checkout::errors::CheckoutError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CheckoutError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            CheckoutError::EmptyCart => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "checkout.empty_cart",
            ),
            CheckoutError::InvalidLink(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "ConfigurationError",
                "checkout.invalid_link",
            ),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: message.to_string(),
            }),
        )
    }
}
