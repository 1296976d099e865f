use std::sync::Arc;

use poem_openapi::{OpenApi, param::Header, payload::Json};

use business::domain::checkout::use_cases::create_link::{
    CreateCheckoutLinkParams, CreateCheckoutLinkUseCase,
};

use crate::api::checkout::dto::CheckoutResponse;
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::session::parse_session;
use crate::api::tags::ApiTags;

pub struct CheckoutApi {
    create_link_use_case: Arc<dyn CreateCheckoutLinkUseCase>,
}

impl CheckoutApi {
    pub fn new(create_link_use_case: Arc<dyn CreateCheckoutLinkUseCase>) -> Self {
        Self {
            create_link_use_case,
        }
    }
}

#[OpenApi]
impl CheckoutApi {
    /// Start checkout
    ///
    /// Formats the session's cart as an order message and returns the
    /// messaging link that opens a chat with the shop. The cart is left
    /// untouched; clearing it after a confirmed hand-off is up to the client.
    #[oai(path = "/checkout", method = "post", tag = "ApiTags::Checkout")]
    async fn checkout(
        &self,
        #[oai(name = "X-Cart-Session")] session: Header<String>,
    ) -> CreateCheckoutResponse {
        let session_id = match parse_session(&session.0) {
            Ok(session_id) => session_id,
            Err(json) => return CreateCheckoutResponse::BadRequest(json),
        };

        match self
            .create_link_use_case
            .execute(CreateCheckoutLinkParams { session_id })
            .await
        {
            Ok(link) => CreateCheckoutResponse::Ok(Json(link.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateCheckoutResponse::BadRequest(json),
                    _ => CreateCheckoutResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateCheckoutResponse {
    #[oai(status = 200)]
    Ok(Json<CheckoutResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
