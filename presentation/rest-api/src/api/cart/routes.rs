use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Header, Path},
    payload::Json,
};
use strum::IntoEnumIterator;
use uuid::Uuid;

use business::domain::cart::store::{CartStore, CartStoreProvider};
use business::domain::cart::use_cases::add_product::{
    AddProductToCartParams, AddProductToCartUseCase,
};
use business::domain::cart::value_objects::PaymentMethod;

use crate::api::cart::dto::{
    AddCartItemRequest, CartResponse, PaymentMethodOption, SetPaymentMethodRequest,
    UpdateQuantityRequest,
};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::session::parse_session;
use crate::api::tags::ApiTags;

pub struct CartApi {
    carts: Arc<dyn CartStoreProvider>,
    add_product_use_case: Arc<dyn AddProductToCartUseCase>,
}

impl CartApi {
    pub fn new(
        carts: Arc<dyn CartStoreProvider>,
        add_product_use_case: Arc<dyn AddProductToCartUseCase>,
    ) -> Self {
        Self {
            carts,
            add_product_use_case,
        }
    }

    async fn store(&self, session: &str) -> Result<Arc<dyn CartStore>, Json<ErrorResponse>> {
        let session_id = parse_session(session)?;
        Ok(self.carts.store_for(&session_id).await)
    }
}

/// Shopping cart API
///
/// Every endpoint works on the cart of the session named in the
/// `X-Cart-Session` header. Operations on unknown items or with invalid
/// quantities leave the cart unchanged and return its current state.
#[OpenApi]
impl CartApi {
    /// Get the cart
    #[oai(path = "/cart", method = "get", tag = "ApiTags::Cart")]
    async fn get_cart(
        &self,
        #[oai(name = "X-Cart-Session")] session: Header<String>,
    ) -> CartStateResponse {
        match self.store(&session.0).await {
            Ok(store) => CartStateResponse::Ok(Json(store.state().await.into())),
            Err(json) => CartStateResponse::BadRequest(json),
        }
    }

    /// Add a product to the cart
    ///
    /// Adds one unit, or increments the quantity if the product is already
    /// in the cart. The product must exist and be active.
    #[oai(path = "/cart/items", method = "post", tag = "ApiTags::Cart")]
    async fn add_item(
        &self,
        #[oai(name = "X-Cart-Session")] session: Header<String>,
        body: Json<AddCartItemRequest>,
    ) -> AddCartItemResponse {
        let session_id = match parse_session(&session.0) {
            Ok(session_id) => session_id,
            Err(json) => return AddCartItemResponse::BadRequest(json),
        };
        let product_id = match Uuid::parse_str(&body.0.product_id) {
            Ok(uuid) => uuid,
            Err(_) => {
                return AddCartItemResponse::BadRequest(ErrorResponse::validation(
                    "cart.invalid_product_id",
                ));
            }
        };

        let params = AddProductToCartParams {
            session_id,
            product_id,
        };

        match self.add_product_use_case.execute(params).await {
            Ok(state) => AddCartItemResponse::Ok(Json(state.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => AddCartItemResponse::NotFound(json),
                    409 => AddCartItemResponse::Conflict(json),
                    _ => AddCartItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Change the quantity of a cart item
    #[oai(path = "/cart/items/:product_id", method = "put", tag = "ApiTags::Cart")]
    async fn update_quantity(
        &self,
        #[oai(name = "X-Cart-Session")] session: Header<String>,
        product_id: Path<String>,
        body: Json<UpdateQuantityRequest>,
    ) -> CartStateResponse {
        let product_id = match parse_product_id(&product_id.0) {
            Ok(uuid) => uuid,
            Err(json) => return CartStateResponse::BadRequest(json),
        };
        match self.store(&session.0).await {
            Ok(store) => CartStateResponse::Ok(Json(
                store
                    .update_quantity(product_id, body.0.quantity)
                    .await
                    .into(),
            )),
            Err(json) => CartStateResponse::BadRequest(json),
        }
    }

    /// Remove an item from the cart
    #[oai(
        path = "/cart/items/:product_id",
        method = "delete",
        tag = "ApiTags::Cart"
    )]
    async fn remove_item(
        &self,
        #[oai(name = "X-Cart-Session")] session: Header<String>,
        product_id: Path<String>,
    ) -> CartStateResponse {
        let product_id = match parse_product_id(&product_id.0) {
            Ok(uuid) => uuid,
            Err(json) => return CartStateResponse::BadRequest(json),
        };
        match self.store(&session.0).await {
            Ok(store) => CartStateResponse::Ok(Json(store.remove_item(product_id).await.into())),
            Err(json) => CartStateResponse::BadRequest(json),
        }
    }

    /// Select the payment method
    #[oai(path = "/cart/payment-method", method = "put", tag = "ApiTags::Cart")]
    async fn set_payment_method(
        &self,
        #[oai(name = "X-Cart-Session")] session: Header<String>,
        body: Json<SetPaymentMethodRequest>,
    ) -> CartStateResponse {
        match self.store(&session.0).await {
            Ok(store) => CartStateResponse::Ok(Json(
                store
                    .set_payment_method(body.0.payment_method.into())
                    .await
                    .into(),
            )),
            Err(json) => CartStateResponse::BadRequest(json),
        }
    }

    /// List the payment methods a customer can choose from
    #[oai(path = "/cart/payment-methods", method = "get", tag = "ApiTags::Cart")]
    async fn get_payment_methods(&self) -> Json<Vec<PaymentMethodOption>> {
        Json(PaymentMethod::iter().map(|method| method.into()).collect())
    }

    /// Empty the cart
    ///
    /// Removes every item. The payment method resets to its default and the
    /// open flag is kept.
    #[oai(path = "/cart", method = "delete", tag = "ApiTags::Cart")]
    async fn clear_cart(
        &self,
        #[oai(name = "X-Cart-Session")] session: Header<String>,
    ) -> CartStateResponse {
        match self.store(&session.0).await {
            Ok(store) => CartStateResponse::Ok(Json(store.clear().await.into())),
            Err(json) => CartStateResponse::BadRequest(json),
        }
    }

    /// Show the cart panel
    #[oai(path = "/cart/open", method = "post", tag = "ApiTags::Cart")]
    async fn open_cart(
        &self,
        #[oai(name = "X-Cart-Session")] session: Header<String>,
    ) -> CartStateResponse {
        match self.store(&session.0).await {
            Ok(store) => CartStateResponse::Ok(Json(store.open().await.into())),
            Err(json) => CartStateResponse::BadRequest(json),
        }
    }

    /// Hide the cart panel
    #[oai(path = "/cart/close", method = "post", tag = "ApiTags::Cart")]
    async fn close_cart(
        &self,
        #[oai(name = "X-Cart-Session")] session: Header<String>,
    ) -> CartStateResponse {
        match self.store(&session.0).await {
            Ok(store) => CartStateResponse::Ok(Json(store.close().await.into())),
            Err(json) => CartStateResponse::BadRequest(json),
        }
    }
}

fn parse_product_id(raw: &str) -> Result<Uuid, Json<ErrorResponse>> {
    Uuid::parse_str(raw).map_err(|_| ErrorResponse::validation("cart.invalid_product_id"))
}

#[derive(poem_openapi::ApiResponse)]
pub enum CartStateResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddCartItemResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
