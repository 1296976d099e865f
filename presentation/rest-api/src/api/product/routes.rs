use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};
use uuid::Uuid;

use business::domain::product::model::ProductFilter;
use business::domain::product::use_cases::get_all::{GetAllProductsParams, GetAllProductsUseCase};
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::get_by_slug::{
    GetProductBySlugParams, GetProductBySlugUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::ProductResponse;
use crate::api::tags::ApiTags;

pub struct ProductApi {
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    get_by_slug_use_case: Arc<dyn GetProductBySlugUseCase>,
}

impl ProductApi {
    pub fn new(
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        get_by_slug_use_case: Arc<dyn GetProductBySlugUseCase>,
    ) -> Self {
        Self {
            get_all_use_case,
            get_by_id_use_case,
            get_by_slug_use_case,
        }
    }
}

/// Storefront catalog API
///
/// Read-only access to the products customers can browse and buy.
#[OpenApi]
impl ProductApi {
    /// List active products
    ///
    /// When `category` is given, products of that category and all of its
    /// descendants are returned.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn get_all_products(&self, category: Query<Option<String>>) -> GetAllProductsResponse {
        let filter = ProductFilter {
            category_slug: category.0.filter(|slug| !slug.trim().is_empty()),
            include_inactive: false,
        };

        match self
            .get_all_use_case
            .execute(GetAllProductsParams { filter })
            .await
        {
            Ok(products) => {
                let responses: Vec<ProductResponse> =
                    products.into_iter().map(|p| p.into()).collect();
                GetAllProductsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllProductsResponse::InternalError(json)
            }
        }
    }

    /// Get a product by ID
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_id(&self, id: Path<String>) -> GetProductResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return GetProductResponse::BadRequest(ErrorResponse::validation(
                    "product.invalid_id",
                ));
            }
        };

        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id: uuid })
            .await
        {
            Ok(product) => GetProductResponse::Ok(Json(product.into())),
            Err(err) => GetProductResponse::from_error(err.into_error_response()),
        }
    }

    /// Get a product by slug
    ///
    /// Inactive products are reported as not found.
    #[oai(path = "/products/slug/:slug", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_slug(&self, slug: Path<String>) -> GetProductResponse {
        match self
            .get_by_slug_use_case
            .execute(GetProductBySlugParams { slug: slug.0 })
            .await
        {
            Ok(product) => GetProductResponse::Ok(Json(product.into())),
            Err(err) => GetProductResponse::from_error(err.into_error_response()),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl GetProductResponse {
    fn from_error((status, json): (poem::http::StatusCode, Json<ErrorResponse>)) -> Self {
        match status.as_u16() {
            404 => GetProductResponse::NotFound(json),
            _ => GetProductResponse::InternalError(json),
        }
    }
}
