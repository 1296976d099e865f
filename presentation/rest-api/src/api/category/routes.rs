use std::sync::Arc;

use poem_openapi::{OpenApi, param::Query, payload::Json};
use uuid::Uuid;

use business::domain::category::menu::MenuExpansion;
use business::domain::category::use_cases::get_menu::{
    GetCategoryMenuParams, GetCategoryMenuUseCase,
};

use crate::api::category::dto::CategoryMenuResponse;
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CategoryApi {
    get_menu_use_case: Arc<dyn GetCategoryMenuUseCase>,
}

impl CategoryApi {
    pub fn new(get_menu_use_case: Arc<dyn GetCategoryMenuUseCase>) -> Self {
        Self { get_menu_use_case }
    }
}

#[OpenApi]
impl CategoryApi {
    /// Category menu
    ///
    /// Returns the category tree flattened depth-first, with the branches
    /// leading to the category in `path` marked as expanded.
    ///
    /// A client that previously got `manual_override: true` sends it back
    /// together with `expanded_family` and `expanded_group` to keep the
    /// user's expansion. `toggle` opens or closes a family or group.
    /// Navigating to the catalog root drops the manual expansion.
    #[oai(path = "/categories/menu", method = "get", tag = "ApiTags::Categories")]
    async fn get_menu(
        &self,
        path: Query<Option<String>>,
        manual_override: Query<Option<bool>>,
        expanded_family: Query<Option<String>>,
        expanded_group: Query<Option<String>>,
        toggle: Query<Option<String>>,
    ) -> GetCategoryMenuResponse {
        let (family, group, toggle) = match (
            parse_id(expanded_family.0),
            parse_id(expanded_group.0),
            parse_id(toggle.0),
        ) {
            (Ok(family), Ok(group), Ok(toggle)) => (family, group, toggle),
            _ => {
                return GetCategoryMenuResponse::BadRequest(ErrorResponse::validation(
                    "category.invalid_id",
                ));
            }
        };

        let params = GetCategoryMenuParams {
            path: path.0.unwrap_or_default(),
            manual: manual_override
                .0
                .unwrap_or(false)
                .then_some(MenuExpansion { family, group }),
            toggle,
        };

        match self.get_menu_use_case.execute(params).await {
            Ok(menu) => GetCategoryMenuResponse::Ok(Json(menu.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetCategoryMenuResponse::InternalError(json)
            }
        }
    }
}

fn parse_id(raw: Option<String>) -> Result<Option<Uuid>, uuid::Error> {
    raw.filter(|value| !value.trim().is_empty())
        .map(|value| Uuid::parse_str(value.trim()))
        .transpose()
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCategoryMenuResponse {
    #[oai(status = 200)]
    Ok(Json<CategoryMenuResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
