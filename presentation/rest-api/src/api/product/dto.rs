use chrono::{DateTime, Utc};
use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use business::domain::product::model::Product;
use business::domain::shared::money::format_amount;

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct ProductResponse {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    /// Unit price with two decimals
    pub price: String,
    #[oai(skip_serializing_if_is_none)]
    pub image: Option<String>,
    pub category_id: String,
    pub category_name: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_string(),
            price: format_amount(&product.price),
            name: product.name,
            slug: product.slug,
            description: product.description,
            image: product.image,
            category_id: product.category_id.to_string(),
            category_name: product.category_name,
            is_active: product.is_active,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;
    use std::str::FromStr;
    use uuid::Uuid;

    #[test]
    fn should_render_price_with_two_decimals() {
        let product = Product::from_repository(
            Uuid::new_v4(),
            "Hammer".to_string(),
            "hammer".to_string(),
            None,
            BigDecimal::from_str("12.5").unwrap(),
            None,
            Uuid::new_v4(),
            "Hand tools".to_string(),
            true,
            Utc::now(),
            Utc::now(),
        );

        let response = ProductResponse::from(product);

        assert_eq!(response.price, "12.50");
        assert_eq!(response.category_name, "Hand tools");
    }
}
