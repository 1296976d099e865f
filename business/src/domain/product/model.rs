use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A catalog product as shown on listing and detail pages.
#[derive(Debug, Clone)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub price: BigDecimal,
    pub image: Option<String>,
    pub category_id: Uuid,
    pub category_name: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        name: String,
        slug: String,
        description: Option<String>,
        price: BigDecimal,
        image: Option<String>,
        category_id: Uuid,
        category_name: String,
        is_active: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            slug,
            description,
            price,
            image,
            category_id,
            category_name,
            is_active,
            created_at,
            updated_at,
        }
    }
}

/// Listing filter. A category slug matches the category and all of its
/// descendants.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    pub category_slug: Option<String>,
    pub include_inactive: bool,
}
