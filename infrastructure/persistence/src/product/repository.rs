use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{Product, ProductFilter};
use business::domain::product::repository::ProductRepository;

use super::entity::ProductEntity;

const PRODUCT_COLUMNS: &str = "p.id, p.name, p.slug, p.description, p.price, p.image, \
     p.category_id, c.name AS category_name, p.is_active, p.created_at, p.updated_at";

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn get_all(&self, filter: &ProductFilter) -> Result<Vec<Product>, RepositoryError> {
        let query = format!(
            r#"WITH RECURSIVE scope AS (
                SELECT id FROM categories WHERE slug = $1
                UNION ALL
                SELECT child.id FROM categories child JOIN scope ON child.parent_id = scope.id
            )
            SELECT {PRODUCT_COLUMNS}
            FROM products p
            JOIN categories c ON c.id = p.category_id
            WHERE ($1::text IS NULL OR p.category_id IN (SELECT id FROM scope))
              AND ($2 OR p.is_active)
            ORDER BY p.name"#
        );

        let entities = sqlx::query_as::<_, ProductEntity>(&query)
            .bind(filter.category_slug.as_deref())
            .bind(filter.include_inactive)
            .fetch_all(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError> {
        let query = format!(
            "SELECT {PRODUCT_COLUMNS} FROM products p JOIN categories c ON c.id = p.category_id WHERE p.id = $1"
        );

        let entity = sqlx::query_as::<_, ProductEntity>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?
            .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn get_by_slug(&self, slug: &str) -> Result<Product, RepositoryError> {
        let query = format!(
            "SELECT {PRODUCT_COLUMNS} FROM products p JOIN categories c ON c.id = p.category_id WHERE p.slug = $1"
        );

        let entity = sqlx::query_as::<_, ProductEntity>(&query)
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?
            .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }
}
