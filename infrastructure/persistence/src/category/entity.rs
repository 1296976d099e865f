use sqlx::FromRow;
use uuid::Uuid;

use business::domain::category::model::FlatCategory;

#[derive(Debug, FromRow)]
pub struct CategoryEntity {
    pub id: Uuid,
    pub parent_id: Option<Uuid>,
    pub name: String,
    pub slug: String,
    pub position: i32,
}

impl CategoryEntity {
    pub fn into_domain(self) -> FlatCategory {
        FlatCategory {
            id: self.id,
            parent_id: self.parent_id,
            name: self.name,
            slug: self.slug,
            position: self.position,
        }
    }
}
