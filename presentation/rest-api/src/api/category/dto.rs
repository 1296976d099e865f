use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::category::menu::CategoryMenu;
use business::domain::category::model::CategoryLevel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Enum)]
pub enum CategoryLevelDto {
    #[oai(rename = "family")]
    Family,
    #[oai(rename = "group")]
    Group,
    #[oai(rename = "subgroup")]
    Subgroup,
}

impl From<CategoryLevel> for CategoryLevelDto {
    fn from(level: CategoryLevel) -> Self {
        match level {
            CategoryLevel::Family => CategoryLevelDto::Family,
            CategoryLevel::Group => CategoryLevelDto::Group,
            CategoryLevel::Subgroup => CategoryLevelDto::Subgroup,
        }
    }
}

/// One node of the menu, listed depth-first.
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct CategoryMenuItem {
    pub id: String,
    #[oai(skip_serializing_if_is_none)]
    pub parent_id: Option<String>,
    pub name: String,
    pub slug: String,
    pub level: CategoryLevelDto,
    pub position: i32,
    /// Whether the node's children are shown
    pub expanded: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct CategoryMenuResponse {
    #[oai(skip_serializing_if_is_none)]
    pub expanded_family: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub expanded_group: Option<String>,
    /// Send back with the expanded ids to keep the user's expansion
    pub manual_override: bool,
    pub items: Vec<CategoryMenuItem>,
}

impl From<CategoryMenu> for CategoryMenuResponse {
    fn from(menu: CategoryMenu) -> Self {
        let expansion = menu.expansion;
        let items = menu
            .tree
            .walk()
            .into_iter()
            .map(|(node, parent_id)| CategoryMenuItem {
                id: node.id.to_string(),
                parent_id: parent_id.map(|id| id.to_string()),
                name: node.name.clone(),
                slug: node.slug.clone(),
                level: node.level.into(),
                position: node.position,
                expanded: expansion.is_expanded(node.id),
            })
            .collect();

        Self {
            expanded_family: expansion.family.map(|id| id.to_string()),
            expanded_group: expansion.group.map(|id| id.to_string()),
            manual_override: menu.manual_override,
            items,
        }
    }
}
