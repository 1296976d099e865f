use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::CategoryError;

/// Depth of a node in the category tree: family → group → subgroup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryLevel {
    Family,
    Group,
    Subgroup,
}

impl CategoryLevel {
    pub fn depth(&self) -> u8 {
        match self {
            CategoryLevel::Family => 1,
            CategoryLevel::Group => 2,
            CategoryLevel::Subgroup => 3,
        }
    }

    fn child(&self) -> Option<Self> {
        match self {
            CategoryLevel::Family => Some(CategoryLevel::Group),
            CategoryLevel::Group => Some(CategoryLevel::Subgroup),
            CategoryLevel::Subgroup => None,
        }
    }
}

/// A category row as stored, linked to its parent by id.
#[derive(Debug, Clone)]
pub struct FlatCategory {
    pub id: Uuid,
    pub parent_id: Option<Uuid>,
    pub name: String,
    pub slug: String,
    pub position: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub level: CategoryLevel,
    pub position: i32,
    pub children: Vec<Category>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryTree {
    roots: Vec<Category>,
}

impl CategoryTree {
    /// Builds the tree from flat rows. Siblings are ordered by position,
    /// then name.
    pub fn from_flat(rows: Vec<FlatCategory>) -> Result<Self, CategoryError> {
        let total = rows.len();
        let ids: HashSet<Uuid> = rows.iter().map(|row| row.id).collect();

        let mut by_parent: HashMap<Option<Uuid>, Vec<FlatCategory>> = HashMap::new();
        for row in rows {
            if let Some(parent_id) = row.parent_id
                && !ids.contains(&parent_id)
            {
                return Err(CategoryError::Orphan {
                    id: row.id,
                    parent_id,
                });
            }
            by_parent.entry(row.parent_id).or_default().push(row);
        }

        let mut built = 0;
        let roots = build_level(&mut by_parent, None, CategoryLevel::Family, &mut built)?;

        // Rows left behind reference each other in a cycle.
        if built < total
            && let Some(row) = by_parent.values().flatten().next()
        {
            return Err(CategoryError::Orphan {
                id: row.id,
                parent_id: row.parent_id.unwrap_or(row.id),
            });
        }

        Ok(Self { roots })
    }

    pub fn roots(&self) -> &[Category] {
        &self.roots
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Depth-first walk yielding every node with its parent id.
    pub fn walk(&self) -> Vec<(&Category, Option<Uuid>)> {
        fn visit<'a>(
            nodes: &'a [Category],
            parent: Option<Uuid>,
            out: &mut Vec<(&'a Category, Option<Uuid>)>,
        ) {
            for node in nodes {
                out.push((node, parent));
                visit(&node.children, Some(node.id), out);
            }
        }

        let mut out = Vec::new();
        visit(&self.roots, None, &mut out);
        out
    }

    /// Path from the root to the first node (depth-first) carrying `slug`.
    pub fn ancestry_of_slug(&self, slug: &str) -> Option<Vec<&Category>> {
        self.ancestry(|node| node.slug == slug)
    }

    /// Path from the root to the node with `id`.
    pub fn ancestry_of_id(&self, id: Uuid) -> Option<Vec<&Category>> {
        self.ancestry(|node| node.id == id)
    }

    fn ancestry(&self, matches: impl Fn(&Category) -> bool) -> Option<Vec<&Category>> {
        fn search<'a>(
            nodes: &'a [Category],
            matches: &dyn Fn(&Category) -> bool,
            chain: &mut Vec<&'a Category>,
        ) -> bool {
            for node in nodes {
                chain.push(node);
                if matches(node) || search(&node.children, matches, chain) {
                    return true;
                }
                chain.pop();
            }
            false
        }

        let mut chain = Vec::new();
        search(&self.roots, &matches, &mut chain).then_some(chain)
    }
}

fn build_level(
    by_parent: &mut HashMap<Option<Uuid>, Vec<FlatCategory>>,
    parent: Option<Uuid>,
    level: CategoryLevel,
    built: &mut usize,
) -> Result<Vec<Category>, CategoryError> {
    let mut rows = by_parent.remove(&parent).unwrap_or_default();
    rows.sort_by(|a, b| {
        a.position
            .cmp(&b.position)
            .then_with(|| a.name.cmp(&b.name))
    });

    let mut nodes = Vec::with_capacity(rows.len());
    for row in rows {
        *built += 1;
        let children = match level.child() {
            Some(next) => build_level(by_parent, Some(row.id), next, built)?,
            None => {
                if let Some(too_deep) = by_parent.get(&Some(row.id)).and_then(|c| c.first()) {
                    return Err(CategoryError::DepthExceeded { id: too_deep.id });
                }
                Vec::new()
            }
        };
        nodes.push(Category {
            id: row.id,
            name: row.name,
            slug: row.slug,
            level,
            position: row.position,
            children,
        });
    }
    Ok(nodes)
}
