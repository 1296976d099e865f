use uuid::Uuid;

use super::model::{CategoryLevel, CategoryTree};

pub const DEFAULT_CATALOG_ROOT: &str = "/catalog";

/// Expanded branches of the accordion menu: at most one per level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuExpansion {
    pub family: Option<Uuid>,
    pub group: Option<Uuid>,
}

impl MenuExpansion {
    /// Expands the ancestors of the category named by the last path segment.
    pub fn from_path(tree: &CategoryTree, path: &str) -> Self {
        let Some(segment) = last_segment(path) else {
            return Self::default();
        };
        match tree.ancestry_of_slug(segment) {
            Some(chain) => Self::from_chain(chain.iter().map(|c| (c.id, c.level))),
            None => Self::default(),
        }
    }

    fn from_chain(chain: impl Iterator<Item = (Uuid, CategoryLevel)>) -> Self {
        let mut expansion = Self::default();
        for (id, level) in chain {
            match level {
                CategoryLevel::Family => expansion.family = Some(id),
                CategoryLevel::Group => expansion.group = Some(id),
                CategoryLevel::Subgroup => {}
            }
        }
        expansion
    }

    pub fn is_expanded(&self, id: Uuid) -> bool {
        self.family == Some(id) || self.group == Some(id)
    }
}

/// Menu view state: expansion derived from the URL, overridden by the
/// user's own clicks until they go back to the catalog root.
#[derive(Debug, Clone)]
pub struct MenuState {
    catalog_root: String,
    from_url: MenuExpansion,
    manual: Option<MenuExpansion>,
}

impl MenuState {
    pub fn new(catalog_root: impl Into<String>) -> Self {
        Self {
            catalog_root: catalog_root.into(),
            from_url: MenuExpansion::default(),
            manual: None,
        }
    }

    pub fn navigate(&mut self, tree: &CategoryTree, path: &str) {
        if normalize(path) == normalize(&self.catalog_root) {
            self.from_url = MenuExpansion::default();
            self.manual = None;
            return;
        }
        self.from_url = MenuExpansion::from_path(tree, path);
    }

    pub fn expansion(&self) -> MenuExpansion {
        self.manual.unwrap_or(self.from_url)
    }

    pub fn has_manual_override(&self) -> bool {
        self.manual.is_some()
    }

    /// Reinstates a manual expansion carried over from a previous render.
    /// Ids that no longer fit the tree are dropped.
    pub fn restore_manual(&mut self, tree: &CategoryTree, manual: MenuExpansion) {
        let family = manual
            .family
            .filter(|id| tree.ancestry_of_id(*id).is_some_and(|chain| chain.len() == 1));
        let group = manual.group.filter(|id| {
            matches!(
                tree.ancestry_of_id(*id).as_deref(),
                Some([parent, _]) if Some(parent.id) == family
            )
        });
        self.manual = Some(MenuExpansion { family, group });
    }

    /// Toggles the family or group named by `id`; other ids are ignored.
    pub fn toggle(&mut self, tree: &CategoryTree, id: Uuid) {
        match tree.ancestry_of_id(id).map(|chain| chain.len()) {
            Some(1) => self.toggle_family(tree, id),
            Some(2) => self.toggle_group(tree, id),
            _ => {}
        }
    }

    /// Opens a family (closing any other) or collapses it when already open.
    pub fn toggle_family(&mut self, tree: &CategoryTree, id: Uuid) {
        let is_family = tree
            .ancestry_of_id(id)
            .is_some_and(|chain| chain.len() == 1);
        if !is_family {
            return;
        }

        let current = self.expansion();
        self.manual = Some(if current.family == Some(id) {
            MenuExpansion::default()
        } else {
            MenuExpansion {
                family: Some(id),
                group: None,
            }
        });
    }

    /// Opens a group inside its family or collapses it when already open.
    pub fn toggle_group(&mut self, tree: &CategoryTree, id: Uuid) {
        let family = match tree.ancestry_of_id(id).as_deref() {
            Some([family, group]) if group.level == CategoryLevel::Group => family.id,
            _ => return,
        };

        let current = self.expansion();
        self.manual = Some(if current.group == Some(id) {
            MenuExpansion {
                family: Some(family),
                group: None,
            }
        } else {
            MenuExpansion {
                family: Some(family),
                group: Some(id),
            }
        });
    }
}

impl Default for MenuState {
    fn default() -> Self {
        Self::new(DEFAULT_CATALOG_ROOT)
    }
}

/// Category tree rendered for a given path.
#[derive(Debug, Clone)]
pub struct CategoryMenu {
    pub tree: CategoryTree,
    pub expansion: MenuExpansion,
    /// Whether `expansion` comes from the user's clicks rather than the URL.
    pub manual_override: bool,
}

fn strip_query(path: &str) -> &str {
    path.split(['?', '#']).next().unwrap_or_default()
}

fn last_segment(path: &str) -> Option<&str> {
    strip_query(path)
        .split('/')
        .filter(|segment| !segment.is_empty())
        .next_back()
}

fn normalize(path: &str) -> &str {
    let trimmed = strip_query(path).trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}
