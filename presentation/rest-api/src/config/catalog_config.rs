use business::domain::category::menu::DEFAULT_CATALOG_ROOT;

use super::env::{Vars, process_env, string_or};

/// Catalog navigation settings.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Path of the catalog landing page; visiting it resets the menu.
    pub root_path: String,
}

impl CatalogConfig {
    /// Environment variables:
    /// - CATALOG_ROOT_PATH: Catalog landing path (default: "/catalog")
    pub fn from_env() -> Self {
        Self::from_vars(&process_env)
    }

    pub fn from_vars(vars: Vars) -> Self {
        Self {
            root_path: string_or(vars, "CATALOG_ROOT_PATH", DEFAULT_CATALOG_ROOT),
        }
    }
}
