use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::menu::{CategoryMenu, MenuState};
use crate::domain::category::model::CategoryTree;
use crate::domain::category::repository::CategoryRepository;
use crate::domain::category::use_cases::get_menu::{GetCategoryMenuParams, GetCategoryMenuUseCase};
use crate::domain::logger::Logger;

pub struct GetCategoryMenuUseCaseImpl {
    pub repository: Arc<dyn CategoryRepository>,
    pub catalog_root: String,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCategoryMenuUseCase for GetCategoryMenuUseCaseImpl {
    async fn execute(&self, params: GetCategoryMenuParams) -> Result<CategoryMenu, CategoryError> {
        self.logger
            .debug(&format!("Resolving category menu for {}", params.path));

        let rows = self.repository.get_all().await?;
        let tree = CategoryTree::from_flat(rows).inspect_err(|err| {
            self.logger
                .error(&format!("Category tree is inconsistent: {:?}", err));
        })?;

        let mut state = MenuState::new(self.catalog_root.clone());
        if let Some(manual) = params.manual {
            state.restore_manual(&tree, manual);
        }
        state.navigate(&tree, &params.path);
        if let Some(id) = params.toggle {
            state.toggle(&tree, id);
        }

        Ok(CategoryMenu {
            expansion: state.expansion(),
            manual_override: state.has_manual_override(),
            tree,
        })
    }
}
