use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{CartState, NewCartItem};
use crate::domain::cart::store::CartStoreProvider;
use crate::domain::cart::use_cases::add_product::{
    AddProductToCartParams, AddProductToCartUseCase,
};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;

pub struct AddProductToCartUseCaseImpl {
    pub carts: Arc<dyn CartStoreProvider>,
    pub products: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddProductToCartUseCase for AddProductToCartUseCaseImpl {
    async fn execute(&self, params: AddProductToCartParams) -> Result<CartState, CartError> {
        self.logger.info(&format!(
            "Adding product {} to cart of session {}",
            params.product_id, params.session_id
        ));

        let product = self
            .products
            .get_by_id(params.product_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartError::ProductNotFound,
                other => CartError::Repository(other),
            })?;

        if !product.is_active {
            self.logger.warn(&format!(
                "Product {} is not available, not adding it",
                product.id
            ));
            return Err(CartError::ProductUnavailable);
        }

        let store = self.carts.store_for(&params.session_id).await;
        let state = store
            .add_item(NewCartItem {
                product_id: product.id,
                name: product.name,
                price: product.price,
                image: product.image,
                category: product.category_name,
            })
            .await;

        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::model::CartLineItem;
    use crate::domain::cart::store::CartStore;
    use crate::domain::cart::value_objects::PaymentMethod;
    use crate::domain::product::model::{Product, ProductFilter};
    use crate::domain::shared::value_objects::CartSessionId;
    use bigdecimal::BigDecimal;
    use chrono::Utc;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn get_all(&self, filter: &ProductFilter) -> Result<Vec<Product>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
            async fn get_by_slug(&self, slug: &str) -> Result<Product, RepositoryError>;
        }
    }

    mock! {
        pub Store {}

        #[async_trait]
        impl CartStore for Store {
            async fn state(&self) -> CartState;
            async fn add_item(&self, item: NewCartItem) -> CartState;
            async fn remove_item(&self, product_id: Uuid) -> CartState;
            async fn update_quantity(&self, product_id: Uuid, quantity: i64) -> CartState;
            async fn set_payment_method(&self, method: PaymentMethod) -> CartState;
            async fn clear(&self) -> CartState;
            async fn open(&self) -> CartState;
            async fn close(&self) -> CartState;
        }
    }

    mock! {
        pub Carts {}

        #[async_trait]
        impl CartStoreProvider for Carts {
            async fn store_for(&self, session_id: &CartSessionId) -> Arc<dyn CartStore>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn product(id: Uuid, is_active: bool) -> Product {
        Product::from_repository(
            id,
            "Cordless Drill".to_string(),
            "cordless-drill".to_string(),
            None,
            BigDecimal::from(120),
            Some("/img/drill.png".to_string()),
            Uuid::new_v4(),
            "Power Tools".to_string(),
            is_active,
            Utc::now(),
            Utc::now(),
        )
    }

    fn params(product_id: Uuid) -> AddProductToCartParams {
        AddProductToCartParams {
            session_id: CartSessionId::parse("test-session").unwrap(),
            product_id,
        }
    }

    /// Store that echoes the added item back as a one-line cart.
    fn echo_store() -> Arc<dyn CartStore> {
        let mut store = MockStore::new();
        store.expect_add_item().times(1).returning(|item| {
            let mut state = CartState::default();
            state.items.push(CartLineItem {
                id: Uuid::new_v4(),
                product_id: item.product_id,
                name: item.name,
                image: item.image,
                category: item.category,
                price: item.price.clone(),
                quantity: 1,
            });
            state.unique_items = 1;
            state.total_items = 1;
            state.total_price = item.price;
            state
        });
        Arc::new(store)
    }

    #[tokio::test]
    async fn should_snapshot_product_into_cart() {
        let product_id = Uuid::new_v4();
        let mut products = MockProductRepo::new();
        products
            .expect_get_by_id()
            .returning(move |id| Ok(product(id, true)));
        let mut carts = MockCarts::new();
        let store = echo_store();
        carts
            .expect_store_for()
            .times(1)
            .returning(move |_| store.clone());

        let use_case = AddProductToCartUseCaseImpl {
            carts: Arc::new(carts),
            products: Arc::new(products),
            logger: mock_logger(),
        };

        let state = use_case.execute(params(product_id)).await.unwrap();

        let line = &state.items[0];
        assert_eq!(line.product_id, product_id);
        assert_eq!(line.name, "Cordless Drill");
        assert_eq!(line.category, "Power Tools");
        assert_eq!(line.price, BigDecimal::from(120));
        assert_eq!(line.image.as_deref(), Some("/img/drill.png"));
    }

    #[tokio::test]
    async fn should_return_product_not_found() {
        let mut products = MockProductRepo::new();
        products
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));
        let mut carts = MockCarts::new();
        carts.expect_store_for().never();

        let use_case = AddProductToCartUseCaseImpl {
            carts: Arc::new(carts),
            products: Arc::new(products),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(Uuid::new_v4())).await;

        assert!(matches!(result, Err(CartError::ProductNotFound)));
    }

    #[tokio::test]
    async fn should_reject_inactive_product() {
        let mut products = MockProductRepo::new();
        products
            .expect_get_by_id()
            .returning(|id| Ok(product(id, false)));
        let mut carts = MockCarts::new();
        carts.expect_store_for().never();

        let use_case = AddProductToCartUseCaseImpl {
            carts: Arc::new(carts),
            products: Arc::new(products),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(Uuid::new_v4())).await;

        assert!(matches!(result, Err(CartError::ProductUnavailable)));
    }

    #[tokio::test]
    async fn should_propagate_repository_errors() {
        let mut products = MockProductRepo::new();
        products
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = AddProductToCartUseCaseImpl {
            carts: Arc::new(MockCarts::new()),
            products: Arc::new(products),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(Uuid::new_v4())).await;

        assert!(matches!(
            result,
            Err(CartError::Repository(RepositoryError::DatabaseError))
        ));
    }
}
