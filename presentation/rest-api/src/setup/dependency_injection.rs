use std::sync::Arc;

use logger::TracingLogger;
use persistence::cart::repository::CartSnapshotRepositoryPostgres;
use persistence::category::repository::CategoryRepositoryPostgres;
use persistence::product::repository::ProductRepositoryPostgres;

use business::application::cart::add_product::AddProductToCartUseCaseImpl;
use business::application::cart::sessions::CartSessions;
use business::application::category::get_menu::GetCategoryMenuUseCaseImpl;
use business::application::checkout::create_link::CreateCheckoutLinkUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::get_by_slug::GetProductBySlugUseCaseImpl;

use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub product_api: crate::api::product::routes::ProductApi,
    pub category_api: crate::api::category::routes::CategoryApi,
    pub cart_api: crate::api::cart::routes::CartApi,
    pub checkout_api: crate::api::checkout::routes::CheckoutApi,
}

impl DependencyContainer {
    pub async fn new(pool: sqlx::PgPool, config: &AppConfig) -> anyhow::Result<Self> {
        let catalog_logger = Arc::new(TracingLogger::new("catalog"));
        let cart_logger = Arc::new(TracingLogger::new("cart"));
        let checkout_logger = Arc::new(TracingLogger::new("checkout"));
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let product_repository = Arc::new(ProductRepositoryPostgres::new(pool.clone()));
        let category_repository = Arc::new(CategoryRepositoryPostgres::new(pool.clone()));
        let snapshot_repository = Arc::new(CartSnapshotRepositoryPostgres::new(pool));

        // One cart store per session, loaded lazily from its snapshot
        let carts = Arc::new(CartSessions::with_limits(
            snapshot_repository,
            cart_logger.clone(),
            config.cart.max_sessions,
            config.cart.session_idle_ttl,
        ));

        // Product use cases
        let get_all_use_case = Arc::new(GetAllProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: catalog_logger.clone(),
        });
        let get_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: product_repository.clone(),
            logger: catalog_logger.clone(),
        });
        let get_by_slug_use_case = Arc::new(GetProductBySlugUseCaseImpl {
            repository: product_repository.clone(),
            logger: catalog_logger.clone(),
        });

        // Category use cases
        let get_menu_use_case = Arc::new(GetCategoryMenuUseCaseImpl {
            repository: category_repository,
            catalog_root: config.catalog.root_path.clone(),
            logger: catalog_logger,
        });

        // Cart and checkout use cases
        let add_product_use_case = Arc::new(AddProductToCartUseCaseImpl {
            carts: carts.clone(),
            products: product_repository,
            logger: cart_logger,
        });
        let create_link_use_case = Arc::new(CreateCheckoutLinkUseCaseImpl {
            carts: carts.clone(),
            settings: config.checkout.settings.clone(),
            logger: checkout_logger,
        });

        let product_api = crate::api::product::routes::ProductApi::new(
            get_all_use_case,
            get_by_id_use_case,
            get_by_slug_use_case,
        );
        let category_api = crate::api::category::routes::CategoryApi::new(get_menu_use_case);
        let cart_api = crate::api::cart::routes::CartApi::new(carts, add_product_use_case);
        let checkout_api = crate::api::checkout::routes::CheckoutApi::new(create_link_use_case);

        Ok(Self {
            health_api,
            product_api,
            category_api,
            cart_api,
            checkout_api,
        })
    }
}
