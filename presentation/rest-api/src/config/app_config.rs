use super::{
    cart_config::CartConfig, catalog_config::CatalogConfig, checkout_config::CheckoutConfig,
    cors_config, server_config::ServerConfig,
};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub cart: CartConfig,
    pub checkout: CheckoutConfig,
    pub catalog: CatalogConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            cart: CartConfig::from_env(),
            checkout: CheckoutConfig::from_env(),
            catalog: CatalogConfig::from_env(),
        }
    }
}
