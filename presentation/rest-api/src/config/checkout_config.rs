use std::str::FromStr;

use bigdecimal::BigDecimal;

use business::domain::checkout::model::CheckoutSettings;

use super::env::{Vars, parse_or, process_env, string_or};

const DEFAULT_MESSAGING_URL: &str = "https://wa.me";
const DEFAULT_SHIPPING_COST: &str = "15.00";
const DEFAULT_CURRENCY_SYMBOL: &str = "$";

/// Configuration for the messaging checkout hand-off.
pub struct CheckoutConfig {
    pub settings: CheckoutSettings,
}

impl CheckoutConfig {
    /// Environment variables:
    /// - CHECKOUT_PHONE_NUMBER: Shop phone receiving orders (required)
    /// - CHECKOUT_MESSAGING_URL: Deep link base (default: "https://wa.me")
    /// - CHECKOUT_SHIPPING_COST: Flat shipping surcharge (default: "15.00")
    /// - CHECKOUT_CURRENCY_SYMBOL: Prefix for amounts (default: "$")
    pub fn from_env() -> Self {
        let phone_number = std::env::var("CHECKOUT_PHONE_NUMBER")
            .expect("CHECKOUT_PHONE_NUMBER environment variable must be set");
        Self::from_vars(phone_number, &process_env)
    }

    pub fn from_vars(phone_number: String, vars: Vars) -> Self {
        let default_shipping =
            BigDecimal::from_str(DEFAULT_SHIPPING_COST).unwrap_or_else(|_| BigDecimal::from(15));
        Self {
            settings: CheckoutSettings {
                messaging_base_url: string_or(vars, "CHECKOUT_MESSAGING_URL", DEFAULT_MESSAGING_URL),
                phone_number,
                shipping_cost: parse_or(vars, "CHECKOUT_SHIPPING_COST", default_shipping),
                currency_symbol: string_or(vars, "CHECKOUT_CURRENCY_SYMBOL", DEFAULT_CURRENCY_SYMBOL),
            },
        }
    }
}
