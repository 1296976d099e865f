use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Payment methods a customer can pick for an order.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PaymentMethod {
    #[default]
    BankTransfer,
    Cash,
    Card,
}

impl PaymentMethod {
    /// Human-readable label shown to the customer and the shop.
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::BankTransfer => "Bank transfer",
            PaymentMethod::Cash => "Cash",
            PaymentMethod::Card => "Card",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn should_default_to_bank_transfer() {
        assert_eq!(PaymentMethod::default(), PaymentMethod::BankTransfer);
    }

    #[test]
    fn should_parse_snake_case_tags() {
        assert_eq!(
            "bank_transfer".parse::<PaymentMethod>().unwrap(),
            PaymentMethod::BankTransfer
        );
        assert_eq!("cash".parse::<PaymentMethod>().unwrap(), PaymentMethod::Cash);
        assert!("paypal".parse::<PaymentMethod>().is_err());
    }

    #[test]
    fn should_display_as_tag() {
        assert_eq!(PaymentMethod::BankTransfer.to_string(), "bank_transfer");
        assert_eq!(PaymentMethod::Card.as_ref(), "card");
    }

    #[test]
    fn should_list_every_method_once() {
        let methods: Vec<PaymentMethod> = PaymentMethod::iter().collect();
        assert_eq!(
            methods,
            vec![
                PaymentMethod::BankTransfer,
                PaymentMethod::Cash,
                PaymentMethod::Card
            ]
        );
    }

    #[test]
    fn should_serialize_with_snake_case() {
        let json = serde_json::to_string(&PaymentMethod::BankTransfer).unwrap();
        assert_eq!(json, "\"bank_transfer\"");
    }
}
