use bigdecimal::BigDecimal;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use url::Url;

use super::errors::CheckoutError;
use super::model::CheckoutSettings;
use crate::domain::cart::model::CartLineItem;
use crate::domain::cart::value_objects::PaymentMethod;
use crate::domain::shared::money::format_amount;

const GREETING: &str = "Hi! I'd like to place the following order:";

/// Characters `encodeURIComponent` leaves unescaped. Spaces become `%20`.
const MESSAGE_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Builds the order summary sent to the shop. Pure and deterministic.
pub fn format_order_message(
    items: &[CartLineItem],
    total_price: &BigDecimal,
    payment_method: &PaymentMethod,
    settings: &CheckoutSettings,
) -> String {
    let money = |amount: &BigDecimal| format!("{}{}", settings.currency_symbol, format_amount(amount));

    let lines: Vec<String> = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            format!(
                "{}. {} — {} × {} = {}",
                index + 1,
                item.name,
                item.quantity,
                money(&item.price),
                money(&item.line_total()),
            )
        })
        .collect();

    let grand_total = total_price + &settings.shipping_cost;

    format!(
        "{}\n\n{}\n\nSubtotal: {}\nShipping: {}\nTotal: {}\nPayment method: {}",
        GREETING,
        lines.join("\n"),
        money(total_price),
        money(&settings.shipping_cost),
        money(&grand_total),
        payment_method.label(),
    )
}

/// Deep link opening a chat with the shop, pre-filled with `message`.
pub fn build_checkout_url(settings: &CheckoutSettings, message: &str) -> Result<Url, CheckoutError> {
    let phone: String = settings
        .phone_number
        .chars()
        .filter(char::is_ascii_digit)
        .collect();
    let mut url = Url::parse(&format!(
        "{}/{}",
        settings.messaging_base_url.trim_end_matches('/'),
        phone
    ))?;
    let text = utf8_percent_encode(message, MESSAGE_ENCODE_SET);
    url.set_query(Some(&format!("text={}", text)));
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use uuid::Uuid;

    fn settings() -> CheckoutSettings {
        CheckoutSettings {
            messaging_base_url: "https://wa.me".to_string(),
            phone_number: "+54 9 11 1234-5678".to_string(),
            shipping_cost: BigDecimal::from_str("15.00").unwrap(),
            currency_symbol: "$".to_string(),
        }
    }

    fn line(name: &str, quantity: u32, price: &str) -> CartLineItem {
        CartLineItem {
            id: Uuid::new_v4(),
            product_id: Uuid::new_v4(),
            name: name.to_string(),
            image: None,
            category: "Tools".to_string(),
            price: BigDecimal::from_str(price).unwrap(),
            quantity,
        }
    }

    #[test]
    fn should_include_subtotal_and_grand_total() {
        let items = vec![line("Widget", 2, "10.00")];

        let message = format_order_message(
            &items,
            &BigDecimal::from(20),
            &PaymentMethod::BankTransfer,
            &settings(),
        );

        assert!(message.contains("1. Widget — 2 × $10.00 = $20.00"));
        assert!(message.contains("Subtotal: $20.00"));
        assert!(message.contains("Shipping: $15.00"));
        assert!(message.contains("Total: $35.00"));
        assert!(message.ends_with("Payment method: Bank transfer"));
    }

    #[test]
    fn should_number_lines_in_cart_order() {
        let items = vec![line("Hammer", 1, "25.50"), line("Nails", 3, "1.25")];

        let message = format_order_message(
            &items,
            &BigDecimal::from_str("29.25").unwrap(),
            &PaymentMethod::Cash,
            &settings(),
        );

        let hammer = message.find("1. Hammer — 1 × $25.50 = $25.50").unwrap();
        let nails = message.find("2. Nails — 3 × $1.25 = $3.75").unwrap();
        assert!(hammer < nails);
        assert!(message.contains("Total: $44.25"));
        assert!(message.contains("Payment method: Cash"));
    }

    #[test]
    fn should_be_deterministic() {
        let items = vec![line("Widget", 2, "10.00")];
        let total = BigDecimal::from(20);

        let first = format_order_message(&items, &total, &PaymentMethod::Card, &settings());
        let second = format_order_message(&items, &total, &PaymentMethod::Card, &settings());

        assert_eq!(first, second);
    }

    #[test]
    fn should_build_link_with_digits_only_phone() {
        let url = build_checkout_url(&settings(), "hello").unwrap();

        assert_eq!(url.host_str(), Some("wa.me"));
        assert_eq!(url.path(), "/5491112345678");
    }

    #[test]
    fn should_percent_encode_message_in_link() {
        let message = "1. Widget — 2 × $10.00\nTotal: $35.00 & more";

        let url = build_checkout_url(&settings(), message).unwrap();

        assert!(!url.as_str().contains('\n'));
        assert!(!url.as_str().contains(" & "));
        let text = url
            .query_pairs()
            .find(|(key, _)| key == "text")
            .map(|(_, value)| value.into_owned());
        assert_eq!(text.as_deref(), Some(message));
    }

    #[test]
    fn should_encode_spaces_as_percent_twenty() {
        let url = build_checkout_url(&settings(), "Payment method: Bank transfer").unwrap();

        assert_eq!(
            url.query(),
            Some("text=Payment%20method%3A%20Bank%20transfer")
        );
        assert!(!url.as_str().contains('+'));
    }

    #[test]
    fn should_escape_newlines_and_plus_signs() {
        let url = build_checkout_url(&settings(), "a+b\nc").unwrap();

        assert_eq!(url.query(), Some("text=a%2Bb%0Ac"));
    }

    #[test]
    fn should_tolerate_trailing_slash_in_base_url() {
        let mut settings = settings();
        settings.messaging_base_url = "https://wa.me/".to_string();

        let url = build_checkout_url(&settings, "hi").unwrap();

        assert_eq!(url.path(), "/5491112345678");
    }

    #[test]
    fn should_reject_invalid_base_url() {
        let mut settings = settings();
        settings.messaging_base_url = "not a url".to_string();

        let result = build_checkout_url(&settings, "hi");

        assert!(matches!(result, Err(CheckoutError::InvalidLink(_))));
    }
}
