use bigdecimal::{BigDecimal, RoundingMode};

/// Renders an amount with exactly two decimals, rounding half up.
pub fn format_amount(amount: &BigDecimal) -> String {
    let cents = (amount * BigDecimal::from(100)).with_scale_round(0, RoundingMode::HalfUp);
    let (cents, _) = cents.as_bigint_and_exponent();
    let raw = cents.to_string();
    let (sign, digits) = match raw.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", raw.as_str()),
    };
    let padded = format!("{:0>3}", digits);
    let (units, fraction) = padded.split_at(padded.len() - 2);
    format!("{}{}.{}", sign, units, fraction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn should_pad_integers_to_two_decimals() {
        assert_eq!(format_amount(&BigDecimal::from(20)), "20.00");
    }

    #[test]
    fn should_keep_two_decimal_amounts_unchanged() {
        let amount = BigDecimal::from_str("1999.99").unwrap();
        assert_eq!(format_amount(&amount), "1999.99");
    }

    #[test]
    fn should_round_half_up() {
        let amount = BigDecimal::from_str("10.005").unwrap();
        assert_eq!(format_amount(&amount), "10.01");
    }

    #[test]
    fn should_pad_amounts_below_one() {
        assert_eq!(format_amount(&BigDecimal::from_str("0.5").unwrap()), "0.50");
        assert_eq!(format_amount(&BigDecimal::from_str("0.07").unwrap()), "0.07");
    }

    #[test]
    fn should_keep_sign_of_negative_amounts() {
        assert_eq!(format_amount(&BigDecimal::from_str("-3.2").unwrap()), "-3.20");
    }

    #[test]
    fn should_format_zero() {
        assert_eq!(format_amount(&BigDecimal::from(0)), "0.00");
    }
}
