//! Monetary types for price representation.

use std::str::FromStr;

use rust_decimal::Decimal;

/// Price of one contract paying $1, i.e. an implied probability.
pub type Price = Decimal;

/// Parse a dollar price quoted as text, e.g. `"0.5200"`.
///
/// Returns `None` for empty, non-numeric, or out-of-range values, so a
/// missing quote and a garbage quote look the same to callers.
#[must_use]
pub fn parse_price(raw: &str) -> Option<Price> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .ok()
        .filter(is_probability)
}

/// Whether a price lies in `[0, 1]`.
#[must_use]
pub fn is_probability(price: &Price) -> bool {
    (Decimal::ZERO..=Decimal::ONE).contains(price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn parses_dollar_strings() {
        assert_eq!(parse_price("0.5200"), Some(dec!(0.52)));
        assert_eq!(parse_price(" 1 "), Some(dec!(1)));
        assert_eq!(parse_price("0"), Some(dec!(0)));
        assert_eq!(parse_price("5e-1"), Some(dec!(0.5)));
    }

    #[test]
    fn rejects_missing_and_garbage() {
        assert_eq!(parse_price(""), None);
        assert_eq!(parse_price("NaN"), None);
        assert_eq!(parse_price("n/a"), None);
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(parse_price("1.01"), None);
        assert_eq!(parse_price("-0.1"), None);
    }
}
