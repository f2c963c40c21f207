//! Amount type for prices entered as free text.
//!
//! The store keeps amounts exactly as the user typed them. Parsing happens at
//! aggregation time: the text is stripped of a leading currency symbol and any
//! thousands separators, and a value that still fails to parse counts as zero.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// A price as the user entered it.
///
/// Equality is textual: `Amount::new("45.50")` and `Amount::new("฿45.50")` are
/// different amounts for display purposes, but `value()` returns the same
/// `Decimal` for both.
///
/// # Examples
///
/// ```
/// # use farelog::model::Amount;
/// let amount = Amount::new("45.5");
/// assert_eq!(amount.raw(), "45.5");
/// assert_eq!(amount.value().to_string(), "45.5");
/// ```
///
/// Unparsable input counts as zero rather than failing:
/// ```
/// # use farelog::model::Amount;
/// let amount = Amount::new("forty baht");
/// assert!(amount.value().is_zero());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount {
    /// The text exactly as entered.
    raw: String,
}

impl Amount {
    /// Creates a new Amount from the user's raw input.
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// Returns the text exactly as entered.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Returns true if the entered text is empty or whitespace.
    pub fn is_empty(&self) -> bool {
        self.raw.trim().is_empty()
    }

    /// Parses the entered text into a `Decimal`.
    ///
    /// A leading currency symbol (`฿` or `$`, with an optional leading minus
    /// sign) and comma thousands separators are tolerated. Anything that still
    /// fails to parse contributes zero to aggregation.
    pub fn value(&self) -> Decimal {
        let trimmed = self.raw.trim();
        if trimmed.is_empty() {
            return Decimal::ZERO;
        }

        let without_symbol = if let Some(after_minus) = trimmed.strip_prefix('-') {
            // Negative: could be "-฿50.00" or "-50.00"
            match strip_currency(after_minus) {
                Some(rest) => format!("-{rest}"),
                None => trimmed.to_string(),
            }
        } else {
            strip_currency(trimmed)
                .map(|rest| rest.to_string())
                .unwrap_or_else(|| trimmed.to_string())
        };

        let without_commas = without_symbol.replace(',', "");
        Decimal::from_str(&without_commas).unwrap_or(Decimal::ZERO)
    }
}

/// Strips a recognized currency symbol prefix, returning the remainder.
fn strip_currency(s: &str) -> Option<&str> {
    s.strip_prefix('฿').or_else(|| s.strip_prefix('$'))
}

/// Formats a total for display, e.g. `฿1,234.50`.
pub fn format_total(value: Decimal, currency: &str) -> String {
    let (sign, num) = if value.is_sign_negative() && !value.is_zero() {
        ("-", value.abs())
    } else {
        ("", value)
    };
    format!(
        "{sign}{currency}{}",
        format_num::format_num!(",.2", num.to_f64().unwrap_or_default())
    )
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl FromStr for Amount {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Amount::new(s))
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Serialize the text as entered so the store round-trips byte for byte
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Amount::new(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain() {
        let amount = Amount::new("120");
        assert_eq!(amount.value(), Decimal::from_str("120").unwrap());
    }

    #[test]
    fn test_parse_fractional() {
        let amount = Amount::new("45.5");
        assert_eq!(amount.value(), Decimal::from_str("45.5").unwrap());
    }

    #[test]
    fn test_parse_with_baht_sign() {
        let amount = Amount::new("฿50.00");
        assert_eq!(amount.value(), Decimal::from_str("50.00").unwrap());
    }

    #[test]
    fn test_parse_with_dollar_sign() {
        let amount = Amount::new("$50.00");
        assert_eq!(amount.value(), Decimal::from_str("50.00").unwrap());
    }

    #[test]
    fn test_parse_negative_with_symbol() {
        let amount = Amount::new("-฿50.00");
        assert_eq!(amount.value(), Decimal::from_str("-50.00").unwrap());
    }

    #[test]
    fn test_parse_with_commas() {
        let amount = Amount::new("1,000.00");
        assert_eq!(amount.value(), Decimal::from_str("1000.00").unwrap());
    }

    #[test]
    fn test_parse_whitespace() {
        let amount = Amount::new("  120  ");
        assert_eq!(amount.value(), Decimal::from_str("120").unwrap());
    }

    #[test]
    fn test_unparsable_is_zero() {
        assert!(Amount::new("forty baht").value().is_zero());
        assert!(Amount::new("12.3.4").value().is_zero());
    }

    #[test]
    fn test_empty_is_zero() {
        assert!(Amount::new("").value().is_zero());
        assert!(Amount::new("   ").value().is_zero());
    }

    #[test]
    fn test_is_empty() {
        assert!(Amount::new("").is_empty());
        assert!(Amount::new("  ").is_empty());
        assert!(!Amount::new("0").is_empty());
    }

    #[test]
    fn test_serde_round_trips_raw_text() {
        let amount = Amount::new("฿1,000");
        let json = serde_json::to_string(&amount).unwrap();
        assert_eq!(json, "\"฿1,000\"");
        let back: Amount = serde_json::from_str(&json).unwrap();
        assert_eq!(back, amount);
    }

    #[test]
    fn test_deserialize_plain_text() {
        let amount: Amount = serde_json::from_str("\"120\"").unwrap();
        assert_eq!(amount.raw(), "120");
    }

    #[test]
    fn test_format_total() {
        let total = Decimal::from_str("195.5").unwrap();
        assert_eq!(format_total(total, "฿"), "฿195.50");
    }

    #[test]
    fn test_format_total_with_thousands() {
        let total = Decimal::from_str("1234.5").unwrap();
        assert_eq!(format_total(total, "฿"), "฿1,234.50");
    }

    #[test]
    fn test_format_total_negative() {
        let total = Decimal::from_str("-60000").unwrap();
        assert_eq!(format_total(total, "$"), "-$60,000.00");
    }

    #[test]
    fn test_format_total_zero() {
        assert_eq!(format_total(Decimal::ZERO, "฿"), "฿0.00");
    }
}
