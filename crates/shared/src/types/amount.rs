//! Amount codec between decimal text and integer minor units.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Text is parsed through `rust_decimal::Decimal` and every amount past this
//! boundary is an integer count of minor units (cents).

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use thiserror::Error;

/// Errors produced while parsing a monetary amount.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    /// Input was empty or whitespace.
    #[error("amount is empty")]
    Empty,

    /// Input is not a decimal number.
    #[error("'{0}' is not a valid amount")]
    Malformed(String),

    /// Input is below zero.
    #[error("'{0}' is negative")]
    Negative(String),

    /// Input has significant digits below the minor unit (e.g. `2.999`).
    #[error("'{0}' has more than two significant decimal places")]
    TooPrecise(String),

    /// Input does not fit in the minor-unit range.
    #[error("'{0}' is too large")]
    Overflow(String),
}

/// Parses decimal text into minor units.
///
/// - `"3"` is 300
/// - `"2.5"` is 250 (one fractional digit means tenths)
/// - `"2.13"` is 213
/// - `"2.500"` is 250; trailing zeros past the cents are tolerated
/// - `"2.999"` is rejected instead of being silently truncated
/// - only `digits[.digits]` is accepted: no sign, exponent, separator or
///   bare leading/trailing point (`"+1"`, `"1e2"`, `"1_000"`, `".5"`, `"5."`)
///
/// # Example
///
/// ```
/// use changemaker_shared::types::parse_amount;
///
/// assert_eq!(parse_amount(" 2.5 ").unwrap(), 250);
/// assert!(parse_amount("2.999").is_err());
/// ```
pub fn parse_amount(text: &str) -> Result<u64, AmountError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(AmountError::Empty);
    }

    let (negative, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    if !is_plain_decimal(unsigned) {
        return Err(AmountError::Malformed(text.to_string()));
    }

    let value = Decimal::from_str(unsigned).map_err(|_| AmountError::Overflow(text.to_string()))?;
    if negative && value > Decimal::ZERO {
        return Err(AmountError::Negative(text.to_string()));
    }

    let value = value.normalize();
    if value.scale() > 2 {
        return Err(AmountError::TooPrecise(text.to_string()));
    }

    value
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|cents| cents.to_u64())
        .ok_or_else(|| AmountError::Overflow(text.to_string()))
}

/// `digits` or `digits.digits`, ASCII only.
fn is_plain_decimal(text: &str) -> bool {
    let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    match text.split_once('.') {
        Some((whole, fraction)) => all_digits(whole) && all_digits(fraction),
        None => all_digits(text),
    }
}

/// Formats minor units as `<whole>.<two-digit cents>`.
///
/// ```
/// use changemaker_shared::types::format_amount;
///
/// assert_eq!(format_amount(87), "0.87");
/// assert_eq!(format_amount(300), "3.00");
/// ```
#[must_use]
pub fn format_amount(cents: u64) -> String {
    format!("{}.{:02}", cents / 100, cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case("3", 300)]
    #[case("3.00", 300)]
    #[case("2.13", 213)]
    #[case("2.5", 250)]
    #[case("0.05", 5)]
    #[case("0", 0)]
    #[case("  9.99\t", 999)]
    #[case("2.500", 250)]
    #[case("120.1", 12010)]
    fn test_parse_amount(#[case] input: &str, #[case] expected: u64) {
        assert_eq!(parse_amount(input).unwrap(), expected);
    }

    #[test]
    fn test_parse_amount_rejects_empty() {
        assert_eq!(parse_amount(""), Err(AmountError::Empty));
        assert_eq!(parse_amount("   "), Err(AmountError::Empty));
    }

    #[test]
    fn test_parse_amount_rejects_garbage() {
        assert!(matches!(parse_amount("abc"), Err(AmountError::Malformed(_))));
        assert!(matches!(parse_amount("1.2.3"), Err(AmountError::Malformed(_))));
        assert!(matches!(parse_amount("$4"), Err(AmountError::Malformed(_))));
    }

    #[rstest]
    #[case("1e2")]
    #[case("1E2")]
    #[case("1_000")]
    #[case("0.1_0")]
    #[case("+1")]
    #[case(".5")]
    #[case("5.")]
    #[case("1 000")]
    #[case("-")]
    #[case("--1")]
    fn test_parse_amount_rejects_non_decimal_syntax(#[case] input: &str) {
        assert_eq!(
            parse_amount(input),
            Err(AmountError::Malformed(input.to_string()))
        );
    }

    #[test]
    fn test_parse_amount_rejects_oversized_input() {
        let huge = "9".repeat(40);
        assert_eq!(parse_amount(&huge), Err(AmountError::Overflow(huge.clone())));
    }

    #[test]
    fn test_parse_amount_rejects_negative() {
        assert_eq!(
            parse_amount("-1.00"),
            Err(AmountError::Negative("-1.00".to_string()))
        );
    }

    #[test]
    fn test_parse_amount_rejects_sub_cent_precision() {
        assert_eq!(
            parse_amount("2.999"),
            Err(AmountError::TooPrecise("2.999".to_string()))
        );
        assert_eq!(
            parse_amount("0.001"),
            Err(AmountError::TooPrecise("0.001".to_string()))
        );
    }

    #[rstest]
    #[case(0, "0.00")]
    #[case(5, "0.05")]
    #[case(87, "0.87")]
    #[case(300, "3.00")]
    #[case(12345, "123.45")]
    fn test_format_amount(#[case] cents: u64, #[case] expected: &str) {
        assert_eq!(format_amount(cents), expected);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Formatting then parsing returns the original minor units.
        #[test]
        fn prop_format_then_parse_round_trips(cents in 0u64..10_000_000_000u64) {
            prop_assert_eq!(parse_amount(&format_amount(cents)), Ok(cents));
        }
    }
}
