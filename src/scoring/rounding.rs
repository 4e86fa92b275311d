//! Truncating decimal division helpers.
//!
//! Every monetary intermediate in the engine is produced by one of the two
//! functions here. The rounding rule is truncation toward zero: digits beyond
//! the kept scale are dropped, never rounded up. Two engines that round
//! differently diverge on boundary cases, so this is a numeric contract
//! rather than an implementation detail.

use rust_decimal::Decimal;

/// The scale used for monetary amounts: one fractional digit.
pub const MONEY_SCALE: u32 = 1;

/// Divides `dividend` by `divisor` and truncates the quotient toward zero at
/// [`MONEY_SCALE`].
///
/// The divisor must be non-zero; every call site divides by a fixed positive
/// constant or by the repayment period, which is at least 1 by precondition.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use scoring_engine::scoring::div_trunc;
/// use std::str::FromStr;
///
/// let amount = Decimal::from_str("4.2").unwrap();
/// assert_eq!(div_trunc(amount, Decimal::from(2)), Decimal::from_str("2.1").unwrap());
///
/// // 10.1 / 3 = 3.3666..., truncated to 3.3 (not rounded to 3.4)
/// let income = Decimal::from_str("10.1").unwrap();
/// assert_eq!(div_trunc(income, Decimal::from(3)), Decimal::from_str("3.3").unwrap());
/// ```
pub fn div_trunc(dividend: Decimal, divisor: Decimal) -> Decimal {
    (dividend / divisor).trunc_with_scale(MONEY_SCALE)
}

/// Divides `dividend` by `divisor` and truncates the quotient at the
/// dividend's own scale instead of [`MONEY_SCALE`].
///
/// Only the affordability gate uses this variant: it halves the declared
/// income at whatever scale the income arrived with, so an income of `15`
/// (scale 0) halves to `7` while `15.0` (scale 1) halves to `7.5`. The
/// asymmetry with the rest of the arithmetic is part of the numeric
/// contract; unifying the scales would move the approval boundary.
pub fn div_trunc_native(dividend: Decimal, divisor: Decimal) -> Decimal {
    (dividend / divisor).trunc_with_scale(dividend.scale())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_exact_quotient_is_unchanged() {
        assert_eq!(div_trunc(dec("4.2"), dec("2")), dec("2.1"));
    }

    #[test]
    fn test_truncation_drops_digits_without_rounding_up() {
        // 0.9 * 1.1 / 2 = 0.495; truncation gives 0.4 where half-up would give 0.5
        assert_eq!(div_trunc(dec("0.99"), dec("2")), dec("0.4"));
        assert_eq!(div_trunc(dec("10.1"), dec("3")), dec("3.3"));
    }

    #[test]
    fn test_repeating_quotient_is_truncated() {
        assert_eq!(div_trunc(dec("1"), dec("3")), dec("0.3"));
        assert_eq!(div_trunc(dec("2"), dec("3")), dec("0.6"));
    }

    #[test]
    fn test_truncation_is_toward_zero_for_negative_values() {
        assert_eq!(div_trunc(dec("-1"), dec("3")), dec("-0.3"));
    }

    #[test]
    fn test_native_scale_keeps_dividend_scale() {
        // scale 0 income: the fractional half is dropped entirely
        assert_eq!(div_trunc_native(dec("15"), dec("2")), dec("7"));
        // scale 1 income: one fractional digit is kept
        assert_eq!(div_trunc_native(dec("15.0"), dec("2")), dec("7.5"));
        assert_eq!(div_trunc_native(dec("10.1"), dec("2")), dec("5.0"));
    }

    #[test]
    fn test_native_scale_two_fractional_digits() {
        assert_eq!(div_trunc_native(dec("10.01"), dec("2")), dec("5.00"));
        assert_eq!(div_trunc_native(dec("10.03"), dec("2")), dec("5.01"));
    }
}
