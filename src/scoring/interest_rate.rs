//! Interest-rate composition.
//!
//! The rate is a base of 10 percent per year plus four additive modifiers
//! derived from the loan purpose, the credit rating, the income source and
//! the magnitude of the requested amount. Three modifiers are exact decimal
//! constants; the amount modifier alone crosses into floating point.

use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};

use crate::models::{IncomeSource, LoanPurpose};

/// The base interest rate in percent per year.
pub const BASE_RATE: Decimal = Decimal::TEN;

/// Returns the rate modifier for the loan purpose.
///
/// Mortgage -2, business -0.5, consumer +1.5, car loans unmodified.
pub fn purpose_modifier(purpose: LoanPurpose) -> Decimal {
    match purpose {
        LoanPurpose::Mortgage => Decimal::from(-2),
        LoanPurpose::Business => Decimal::new(-5, 1),
        LoanPurpose::Consumer => Decimal::new(15, 1),
        LoanPurpose::Car => Decimal::ZERO,
    }
}

/// Returns the rate modifier for the credit rating.
///
/// Rating -1 adds 1.5, ratings 1 and 2 subtract 0.25 and 0.75. Every other
/// rating, including the -2 the credit-rating gate already excludes, leaves
/// the rate unmodified so the function is total when called standalone.
pub fn rating_modifier(credit_rating: i8) -> Decimal {
    match credit_rating {
        -1 => Decimal::new(15, 1),
        1 => Decimal::new(-25, 2),
        2 => Decimal::new(-75, 2),
        _ => Decimal::ZERO,
    }
}

/// Returns the rate modifier for the income source.
///
/// Passive income adds 0.5, employment subtracts 0.25, own business adds
/// 0.25. Unemployed leaves the rate unmodified; such applications never
/// reach an approval anyway.
pub fn source_modifier(income_source: IncomeSource) -> Decimal {
    match income_source {
        IncomeSource::Passive => Decimal::new(5, 1),
        IncomeSource::Employee => Decimal::new(-25, 2),
        IncomeSource::OwnBusiness => Decimal::new(25, 2),
        IncomeSource::Unemployed => Decimal::ZERO,
    }
}

/// Returns the rate modifier for the requested amount: its natural logarithm.
///
/// This is the one term of the rate that is not exact fixed-point: the
/// logarithm is evaluated on the amount's `f64` value and the result folded
/// back into the decimal sum, binary rounding error included. Test
/// tolerances for the rate belong here, not in the other modifiers.
///
/// Non-finite results (only reachable for a zero or negative amount, outside
/// the documented domain) fold to zero instead of panicking.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use scoring_engine::scoring::amount_modifier;
///
/// assert_eq!(amount_modifier(Decimal::ONE), Decimal::ZERO);
/// ```
pub fn amount_modifier(requested_amount: Decimal) -> Decimal {
    let magnitude = requested_amount.to_f64().unwrap_or(0.0);
    Decimal::from_f64(magnitude.ln()).unwrap_or(Decimal::ZERO)
}

/// Composes the annual interest rate in percent for an application.
///
/// ```text
/// rate = 10 + purpose_modifier + rating_modifier + source_modifier + ln(amount)
/// ```
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use scoring_engine::models::{IncomeSource, LoanPurpose};
/// use scoring_engine::scoring::interest_rate;
/// use std::str::FromStr;
///
/// // 10 - 0.5 + 1.5 + 0.25 + ln(1) = 11.25
/// let rate = interest_rate(LoanPurpose::Business, -1, Decimal::ONE, IncomeSource::OwnBusiness);
/// assert_eq!(rate, Decimal::from_str("11.25").unwrap());
/// ```
pub fn interest_rate(
    purpose: LoanPurpose,
    credit_rating: i8,
    requested_amount: Decimal,
    income_source: IncomeSource,
) -> Decimal {
    BASE_RATE
        + purpose_modifier(purpose)
        + rating_modifier(credit_rating)
        + source_modifier(income_source)
        + amount_modifier(requested_amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_purpose_modifiers() {
        assert_eq!(purpose_modifier(LoanPurpose::Mortgage), dec("-2"));
        assert_eq!(purpose_modifier(LoanPurpose::Business), dec("-0.5"));
        assert_eq!(purpose_modifier(LoanPurpose::Consumer), dec("1.5"));
        assert_eq!(purpose_modifier(LoanPurpose::Car), dec("0"));
    }

    #[test]
    fn test_rating_modifiers() {
        assert_eq!(rating_modifier(-1), dec("1.5"));
        assert_eq!(rating_modifier(0), dec("0"));
        assert_eq!(rating_modifier(1), dec("-0.25"));
        assert_eq!(rating_modifier(2), dec("-0.75"));
    }

    #[test]
    fn test_rating_modifier_is_zero_outside_named_ratings() {
        assert_eq!(rating_modifier(-2), dec("0"));
        assert_eq!(rating_modifier(-3), dec("0"));
    }

    #[test]
    fn test_source_modifiers() {
        assert_eq!(source_modifier(IncomeSource::Passive), dec("0.5"));
        assert_eq!(source_modifier(IncomeSource::Employee), dec("-0.25"));
        assert_eq!(source_modifier(IncomeSource::OwnBusiness), dec("0.25"));
        assert_eq!(source_modifier(IncomeSource::Unemployed), dec("0"));
    }

    #[test]
    fn test_amount_modifier_is_zero_at_one() {
        assert_eq!(amount_modifier(dec("1")), Decimal::ZERO);
    }

    #[test]
    fn test_amount_modifier_matches_f64_log() {
        // The float boundary lives in this one term; compare in f64 space.
        let modifier = amount_modifier(dec("4.1")).to_f64().unwrap();
        assert!((modifier - 4.1f64.ln()).abs() < 1e-12);

        let modifier = amount_modifier(dec("0.7")).to_f64().unwrap();
        assert!((modifier - 0.7f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn test_amount_modifier_negative_below_one() {
        assert!(amount_modifier(dec("0.9")) < Decimal::ZERO);
        assert!(amount_modifier(dec("1.1")) > Decimal::ZERO);
    }

    #[test]
    fn test_amount_modifier_tolerates_zero_amount() {
        // ln(0) is -infinity; outside the validated domain the modifier
        // folds to zero rather than panicking.
        assert_eq!(amount_modifier(dec("0")), Decimal::ZERO);
    }

    #[test]
    fn test_composed_rate_with_unit_amount() {
        let rate = interest_rate(
            LoanPurpose::Business,
            -1,
            dec("1"),
            IncomeSource::OwnBusiness,
        );
        assert_eq!(rate, dec("11.25"));

        let rate = interest_rate(LoanPurpose::Mortgage, 0, dec("1"), IncomeSource::Passive);
        assert_eq!(rate, dec("8.5"));
    }

    #[test]
    fn test_composed_rate_with_fractional_amount() {
        // 10 + 0 - 0.75 - 0.25 + ln(4.1); exact in the decimal terms, the
        // log term checked against f64 within its tolerance.
        let rate = interest_rate(LoanPurpose::Car, 2, dec("4.1"), IncomeSource::Employee);
        let expected = 9.0 + 4.1f64.ln();
        assert!((rate.to_f64().unwrap() - expected).abs() < 1e-12);
    }
}
