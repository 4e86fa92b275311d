//! Requested-amount eligibility gate.
//!
//! The gate bounds the requested amount three ways: annual debt service
//! relative to income, a cap derived from income source and credit rating,
//! and an absolute ceiling. It is written to behave correctly standalone on
//! any input, including combinations (unemployed, rating -2) that the other
//! gates already exclude; those fall out through a zero cap.

use rust_decimal::Decimal;

use crate::models::IncomeSource;
use crate::scoring::rounding::div_trunc;

/// Returns the maximum requested amount allowed for an income source.
///
/// Passive income caps at 1, salaried employment at 5, own business at 10.
/// Unemployed maps to 0, which [`check_requested_amount`] rejects through
/// its zero-cap rule.
pub fn max_amount_by_source(income_source: IncomeSource) -> Decimal {
    match income_source {
        IncomeSource::Passive => Decimal::ONE,
        IncomeSource::Employee => Decimal::from(5),
        IncomeSource::OwnBusiness => Decimal::TEN,
        IncomeSource::Unemployed => Decimal::ZERO,
    }
}

/// Returns the maximum requested amount allowed for a credit rating.
///
/// Negative ratings cap at 1, a zero rating at 5, positive ratings at 10.
/// The three arms are total over `i8`, so a rating of -2 yields 1 here and
/// is excluded by the credit-rating gate rather than by this cap.
pub fn max_amount_by_rating(credit_rating: i8) -> Decimal {
    if credit_rating < 0 {
        Decimal::ONE
    } else if credit_rating == 0 {
        Decimal::from(5)
    } else {
        Decimal::TEN
    }
}

/// Returns the effective amount cap: the lesser of the source and rating caps.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use scoring_engine::models::IncomeSource;
/// use scoring_engine::scoring::max_amount;
///
/// // Passive income caps the amount at 1 even with a top rating.
/// assert_eq!(max_amount(IncomeSource::Passive, 2), Decimal::ONE);
/// // Unemployed yields a zero cap regardless of rating.
/// assert_eq!(max_amount(IncomeSource::Unemployed, 2), Decimal::ZERO);
/// ```
pub fn max_amount(income_source: IncomeSource, credit_rating: i8) -> Decimal {
    let by_source = max_amount_by_source(income_source);
    let by_rating = max_amount_by_rating(credit_rating);
    by_source.min(by_rating)
}

/// Checks the requested-amount gate.
///
/// All of the following must hold:
/// 1. annual debt service `requested / period` (truncated, scale 1) does not
///    exceed a third of the declared income (truncated, scale 1);
/// 2. the requested amount does not exceed [`max_amount`];
/// 3. the cap itself is non-zero;
/// 4. the requested amount does not exceed the absolute ceiling of 10.
///
/// The period must be at least 1; that is an upstream precondition.
pub fn check_requested_amount(
    income_source: IncomeSource,
    credit_rating: i8,
    requested_amount: Decimal,
    last_year_income: Decimal,
    repayment_period: u32,
) -> bool {
    let year_amount = div_trunc(requested_amount, Decimal::from(repayment_period));
    let income_third = div_trunc(last_year_income, Decimal::from(3));

    if year_amount > income_third {
        return false;
    }

    let cap = max_amount(income_source, credit_rating);
    if requested_amount > cap {
        return false;
    }

    if cap.is_zero() {
        return false;
    }

    requested_amount <= Decimal::TEN
}
