//! Affordability gate: annual payment versus half the declared income.

use rust_decimal::Decimal;

use crate::scoring::rounding::div_trunc_native;

/// Checks that the annual payment does not exceed half the declared income.
///
/// Unlike every other division in the engine, the halving truncates at the
/// income's own scale rather than at scale 1 (see [`div_trunc_native`]);
/// an income of `15` halves to `7` while `15.0` halves to `7.5`.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use scoring_engine::scoring::check_affordability;
/// use std::str::FromStr;
///
/// let income = Decimal::from_str("6").unwrap();
/// assert!(check_affordability(Decimal::from_str("2.4").unwrap(), income));
/// assert!(!check_affordability(Decimal::from_str("3.1").unwrap(), income));
/// ```
pub fn check_affordability(annual_payment: Decimal, last_year_income: Decimal) -> bool {
    let half_income = div_trunc_native(last_year_income, Decimal::TWO);
    annual_payment <= half_income
}
