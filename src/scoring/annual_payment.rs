//! Annual payment calculation.

use rust_decimal::Decimal;

use crate::scoring::rounding::div_trunc;

/// Computes the annual payment for an amortized flat-rate loan.
///
/// ```text
/// interest_portion = trunc(period * rate / 100, scale 1)
/// payment          = trunc(amount * (1 + interest_portion) / period, scale 1)
/// ```
///
/// Both divisions truncate at scale 1 as they happen, not only on the final
/// result, and the operation order is fixed; reordering or deferring the
/// truncation changes the outcome on boundary inputs.
///
/// The period must be at least 1; that is an upstream precondition.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use scoring_engine::scoring::annual_payment;
/// use std::str::FromStr;
///
/// // rate 11.25 over 2 years: portion trunc(0.225) = 0.2,
/// // payment trunc(1 * 1.2 / 2) = 0.6
/// let payment = annual_payment(Decimal::ONE, 2, Decimal::from_str("11.25").unwrap());
/// assert_eq!(payment, Decimal::from_str("0.6").unwrap());
/// ```
pub fn annual_payment(
    requested_amount: Decimal,
    repayment_period: u32,
    interest_rate: Decimal,
) -> Decimal {
    let period = Decimal::from(repayment_period);
    let interest_portion = div_trunc(period * interest_rate, Decimal::ONE_HUNDRED);
    let growth = Decimal::ONE + interest_portion;
    div_trunc(requested_amount * growth, period)
}
