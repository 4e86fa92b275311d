//! Loan decision model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The outcome of scoring a loan application.
///
/// `annual_payment` is exactly zero whenever `approved` is `false`; for an
/// approved application it carries the computed payment at scale 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanDecision {
    /// Whether the loan was approved.
    pub approved: bool,
    /// Annual payment in millions; zero on rejection.
    pub annual_payment: Decimal,
}

impl LoanDecision {
    /// Creates a rejection with a zero payment.
    pub fn rejected() -> Self {
        Self {
            approved: false,
            annual_payment: Decimal::ZERO,
        }
    }

    /// Creates an approval carrying the computed annual payment.
    pub fn approved(annual_payment: Decimal) -> Self {
        Self {
            approved: true,
            annual_payment,
        }
    }
}
