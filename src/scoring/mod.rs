//! The decision engine.
//!
//! This module composes the eligibility gates, the interest-rate composer
//! and the payment calculator into [`evaluate`]: a pure function from a
//! validated [`LoanApplication`] to a [`LoanDecision`]. There is no hidden
//! state, no randomness and no clock dependency; identical inputs always
//! produce identical decisions.

mod affordability;
mod age;
mod annual_payment;
mod credit_rating;
mod income_source;
mod interest_rate;
mod requested_amount;
mod rounding;

pub use affordability::check_affordability;
pub use age::check_age;
pub use annual_payment::annual_payment;
pub use credit_rating::check_credit_rating;
pub use income_source::check_income_source;
pub use interest_rate::{
    BASE_RATE, amount_modifier, interest_rate, purpose_modifier, rating_modifier, source_modifier,
};
pub use requested_amount::{
    check_requested_amount, max_amount, max_amount_by_rating, max_amount_by_source,
};
pub use rounding::{MONEY_SCALE, div_trunc, div_trunc_native};

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{LoanApplication, LoanDecision};

/// Identifies one of the five eligibility gates.
///
/// Used in [`ScoringOutcome`] to report which gates an application failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GateKind {
    /// The age/sex gate.
    AgeSex,
    /// The credit-rating floor.
    CreditRating,
    /// The income-source gate.
    IncomeSource,
    /// The requested-amount gate (income-thirds rule and amount caps).
    RequestedAmount,
    /// The payment-versus-half-income gate.
    Affordability,
}

impl std::fmt::Display for GateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GateKind::AgeSex => "age_sex",
            GateKind::CreditRating => "credit_rating",
            GateKind::IncomeSource => "income_source",
            GateKind::RequestedAmount => "requested_amount",
            GateKind::Affordability => "affordability",
        };
        f.write_str(name)
    }
}

/// The full result of scoring an application.
///
/// Beyond the approve/reject outcome this keeps the composed interest rate,
/// the computed payment and the list of failed gates, so callers can log why
/// an application was rejected. The rate and payment are always computed,
/// even when a gate fails; only the payment *reported* in the decision is
/// zeroed on rejection.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringOutcome {
    /// The composed annual interest rate in percent.
    pub interest_rate: Decimal,
    /// The computed annual payment, regardless of approval.
    pub computed_payment: Decimal,
    /// Every gate the application failed, in evaluation order.
    pub failed_gates: Vec<GateKind>,
}

impl ScoringOutcome {
    /// Returns true if every gate held.
    pub fn approved(&self) -> bool {
        self.failed_gates.is_empty()
    }

    /// Converts the outcome into the decision handed back to the caller.
    ///
    /// A rejected decision reports an annual payment of exactly zero, never
    /// the computed value.
    pub fn into_decision(self) -> LoanDecision {
        if self.approved() {
            LoanDecision::approved(self.computed_payment)
        } else {
            LoanDecision::rejected()
        }
    }
}

/// Scores an application, returning the full diagnostic outcome.
///
/// The interest rate and payment are computed before any gate runs; all five
/// gates are then evaluated without short-circuiting so the outcome lists
/// every failure, not just the first.
pub fn score(application: &LoanApplication) -> ScoringOutcome {
    let rate = interest_rate(
        application.purpose,
        application.credit_rating,
        application.requested_amount,
        application.income_source,
    );
    let payment = annual_payment(application.requested_amount, application.repayment_period, rate);

    let mut failed_gates = Vec::new();
    if !check_age(application.age, application.sex) {
        failed_gates.push(GateKind::AgeSex);
    }
    if !check_credit_rating(application.credit_rating) {
        failed_gates.push(GateKind::CreditRating);
    }
    if !check_income_source(application.income_source) {
        failed_gates.push(GateKind::IncomeSource);
    }
    if !check_requested_amount(
        application.income_source,
        application.credit_rating,
        application.requested_amount,
        application.last_year_income,
        application.repayment_period,
    ) {
        failed_gates.push(GateKind::RequestedAmount);
    }
    if !check_affordability(payment, application.last_year_income) {
        failed_gates.push(GateKind::Affordability);
    }

    ScoringOutcome {
        interest_rate: rate,
        computed_payment: payment,
        failed_gates,
    }
}

/// Evaluates an application to a decision.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use scoring_engine::models::{IncomeSource, LoanApplication, LoanPurpose, Sex};
/// use scoring_engine::scoring::evaluate;
/// use std::str::FromStr;
///
/// let application = LoanApplication {
///     age: 30,
///     sex: Sex::Female,
///     income_source: IncomeSource::OwnBusiness,
///     last_year_income: Decimal::from(15),
///     credit_rating: -1,
///     requested_amount: Decimal::ONE,
///     repayment_period: 2,
///     purpose: LoanPurpose::Business,
/// };
///
/// let decision = evaluate(&application);
/// assert!(decision.approved);
/// assert_eq!(decision.annual_payment, Decimal::from_str("0.6").unwrap());
/// ```
pub fn evaluate(application: &LoanApplication) -> LoanDecision {
    score(application).into_decision()
}
