//! Request types for the Loan Scoring Engine API.
//!
//! This module defines the JSON request structure for the `/scoring/check`
//! endpoint and the validation that turns it into a typed
//! [`LoanApplication`]. Every field-presence and range constraint is
//! enforced here; the scoring engine downstream performs no re-validation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{IncomeSource, LoanApplication, LoanPurpose, Sex};

/// Request body for the `/scoring/check` endpoint.
///
/// Numeric fields use wider types than the domain model so that out-of-range
/// values arrive here and fail with a named-field message instead of an
/// opaque deserialization error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringRequest {
    /// Applicant age in whole years, 0–200.
    pub age: u16,
    /// Applicant sex.
    pub sex: Sex,
    /// Primary source of income.
    pub income_source: IncomeSource,
    /// Income over the last year, in millions. Required for scoring; the
    /// wire format permits omission, which `validate` reports explicitly.
    #[serde(default)]
    pub last_year_income: Option<Decimal>,
    /// Credit rating, -2..=2.
    pub credit_rating: i16,
    /// Requested amount in millions, 0.1–10.0, one fractional digit.
    pub requested_amount: Decimal,
    /// Repayment period in years, 1–20.
    pub repayment_period: u32,
    /// Declared purpose of the loan.
    pub purpose: LoanPurpose,
}

impl ScoringRequest {
    /// Validates the request and converts it into a [`LoanApplication`].
    ///
    /// Returns an [`EngineError`] naming the offending field when a
    /// constraint is violated:
    ///
    /// - `age` must be 0–200;
    /// - `lastYearIncome` must be present and non-negative;
    /// - `creditRating` must be -2..=2;
    /// - `requestedAmount` must be 0.1–10.0 with at most one fractional digit;
    /// - `repaymentPeriod` must be 1–20.
    pub fn validate(self) -> EngineResult<LoanApplication> {
        if self.age > 200 {
            return Err(EngineError::InvalidApplication {
                field: "age".to_string(),
                message: "must be between 0 and 200".to_string(),
            });
        }

        let last_year_income = self.last_year_income.ok_or_else(|| EngineError::MissingField {
            field: "lastYearIncome".to_string(),
        })?;
        if last_year_income < Decimal::ZERO {
            return Err(EngineError::InvalidApplication {
                field: "lastYearIncome".to_string(),
                message: "must not be negative".to_string(),
            });
        }

        if !(-2..=2).contains(&self.credit_rating) {
            return Err(EngineError::InvalidApplication {
                field: "creditRating".to_string(),
                message: "must be between -2 and 2".to_string(),
            });
        }

        let min_amount = Decimal::new(1, 1);
        if self.requested_amount < min_amount || self.requested_amount > Decimal::TEN {
            return Err(EngineError::InvalidApplication {
                field: "requestedAmount".to_string(),
                message: "must be between 0.1 and 10.0".to_string(),
            });
        }
        if self.requested_amount.normalize().scale() > 1 {
            return Err(EngineError::InvalidApplication {
                field: "requestedAmount".to_string(),
                message: "must have at most one fractional digit".to_string(),
            });
        }

        if !(1..=20).contains(&self.repayment_period) {
            return Err(EngineError::InvalidApplication {
                field: "repaymentPeriod".to_string(),
                message: "must be between 1 and 20".to_string(),
            });
        }

        Ok(LoanApplication {
            age: self.age as u8,
            sex: self.sex,
            income_source: self.income_source,
            last_year_income,
            credit_rating: self.credit_rating as i8,
            requested_amount: self.requested_amount,
            repayment_period: self.repayment_period,
            purpose: self.purpose,
        })
    }
}
