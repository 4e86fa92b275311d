//! Loan application model and related enums.
//!
//! A [`LoanApplication`] is constructed by the validation layer only after
//! every field-presence and range constraint has been checked; the scoring
//! engine consumes it as-is and performs no re-validation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Sex of the applicant, as declared on the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Sex {
    /// Male applicant; eligible up to and including age 65.
    Male,
    /// Female applicant; eligible up to and including age 60.
    Female,
}

/// The applicant's primary source of income.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IncomeSource {
    /// Passive income (rent, dividends).
    Passive,
    /// Salaried employment.
    Employee,
    /// Income from the applicant's own business.
    OwnBusiness,
    /// No income; never eligible.
    Unemployed,
}

/// The declared purpose of the loan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LoanPurpose {
    /// Property purchase.
    Mortgage,
    /// Business development.
    Business,
    /// Vehicle purchase.
    Car,
    /// General consumer loan.
    Consumer,
}

/// A validated loan application.
///
/// Field domains are guaranteed by the validation layer before construction:
/// age 0–200, credit rating -2..=2, requested amount 0.1–10.0 with one
/// fractional digit, repayment period 1–20 years. Monetary fields are in
/// millions. Inputs outside these domains are undefined behavior for the
/// engine and must be rejected upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanApplication {
    /// Applicant age in whole years.
    pub age: u8,
    /// Applicant sex; determines the upper age bound.
    pub sex: Sex,
    /// Primary source of income.
    pub income_source: IncomeSource,
    /// Income over the last year, in millions.
    pub last_year_income: Decimal,
    /// Credit rating in -2..=2.
    pub credit_rating: i8,
    /// Requested loan amount, in millions, one fractional digit.
    pub requested_amount: Decimal,
    /// Repayment period in whole years.
    pub repayment_period: u32,
    /// Declared purpose of the loan.
    pub purpose: LoanPurpose,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_deserialize_application() {
        let json = r#"{
            "age": 30,
            "sex": "FEMALE",
            "incomeSource": "OWN_BUSINESS",
            "lastYearIncome": "15",
            "creditRating": -1,
            "requestedAmount": "1",
            "repaymentPeriod": 2,
            "purpose": "BUSINESS"
        }"#;

        let application: LoanApplication = serde_json::from_str(json).unwrap();
        assert_eq!(application.age, 30);
        assert_eq!(application.sex, Sex::Female);
        assert_eq!(application.income_source, IncomeSource::OwnBusiness);
        assert_eq!(application.last_year_income, Decimal::from_str("15").unwrap());
        assert_eq!(application.credit_rating, -1);
        assert_eq!(application.requested_amount, Decimal::ONE);
        assert_eq!(application.repayment_period, 2);
        assert_eq!(application.purpose, LoanPurpose::Business);
    }

    #[test]
    fn test_enum_wire_names_are_screaming_snake_case() {
        assert_eq!(serde_json::to_string(&Sex::Male).unwrap(), "\"MALE\"");
        assert_eq!(
            serde_json::to_string(&IncomeSource::OwnBusiness).unwrap(),
            "\"OWN_BUSINESS\""
        );
        assert_eq!(
            serde_json::to_string(&LoanPurpose::Mortgage).unwrap(),
            "\"MORTGAGE\""
        );
    }

    #[test]
    fn test_unknown_enum_value_is_rejected() {
        let result: Result<IncomeSource, _> = serde_json::from_str("\"FREELANCE\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_decimal_fields_preserve_scale() {
        let json = r#"{
            "age": 30,
            "sex": "MALE",
            "incomeSource": "EMPLOYEE",
            "lastYearIncome": "10.1",
            "creditRating": 2,
            "requestedAmount": "4.2",
            "repaymentPeriod": 2,
            "purpose": "CAR"
        }"#;

        let application: LoanApplication = serde_json::from_str(json).unwrap();
        assert_eq!(application.last_year_income.scale(), 1);
        assert_eq!(application.requested_amount.scale(), 1);
    }
}
