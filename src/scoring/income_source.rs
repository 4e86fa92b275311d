//! Income-source eligibility gate.

use crate::models::IncomeSource;

/// Checks the income-source gate: unemployed applicants are never eligible.
///
/// # Examples
///
/// ```
/// use scoring_engine::models::IncomeSource;
/// use scoring_engine::scoring::check_income_source;
///
/// assert!(check_income_source(IncomeSource::Employee));
/// assert!(!check_income_source(IncomeSource::Unemployed));
/// ```
pub fn check_income_source(income_source: IncomeSource) -> bool {
    income_source != IncomeSource::Unemployed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unemployed_rejected() {
        assert!(!check_income_source(IncomeSource::Unemployed));
    }

    #[test]
    fn test_all_other_sources_accepted() {
        for source in [
            IncomeSource::Passive,
            IncomeSource::Employee,
            IncomeSource::OwnBusiness,
        ] {
            assert!(check_income_source(source), "{source:?} should pass");
        }
    }
}
