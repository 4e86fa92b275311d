//! Age/sex eligibility gate.

use crate::models::Sex;

/// Checks the age/sex eligibility gate.
///
/// Applicants must be at least 18. The upper bound depends on sex: female
/// applicants are eligible up to and including 60, male applicants up to and
/// including 65.
///
/// # Examples
///
/// ```
/// use scoring_engine::models::Sex;
/// use scoring_engine::scoring::check_age;
///
/// assert!(check_age(18, Sex::Male));
/// assert!(check_age(60, Sex::Female));
/// assert!(!check_age(61, Sex::Female));
/// assert!(!check_age(17, Sex::Female));
/// ```
pub fn check_age(age: u8, sex: Sex) -> bool {
    if age < 18 {
        return false;
    }
    if age > 60 && sex == Sex::Female {
        return false;
    }
    if age > 65 && sex == Sex::Male {
        return false;
    }
    true
}
