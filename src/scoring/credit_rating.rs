//! Credit-rating eligibility gate.

/// Checks the credit-rating gate.
///
/// The floor of the rating domain, -2, is rejected; every rating above it
/// ({-1, 0, 1, 2}) is accepted.
///
/// # Examples
///
/// ```
/// use scoring_engine::scoring::check_credit_rating;
///
/// assert!(!check_credit_rating(-2));
/// assert!(check_credit_rating(-1));
/// assert!(check_credit_rating(2));
/// ```
pub fn check_credit_rating(credit_rating: i8) -> bool {
    credit_rating > -2
}
