//! Error types for the Loan Scoring Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The scoring core itself is total over its documented input domain and
//! never fails; these errors belong to the validation boundary that turns a
//! wire request into a typed [`LoanApplication`](crate::models::LoanApplication).

use thiserror::Error;

/// The main error type for the Loan Scoring Engine.
///
/// # Example
///
/// ```
/// use scoring_engine::error::EngineError;
///
/// let error = EngineError::MissingField {
///     field: "lastYearIncome".to_string(),
/// };
/// assert_eq!(error.to_string(), "Missing required field: lastYearIncome");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A required request field was absent.
    ///
    /// Notably covers a missing `lastYearIncome`, which is a caller contract
    /// violation rather than a case the engine treats as zero income.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The name of the absent field, in wire (camelCase) form.
        field: String,
    },

    /// A request field was present but outside its documented domain.
    #[error("Invalid value for field '{field}': {message}")]
    InvalidApplication {
        /// The name of the offending field, in wire (camelCase) form.
        field: String,
        /// A description of the constraint that was violated.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
