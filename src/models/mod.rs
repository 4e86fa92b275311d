//! Core data models for the Loan Scoring Engine.
//!
//! This module contains the domain types exchanged with the scoring engine:
//! the validated application record and the resulting decision.

mod application;
mod decision;

pub use application::{IncomeSource, LoanApplication, LoanPurpose, Sex};
pub use decision::LoanDecision;
