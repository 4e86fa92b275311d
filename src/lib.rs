//! Loan Scoring Engine
//!
//! This crate evaluates loan applications against a fixed set of underwriting
//! rules and, for accepted applications, computes the annual payment from a
//! risk-adjusted interest rate. All monetary arithmetic is exact fixed-point
//! decimal with explicit truncating rounding.

#![warn(missing_docs)]

pub mod api;
pub mod error;
pub mod models;
pub mod scoring;
