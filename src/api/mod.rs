//! HTTP API module for the Loan Scoring Engine.
//!
//! This module provides the REST endpoint for scoring loan applications.

mod handlers;
mod request;
mod response;

pub use handlers::create_router;
pub use request::ScoringRequest;
pub use response::ApiError;
