//! HTTP request handlers for the Loan Scoring Engine API.
//!
//! This module contains the handler for the `/scoring/check` endpoint.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::rejection::JsonRejection,
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::scoring::score;

use super::request::ScoringRequest;
use super::response::{ApiError, ApiErrorResponse};

/// Creates the API router with all endpoints.
///
/// The router is stateless: the underwriting rule thresholds are fixed
/// business constants compiled into the engine.
pub fn create_router() -> Router {
    Router::new().route("/scoring/check", post(check_handler))
}

/// Handler for POST /scoring/check.
///
/// Accepts a loan application, validates it, scores it, and returns the
/// decision.
async fn check_handler(payload: Result<Json<ScoringRequest>, JsonRejection>) -> impl IntoResponse {
    // Correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing scoring request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // The body text carries the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    // Range-check the request and build the typed application record
    let application = match request.validate() {
        Ok(application) => application,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Application validation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            return (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response();
        }
    };

    // Score the application
    let start_time = Instant::now();
    let outcome = score(&application);
    let duration = start_time.elapsed();

    if outcome.approved() {
        info!(
            correlation_id = %correlation_id,
            interest_rate = %outcome.interest_rate,
            annual_payment = %outcome.computed_payment,
            duration_us = duration.as_micros(),
            "Application approved"
        );
    } else {
        let failed: Vec<String> = outcome.failed_gates.iter().map(ToString::to_string).collect();
        info!(
            correlation_id = %correlation_id,
            interest_rate = %outcome.interest_rate,
            failed_gates = ?failed,
            duration_us = duration.as_micros(),
            "Application rejected"
        );
    }

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(outcome.into_decision()),
    )
        .into_response()
}
