//! HTTP request handlers for the attendance engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::engine::{SnapshotProvider, compute_monthly_attendance, compute_salary};
use crate::models::BillingMonth;

use super::request::{AttendanceRequest, SalaryRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/attendance", post(attendance_handler))
        .route("/salary", post(salary_handler))
        .with_state(state)
}

/// Handler for the POST /attendance endpoint.
///
/// Accepts a full data snapshot and returns the per-day attendance view
/// with period aggregates.
async fn attendance_handler(
    State(state): State<AppState>,
    payload: Result<Json<AttendanceRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing attendance request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let month = match request.month.parse::<BillingMonth>() {
        Ok(month) => month,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Invalid month");
            return error_response(err.into());
        }
    };

    let employee_code = request.employee.employee_code.clone();
    let provider = SnapshotProvider {
        master: request.employee.into(),
        shift: request.shift.into(),
        calendar: request.holidays.into(),
        punches: request
            .punches
            .into_iter()
            .map(|p| p.into_event(&employee_code))
            .collect(),
        snapshot: request.overlays,
    };

    let start_time = Instant::now();
    match compute_monthly_attendance(
        &provider,
        state.policy(),
        &employee_code,
        month,
        request.cutoff_date,
    ) {
        Ok(summary) => {
            info!(
                correlation_id = %correlation_id,
                employee_code = %employee_code,
                %month,
                payable_days = %summary.summary.payable_days,
                duration_us = start_time.elapsed().as_micros(),
                "Attendance computation completed"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(summary),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                employee_code = %employee_code,
                error = %err,
                "Attendance computation failed"
            );
            error_response(err.into())
        }
    }
}

/// Handler for the POST /salary endpoint.
///
/// Accepts a full data snapshot plus what-if overrides and returns the
/// monthly salary result.
async fn salary_handler(
    State(state): State<AppState>,
    payload: Result<Json<SalaryRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing salary request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let month = match request.month.parse::<BillingMonth>() {
        Ok(month) => month,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Invalid month");
            return error_response(err.into());
        }
    };

    let employee_code = request.employee.employee_code.clone();
    let provider = SnapshotProvider {
        master: request.employee.into(),
        shift: request.shift.into(),
        calendar: request.holidays.into(),
        punches: request
            .punches
            .into_iter()
            .map(|p| p.into_event(&employee_code))
            .collect(),
        snapshot: request.overlays,
    };

    let start_time = Instant::now();
    match compute_salary(
        &provider,
        state.policy(),
        &employee_code,
        month,
        &request.overrides,
    ) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                employee_code = %employee_code,
                %month,
                gross_salary = %result.gross_salary,
                net_salary = %result.net_salary,
                duration_us = start_time.elapsed().as_micros(),
                "Salary computation completed"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(result),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                employee_code = %employee_code,
                error = %err,
                "Salary computation failed"
            );
            error_response(err.into())
        }
    }
}

fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> axum::response::Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(correlation_id = %correlation_id, error = %body_text, "JSON data error");
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "JSON syntax error");
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

fn error_response(error: ApiErrorResponse) -> axum::response::Response {
    (
        error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error.error),
    )
        .into_response()
}
