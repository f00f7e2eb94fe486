//! HTTP request handlers for the shift ledger API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::ShiftForm;

use super::request::ShiftRequest;
use super::response::{
    ApiError, ApiErrorResponse, MessageResponse, ShiftAdded, ThemeResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/shifts",
            get(list_shifts_handler)
                .post(add_shift_handler)
                .delete(clear_shifts_handler),
        )
        .route("/shifts/:id", delete(remove_shift_handler))
        .route("/summary", get(summary_handler))
        .route("/report", get(report_handler))
        .route("/policy", get(policy_handler))
        .route("/theme", get(theme_handler))
        .route("/theme/toggle", post(toggle_theme_handler))
        .with_state(state)
}

fn json_ok<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(error: impl Into<ApiErrorResponse>) -> Response {
    let api_error: ApiErrorResponse = error.into();
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}

/// Maps a JSON extraction failure to a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            ApiError::malformed_json(body_text)
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

    error_response(ApiErrorResponse {
        status: StatusCode::BAD_REQUEST,
        error,
    })
}

/// Handler for GET /shifts.
async fn list_shifts_handler(State(state): State<AppState>) -> Response {
    json_ok(StatusCode::OK, state.ledger().shifts())
}

/// Handler for POST /shifts.
///
/// Validates the form fields, computes the shift and appends it to the ledger.
async fn add_shift_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShiftRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing shift entry");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let form = match ShiftForm::try_from(request) {
        Ok(form) => form,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Incomplete shift form");
            return error_response(err);
        }
    };

    match state.ledger().add_shift(&form) {
        Ok(shift) => {
            info!(
                correlation_id = %correlation_id,
                shift_id = %shift.id(),
                regular_minutes = shift.regular_minutes(),
                overtime_minutes = shift.overtime_minutes(),
                "Shift entry stored"
            );
            json_ok(
                StatusCode::CREATED,
                ShiftAdded {
                    message: "Shift added".to_string(),
                    shift,
                },
            )
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Shift entry rejected");
            error_response(err)
        }
    }
}

/// Handler for DELETE /shifts/:id.
async fn remove_shift_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    match state.ledger().remove_shift(&id) {
        Ok(true) => json_ok(StatusCode::OK, MessageResponse::new("Shift removed")),
        Ok(false) => error_response(ApiErrorResponse {
            status: StatusCode::NOT_FOUND,
            error: ApiError::shift_not_found(&id),
        }),
        Err(err) => {
            warn!(shift_id = %id, error = %err, "Shift removal failed");
            error_response(err)
        }
    }
}

/// Handler for DELETE /shifts.
async fn clear_shifts_handler(State(state): State<AppState>) -> Response {
    match state.ledger().clear() {
        Ok(()) => json_ok(StatusCode::OK, MessageResponse::new("All data cleared.")),
        Err(err) => {
            warn!(error = %err, "Ledger clear failed");
            error_response(err)
        }
    }
}

/// Handler for GET /summary.
async fn summary_handler(State(state): State<AppState>) -> Response {
    json_ok(StatusCode::OK, state.ledger().summary())
}

/// Handler for GET /report.
async fn report_handler(State(state): State<AppState>) -> Response {
    json_ok(StatusCode::OK, state.ledger().report())
}

/// Handler for GET /policy.
async fn policy_handler(State(state): State<AppState>) -> Response {
    json_ok(StatusCode::OK, state.ledger().policy().clone())
}

/// Handler for GET /theme.
async fn theme_handler(State(state): State<AppState>) -> Response {
    json_ok(
        StatusCode::OK,
        ThemeResponse {
            theme: state.ledger().theme(),
        },
    )
}

/// Handler for POST /theme/toggle.
async fn toggle_theme_handler(State(state): State<AppState>) -> Response {
    match state.ledger().toggle_theme() {
        Ok(theme) => json_ok(StatusCode::OK, ThemeResponse { theme: Some(theme) }),
        Err(err) => {
            warn!(error = %err, "Theme toggle failed");
            error_response(err)
        }
    }
}
