//! HTTP request handlers for the report API.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::report::{ReportBuilder, ReportRange};

use super::request::ReportRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/reports", post(report_handler))
        .with_state(state)
}

/// Handler for the POST /reports endpoint.
///
/// Validates the requested range, builds the report document and streams
/// it back as a file attachment.
async fn report_handler(
    State(state): State<AppState>,
    payload: Result<Json<ReportRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing report request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    ApiError::new("VALIDATION_ERROR", body_text)
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
                [(header::CONTENT_TYPE, "application/json".to_string())],
                Json(error),
            )
                .into_response();
        }
    };

    // Validate the report range before running the aggregator
    let range = match ReportRange::new(request.start, request.end) {
        Ok(range) => range,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                start = %request.start,
                end = %request.end,
                "Invalid report range"
            );
            let response: ApiErrorResponse = err.into();
            return response.into_response();
        }
    };

    let builder = ReportBuilder::new(range, state.store(), state.calendar(), state.settings());

    match builder.build(request.report, request.orientation) {
        Ok(document) => {
            info!(
                correlation_id = %correlation_id,
                report = %request.report,
                "Report generated"
            );
            let filename = document.filename(range.start, range.end);
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, document.content_type().to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename={}", filename),
                    ),
                ],
                document.into_bytes(),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                report = %request.report,
                error = %err,
                "Report generation failed"
            );
            let response: ApiErrorResponse = err.into();
            response.into_response()
        }
    }
}
