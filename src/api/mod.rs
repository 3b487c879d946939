//! HTTP API for the report aggregation engine.
//!
//! This module provides the report download boundary: a single endpoint
//! that validates the requested range, runs the aggregation pipeline and
//! streams the rendered document back as an attachment.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::ReportRequest;
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
