//! Engine settings for the report aggregation engine.
//!
//! This module provides the [`ReportSettings`] type and its YAML loader.

mod loader;
mod types;

pub use types::ReportSettings;
