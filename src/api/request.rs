//! Request types for the report API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::report::{Orientation, ReportKind};

/// Request body for the `/reports` endpoint.
///
/// The `start`/`end` pair must form a whole-week or whole-month span; this
/// is validated by the handler before the aggregator runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRequest {
    /// Which report to build.
    pub report: ReportKind,
    /// First day of the report range.
    pub start: NaiveDate,
    /// Last day of the report range.
    pub end: NaiveDate,
    /// Page orientation of the rendered document.
    #[serde(default)]
    pub orientation: Orientation,
}
