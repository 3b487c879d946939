//! Settings types.

use serde::{Deserialize, Serialize};

/// Runtime settings of the report engine.
///
/// Every field has a default, so a settings file only needs to name the
/// values it overrides.
///
/// # Example
///
/// ```
/// use staffing_reports::config::ReportSettings;
///
/// let settings = ReportSettings::default();
/// assert_eq!(settings.work_day_hours, 8);
/// assert_eq!(settings.precision, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    /// Standard hours of a work day not marked in the calendar.
    pub work_day_hours: u32,
    /// Decimal places used when reconciling rounded values.
    pub precision: u32,
    /// Label under which absence hours appear as a synthetic project.
    pub absence_label: String,
    /// Whether the hours-check report is sorted by employee name.
    pub hours_check_sorted: bool,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            work_day_hours: 8,
            precision: 2,
            absence_label: "Absence hours".to_string(),
            hours_check_sorted: true,
        }
    }
}
