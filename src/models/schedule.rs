//! Assignment and absence models.
//!
//! This module defines the weekly work assignments, their per-project hour
//! splits, and the absence records tied to an employment.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Hours worked by one assignment on one project.
///
/// Hours are bounded `0 < hours <= 168` (one week), validated upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectAssignment {
    /// Name of the project the hours are attributed to.
    pub project: String,
    /// Hours worked on the project within the assignment's week.
    pub hours: Decimal,
}

/// A work-hours allocation record tied to one employment.
///
/// The date range is always a full calendar week `[Monday, Sunday]` (or a
/// full month, in monthly configurations); this is validated upstream and
/// assumed true by the aggregator.
///
/// # Example
///
/// ```
/// use staffing_reports::models::{Assignment, ProjectAssignment};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let assignment = Assignment {
///     employment: "001".to_string(),
///     start: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
///     end: NaiveDate::from_ymd_opt(2025, 6, 8).unwrap(),
///     projects: vec![ProjectAssignment {
///         project: "Alpha".to_string(),
///         hours: Decimal::new(40, 0),
///     }],
/// };
/// assert_eq!(assignment.hours(), Decimal::new(40, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    /// Identifying number of the employment the assignment belongs to.
    pub employment: String,
    /// First day of the assignment range (a Monday).
    pub start: NaiveDate,
    /// Last day of the assignment range (a Sunday).
    pub end: NaiveDate,
    /// Per-project hour splits of this assignment.
    #[serde(default)]
    pub projects: Vec<ProjectAssignment>,
}

impl Assignment {
    /// Total hours of the assignment across all its projects.
    pub fn hours(&self) -> Decimal {
        self.projects.iter().map(|p| p.hours).sum()
    }
}

/// A dated range during which an employment's hours were not worked.
///
/// Ranges must not overlap per employment (enforced upstream). Unlike
/// assignments, an absence range is arbitrary and need not align to weeks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Absence {
    /// Identifying number of the employment the absence belongs to.
    pub employment: String,
    /// First day of the absence (inclusive).
    pub start: NaiveDate,
    /// Last day of the absence (inclusive).
    pub end: NaiveDate,
    /// Hours missed over the whole absence range.
    pub hours: Decimal,
    /// Free-text reason for the absence.
    #[serde(default)]
    pub reason: String,
}
