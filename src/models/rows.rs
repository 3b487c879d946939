//! Ephemeral aggregate rows produced by schedule queries.
//!
//! Rows are created fresh per report invocation from query results and
//! discarded after rendering; they are never persisted.

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// One employment×project hour record within a query range.
///
/// Identified for merge purposes by `(number, project)`; `hours` is the
/// designated numeric field that merging sums and scales.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentRow {
    /// Display name of the employee.
    pub employee: String,
    /// Employment identifying number.
    pub number: String,
    /// Department name.
    pub department: String,
    /// Position name.
    pub position: String,
    /// Fractional headcount share of the employment.
    pub staff_units: Decimal,
    /// Project the hours are attributed to.
    pub project: String,
    /// Hours assigned to the project within the query range.
    pub hours: Decimal,
}

/// One absence record overlapping a query range.
///
/// Identified for merge purposes by `number`; carries the absence's own
/// date range so that partially-overlapping records can be scaled at day
/// granularity before merging.
#[derive(Debug, Clone, PartialEq)]
pub struct AbsenceRow {
    /// Display name of the employee.
    pub employee: String,
    /// Employment identifying number.
    pub number: String,
    /// Department name.
    pub department: String,
    /// Position name.
    pub position: String,
    /// Fractional headcount share of the employment.
    pub staff_units: Decimal,
    /// Hours missed over the absence range.
    pub hours: Decimal,
    /// First day of the absence (inclusive).
    pub start: NaiveDate,
    /// Last day of the absence (inclusive).
    pub end: NaiveDate,
}
