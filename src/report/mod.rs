//! Report assembly: kinds, range validation and document rendering.
//!
//! The renderer consumes the aggregator's tabular data and lays it out
//! into one of two document formats: a word-processing table document or a
//! spreadsheet workbook. The returned [`ReportDocument`] is opaque; the
//! HTTP boundary only asks it for its content type and filename.

mod document;
mod spreadsheet;

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::aggregation::DataBuilder;
use crate::config::ReportSettings;
use crate::error::{ReportError, ReportResult};
use crate::store::ScheduleQuery;
use crate::workcal::WorkCalendar;

/// Placeholder shown instead of a table when a report has no records.
pub const EMPTY_TEXT: &str = "There are no records available";

/// The available reports and their output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    /// Flat assignment listing (table document).
    Assignment,
    /// Employee×project matrix (table document).
    AssignmentMatrix,
    /// Employee×project matrix (spreadsheet).
    AssignmentMatrixXlsx,
    /// Per-employment work-hours check (spreadsheet).
    HoursCheckXlsx,
    /// Shares of the range's work-hour quota (spreadsheet).
    LaborDistributionXlsx,
    /// Shares of each employment's own hours (spreadsheet).
    LaborDistributionPerProjectXlsx,
}

impl ReportKind {
    fn name(self) -> &'static str {
        match self {
            Self::Assignment => "assignment",
            Self::AssignmentMatrix => "assignment_matrix",
            Self::AssignmentMatrixXlsx => "assignment_matrix_xlsx",
            Self::HoursCheckXlsx => "hours_check_xlsx",
            Self::LaborDistributionXlsx => "labor_distribution_xlsx",
            Self::LaborDistributionPerProjectXlsx => "labor_distribution_per_project_xlsx",
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ReportKind {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "assignment" => Ok(Self::Assignment),
            "assignment_matrix" => Ok(Self::AssignmentMatrix),
            "assignment_matrix_xlsx" => Ok(Self::AssignmentMatrixXlsx),
            "hours_check_xlsx" => Ok(Self::HoursCheckXlsx),
            "labor_distribution_xlsx" => Ok(Self::LaborDistributionXlsx),
            "labor_distribution_per_project_xlsx" => Ok(Self::LaborDistributionPerProjectXlsx),
            other => Err(ReportError::UnknownReportKind {
                kind: other.to_string(),
            }),
        }
    }
}

/// Page orientation of the rendered document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Portrait A4 (default).
    #[default]
    Portrait,
    /// Landscape A4.
    Landscape,
}

/// A validated report date range.
///
/// A report covers a whole span of ISO weeks (`Monday..Sunday`) or whole
/// months (`1st..last day`); anything else is rejected before the
/// aggregator runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportRange {
    /// First day of the report range.
    pub start: NaiveDate,
    /// Last day of the report range.
    pub end: NaiveDate,
}

fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    let first = date.with_day(1).unwrap_or(date);
    first + Months::new(1) - Days::new(1)
}

impl ReportRange {
    /// Validates and creates a report range.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::InvalidDateRange`] when `start` is neither a
    /// Monday nor the first day of a month, when `end` is neither a Sunday
    /// nor the last day of a month, when `start > end`, or when the pair
    /// forms neither a whole-week nor a whole-month span.
    pub fn new(start: NaiveDate, end: NaiveDate) -> ReportResult<Self> {
        if start.weekday() != Weekday::Mon && start.day() != 1 {
            return Err(ReportError::InvalidDateRange {
                message: "start must be a Monday or the first day of a month".to_string(),
            });
        }
        if end.weekday() != Weekday::Sun && end != last_day_of_month(end) {
            return Err(ReportError::InvalidDateRange {
                message: "end must be a Sunday or the last day of a month".to_string(),
            });
        }
        if start > end {
            return Err(ReportError::InvalidDateRange {
                message: format!("start {} must be less or equal than end {}", start, end),
            });
        }

        let week_range = start.weekday() == Weekday::Mon && end.weekday() == Weekday::Sun;
        let month_range = start.day() == 1 && end == last_day_of_month(end);
        if !(week_range || month_range) {
            return Err(ReportError::InvalidDateRange {
                message: "report can be weeks or months range only".to_string(),
            });
        }

        Ok(Self { start, end })
    }
}

/// The kind of document a report was rendered into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// Word-processing table document.
    Table,
    /// Spreadsheet workbook.
    Spreadsheet,
}

/// An opaque rendered report document.
///
/// Holds the serialized bytes of the document together with its kind; the
/// boundary derives the MIME type and filename from the kind and streams
/// the bytes as the response body.
#[derive(Debug, Clone)]
pub struct ReportDocument {
    kind: DocumentKind,
    bytes: Vec<u8>,
}

impl ReportDocument {
    pub(crate) fn new(kind: DocumentKind, bytes: Vec<u8>) -> Self {
        Self { kind, bytes }
    }

    /// The kind of document.
    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    /// MIME content type of the document.
    pub fn content_type(&self) -> &'static str {
        match self.kind {
            DocumentKind::Table => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            DocumentKind::Spreadsheet => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
        }
    }

    /// File extension of the document.
    pub fn file_extension(&self) -> &'static str {
        match self.kind {
            DocumentKind::Table => "docx",
            DocumentKind::Spreadsheet => "xlsx",
        }
    }

    /// Download filename for a report over the given range.
    pub fn filename(&self, start: NaiveDate, end: NaiveDate) -> String {
        format!("report_{}_{}.{}", start, end, self.file_extension())
    }

    /// Borrows the serialized document bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consumes the document, returning its serialized bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Builds rendered report documents for a validated range.
///
/// Pairs each [`ReportKind`] with its aggregator method and renderer. One
/// builder serves one report request; nothing is cached between requests.
pub struct ReportBuilder<'a> {
    range: ReportRange,
    store: &'a dyn ScheduleQuery,
    calendar: &'a WorkCalendar,
    settings: &'a ReportSettings,
}

impl<'a> ReportBuilder<'a> {
    /// Creates a report builder over the given collaborators.
    pub fn new(
        range: ReportRange,
        store: &'a dyn ScheduleQuery,
        calendar: &'a WorkCalendar,
        settings: &'a ReportSettings,
    ) -> Self {
        Self {
            range,
            store,
            calendar,
            settings,
        }
    }

    /// Builds the requested report as a rendered document.
    pub fn build(&self, kind: ReportKind, orientation: Orientation) -> ReportResult<ReportDocument> {
        let data = DataBuilder::new(
            self.range.start,
            self.range.end,
            self.store,
            self.calendar,
            self.settings,
        );
        let absence_label = self.settings.absence_label.as_str();

        match kind {
            ReportKind::Assignment => {
                let rows = data.assignment_report()?;
                document::assignment_document(self.range, &rows, orientation)
            }
            ReportKind::AssignmentMatrix => {
                let rows = data.assignment_matrix_report(absence_label)?;
                document::matrix_document(self.range, &rows, absence_label, orientation)
            }
            ReportKind::AssignmentMatrixXlsx => {
                let rows = data.assignment_matrix_report(absence_label)?;
                spreadsheet::matrix_workbook(self.range, &rows, absence_label, orientation)
            }
            ReportKind::HoursCheckXlsx => {
                let rows = data.assignment_hours_check()?;
                spreadsheet::hours_check_workbook(self.range, &rows, orientation)
            }
            ReportKind::LaborDistributionXlsx => {
                let rows = data.labor_distribution(absence_label)?;
                spreadsheet::labor_distribution_workbook(self.range, &rows, orientation)
            }
            ReportKind::LaborDistributionPerProjectXlsx => {
                let rows = data.labor_distribution_per_project()?;
                spreadsheet::per_project_workbook(self.range, &rows, orientation)
            }
        }
    }
}

/// Renders an hour or share value, dropping the decimal point from whole
/// numbers.
pub(crate) fn format_number(value: rust_decimal::Decimal) -> String {
    value.normalize().to_string()
}
