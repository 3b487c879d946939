//! Error types for the report aggregation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all failures that can occur while building a report.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the report aggregation engine.
///
/// All operations in the engine return this error type. Every variant is
/// fatal for the current report invocation: no partial report is produced
/// and nothing is retried.
///
/// # Example
///
/// ```
/// use staffing_reports::error::ReportError;
///
/// let error = ReportError::UnknownReportKind {
///     kind: "weekly_digest".to_string(),
/// };
/// assert_eq!(error.to_string(), "Unknown report kind: weekly_digest");
/// ```
#[derive(Debug, Error)]
pub enum ReportError {
    /// The rounding reconciliation delta fell outside `0..=count`.
    ///
    /// Indicates that the sum of the input values deviates from the control
    /// total by more than the number of items allows, i.e. the inputs are
    /// inconsistent.
    #[error("Rounded values deviate from control total {total}: delta {delta} outside 0..={count}")]
    RoundingInvariant {
        /// Difference between the scaled control total and the floor sum.
        delta: i64,
        /// Number of values being rounded.
        count: usize,
        /// The control total the values were reconciled against.
        total: Decimal,
    },

    /// A report kind string did not match any known report.
    #[error("Unknown report kind: {kind}")]
    UnknownReportKind {
        /// The report kind that was requested.
        kind: String,
    },

    /// The requested report date range violates a validation rule.
    #[error("Invalid report date range: {message}")]
    InvalidDateRange {
        /// A description of the violated rule.
        message: String,
    },

    /// The schedule store failed to answer a query.
    #[error("Schedule query failed: {message}")]
    Query {
        /// A description of the query failure.
        message: String,
    },

    /// A report document could not be assembled or serialized.
    #[error("Failed to assemble report document: {message}")]
    Document {
        /// A description of the document failure.
        message: String,
    },

    /// Settings file was not found at the specified path.
    #[error("Settings file not found: {path}")]
    SettingsNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Settings file could not be parsed.
    #[error("Failed to parse settings file '{path}': {message}")]
    SettingsParse {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return ReportError.
pub type ReportResult<T> = Result<T, ReportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounding_invariant_displays_bounds() {
        let error = ReportError::RoundingInvariant {
            delta: -2,
            count: 3,
            total: Decimal::new(100, 0),
        };
        assert_eq!(
            error.to_string(),
            "Rounded values deviate from control total 100: delta -2 outside 0..=3"
        );
    }

    #[test]
    fn test_unknown_report_kind_displays_kind() {
        let error = ReportError::UnknownReportKind {
            kind: "bogus".to_string(),
        };
        assert_eq!(error.to_string(), "Unknown report kind: bogus");
    }

    #[test]
    fn test_invalid_date_range_displays_message() {
        let error = ReportError::InvalidDateRange {
            message: "start must be a Monday or the first day of a month".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid report date range: start must be a Monday or the first day of a month"
        );
    }

    #[test]
    fn test_settings_parse_displays_path_and_message() {
        let error = ReportError::SettingsParse {
            path: "/etc/reports.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse settings file '/etc/reports.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<ReportError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_query_error() -> ReportResult<()> {
            Err(ReportError::Query {
                message: "connection lost".to_string(),
            })
        }

        fn propagates_error() -> ReportResult<()> {
            returns_query_error()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
