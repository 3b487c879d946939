//! Report data builder.
//!
//! Produces flat tabular data for each report type over a `[start, end]`
//! date range. The range is validated upstream to be a whole set of ISO
//! weeks or whole months; the builder itself is stateless across
//! invocations.
//!
//! Assignment storage is weekly, so a monthly report's first and last week
//! commonly span into the adjacent month. Boundary reconciliation queries
//! those weeks separately and merges their records scaled by the share of
//! the week's work hours that falls inside the report range. Absences are
//! arbitrary ranges and get the analogous treatment at day granularity.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use rust_decimal::Decimal;

use crate::config::ReportSettings;
use crate::error::ReportResult;
use crate::models::{AbsenceRow, AssignmentRow};
use crate::store::ScheduleQuery;
use crate::workcal::WorkCalendar;

use super::merge::merge;
use super::rounding::round_preserving_sum;

/// One cell of the employee×project matrix report.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixRow {
    /// Display name of the employee.
    pub employee: String,
    /// Employment identifying number.
    pub number: String,
    /// Project label (the caller-supplied absence label for absence hours).
    pub project: String,
    /// Hours attributed to the project within the report range.
    pub hours: Decimal,
}

/// One employment's totals in the work-hours check report.
#[derive(Debug, Clone, PartialEq)]
pub struct HoursCheckRow {
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
    /// Hours assigned to projects within the report range.
    pub assigned_hours: Decimal,
    /// Absence hours within the report range.
    pub absence_hours: Decimal,
    /// Assigned plus absence hours.
    pub hours_assigned_total: Decimal,
    /// Theoretical total: work-hour quota × staff units.
    pub work_hours_total: Decimal,
    /// Absolute difference between the theoretical and assigned totals.
    pub hours_difference: Decimal,
}

/// One employment×project share of the range's work-hour quota.
#[derive(Debug, Clone, PartialEq)]
pub struct LaborShareRow {
    /// Display name of the employee.
    pub employee: String,
    /// Employment identifying number.
    pub number: String,
    /// Fractional headcount share of the employment.
    pub staff_units: Decimal,
    /// Project label (or the absence label).
    pub project: String,
    /// Project hours as a fraction of the range's work-hour quota.
    pub share: Decimal,
    /// Rounded sum of the employment's shares.
    pub employment_total: Decimal,
}

/// One employment×project share of the employment's own assigned hours.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectShareRow {
    /// Display name of the employee.
    pub employee: String,
    /// Employment identifying number.
    pub number: String,
    /// Project label.
    pub project: String,
    /// Project hours as a fraction of the employment's assigned total;
    /// the shares of one employment sum to exactly 1.
    pub share: Decimal,
}

/// Builds normalized tabular data for the reports.
///
/// Purely a sequence of query/transform steps per invocation; every report
/// request re-queries and re-computes from scratch.
pub struct DataBuilder<'a> {
    start: NaiveDate,
    end: NaiveDate,
    store: &'a dyn ScheduleQuery,
    calendar: &'a WorkCalendar,
    settings: &'a ReportSettings,
}

/// First and last day of the ISO week containing `date`.
fn week_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let monday = date - Days::new(u64::from(date.weekday().num_days_from_monday()));
    (monday, monday + Days::new(6))
}

impl<'a> DataBuilder<'a> {
    /// Creates a builder for the given report range.
    pub fn new(
        start: NaiveDate,
        end: NaiveDate,
        store: &'a dyn ScheduleQuery,
        calendar: &'a WorkCalendar,
        settings: &'a ReportSettings,
    ) -> Self {
        Self {
            start,
            end,
            store,
            calendar,
            settings,
        }
    }

    /// Assignment rows of the range with partial boundary weeks merged in
    /// proportionally.
    fn reconciled_assignments(&self) -> ReportResult<Vec<AssignmentRow>> {
        let mut rows = self.store.assignment_rows(self.start, self.end)?;

        if self.start.weekday() != Weekday::Mon {
            let (week_start, week_end) = week_bounds(self.start);
            let whole = self.calendar.work_hours(week_start, week_end);
            if !whole.is_zero() {
                let inside = self.calendar.work_hours(self.start, week_end);
                let week_rows = self.store.assignment_rows(week_start, week_end)?;
                rows = merge(&rows, &week_rows, inside / whole);
            }
        }

        if self.end.weekday() != Weekday::Sun {
            let (week_start, week_end) = week_bounds(self.end);
            let whole = self.calendar.work_hours(week_start, week_end);
            if !whole.is_zero() {
                let inside = self.calendar.work_hours(week_start, self.end);
                let week_rows = self.store.assignment_rows(week_start, week_end)?;
                rows = merge(&rows, &week_rows, inside / whole);
            }
        }

        Ok(rows)
    }

    /// Absence rows of the range, partial overlaps scaled at day
    /// granularity and duplicates folded per employment number.
    fn reconciled_absences(&self) -> ReportResult<Vec<AbsenceRow>> {
        let overlapping = self.store.absence_rows(self.start, self.end)?;

        let mut scaled = Vec::with_capacity(overlapping.len());
        for mut row in overlapping {
            if row.start < self.start || row.end > self.end {
                let whole = self.calendar.work_hours(row.start, row.end);
                if whole.is_zero() {
                    // The absence has no attributable work hours at all
                    continue;
                }
                let overlap_start = row.start.max(self.start);
                let overlap_end = row.end.min(self.end);
                let inside = self.calendar.work_hours(overlap_start, overlap_end);
                row.hours = row.hours * inside / whole;
            }
            scaled.push(row);
        }

        Ok(merge(&[], &scaled, Decimal::ONE))
    }

    /// Flat assignment listing: one row per employment×project.
    pub fn assignment_report(&self) -> ReportResult<Vec<AssignmentRow>> {
        self.reconciled_assignments()
    }

    /// Employee×project matrix with absence hours injected as a synthetic
    /// project named `absence_label`.
    pub fn assignment_matrix_report(&self, absence_label: &str) -> ReportResult<Vec<MatrixRow>> {
        let mut rows: Vec<MatrixRow> = self
            .reconciled_assignments()?
            .into_iter()
            .map(|row| MatrixRow {
                employee: row.employee,
                number: row.number,
                project: row.project,
                hours: row.hours,
            })
            .collect();

        for row in self.reconciled_absences()? {
            rows.push(MatrixRow {
                employee: row.employee,
                number: row.number,
                project: absence_label.to_string(),
                hours: row.hours,
            });
        }

        Ok(rows)
    }

    /// Per-employment totals: assigned plus absence hours against the
    /// theoretical quota, with the absolute difference.
    pub fn assignment_hours_check(&self) -> ReportResult<Vec<HoursCheckRow>> {
        let quota = self.calendar.work_hours(self.start, self.end);

        let mut rows: Vec<HoursCheckRow> = Vec::new();
        for row in self.reconciled_assignments()? {
            match rows.iter_mut().find(|r| r.number == row.number) {
                Some(existing) => existing.assigned_hours += row.hours,
                None => rows.push(HoursCheckRow {
                    employee: row.employee,
                    number: row.number,
                    department: row.department,
                    position: row.position,
                    staff_units: row.staff_units,
                    assigned_hours: row.hours,
                    absence_hours: Decimal::ZERO,
                    hours_assigned_total: Decimal::ZERO,
                    work_hours_total: Decimal::ZERO,
                    hours_difference: Decimal::ZERO,
                }),
            }
        }

        for row in self.reconciled_absences()? {
            match rows.iter_mut().find(|r| r.number == row.number) {
                Some(existing) => existing.absence_hours += row.hours,
                None => rows.push(HoursCheckRow {
                    employee: row.employee,
                    number: row.number,
                    department: row.department,
                    position: row.position,
                    staff_units: row.staff_units,
                    assigned_hours: Decimal::ZERO,
                    absence_hours: row.hours,
                    hours_assigned_total: Decimal::ZERO,
                    work_hours_total: Decimal::ZERO,
                    hours_difference: Decimal::ZERO,
                }),
            }
        }

        for row in &mut rows {
            row.hours_assigned_total = row.assigned_hours + row.absence_hours;
            row.work_hours_total = quota * row.staff_units;
            row.hours_difference = (row.work_hours_total - row.hours_assigned_total).abs();
        }

        if self.settings.hours_check_sorted {
            rows.sort_by(|a, b| {
                a.employee
                    .cmp(&b.employee)
                    .then_with(|| a.number.cmp(&b.number))
            });
        }

        Ok(rows)
    }

    /// Per-employment project hours as fractions of the range's work-hour
    /// quota, reconciled so each employment's shares sum exactly to its
    /// rounded employment total.
    pub fn labor_distribution(&self, absence_label: &str) -> ReportResult<Vec<LaborShareRow>> {
        let quota = self.calendar.work_hours(self.start, self.end);
        if quota.is_zero() {
            return Ok(Vec::new());
        }

        let mut rows: Vec<LaborShareRow> = self
            .reconciled_assignments()?
            .into_iter()
            .map(|row| LaborShareRow {
                employee: row.employee,
                number: row.number,
                staff_units: row.staff_units,
                project: row.project,
                share: row.hours / quota,
                employment_total: Decimal::ZERO,
            })
            .collect();

        for row in self.reconciled_absences()? {
            rows.push(LaborShareRow {
                employee: row.employee,
                number: row.number,
                staff_units: row.staff_units,
                project: absence_label.to_string(),
                share: row.hours / quota,
                employment_total: Decimal::ZERO,
            });
        }

        self.round_share_groups(&mut rows)?;

        Ok(rows)
    }

    /// Per-employment project hours as fractions of the employment's own
    /// assigned total; each employment's shares sum to exactly 1.
    pub fn labor_distribution_per_project(&self) -> ReportResult<Vec<ProjectShareRow>> {
        let assignments = self.reconciled_assignments()?;

        let mut rows: Vec<ProjectShareRow> = Vec::new();
        for row in &assignments {
            let employment_hours: Decimal = assignments
                .iter()
                .filter(|other| other.number == row.number)
                .map(|other| other.hours)
                .sum();
            if employment_hours.is_zero() {
                continue;
            }
            rows.push(ProjectShareRow {
                employee: row.employee.clone(),
                number: row.number.clone(),
                project: row.project.clone(),
                share: row.hours / employment_hours,
            });
        }

        for number in unique_numbers(rows.iter().map(|row| row.number.as_str())) {
            let indices: Vec<usize> = rows
                .iter()
                .enumerate()
                .filter(|(_, row)| row.number == number)
                .map(|(index, _)| index)
                .collect();
            let shares: Vec<Decimal> = indices.iter().map(|&index| rows[index].share).collect();

            let rounded = round_preserving_sum(&shares, Decimal::ONE, self.settings.precision)?;
            for (&index, share) in indices.iter().zip(rounded) {
                rows[index].share = share;
            }
        }

        Ok(rows)
    }

    /// Rounds the shares of every employment group against the group's
    /// rounded total and stores both back into the rows.
    fn round_share_groups(&self, rows: &mut [LaborShareRow]) -> ReportResult<()> {
        for number in unique_numbers(rows.iter().map(|row| row.number.as_str())) {
            let indices: Vec<usize> = rows
                .iter()
                .enumerate()
                .filter(|(_, row)| row.number == number)
                .map(|(index, _)| index)
                .collect();
            let shares: Vec<Decimal> = indices.iter().map(|&index| rows[index].share).collect();

            let total: Decimal = shares
                .iter()
                .copied()
                .sum::<Decimal>()
                .round_dp(self.settings.precision);
            let rounded = round_preserving_sum(&shares, total, self.settings.precision)?;

            for (&index, share) in indices.iter().zip(rounded) {
                rows[index].share = share;
                rows[index].employment_total = total;
            }
        }
        Ok(())
    }
}

/// Distinct employment numbers in first-occurrence order.
fn unique_numbers<'a>(numbers: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut unique: Vec<String> = Vec::new();
    for number in numbers {
        if !unique.iter().any(|existing| existing == number) {
            unique.push(number.to_string());
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Absence, Assignment, Employment, ProjectAssignment};
    use crate::store::MemoryStore;
    use crate::workcal::{Day, DayType};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn employment(number: &str, employee: &str, staff_units: Decimal) -> Employment {
        Employment {
            number: number.to_string(),
            employee: employee.to_string(),
            department: "Engineering".to_string(),
            position: "Engineer".to_string(),
            staff_units,
        }
    }

    fn week_assignment(number: &str, monday: &str, projects: &[(&str, &str)]) -> Assignment {
        let start = make_date(monday);
        Assignment {
            employment: number.to_string(),
            start,
            end: start + Days::new(6),
            projects: projects
                .iter()
                .map(|(project, hours)| ProjectAssignment {
                    project: project.to_string(),
                    hours: dec(hours),
                })
                .collect(),
        }
    }

    fn absence(number: &str, start: &str, end: &str, hours: &str) -> Absence {
        Absence {
            employment: number.to_string(),
            start: make_date(start),
            end: make_date(end),
            hours: dec(hours),
            reason: String::new(),
        }
    }

    /// Calendar with Saturdays and Sundays of the span marked as rest days.
    fn weekend_calendar(start: &str, end: &str) -> WorkCalendar {
        let mut calendar = WorkCalendar::new(8);
        let mut date = make_date(start);
        let end = make_date(end);
        while date <= end {
            if date.weekday().number_from_monday() > 5 {
                calendar.mark(Day {
                    date,
                    day_type: DayType {
                        name: "Day off".to_string(),
                        hours: 0,
                    },
                });
            }
            date = date.succ_opt().unwrap();
        }
        calendar
    }

    fn build<'a>(
        start: &str,
        end: &str,
        store: &'a MemoryStore,
        calendar: &'a WorkCalendar,
        settings: &'a ReportSettings,
    ) -> DataBuilder<'a> {
        DataBuilder::new(make_date(start), make_date(end), store, calendar, settings)
    }

    #[test]
    fn test_week_bounds() {
        // 2025-07-01 is a Tuesday
        let (monday, sunday) = week_bounds(make_date("2025-07-01"));
        assert_eq!(monday, make_date("2025-06-30"));
        assert_eq!(sunday, make_date("2025-07-06"));

        let (monday, sunday) = week_bounds(make_date("2025-06-30"));
        assert_eq!(monday, make_date("2025-06-30"));
        assert_eq!(sunday, make_date("2025-07-06"));
    }

    #[test]
    fn test_aligned_range_needs_no_reconciliation() {
        let mut store = MemoryStore::new();
        store.add_employment(employment("001", "Ann Lee", Decimal::ONE));
        store.add_assignment(week_assignment("001", "2025-06-02", &[("Alpha", "40")]));

        let calendar = weekend_calendar("2025-06-02", "2025-06-08");
        let settings = ReportSettings::default();
        let builder = build("2025-06-02", "2025-06-08", &store, &calendar, &settings);

        let rows = builder.assignment_report().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].hours, dec("40"));
    }

    #[test]
    fn test_leading_partial_week_is_scaled() {
        // July 2025 starts on a Tuesday; the week containing July 1 loses
        // its Monday to June.
        let mut store = MemoryStore::new();
        store.add_employment(employment("001", "Ann Lee", Decimal::ONE));
        store.add_assignment(week_assignment("001", "2025-06-30", &[("Alpha", "40")]));

        let calendar = weekend_calendar("2025-06-28", "2025-08-03");
        let settings = ReportSettings::default();
        let builder = build("2025-07-01", "2025-07-31", &store, &calendar, &settings);

        let rows = builder.assignment_report().unwrap();
        assert_eq!(rows.len(), 1);
        // 4 of the week's 5 work days fall inside July: 40 * 32/40
        assert_eq!(rows[0].hours, dec("32"));
    }

    #[test]
    fn test_trailing_partial_week_is_scaled() {
        // July 2025 ends on a Thursday
        let mut store = MemoryStore::new();
        store.add_employment(employment("001", "Ann Lee", Decimal::ONE));
        store.add_assignment(week_assignment("001", "2025-07-28", &[("Alpha", "40")]));

        let calendar = weekend_calendar("2025-06-28", "2025-08-03");
        let settings = ReportSettings::default();
        let builder = build("2025-07-01", "2025-07-31", &store, &calendar, &settings);

        let rows = builder.assignment_report().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].hours, dec("32"));
    }

    #[test]
    fn test_boundary_reconciliation_conserves_hours() {
        // Five consecutive weeks of 40 hours covering all of July 2025;
        // reconciled hours must equal the hours belonging to July's days:
        // three full weeks plus 4/5 of each boundary week.
        let mut store = MemoryStore::new();
        store.add_employment(employment("001", "Ann Lee", Decimal::ONE));
        for monday in ["2025-06-30", "2025-07-07", "2025-07-14", "2025-07-21", "2025-07-28"] {
            store.add_assignment(week_assignment("001", monday, &[("Alpha", "40")]));
        }

        let calendar = weekend_calendar("2025-06-28", "2025-08-03");
        let settings = ReportSettings::default();
        let builder = build("2025-07-01", "2025-07-31", &store, &calendar, &settings);

        let rows = builder.assignment_report().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].hours, dec("184"));
    }

    #[test]
    fn test_matrix_report_injects_absence_as_project() {
        let mut store = MemoryStore::new();
        store.add_employment(employment("001", "Ann Lee", Decimal::ONE));
        store.add_assignment(week_assignment("001", "2025-06-02", &[("Alpha", "40")]));
        store.add_absence(absence("001", "2025-06-04", "2025-06-04", "8"));

        let calendar = weekend_calendar("2025-06-02", "2025-06-08");
        let settings = ReportSettings::default();
        let builder = build("2025-06-02", "2025-06-08", &store, &calendar, &settings);

        let rows = builder.assignment_matrix_report("Absence hours").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].employee, "Ann Lee");
        assert_eq!(rows[0].number, "001");
        assert_eq!(rows[0].project, "Alpha");
        assert_eq!(rows[0].hours, dec("40"));
        assert_eq!(rows[1].project, "Absence hours");
        assert_eq!(rows[1].hours, dec("8"));
    }

    #[test]
    fn test_duplicate_absences_fold_per_employment() {
        let mut store = MemoryStore::new();
        store.add_employment(employment("001", "Ann Lee", Decimal::ONE));
        store.add_absence(absence("001", "2025-06-03", "2025-06-03", "8"));
        store.add_absence(absence("001", "2025-06-05", "2025-06-05", "4"));

        let calendar = weekend_calendar("2025-06-02", "2025-06-08");
        let settings = ReportSettings::default();
        let builder = build("2025-06-02", "2025-06-08", &store, &calendar, &settings);

        let rows = builder.assignment_matrix_report("Absence hours").unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].hours, dec("12"));
    }

    #[test]
    fn test_partially_overlapping_absence_is_scaled_by_work_hours() {
        // Absence runs Saturday June 28 through Wednesday July 2; only its
        // July work days (16 of 24 work hours) belong to the July report.
        let mut store = MemoryStore::new();
        store.add_employment(employment("001", "Ann Lee", Decimal::ONE));
        store.add_absence(absence("001", "2025-06-28", "2025-07-02", "24"));

        let calendar = weekend_calendar("2025-06-28", "2025-08-03");
        let settings = ReportSettings::default();
        let builder = build("2025-07-01", "2025-07-31", &store, &calendar, &settings);

        let rows = builder.assignment_matrix_report("Absence hours").unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].hours, dec("16"));
    }

    #[test]
    fn test_absence_spanning_whole_range_is_clamped_to_it() {
        let mut store = MemoryStore::new();
        store.add_employment(employment("001", "Ann Lee", Decimal::ONE));
        store.add_absence(absence("001", "2025-06-25", "2025-08-05", "100"));

        let calendar = weekend_calendar("2025-06-23", "2025-08-10");
        let settings = ReportSettings::default();
        let builder = build("2025-07-01", "2025-07-31", &store, &calendar, &settings);

        let rows = builder.assignment_matrix_report("Absence hours").unwrap();
        assert_eq!(rows.len(), 1);
        // 23 work days inside July out of 30 across the absence
        let expected = dec("100") * dec("184") / dec("240");
        assert_eq!(rows[0].hours, expected);
    }

    #[test]
    fn test_hours_check_balances_assigned_and_absence_hours() {
        let mut store = MemoryStore::new();
        store.add_employment(employment("001", "Ann Lee", Decimal::ONE));
        store.add_assignment(week_assignment("001", "2025-06-02", &[("Alpha", "32")]));
        store.add_absence(absence("001", "2025-06-06", "2025-06-06", "8"));

        let calendar = weekend_calendar("2025-06-02", "2025-06-08");
        let settings = ReportSettings::default();
        let builder = build("2025-06-02", "2025-06-08", &store, &calendar, &settings);

        let rows = builder.assignment_hours_check().unwrap();
        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.assigned_hours, dec("32"));
        assert_eq!(row.absence_hours, dec("8"));
        assert_eq!(row.hours_assigned_total, dec("40"));
        assert_eq!(row.work_hours_total, dec("40"));
        assert_eq!(row.hours_difference, dec("0"));
    }

    #[test]
    fn test_hours_check_scales_quota_by_staff_units() {
        let mut store = MemoryStore::new();
        store.add_employment(employment("001", "Ann Lee", dec("0.5")));
        store.add_assignment(week_assignment("001", "2025-06-02", &[("Alpha", "16")]));

        let calendar = weekend_calendar("2025-06-02", "2025-06-08");
        let settings = ReportSettings::default();
        let builder = build("2025-06-02", "2025-06-08", &store, &calendar, &settings);

        let rows = builder.assignment_hours_check().unwrap();
        assert_eq!(rows[0].work_hours_total, dec("20"));
        assert_eq!(rows[0].hours_difference, dec("4"));
    }

    #[test]
    fn test_hours_check_includes_absence_only_employments() {
        let mut store = MemoryStore::new();
        store.add_employment(employment("001", "Zed Quill", Decimal::ONE));
        store.add_employment(employment("002", "Ann Lee", Decimal::ONE));
        store.add_assignment(week_assignment("001", "2025-06-02", &[("Alpha", "40")]));
        store.add_absence(absence("002", "2025-06-02", "2025-06-06", "40"));

        let calendar = weekend_calendar("2025-06-02", "2025-06-08");
        let settings = ReportSettings::default();
        let builder = build("2025-06-02", "2025-06-08", &store, &calendar, &settings);

        let rows = builder.assignment_hours_check().unwrap();
        assert_eq!(rows.len(), 2);
        // Sorted by employee name: the absence-only employment comes first
        assert_eq!(rows[0].employee, "Ann Lee");
        assert_eq!(rows[0].assigned_hours, dec("0"));
        assert_eq!(rows[0].absence_hours, dec("40"));
        assert_eq!(rows[1].employee, "Zed Quill");
    }

    #[test]
    fn test_hours_check_unsorted_keeps_fold_order() {
        let mut store = MemoryStore::new();
        store.add_employment(employment("001", "Zed Quill", Decimal::ONE));
        store.add_employment(employment("002", "Ann Lee", Decimal::ONE));
        store.add_assignment(week_assignment("001", "2025-06-02", &[("Alpha", "40")]));
        store.add_absence(absence("002", "2025-06-02", "2025-06-06", "40"));

        let calendar = weekend_calendar("2025-06-02", "2025-06-08");
        let settings = ReportSettings {
            hours_check_sorted: false,
            ..ReportSettings::default()
        };
        let builder = build("2025-06-02", "2025-06-08", &store, &calendar, &settings);

        let rows = builder.assignment_hours_check().unwrap();
        assert_eq!(rows[0].employee, "Zed Quill");
        assert_eq!(rows[1].employee, "Ann Lee");
    }

    #[test]
    fn test_labor_distribution_shares_sum_to_rounded_total() {
        // No rest days: the week's quota is 56 hours
        let mut store = MemoryStore::new();
        store.add_employment(employment("001", "Ann Lee", Decimal::ONE));
        store.add_assignment(week_assignment(
            "001",
            "2025-06-02",
            &[("Alpha", "13"), ("Beta", "13"), ("Gamma", "14")],
        ));

        let calendar = WorkCalendar::new(8);
        let settings = ReportSettings::default();
        let builder = build("2025-06-02", "2025-06-08", &store, &calendar, &settings);

        let rows = builder.labor_distribution("Absence hours").unwrap();
        assert_eq!(rows.len(), 3);

        let sum: Decimal = rows.iter().map(|row| row.share).sum();
        assert_eq!(sum, rows[0].employment_total);
        assert_eq!(rows[0].employment_total, dec("0.71"));
        assert_eq!(rows[0].share, dec("0.23"));
        assert_eq!(rows[1].share, dec("0.23"));
        assert_eq!(rows[2].share, dec("0.25"));
    }

    #[test]
    fn test_labor_distribution_includes_absence_share() {
        let mut store = MemoryStore::new();
        store.add_employment(employment("001", "Ann Lee", Decimal::ONE));
        store.add_assignment(week_assignment("001", "2025-06-02", &[("Alpha", "30")]));
        store.add_absence(absence("001", "2025-06-06", "2025-06-06", "10"));

        let calendar = weekend_calendar("2025-06-02", "2025-06-08");
        let settings = ReportSettings::default();
        let builder = build("2025-06-02", "2025-06-08", &store, &calendar, &settings);

        let rows = builder.labor_distribution("Absence hours").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].share, dec("0.75"));
        assert_eq!(rows[1].project, "Absence hours");
        assert_eq!(rows[1].share, dec("0.25"));
        assert_eq!(rows[0].employment_total, dec("1.00"));
    }

    #[test]
    fn test_labor_distribution_zero_quota_returns_empty() {
        let mut store = MemoryStore::new();
        store.add_employment(employment("001", "Ann Lee", Decimal::ONE));
        store.add_assignment(week_assignment("001", "2025-06-02", &[("Alpha", "40")]));

        let calendar = WorkCalendar::new(0);
        let settings = ReportSettings::default();
        let builder = build("2025-06-02", "2025-06-08", &store, &calendar, &settings);

        let rows = builder.labor_distribution("Absence hours").unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_per_project_shares_sum_to_one() {
        let mut store = MemoryStore::new();
        store.add_employment(employment("001", "Ann Lee", Decimal::ONE));
        store.add_assignment(week_assignment(
            "001",
            "2025-06-02",
            &[("Alpha", "10"), ("Beta", "10"), ("Gamma", "10")],
        ));

        let calendar = weekend_calendar("2025-06-02", "2025-06-08");
        let settings = ReportSettings::default();
        let builder = build("2025-06-02", "2025-06-08", &store, &calendar, &settings);

        let rows = builder.labor_distribution_per_project().unwrap();
        assert_eq!(rows.len(), 3);

        let sum: Decimal = rows.iter().map(|row| row.share).sum();
        assert_eq!(sum, Decimal::ONE);
        assert_eq!(rows[0].share, dec("0.34"));
        assert_eq!(rows[1].share, dec("0.33"));
        assert_eq!(rows[2].share, dec("0.33"));
    }

    #[test]
    fn test_per_project_rounds_each_employment_separately() {
        let mut store = MemoryStore::new();
        store.add_employment(employment("001", "Ann Lee", Decimal::ONE));
        store.add_employment(employment("002", "Bob Ray", Decimal::ONE));
        store.add_assignment(week_assignment(
            "001",
            "2025-06-02",
            &[("Alpha", "10"), ("Beta", "20")],
        ));
        store.add_assignment(week_assignment(
            "002",
            "2025-06-02",
            &[("Alpha", "10"), ("Beta", "10"), ("Gamma", "10")],
        ));

        let calendar = weekend_calendar("2025-06-02", "2025-06-08");
        let settings = ReportSettings::default();
        let builder = build("2025-06-02", "2025-06-08", &store, &calendar, &settings);

        let rows = builder.labor_distribution_per_project().unwrap();
        for number in ["001", "002"] {
            let sum: Decimal = rows
                .iter()
                .filter(|row| row.number == number)
                .map(|row| row.share)
                .sum();
            assert_eq!(sum, Decimal::ONE, "employment {}", number);
        }
    }

    #[test]
    fn test_empty_store_produces_empty_reports() {
        let store = MemoryStore::new();
        let calendar = weekend_calendar("2025-06-02", "2025-06-08");
        let settings = ReportSettings::default();
        let builder = build("2025-06-02", "2025-06-08", &store, &calendar, &settings);

        assert!(builder.assignment_report().unwrap().is_empty());
        assert!(builder.assignment_matrix_report("A").unwrap().is_empty());
        assert!(builder.assignment_hours_check().unwrap().is_empty());
        assert!(builder.labor_distribution("A").unwrap().is_empty());
        assert!(builder.labor_distribution_per_project().unwrap().is_empty());
    }
}
