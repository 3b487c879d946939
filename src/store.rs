//! Query interface to the schedule store.
//!
//! The aggregator consumes read-only projection rows through the
//! [`ScheduleQuery`] trait; the relational store behind it is out of scope
//! for this crate. [`MemoryStore`] is an in-memory implementation that
//! performs the same join and aggregation, used by tests and small
//! deployments.

use chrono::NaiveDate;

use crate::error::ReportResult;
use crate::models::{Absence, AbsenceRow, Assignment, AssignmentRow, Employment};

/// Read-only projection queries over assignment and absence records.
///
/// Implementations answer for inclusive date ranges. Containment and
/// overlap semantics are part of the contract and mirror what the
/// aggregator's boundary reconciliation expects.
pub trait ScheduleQuery {
    /// One row per employment×project for assignments whose date range is
    /// **fully contained** in `[start, end]`, with project hours summed per
    /// employment×project and rows ordered by employee name.
    fn assignment_rows(&self, start: NaiveDate, end: NaiveDate)
    -> ReportResult<Vec<AssignmentRow>>;

    /// One row per absence record whose date range **overlaps**
    /// `[start, end]`, ordered by employee name. Each row carries the
    /// absence's own range so callers can scale partial overlaps.
    fn absence_rows(&self, start: NaiveDate, end: NaiveDate) -> ReportResult<Vec<AbsenceRow>>;
}

/// In-memory schedule store.
///
/// Holds employments, assignments and absences and answers the projection
/// queries by joining them on the employment number. Records referencing
/// an unknown employment are dropped, matching inner-join semantics of the
/// upstream store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    employments: Vec<Employment>,
    assignments: Vec<Assignment>,
    absences: Vec<Absence>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an employment record.
    pub fn add_employment(&mut self, employment: Employment) {
        self.employments.push(employment);
    }

    /// Adds an assignment record.
    pub fn add_assignment(&mut self, assignment: Assignment) {
        self.assignments.push(assignment);
    }

    /// Adds an absence record.
    pub fn add_absence(&mut self, absence: Absence) {
        self.absences.push(absence);
    }

    fn employment(&self, number: &str) -> Option<&Employment> {
        self.employments.iter().find(|e| e.number == number)
    }
}

impl ScheduleQuery for MemoryStore {
    fn assignment_rows(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> ReportResult<Vec<AssignmentRow>> {
        let mut rows: Vec<AssignmentRow> = Vec::new();

        let contained = self
            .assignments
            .iter()
            .filter(|a| a.start >= start && a.end <= end);

        for assignment in contained {
            let Some(employment) = self.employment(&assignment.employment) else {
                continue;
            };
            for project_assignment in &assignment.projects {
                let existing = rows.iter_mut().find(|row| {
                    row.number == employment.number && row.project == project_assignment.project
                });
                match existing {
                    Some(row) => row.hours += project_assignment.hours,
                    None => rows.push(AssignmentRow {
                        employee: employment.employee.clone(),
                        number: employment.number.clone(),
                        department: employment.department.clone(),
                        position: employment.position.clone(),
                        staff_units: employment.staff_units,
                        project: project_assignment.project.clone(),
                        hours: project_assignment.hours,
                    }),
                }
            }
        }

        rows.sort_by(|a, b| {
            a.employee
                .cmp(&b.employee)
                .then_with(|| a.number.cmp(&b.number))
                .then_with(|| a.project.cmp(&b.project))
        });
        Ok(rows)
    }

    fn absence_rows(&self, start: NaiveDate, end: NaiveDate) -> ReportResult<Vec<AbsenceRow>> {
        let mut rows: Vec<AbsenceRow> = Vec::new();

        let overlapping = self
            .absences
            .iter()
            .filter(|a| a.start <= end && a.end >= start);

        for absence in overlapping {
            let Some(employment) = self.employment(&absence.employment) else {
                continue;
            };
            rows.push(AbsenceRow {
                employee: employment.employee.clone(),
                number: employment.number.clone(),
                department: employment.department.clone(),
                position: employment.position.clone(),
                staff_units: employment.staff_units,
                hours: absence.hours,
                start: absence.start,
                end: absence.end,
            });
        }

        rows.sort_by(|a, b| {
            a.employee
                .cmp(&b.employee)
                .then_with(|| a.number.cmp(&b.number))
                .then_with(|| a.start.cmp(&b.start))
        });
        Ok(rows)
    }
}
