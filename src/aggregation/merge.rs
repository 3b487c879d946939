//! Keyed merging of aggregate record lists.

use rust_decimal::Decimal;

use crate::models::{AbsenceRow, AssignmentRow};

/// A record that can be folded into another record with the same key.
///
/// Implementations declare which fields identify a record and which numeric
/// fields are scaled and summed when records merge.
pub trait Mergeable: Clone {
    /// Whether `other` has the same identifying key fields as `self`.
    fn same_key(&self, other: &Self) -> bool;

    /// Multiplies the record's numeric fields by `factor`.
    fn scale(&mut self, factor: Decimal);

    /// Adds `other`'s numeric fields into `self`.
    fn absorb(&mut self, other: &Self);
}

/// Merges `addition` into `base`, returning a new list.
///
/// Every addition record is scaled by `factor` first. A record whose key
/// matches an existing base record is folded into it; otherwise it is
/// appended. Neither input is mutated: both lists are copied before
/// merging, so callers can keep feeding prior output back in as new input
/// without aliasing.
///
/// # Example
///
/// ```
/// use staffing_reports::aggregation::merge;
/// use staffing_reports::models::AssignmentRow;
/// use rust_decimal::Decimal;
///
/// # fn row(number: &str, project: &str, hours: i64) -> AssignmentRow {
/// #     AssignmentRow {
/// #         employee: "Ann Lee".to_string(),
/// #         number: number.to_string(),
/// #         department: String::new(),
/// #         position: String::new(),
/// #         staff_units: Decimal::ONE,
/// #         project: project.to_string(),
/// #         hours: Decimal::new(hours, 0),
/// #     }
/// # }
/// let base = vec![row("001", "Alpha", 40)];
/// let addition = vec![row("001", "Alpha", 40)];
/// let merged = merge(&base, &addition, Decimal::new(5, 1));
/// assert_eq!(merged.len(), 1);
/// assert_eq!(merged[0].hours, Decimal::new(60, 0));
/// ```
pub fn merge<T: Mergeable>(base: &[T], addition: &[T], factor: Decimal) -> Vec<T> {
    let mut merged = base.to_vec();

    for record in addition {
        let mut record = record.clone();
        record.scale(factor);
        match merged.iter_mut().find(|existing| existing.same_key(&record)) {
            Some(existing) => existing.absorb(&record),
            None => merged.push(record),
        }
    }

    merged
}

impl Mergeable for AssignmentRow {
    fn same_key(&self, other: &Self) -> bool {
        self.number == other.number && self.project == other.project
    }

    fn scale(&mut self, factor: Decimal) {
        self.hours *= factor;
    }

    fn absorb(&mut self, other: &Self) {
        self.hours += other.hours;
    }
}

impl Mergeable for AbsenceRow {
    fn same_key(&self, other: &Self) -> bool {
        self.number == other.number
    }

    fn scale(&mut self, factor: Decimal) {
        self.hours *= factor;
    }

    fn absorb(&mut self, other: &Self) {
        self.hours += other.hours;
    }
}
