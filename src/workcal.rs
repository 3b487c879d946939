//! Work calendar: day types and work-hour quotas.
//!
//! The calendar marks specific dates as having a non-standard hour count
//! (0 for rest days, or a custom value for shortened days) and answers
//! work-day and work-hour counts for arbitrary inclusive date ranges.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A category of calendar day with a non-standard hour count.
///
/// `hours == 0` marks a rest day; any other value overrides the standard
/// work-day length for days of this type. Bounded `0..=24`, validated
/// upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayType {
    /// Display name of the day type (e.g. "Day off", "Pre-holiday day").
    pub name: String,
    /// Work hours counted for a day of this type.
    pub hours: u32,
}

/// A specific date marked with a non-standard day type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Day {
    /// The marked date.
    pub date: NaiveDate,
    /// The day type assigned to the date.
    pub day_type: DayType,
}

/// The work calendar consulted for work-hour quotas.
///
/// Dates not present in the calendar are standard work days of
/// `work_day_hours` hours. All range queries are inclusive on both ends
/// and tolerate a reversed range by swapping the endpoints.
///
/// # Example
///
/// ```
/// use staffing_reports::workcal::{Day, DayType, WorkCalendar};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let mut calendar = WorkCalendar::new(8);
/// calendar.mark(Day {
///     date: NaiveDate::from_ymd_opt(2025, 6, 7).unwrap(),
///     day_type: DayType { name: "Day off".to_string(), hours: 0 },
/// });
/// calendar.mark(Day {
///     date: NaiveDate::from_ymd_opt(2025, 6, 8).unwrap(),
///     day_type: DayType { name: "Day off".to_string(), hours: 0 },
/// });
///
/// let start = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
/// let end = NaiveDate::from_ymd_opt(2025, 6, 8).unwrap();
/// assert_eq!(calendar.work_days(start, end), 5);
/// assert_eq!(calendar.work_hours(start, end), Decimal::new(40, 0));
/// ```
#[derive(Debug, Clone)]
pub struct WorkCalendar {
    days: BTreeMap<NaiveDate, u32>,
    work_day_hours: u32,
}

impl WorkCalendar {
    /// Creates an empty calendar with the given standard work-day length.
    pub fn new(work_day_hours: u32) -> Self {
        Self {
            days: BTreeMap::new(),
            work_day_hours,
        }
    }

    /// Creates a calendar pre-populated with marked days.
    pub fn with_days(work_day_hours: u32, days: impl IntoIterator<Item = Day>) -> Self {
        let mut calendar = Self::new(work_day_hours);
        for day in days {
            calendar.mark(day);
        }
        calendar
    }

    /// Marks a date with a day type, replacing any previous mark.
    pub fn mark(&mut self, day: Day) {
        self.days.insert(day.date, day.day_type.hours);
    }

    /// The standard work-day length in hours.
    pub fn work_day_hours(&self) -> u32 {
        self.work_day_hours
    }

    fn ordered(start: NaiveDate, end: NaiveDate) -> (NaiveDate, NaiveDate) {
        if start > end { (end, start) } else { (start, end) }
    }

    /// Marked hours within the range: (rest-day count, uncommon-day count,
    /// uncommon-hour sum).
    fn marked_counts(&self, start: NaiveDate, end: NaiveDate) -> (i64, i64, i64) {
        let mut rest = 0i64;
        let mut uncommon = 0i64;
        let mut uncommon_hours = 0i64;
        for hours in self.days.range(start..=end).map(|(_, h)| *h) {
            if hours == 0 {
                rest += 1;
            } else {
                uncommon += 1;
                uncommon_hours += i64::from(hours);
            }
        }
        (rest, uncommon, uncommon_hours)
    }

    /// Number of work days in the inclusive range (total days minus rest
    /// days).
    pub fn work_days(&self, start: NaiveDate, end: NaiveDate) -> i64 {
        let (start, end) = Self::ordered(start, end);
        let days_total = (end - start).num_days() + 1;
        let (rest, _, _) = self.marked_counts(start, end);
        days_total - rest
    }

    /// Total work hours in the inclusive range.
    ///
    /// Standard work days count `work_day_hours` each; days marked with a
    /// non-zero day type count that type's hours instead; rest days count
    /// zero.
    pub fn work_hours(&self, start: NaiveDate, end: NaiveDate) -> Decimal {
        let (start, end) = Self::ordered(start, end);
        let work_days = self.work_days(start, end);
        let (_, uncommon, uncommon_hours) = self.marked_counts(start, end);
        let hours = (work_days - uncommon) * i64::from(self.work_day_hours) + uncommon_hours;
        Decimal::from(hours)
    }
}
