//! Inclusive day ranges and the calendar arithmetic the template is keyed on.

use std::fmt;

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::{ScheduleError, ScheduleResult};

/// Inclusive range of calendar days to expand the schedule over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Build a range, rejecting `start > end`. A single-day range is allowed.
    pub fn new(start: NaiveDate, end: NaiveDate) -> ScheduleResult<Self> {
        if start > end {
            return Err(ScheduleError::InvalidRange { start, end });
        }
        Ok(DateRange { start, end })
    }

    /// Parse two YYYY-MM-DD strings into a range.
    pub fn from_args(from: &str, to: &str) -> Result<Self, String> {
        let start = parse_date(from)?;
        let end = parse_date(to)?;
        DateRange::new(start, end).map_err(|e| e.to_string())
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Every day in the range, ascending.
    pub fn days(&self) -> Days {
        Days { next: Some(self.start), end: self.end }
    }
}

/// Parse YYYY-MM-DD
pub fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| format!("Invalid date format '{}'. Expected YYYY-MM-DD", s))
}

/// Day-by-day iterator over a [`DateRange`].
pub struct Days {
    next: Option<NaiveDate>,
    end: NaiveDate,
}

impl Iterator for Days {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.filter(|d| *d <= self.end)?;
        self.next = current.succ_opt();
        Some(current)
    }
}

/// 1-based week of the month: days 1-7 are week 1, ..., days 29-31 are week 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WeekOfMonth(u8);

impl WeekOfMonth {
    pub const MAX: u8 = 5;

    pub fn new(week: u8) -> Option<Self> {
        (1..=Self::MAX).contains(&week).then_some(WeekOfMonth(week))
    }

    pub fn of(date: NaiveDate) -> Self {
        // day() is 1..=31, so this is always 1..=5
        WeekOfMonth(((date.day() - 1) / 7 + 1) as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub(crate) fn index(self) -> usize {
        usize::from(self.0 - 1)
    }

    pub fn all() -> impl Iterator<Item = WeekOfMonth> {
        (1..=Self::MAX).map(WeekOfMonth)
    }
}

impl fmt::Display for WeekOfMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The five working days a template has columns for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ScheduleDay {
    Mon,
    Tues,
    Wed,
    Thur,
    Fri,
}

impl ScheduleDay {
    pub const ALL: [ScheduleDay; 5] = [
        ScheduleDay::Mon,
        ScheduleDay::Tues,
        ScheduleDay::Wed,
        ScheduleDay::Thur,
        ScheduleDay::Fri,
    ];

    /// Column name used in template files
    pub fn column(self) -> &'static str {
        match self {
            ScheduleDay::Mon => "Mon",
            ScheduleDay::Tues => "Tues",
            ScheduleDay::Wed => "Wed",
            ScheduleDay::Thur => "Thur",
            ScheduleDay::Fri => "Fri",
        }
    }

    /// `None` on weekends.
    pub fn of(date: NaiveDate) -> Option<Self> {
        match date.weekday() {
            Weekday::Mon => Some(ScheduleDay::Mon),
            Weekday::Tue => Some(ScheduleDay::Tues),
            Weekday::Wed => Some(ScheduleDay::Wed),
            Weekday::Thu => Some(ScheduleDay::Thur),
            Weekday::Fri => Some(ScheduleDay::Fri),
            Weekday::Sat | Weekday::Sun => None,
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ScheduleDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}
