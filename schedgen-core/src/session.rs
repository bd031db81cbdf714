//! Half-day sessions and their wall-clock windows.

use std::fmt;
use std::str::FromStr;

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

/// A half-day block of the schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Session {
    Morning,
    Afternoon,
}

impl Session {
    pub const ALL: [Session; 2] = [Session::Morning, Session::Afternoon];

    /// Table marker used in template files ("AM" / "PM")
    pub fn marker(self) -> &'static str {
        match self {
            Session::Morning => "AM",
            Session::Afternoon => "PM",
        }
    }

    pub fn window(self) -> SessionWindow {
        match self {
            Session::Morning => SessionWindow::MORNING,
            Session::Afternoon => SessionWindow::AFTERNOON,
        }
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.marker())
    }
}

impl FromStr for Session {
    type Err = String;

    /// Parse "AM"/"PM", ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "AM" => Ok(Session::Morning),
            "PM" => Ok(Session::Afternoon),
            other => Err(format!("unknown session marker '{other}', expected AM or PM")),
        }
    }
}

/// Start/end hour-of-day for a block of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionWindow {
    pub start_hour: u32,
    pub end_hour: u32,
}

impl SessionWindow {
    pub const MORNING: SessionWindow = SessionWindow { start_hour: 8, end_hour: 12 };
    pub const AFTERNOON: SessionWindow = SessionWindow { start_hour: 13, end_hour: 17 };
    /// Used when morning and afternoon carry the same label.
    pub const FULL_DAY: SessionWindow = SessionWindow { start_hour: 8, end_hour: 17 };

    /// Anchor this window on a calendar day.
    pub fn on(self, date: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
        let midnight = date.and_time(NaiveTime::MIN);
        (
            midnight + Duration::hours(self.start_hour.into()),
            midnight + Duration::hours(self.end_hour.into()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_markers_loosely() {
        assert_eq!(" am ".parse::<Session>(), Ok(Session::Morning));
        assert_eq!("Pm".parse::<Session>(), Ok(Session::Afternoon));
        assert_eq!("PM\n".parse::<Session>(), Ok(Session::Afternoon));
    }

    #[test]
    fn rejects_unknown_marker() {
        let err = "noon".parse::<Session>().unwrap_err();
        assert!(err.contains("NOON"), "error should echo the marker: {err}");
        assert!("".parse::<Session>().is_err());
    }

    #[test]
    fn windows_match_office_hours() {
        let date = NaiveDate::from_ymd_opt(2025, 10, 1).unwrap();

        let (start, end) = Session::Morning.window().on(date);
        assert_eq!(start.format("%H:%M").to_string(), "08:00");
        assert_eq!(end.format("%H:%M").to_string(), "12:00");

        let (start, end) = Session::Afternoon.window().on(date);
        assert_eq!(start.format("%H:%M").to_string(), "13:00");
        assert_eq!(end.format("%H:%M").to_string(), "17:00");

        let (start, end) = SessionWindow::FULL_DAY.on(date);
        assert_eq!(start.format("%H:%M").to_string(), "08:00");
        assert_eq!(end.format("%H:%M").to_string(), "17:00");
    }
}
