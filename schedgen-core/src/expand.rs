//! Expansion of a weekly template over a concrete date range.

use chrono::{NaiveDate, NaiveDateTime};

use crate::date_range::{DateRange, ScheduleDay, WeekOfMonth};
use crate::session::{Session, SessionWindow};
use crate::template::{DaySlots, Template};

/// Local timestamp format used in UIDs and DTSTART/DTEND
pub const LOCAL_TIMESTAMP_FORMAT: &str = "%Y%m%dT%H%M%S";

/// Appended to every UID before sanitization
const UID_SUFFIX: &str = "@schedule";

/// One concrete calendar occurrence produced from the template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledEvent {
    pub uid: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub label: String,
}

impl ScheduledEvent {
    fn new(date: NaiveDate, window: SessionWindow, label: &str) -> Self {
        let (start, end) = window.on(date);
        ScheduledEvent {
            uid: event_uid(start, label),
            start,
            end,
            label: label.to_string(),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.start.date()
    }

    /// Whether this event covers both sessions of its day.
    pub fn is_full_day(&self) -> bool {
        let (start, end) = SessionWindow::FULL_DAY.on(self.date());
        self.start == start && self.end == end
    }
}

/// Build the stable identifier for an occurrence: start timestamp, label and
/// a fixed tag, keeping only ASCII/Unicode alphanumerics, `-` and `_`.
pub fn event_uid(start: NaiveDateTime, label: &str) -> String {
    let raw = format!("{}-{}{}", start.format(LOCAL_TIMESTAMP_FORMAT), label, UID_SUFFIX);
    sanitize_uid(&raw)
}

pub fn sanitize_uid(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_alphanumeric() || *c == '-' || *c == '_')
        .collect()
}

/// Events for a single day's slots: one merged event when both sessions share
/// a label, otherwise one per labelled session (morning first).
fn day_events(date: NaiveDate, slots: &DaySlots) -> Vec<ScheduledEvent> {
    match (slots.get(Session::Morning), slots.get(Session::Afternoon)) {
        (Some(morning), Some(afternoon)) if morning == afternoon => {
            vec![ScheduledEvent::new(date, SessionWindow::FULL_DAY, morning)]
        }
        _ => Session::ALL
            .into_iter()
            .filter_map(|session| {
                slots
                    .get(session)
                    .map(|label| ScheduledEvent::new(date, session.window(), label))
            })
            .collect(),
    }
}

/// Walk every day of `range` and emit the template's events in chronological order.
/// Weekends and days without labels produce nothing.
pub fn expand(template: &Template, range: &DateRange) -> Vec<ScheduledEvent> {
    let mut events = Vec::new();

    for date in range.days() {
        let Some(day) = ScheduleDay::of(date) else {
            continue;
        };

        let week = WeekOfMonth::of(date);
        let slots = template.get(week, day);
        if slots.is_empty() {
            continue;
        }

        let emitted = day_events(date, slots);
        tracing::trace!(%date, %week, %day, count = emitted.len(), "Expanded day");
        events.extend(emitted);
    }

    tracing::debug!(
        start = %range.start(),
        end = %range.end(),
        count = events.len(),
        "Expanded template over date range"
    );

    events
}
