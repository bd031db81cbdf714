//! Core library for schedgen.
//!
//! Turns a weekly schedule table (weeks 1-5 of the month x Mon-Fri, split into
//! AM/PM sessions) into discrete calendar events over a date range, and renders
//! them as an iCalendar document:
//! - `template` normalizes the input table into a typed `Template`
//! - `expand` walks a `DateRange` and produces `ScheduledEvent`s
//! - `ics` serializes events into the wire format

pub mod config;
pub mod date_range;
pub mod error;
pub mod expand;
pub mod ics;
pub mod schedule;
pub mod session;
pub mod template;

pub use date_range::{DateRange, ScheduleDay, WeekOfMonth};
pub use error::{ScheduleError, ScheduleResult};
pub use expand::{ScheduledEvent, expand};
pub use schedule::generate_schedule;
pub use session::{Session, SessionWindow};
pub use template::{DaySlots, Template, TemplateFile, TemplateRow, WeekCell};
