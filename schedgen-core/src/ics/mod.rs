//! iCalendar (RFC 5545) output for expanded schedules.
//!
//! The document layout is fixed: every event is a discrete VEVENT with floating
//! local DTSTART/DTEND, lines are joined with `\n` and never folded.

mod generate;
mod text;

pub use generate::{IcsOptions, generate_ics};
pub use text::{TextEscaping, escape_text};

/// Suggested file name for the generated document
pub const DEFAULT_FILE_NAME: &str = "schedule.ics";

/// MIME type of the generated document
pub const MIME_TYPE: &str = "text/calendar";

/// Product identifier written to the PRODID line
pub const PRODID: &str = "-//Schedule Generator//EN";
