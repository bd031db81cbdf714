//! Error types for schedule generation.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur while building or expanding a schedule.
#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Start date must be before end date (got {start} > {end})")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("Schedule is empty: no weekday has a morning or afternoon label")]
    EmptySchedule,

    #[error("Malformed template row {row}: {message}")]
    MalformedInput { row: usize, message: String },

    #[error("Template parse error: {0}")]
    TemplateParse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for schedule operations.
pub type ScheduleResult<T> = Result<T, ScheduleError>;
