//! One-shot generation: template + range -> iCalendar document.

use crate::date_range::DateRange;
use crate::error::{ScheduleError, ScheduleResult};
use crate::expand::expand;
use crate::ics::{IcsOptions, generate_ics};
use crate::template::Template;

/// Expand `template` over `range` and serialize the result.
///
/// Fails with [`ScheduleError::EmptySchedule`] when no slot carries a label,
/// so callers can skip writing a file. A range that contains no matching
/// weekday still produces a valid, event-less document.
pub fn generate_schedule(
    template: &Template,
    range: &DateRange,
    options: &IcsOptions,
) -> ScheduleResult<String> {
    if !template.has_any_label() {
        return Err(ScheduleError::EmptySchedule);
    }

    let events = expand(template, range);
    tracing::info!(events = events.len(), "Generated schedule");

    Ok(generate_ics(&events, options))
}
