//! Terminal rendering for expanded schedules.
//!
//! Extension trait that adds colored output to schedgen-core types using owo_colors.

use owo_colors::OwoColorize;
use schedgen_core::ScheduledEvent;

pub trait Render {
    fn render(&self) -> String;
}

impl Render for ScheduledEvent {
    fn render(&self) -> String {
        let day = self.date().format("%a %Y-%m-%d").to_string();
        let time = format!("{}-{}", self.start.format("%H:%M"), self.end.format("%H:%M"));
        let time = if self.is_full_day() {
            time.cyan().to_string()
        } else {
            time.yellow().to_string()
        };

        format!("{}  {}  {}", day.dimmed(), time, self.label.bold())
    }
}

/// Render a whole event list with a trailing count line.
pub fn render_events(events: &[ScheduledEvent]) -> Vec<String> {
    let mut lines: Vec<String> = events.iter().map(Render::render).collect();

    let full_days = events.iter().filter(|e| e.is_full_day()).count();
    lines.push(String::new());
    lines.push(
        format!(
            "{} events ({} full-day, {} half-day)",
            events.len(),
            full_days,
            events.len() - full_days
        )
        .dimmed()
        .to_string(),
    );

    lines
}
