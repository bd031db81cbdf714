//! ICS document generation.

use chrono::{DateTime, Utc};

use super::PRODID;
use super::text::TextEscaping;
use crate::expand::{LOCAL_TIMESTAMP_FORMAT, ScheduledEvent};

/// Settings for a single document render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IcsOptions {
    /// Written to every DTSTAMP line
    pub dtstamp: DateTime<Utc>,
    pub escaping: TextEscaping,
}

impl IcsOptions {
    /// Stamp events with the current time.
    pub fn now(escaping: TextEscaping) -> Self {
        IcsOptions {
            dtstamp: Utc::now(),
            escaping,
        }
    }
}

impl Default for IcsOptions {
    fn default() -> Self {
        IcsOptions::now(TextEscaping::default())
    }
}

/// Render events into a complete VCALENDAR document.
///
/// Lines are joined with a single `\n` and the document has no trailing newline.
pub fn generate_ics(events: &[ScheduledEvent], options: &IcsOptions) -> String {
    let dtstamp = options.dtstamp.format("%Y%m%dT%H%M%SZ").to_string();

    let mut lines = vec![
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        format!("PRODID:{PRODID}"),
        "CALSCALE:GREGORIAN".to_string(),
    ];

    for event in events {
        push_event(&mut lines, event, &dtstamp, options.escaping);
    }

    lines.push("END:VCALENDAR".to_string());
    lines.join("\n")
}

fn push_event(lines: &mut Vec<String>, event: &ScheduledEvent, dtstamp: &str, escaping: TextEscaping) {
    let label = escaping.apply(&event.label);

    lines.push("BEGIN:VEVENT".to_string());
    lines.push(format!("UID:{}", event.uid));
    lines.push(format!("DTSTAMP:{dtstamp}"));
    lines.push(format!("DTSTART:{}", event.start.format(LOCAL_TIMESTAMP_FORMAT)));
    lines.push(format!("DTEND:{}", event.end.format(LOCAL_TIMESTAMP_FORMAT)));
    lines.push(format!("SUMMARY:{label}"));
    lines.push(format!("LOCATION:{label}"));
    // Stops Apple Calendar from suggesting travel time to the location
    lines.push("X-APPLE-TRAVEL-ADVISORY-BEHAVIOR:DISABLED".to_string());
    lines.push("END:VEVENT".to_string());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date_range::{DateRange, ScheduleDay, WeekOfMonth};
    use crate::expand::expand;
    use crate::session::Session;
    use crate::template::Template;
    use chrono::{NaiveDate, TimeZone};
    use icalendar::parser::{read_calendar, unfold};

    fn fixed_options(escaping: TextEscaping) -> IcsOptions {
        IcsOptions {
            dtstamp: Utc.with_ymd_and_hms(2025, 9, 15, 10, 30, 0).unwrap(),
            escaping,
        }
    }

    fn lab_a_wednesday() -> Template {
        let mut template = Template::new();
        let week = WeekOfMonth::new(1).unwrap();
        template.set(week, ScheduleDay::Wed, Session::Morning, "Lab A");
        template.set(week, ScheduleDay::Wed, Session::Afternoon, "Lab A");
        template
    }

    fn oct_first() -> DateRange {
        let day = NaiveDate::from_ymd_opt(2025, 10, 1).unwrap();
        DateRange::new(day, day).unwrap()
    }

    #[test]
    fn test_generate_ics_exact_document() {
        let events = expand(&lab_a_wednesday(), &oct_first());
        let ics = generate_ics(&events, &fixed_options(TextEscaping::Rfc5545));

        let expected = [
            "BEGIN:VCALENDAR",
            "VERSION:2.0",
            "PRODID:-//Schedule Generator//EN",
            "CALSCALE:GREGORIAN",
            "BEGIN:VEVENT",
            "UID:20251001T080000-LabAschedule",
            "DTSTAMP:20250915T103000Z",
            "DTSTART:20251001T080000",
            "DTEND:20251001T170000",
            "SUMMARY:Lab A",
            "LOCATION:Lab A",
            "X-APPLE-TRAVEL-ADVISORY-BEHAVIOR:DISABLED",
            "END:VEVENT",
            "END:VCALENDAR",
        ]
        .join("\n");

        assert_eq!(ics, expected);
    }

    #[test]
    fn test_generate_ics_no_events_is_envelope_only() {
        let ics = generate_ics(&[], &fixed_options(TextEscaping::Rfc5545));
        assert_eq!(
            ics,
            "BEGIN:VCALENDAR\nVERSION:2.0\nPRODID:-//Schedule Generator//EN\nCALSCALE:GREGORIAN\nEND:VCALENDAR"
        );
    }

    #[test]
    fn test_generate_ics_uses_bare_newlines_without_trailing_one() {
        let events = expand(&lab_a_wednesday(), &oct_first());
        let ics = generate_ics(&events, &fixed_options(TextEscaping::Rfc5545));

        assert!(!ics.contains('\r'), "Lines should be joined with \\n only");
        assert!(ics.ends_with("END:VCALENDAR"));
    }

    #[test]
    fn test_generate_ics_escapes_labels_by_default() {
        let mut template = Template::new();
        let week = WeekOfMonth::new(1).unwrap();
        template.set(week, ScheduleDay::Wed, Session::Morning, "North, Room 1; East");

        let events = expand(&template, &oct_first());
        let ics = generate_ics(&events, &fixed_options(TextEscaping::Rfc5545));

        assert!(
            ics.contains("SUMMARY:North\\, Room 1\\; East"),
            "SUMMARY should be escaped. ICS:\n{}",
            ics
        );
        assert!(ics.contains("LOCATION:North\\, Room 1\\; East"));
        // UID is sanitized, never escaped
        assert!(ics.contains("UID:20251001T080000-NorthRoom1Eastschedule"));
    }

    #[test]
    fn test_generate_ics_legacy_writes_labels_verbatim() {
        let mut template = Template::new();
        let week = WeekOfMonth::new(1).unwrap();
        template.set(week, ScheduleDay::Wed, Session::Morning, "North, Room 1; East");

        let events = expand(&template, &oct_first());
        let ics = generate_ics(&events, &fixed_options(TextEscaping::Legacy));

        assert!(ics.contains("SUMMARY:North, Room 1; East"), "ICS:\n{}", ics);
        assert!(ics.contains("LOCATION:North, Room 1; East"));
    }

    #[test]
    fn test_generate_ics_runs_differ_only_in_dtstamp() {
        let template = lab_a_wednesday();
        let range = oct_first();

        let first = generate_ics(&expand(&template, &range), &fixed_options(TextEscaping::Rfc5545));
        let later = IcsOptions {
            dtstamp: Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap(),
            escaping: TextEscaping::Rfc5545,
        };
        let second = generate_ics(&expand(&template, &range), &later);

        assert_ne!(first, second);

        let strip = |ics: &str| -> Vec<String> {
            ics.lines()
                .filter(|l| !l.starts_with("DTSTAMP:"))
                .map(str::to_string)
                .collect()
        };
        assert_eq!(strip(&first), strip(&second));
    }

    #[test]
    fn test_generate_ics_parses_with_icalendar() {
        let mut template = lab_a_wednesday();
        let week = WeekOfMonth::new(1).unwrap();
        template.set(week, ScheduleDay::Thur, Session::Morning, "Lab B");
        template.set(week, ScheduleDay::Thur, Session::Afternoon, "Ward 3");

        let start = NaiveDate::from_ymd_opt(2025, 10, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 10, 2).unwrap();
        let events = expand(&template, &DateRange::new(start, end).unwrap());
        let ics = generate_ics(&events, &fixed_options(TextEscaping::Rfc5545));

        let unfolded = unfold(&ics);
        let calendar = read_calendar(&unfolded).expect("generated ICS should parse");

        let vevents: Vec<_> = calendar
            .components
            .iter()
            .filter(|c| c.name == "VEVENT")
            .collect();
        assert_eq!(vevents.len(), 3, "Expected 3 VEVENTs. ICS:\n{}", ics);

        let summaries: Vec<String> = vevents
            .iter()
            .map(|e| e.find_prop("SUMMARY").unwrap().val.to_string())
            .collect();
        assert_eq!(summaries, vec!["Lab A", "Lab B", "Ward 3"]);

        let uid = vevents[2].find_prop("UID").unwrap().val.to_string();
        assert_eq!(uid, "20251002T130000-Ward3schedule");
    }
}
