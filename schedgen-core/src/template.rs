//! Weekly schedule template: tabular rows normalized into a typed lookup.
//!
//! The input table has one row per (week-of-month, session) pair and one
//! column per weekday. Rows are processed in order; a later row overwrites
//! the label an earlier row set for the same (week, weekday, session).

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::date_range::{ScheduleDay, WeekOfMonth};
use crate::error::{ScheduleError, ScheduleResult};
use crate::session::Session;

/// The week column of a template row, as written by the user.
///
/// Any value is accepted here so that a bad week is reported against its row
/// rather than as a parse failure of the whole file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WeekCell {
    Number(i64),
    /// Spreadsheet exports write whole numbers as `1.0`
    Float(f64),
    Text(String),
    Other(serde_json::Value),
}

impl Default for WeekCell {
    fn default() -> Self {
        WeekCell::Other(serde_json::Value::Null)
    }
}

impl From<u8> for WeekCell {
    fn from(week: u8) -> Self {
        WeekCell::Number(week.into())
    }
}

/// One row of the input table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateRow {
    #[serde(rename = "Week", default)]
    pub week: WeekCell,
    #[serde(rename = "AM/PM")]
    pub session: String,
    #[serde(rename = "Mon", default)]
    pub mon: String,
    #[serde(rename = "Tues", default)]
    pub tues: String,
    #[serde(rename = "Wed", default)]
    pub wed: String,
    #[serde(rename = "Thur", default)]
    pub thur: String,
    #[serde(rename = "Fri", default)]
    pub fri: String,
}

impl TemplateRow {
    /// A row with every weekday cell empty.
    pub fn blank(week: WeekOfMonth, session: Session) -> Self {
        TemplateRow {
            week: week.get().into(),
            session: session.marker().to_string(),
            mon: String::new(),
            tues: String::new(),
            wed: String::new(),
            thur: String::new(),
            fri: String::new(),
        }
    }

    /// The default editing grid: weeks 1-5, each with an AM and a PM row.
    pub fn blank_grid() -> Vec<TemplateRow> {
        WeekOfMonth::all()
            .flat_map(|week| Session::ALL.map(|session| TemplateRow::blank(week, session)))
            .collect()
    }

    pub fn cell(&self, day: ScheduleDay) -> &str {
        match day {
            ScheduleDay::Mon => &self.mon,
            ScheduleDay::Tues => &self.tues,
            ScheduleDay::Wed => &self.wed,
            ScheduleDay::Thur => &self.thur,
            ScheduleDay::Fri => &self.fri,
        }
    }

    pub fn cell_mut(&mut self, day: ScheduleDay) -> &mut String {
        match day {
            ScheduleDay::Mon => &mut self.mon,
            ScheduleDay::Tues => &mut self.tues,
            ScheduleDay::Wed => &mut self.wed,
            ScheduleDay::Thur => &mut self.thur,
            ScheduleDay::Fri => &mut self.fri,
        }
    }

    fn parse_week(&self, row: usize) -> ScheduleResult<WeekOfMonth> {
        let malformed = |message: String| ScheduleError::MalformedInput { row, message };

        let number = match &self.week {
            WeekCell::Number(n) => *n,
            // NaN and infinities have a non-zero fract() too
            WeekCell::Float(f) if f.fract() == 0.0 => *f as i64,
            WeekCell::Float(f) => return Err(malformed(format!("week {f} is not a whole number"))),
            WeekCell::Text(s) => s
                .trim()
                .parse::<i64>()
                .map_err(|_| malformed(format!("week '{s}' is not an integer")))?,
            WeekCell::Other(serde_json::Value::Null) => {
                return Err(malformed("week is missing".to_string()));
            }
            WeekCell::Other(value) => {
                return Err(malformed(format!("week {value} is not a number")));
            }
        };

        u8::try_from(number)
            .ok()
            .and_then(WeekOfMonth::new)
            .ok_or_else(|| malformed(format!("week {number} is outside 1-{}", WeekOfMonth::MAX)))
    }

    fn parse_session(&self, row: usize) -> ScheduleResult<Session> {
        self.session
            .parse()
            .map_err(|message| ScheduleError::MalformedInput { row, message })
    }
}

/// Morning and afternoon labels for one weekday of one week.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DaySlots {
    pub morning: Option<String>,
    pub afternoon: Option<String>,
}

impl DaySlots {
    pub fn get(&self, session: Session) -> Option<&str> {
        match session {
            Session::Morning => self.morning.as_deref(),
            Session::Afternoon => self.afternoon.as_deref(),
        }
    }

    fn slot_mut(&mut self, session: Session) -> &mut Option<String> {
        match session {
            Session::Morning => &mut self.morning,
            Session::Afternoon => &mut self.afternoon,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.morning.is_none() && self.afternoon.is_none()
    }
}

/// Normalized schedule: week-of-month x weekday -> session labels.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Template {
    days: [[DaySlots; 5]; 5],
}

impl Template {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize table rows. Empty or whitespace-only cells leave the slot
    /// untouched; for repeated (week, weekday, session) triples the last row wins.
    pub fn from_rows(rows: &[TemplateRow]) -> ScheduleResult<Self> {
        let mut template = Template::new();

        for (idx, row) in rows.iter().enumerate() {
            let row_number = idx + 1;
            let week = row.parse_week(row_number)?;
            let session = row.parse_session(row_number)?;

            for day in ScheduleDay::ALL {
                let value = row.cell(day).trim();
                if value.is_empty() {
                    continue;
                }

                let slot = template.slots_mut(week, day).slot_mut(session);
                if let Some(previous) = slot.as_deref()
                    && previous != value
                {
                    tracing::debug!(
                        row = row_number,
                        %week,
                        %day,
                        %session,
                        previous,
                        value,
                        "Overwriting earlier template label"
                    );
                }
                *slot = Some(value.to_string());
            }
        }

        Ok(template)
    }

    pub fn get(&self, week: WeekOfMonth, day: ScheduleDay) -> &DaySlots {
        &self.days[week.index()][day.index()]
    }

    fn slots_mut(&mut self, week: WeekOfMonth, day: ScheduleDay) -> &mut DaySlots {
        &mut self.days[week.index()][day.index()]
    }

    /// Set a single label. An empty or whitespace-only label clears the slot.
    pub fn set(&mut self, week: WeekOfMonth, day: ScheduleDay, session: Session, label: &str) {
        let label = label.trim();
        *self.slots_mut(week, day).slot_mut(session) =
            (!label.is_empty()).then(|| label.to_string());
    }

    /// Whether at least one slot carries a label.
    pub fn has_any_label(&self) -> bool {
        self.days.iter().flatten().any(|slots| !slots.is_empty())
    }

    /// Turn the template back into a 10-row table (weeks 1-5, AM then PM).
    pub fn to_rows(&self) -> Vec<TemplateRow> {
        WeekOfMonth::all()
            .flat_map(|week| {
                Session::ALL.map(move |session| {
                    let mut row = TemplateRow::blank(week, session);
                    for day in ScheduleDay::ALL {
                        if let Some(label) = self.get(week, day).get(session) {
                            *row.cell_mut(day) = label.to_string();
                        }
                    }
                    row
                })
            })
            .collect()
    }
}

/// On-disk template table, stored as TOML (`[[row]]` tables) or JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateFile {
    #[serde(rename = "row", default)]
    pub rows: Vec<TemplateRow>,
}

impl TemplateFile {
    pub fn blank() -> Self {
        TemplateFile { rows: TemplateRow::blank_grid() }
    }

    /// Load a template table; `.json` files are read as JSON, anything else as TOML.
    pub fn load(path: &Path) -> ScheduleResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        }
    }

    pub fn from_toml_str(content: &str) -> ScheduleResult<Self> {
        toml::from_str(content).map_err(|e| ScheduleError::TemplateParse(e.to_string()))
    }

    pub fn from_json_str(content: &str) -> ScheduleResult<Self> {
        serde_json::from_str(content).map_err(|e| ScheduleError::TemplateParse(e.to_string()))
    }

    pub fn to_toml_string(&self) -> ScheduleResult<String> {
        toml::to_string_pretty(self).map_err(|e| ScheduleError::TemplateParse(e.to_string()))
    }

    pub fn save(&self, path: &Path) -> ScheduleResult<()> {
        std::fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }

    pub fn to_template(&self) -> ScheduleResult<Template> {
        Template::from_rows(&self.rows)
    }
}
