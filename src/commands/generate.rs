use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use schedgen_core::config::ScheduleConfig;
use schedgen_core::ics::{IcsOptions, TextEscaping};
use schedgen_core::{DateRange, ScheduleError, Template, generate_schedule};

use super::{ScheduleArgs, empty_schedule_notice};

/// Where the generated calendar goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    File(PathBuf),
    Stdout,
}

/// Command-line flags merged with the user config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    pub destination: Destination,
    pub escaping: TextEscaping,
}

impl GenerateOptions {
    /// Flags win over config; config wins over built-in defaults.
    pub fn resolve(
        output: Option<PathBuf>,
        stdout: bool,
        legacy_text: bool,
        config: &ScheduleConfig,
    ) -> Self {
        let destination = if stdout {
            Destination::Stdout
        } else {
            Destination::File(output.unwrap_or_else(|| config.output.clone()))
        };

        let escaping = if legacy_text {
            TextEscaping::Legacy
        } else {
            config.escaping()
        };

        GenerateOptions { destination, escaping }
    }
}

pub fn run(
    args: &ScheduleArgs,
    output: Option<PathBuf>,
    stdout: bool,
    legacy_text: bool,
) -> Result<()> {
    let (template, range) = args.load()?;
    let config = ScheduleConfig::load()?;
    let options = GenerateOptions::resolve(output, stdout, legacy_text, &config);

    emit(
        args,
        &template,
        &range,
        &options,
        &mut std::io::stdout().lock(),
        &mut std::io::stderr().lock(),
    )
}

/// Generate and deliver the calendar. With `Destination::Stdout` the document
/// is the only thing written to `out`; notices go to `status` instead.
fn emit(
    args: &ScheduleArgs,
    template: &Template,
    range: &DateRange,
    options: &GenerateOptions,
    out: &mut impl Write,
    status: &mut impl Write,
) -> Result<()> {
    let Some(ics) = render_calendar(template, range, options.escaping)? else {
        let notice = empty_schedule_notice(args);
        match options.destination {
            Destination::Stdout => writeln!(status, "{notice}")?,
            Destination::File(_) => writeln!(out, "{notice}")?,
        }
        return Ok(());
    };

    let path = match &options.destination {
        Destination::Stdout => {
            out.write_all(ics.as_bytes())?;
            out.flush()?;
            return Ok(());
        }
        Destination::File(path) => path,
    };

    tracing::debug!(path = %path.display(), "Writing calendar");
    write_calendar(path, &ics)?;

    let count = ics.matches("BEGIN:VEVENT").count();
    writeln!(
        out,
        "Wrote {} events ({} to {}) to {}",
        count,
        range.start(),
        range.end(),
        path.display()
    )?;

    Ok(())
}

/// `None` when the template has nothing to generate.
fn render_calendar(
    template: &Template,
    range: &DateRange,
    escaping: TextEscaping,
) -> Result<Option<String>> {
    match generate_schedule(template, range, &IcsOptions::now(escaping)) {
        Ok(ics) => Ok(Some(ics)),
        Err(ScheduleError::EmptySchedule) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

fn write_calendar(path: &Path, ics: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    std::fs::write(path, ics)
        .with_context(|| format!("Failed to write calendar to {}", path.display()))
}
