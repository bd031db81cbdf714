pub mod generate;
pub mod init;
pub mod preview;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use schedgen_core::{DateRange, Template, TemplateFile};

/// Template and date range shared by `generate` and `preview`.
#[derive(Args, Debug, Clone)]
pub struct ScheduleArgs {
    /// Schedule template (TOML, or JSON with a .json extension)
    #[arg(short, long, default_value = "schedule.toml")]
    pub template: PathBuf,

    /// First day to generate (YYYY-MM-DD)
    #[arg(long)]
    pub from: String,

    /// Last day to generate, inclusive (YYYY-MM-DD)
    #[arg(long)]
    pub to: String,
}

impl ScheduleArgs {
    /// Validate the range first, then load and normalize the template.
    pub fn load(&self) -> Result<(Template, DateRange)> {
        let range = DateRange::from_args(&self.from, &self.to).map_err(|e| anyhow::anyhow!(e))?;

        let file = TemplateFile::load(&self.template)
            .with_context(|| format!("Failed to read template at {}", self.template.display()))?;
        let template = file
            .to_template()
            .with_context(|| format!("Invalid template at {}", self.template.display()))?;

        Ok((template, range))
    }
}

/// Shared notice for a template with no labels
pub fn empty_schedule_notice(args: &ScheduleArgs) -> String {
    format!(
        "No schedule entries in {}.\n\
        Fill in at least one AM or PM cell to generate a calendar.",
        args.template.display()
    )
}
