use anyhow::Result;
use schedgen_core::expand;

use super::{ScheduleArgs, empty_schedule_notice};
use crate::render::render_events;

pub fn run(args: &ScheduleArgs) -> Result<()> {
    let (template, range) = args.load()?;

    if !template.has_any_label() {
        println!("{}", empty_schedule_notice(args));
        return Ok(());
    }

    let events = expand(&template, &range);
    for line in render_events(&events) {
        println!("{}", line);
    }

    Ok(())
}
