use std::path::Path;

use anyhow::{Context, Result};
use schedgen_core::TemplateFile;

pub fn run(path: &Path, force: bool) -> Result<()> {
    write_blank_template(path, force)?;

    println!("Created {}", path.display());
    println!("Fill in the Mon-Fri cells, then run:");
    println!();
    println!(
        "  schedgen generate --template {} --from 2025-10-01 --to 2025-12-31",
        path.display()
    );

    Ok(())
}

fn write_blank_template(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists.\n\
            Use --force to overwrite it",
            path.display()
        );
    }

    TemplateFile::blank()
        .save(path)
        .with_context(|| format!("Failed to write template to {}", path.display()))
}
