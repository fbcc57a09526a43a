use std::path::PathBuf;

use anyhow::{Context, Result};
use meetgrid_core::meetgrid::{Meetgrid, STORE_FILE};
use owo_colors::OwoColorize;

pub fn run(meetgrid: &Meetgrid, dest: Option<PathBuf>) -> Result<()> {
    let dest = dest.unwrap_or_else(|| PathBuf::from(STORE_FILE));

    meetgrid
        .store()
        .export(&dest)
        .with_context(|| format!("Failed to export to {}", dest.display()))?;

    println!("{}", format!("  Exported to {}", dest.display()).green());

    Ok(())
}
