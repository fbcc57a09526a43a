use std::path::Path;

use anyhow::Result;
use meetgrid_core::meetgrid::Meetgrid;
use owo_colors::OwoColorize;

use crate::commands::show;

pub fn run(meetgrid: &Meetgrid, src: &Path) -> Result<()> {
    let store = meetgrid.store();

    // A rejected import leaves the existing store untouched; report it and
    // exit nonzero rather than crash.
    let count = match store.import(src) {
        Ok(count) => count,
        Err(err) => {
            anyhow::bail!(
                "Could not import {}: {}\nExisting schedules were left unchanged.",
                src.display(),
                err
            );
        }
    };

    let noun = if count == 1 { "schedule" } else { "schedules" };
    println!("{}", format!("  Imported {count} {noun}.").green());
    println!();

    // Refresh the view against the replaced store.
    show::run(meetgrid)
}
