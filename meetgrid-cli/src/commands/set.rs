use anyhow::Result;
use dialoguer::{Input, Select};
use meetgrid_core::availability::Availability;
use meetgrid_core::catalog::Catalog;
use meetgrid_core::meetgrid::Meetgrid;
use meetgrid_core::store::UpsertOutcome;
use owo_colors::OwoColorize;

use crate::edit::EditGrid;
use crate::render::Render;

pub fn run(
    meetgrid: &Meetgrid,
    name: Option<String>,
    unavailable: Vec<String>,
    unknown: Vec<String>,
) -> Result<()> {
    let store = meetgrid.store();
    let catalog = meetgrid.catalog();

    let name = match name {
        Some(n) => n,
        None => Input::<String>::new()
            .with_prompt("  Name")
            .allow_empty(true)
            .interact_text()?,
    };
    let name = name.trim().to_string();

    // A blank name means nothing to record.
    if name.is_empty() {
        return Ok(());
    }

    // Pre-populate from a previous submission under the same name, so a
    // returning participant adjusts rather than starts over.
    let mut grid = match store.find_by_name(&name) {
        Some(record) => {
            println!(
                "{}",
                format!("  Editing existing schedule for {}", record.name).dimmed()
            );
            EditGrid::from_stored(&record.slots, &catalog)
        }
        None => EditGrid::new(&catalog),
    };

    if unavailable.is_empty() && unknown.is_empty() {
        edit_loop(&mut grid, &catalog)?;
    } else {
        for slot_id in &unavailable {
            grid.set(slot_id.trim(), Availability::Unavailable)?;
        }
        for slot_id in &unknown {
            grid.set(slot_id.trim(), Availability::Unknown)?;
        }
    }

    match store.upsert(&name, grid.into_states())? {
        UpsertOutcome::Added => println!("{}", format!("  Saved: {name}").green()),
        UpsertOutcome::Updated => println!("{}", format!("  Updated: {name}").green()),
        UpsertOutcome::Skipped => println!(
            "{}",
            "  Everything left available; nothing saved.".dimmed()
        ),
    }

    Ok(())
}

/// Interactive edit cycle: picking a slot advances it one state
/// (available, then unavailable, then unknown, then back). Nothing is
/// written until the user saves.
fn edit_loop(grid: &mut EditGrid, catalog: &Catalog) -> Result<()> {
    let slot_ids: Vec<String> = grid.slot_ids().to_vec();
    let mut cursor = 0;

    loop {
        let mut items: Vec<String> = slot_ids
            .iter()
            .map(|id| format!("{} {}", grid.state_of(id).render(), id))
            .collect();
        items.push("Save & finish".to_string());

        let selection = Select::new()
            .with_prompt(format!(
                "  Cycle a slot ({} slots), or save",
                catalog.len()
            ))
            .items(&items)
            .default(cursor)
            .interact()?;

        if selection == slot_ids.len() {
            return Ok(());
        }

        grid.cycle(&slot_ids[selection]);
        cursor = selection;
    }
}
