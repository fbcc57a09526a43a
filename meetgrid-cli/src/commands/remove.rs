use anyhow::Result;
use meetgrid_core::meetgrid::Meetgrid;
use owo_colors::OwoColorize;

pub fn run(meetgrid: &Meetgrid, index: usize) -> Result<()> {
    let store = meetgrid.store();

    if store.remove_at(index)? {
        println!("{}", format!("  Removed entry [{index}]").green());
    } else {
        println!(
            "{}",
            format!("  No entry at [{index}]; nothing removed.").dimmed()
        );
    }

    Ok(())
}
