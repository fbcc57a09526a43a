use anyhow::Result;
use meetgrid_core::common::common_slots;
use meetgrid_core::meetgrid::Meetgrid;

use crate::render;

pub fn run(meetgrid: &Meetgrid) -> Result<()> {
    let store = meetgrid.store();
    let catalog = meetgrid.catalog();

    // The store is the source of truth; always re-read, never cache.
    let records = store.load_all();
    let common = common_slots(&records, &catalog);

    println!("{}", render::summary(&records, &common));

    for (index, record) in records.iter().enumerate() {
        println!();
        println!("{}", render::participant_grid(index, record, &catalog));
    }

    Ok(())
}
