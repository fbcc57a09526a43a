//! Terminal rendering for meetgrid types.
//!
//! Extension trait plus the table/summary formatters, using owo_colors for
//! styling. All output is re-derived from the store on every call; nothing
//! here caches.

use meetgrid_core::availability::Availability;
use meetgrid_core::catalog::{Catalog, Slot};
use meetgrid_core::record::ParticipantRecord;
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Availability {
    fn render(&self) -> String {
        match self {
            Availability::Available => "✅",
            Availability::Unavailable => "❌",
            Availability::Unknown => "❓",
        }
        .to_string()
    }
}

impl Render for Slot {
    fn render(&self) -> String {
        self.id()
    }
}

/// The summary line above the table.
///
/// Three distinct cases: nobody has submitted yet, a non-empty common set,
/// and a computed-empty intersection.
pub fn summary(records: &[ParticipantRecord], common: &[&Slot]) -> String {
    if records.is_empty() {
        return "No schedules yet. Add yours with `meetgrid set`."
            .dimmed()
            .to_string();
    }

    if common.is_empty() {
        return "No time works for everyone.".yellow().to_string();
    }

    let ids: Vec<String> = common.iter().map(|s| s.render()).collect();
    format!(
        "{} {}",
        "Everyone is available at:".green(),
        ids.join(", ")
    )
}

/// One participant's weekly grid, headed by the ordinal used by `remove`.
pub fn participant_grid(index: usize, record: &ParticipantRecord, catalog: &Catalog) -> String {
    let mut lines = Vec::new();

    lines.push(format!(
        "{} {}",
        format!("[{index}]").dimmed(),
        record.name.bold()
    ));

    let header: String = catalog
        .hours()
        .iter()
        .map(|hour| format!("{hour:>5}"))
        .collect();
    lines.push(format!("     {}", header.dimmed()));

    let per_day = catalog.hours().len().max(1);
    for day_slots in catalog.slots().chunks(per_day) {
        let day = &day_slots[0].day;
        let row: String = day_slots
            .iter()
            .map(|slot| format!("{:>4}", record.slots.state_of(&slot.id()).render()))
            .collect();
        lines.push(format!("  {day:<3}{row}"));
    }

    lines.join("\n")
}
