//! The local edit surface for one participant's weekly grid.
//!
//! State here is purely local until submit: cycling a slot never touches
//! the store. The grid is built over the current catalog, so submitting
//! always writes a full, explicit mapping — this is also where legacy
//! membership-style records get rewritten into the canonical map form.

use std::collections::BTreeMap;

use anyhow::Result;
use meetgrid_core::availability::Availability;
use meetgrid_core::catalog::Catalog;
use meetgrid_core::record::SlotStates;

pub struct EditGrid {
    order: Vec<String>,
    states: BTreeMap<String, Availability>,
}

impl EditGrid {
    /// An all-available grid over the catalog (the reset state).
    pub fn new(catalog: &Catalog) -> Self {
        let order: Vec<String> = catalog.slots().iter().map(|s| s.id()).collect();
        let states = order
            .iter()
            .map(|id| (id.clone(), Availability::default()))
            .collect();

        EditGrid { order, states }
    }

    /// A grid pre-populated from a stored record, default-filled for any
    /// catalog slot the record does not map.
    pub fn from_stored(slots: &SlotStates, catalog: &Catalog) -> Self {
        let order: Vec<String> = catalog.slots().iter().map(|s| s.id()).collect();
        let states = order
            .iter()
            .map(|id| (id.clone(), slots.state_of(id)))
            .collect();

        EditGrid { order, states }
    }

    /// Slot ids in catalog order.
    pub fn slot_ids(&self) -> &[String] {
        &self.order
    }

    pub fn state_of(&self, slot_id: &str) -> Availability {
        self.states.get(slot_id).copied().unwrap_or_default()
    }

    /// Advance one slot to the next state in the cycle.
    pub fn cycle(&mut self, slot_id: &str) {
        if let Some(state) = self.states.get_mut(slot_id) {
            *state = state.cycle();
        }
    }

    /// Set one slot directly. Errors on a slot id outside the grid.
    pub fn set(&mut self, slot_id: &str, state: Availability) -> Result<()> {
        match self.states.get_mut(slot_id) {
            Some(slot) => {
                *slot = state;
                Ok(())
            }
            None => anyhow::bail!(
                "Unknown slot \"{}\". Slots look like \"Mon 6pm\"; see `meetgrid show`.",
                slot_id
            ),
        }
    }

    /// The full explicit mapping to submit.
    pub fn into_states(self) -> BTreeMap<String, Availability> {
        self.states
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::generate(&["Mon"], &["6pm", "7pm"])
    }

    #[test]
    fn new_grid_is_all_available() {
        let grid = EditGrid::new(&catalog());
        assert!(
            grid.into_states()
                .values()
                .all(|s| *s == Availability::Available)
        );
    }

    #[test]
    fn prefills_from_a_stored_map_with_default_fill() {
        let stored = SlotStates::States(
            [("Mon 6pm".to_string(), Availability::Unavailable)]
                .into_iter()
                .collect(),
        );

        let grid = EditGrid::from_stored(&stored, &catalog());
        assert_eq!(grid.state_of("Mon 6pm"), Availability::Unavailable);
        assert_eq!(grid.state_of("Mon 7pm"), Availability::Available);
    }

    #[test]
    fn prefilling_a_legacy_record_yields_a_full_canonical_map() {
        let stored = SlotStates::Membership(vec!["Mon 7pm".to_string()]);

        let grid = EditGrid::from_stored(&stored, &catalog());
        let states = grid.into_states();

        assert_eq!(states.len(), 2);
        assert_eq!(states["Mon 6pm"], Availability::Unavailable);
        assert_eq!(states["Mon 7pm"], Availability::Available);
    }

    #[test]
    fn cycle_advances_one_slot_only() {
        let mut grid = EditGrid::new(&catalog());

        grid.cycle("Mon 6pm");
        assert_eq!(grid.state_of("Mon 6pm"), Availability::Unavailable);
        assert_eq!(grid.state_of("Mon 7pm"), Availability::Available);

        grid.cycle("Mon 6pm");
        grid.cycle("Mon 6pm");
        assert_eq!(grid.state_of("Mon 6pm"), Availability::Available);
    }

    #[test]
    fn set_rejects_unknown_slot_ids() {
        let mut grid = EditGrid::new(&catalog());

        assert!(grid.set("Mon 6pm", Availability::Unknown).is_ok());
        assert!(grid.set("Mon 2pm", Availability::Unknown).is_err());
    }
}
