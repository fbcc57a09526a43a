//! Common-availability computation.

use crate::availability::Availability;
use crate::catalog::{Catalog, Slot};
use crate::record::ParticipantRecord;

/// The subset of catalog slots where every participant is `Available`.
///
/// Result order follows the catalog, not insertion order. An empty record
/// sequence yields an empty result; callers that need to tell "nobody has
/// submitted" apart from "no slot works for everyone" check the records
/// themselves.
pub fn common_slots<'a>(records: &[ParticipantRecord], catalog: &'a Catalog) -> Vec<&'a Slot> {
    if records.is_empty() {
        return Vec::new();
    }

    catalog
        .slots()
        .iter()
        .filter(|slot| {
            let id = slot.id();
            records
                .iter()
                .all(|record| record.slots.state_of(&id) == Availability::Available)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::SlotStates;
    use std::collections::BTreeMap;

    fn record(name: &str, pairs: &[(&str, Availability)]) -> ParticipantRecord {
        let states: BTreeMap<String, Availability> =
            pairs.iter().map(|(id, s)| (id.to_string(), *s)).collect();
        ParticipantRecord::new(name, states)
    }

    #[test]
    fn zero_records_yield_empty_result() {
        let catalog = Catalog::generate(&["Mon"], &["6pm", "7pm"]);
        assert!(common_slots(&[], &catalog).is_empty());
    }

    #[test]
    fn all_default_records_yield_full_catalog() {
        let catalog = Catalog::generate(&["Mon", "Tue"], &["6pm", "7pm"]);
        let records = vec![record("Alice", &[]), record("Bob", &[])];

        let common = common_slots(&records, &catalog);
        assert_eq!(common.len(), catalog.len());
    }

    #[test]
    fn slot_is_common_only_when_everyone_is_available() {
        // Bo: Mon 6pm unavailable, Mon 7pm available. Cy: both available.
        let catalog = Catalog::generate(&["Mon"], &["6pm", "7pm"]);
        let records = vec![
            record("Bo", &[("Mon 6pm", Availability::Unavailable)]),
            record("Cy", &[]),
        ];

        let common = common_slots(&records, &catalog);
        let ids: Vec<String> = common.iter().map(|s| s.id()).collect();
        assert_eq!(ids, ["Mon 7pm"]);
    }

    #[test]
    fn unknown_state_blocks_a_slot() {
        let catalog = Catalog::generate(&["Mon"], &["6pm"]);
        let records = vec![record("Bo", &[("Mon 6pm", Availability::Unknown)])];

        assert!(common_slots(&records, &catalog).is_empty());
    }

    #[test]
    fn legacy_membership_records_participate() {
        // Cy's legacy record lists only Mon 7pm, so Mon 6pm is unavailable
        // for them even though Bo left it at the default.
        let catalog = Catalog::generate(&["Mon"], &["6pm", "7pm"]);
        let records = vec![
            record("Bo", &[]),
            ParticipantRecord {
                name: "Cy".to_string(),
                slots: SlotStates::Membership(vec!["Mon 7pm".to_string()]),
            },
        ];

        let common = common_slots(&records, &catalog);
        let ids: Vec<String> = common.iter().map(|s| s.id()).collect();
        assert_eq!(ids, ["Mon 7pm"]);
    }

    #[test]
    fn result_follows_catalog_order() {
        let catalog = Catalog::generate(&["Mon", "Tue"], &["6pm", "7pm"]);
        let records = vec![
            record("Bo", &[("Mon 7pm", Availability::Unavailable)]),
            record("Cy", &[]),
        ];

        let ids: Vec<String> = common_slots(&records, &catalog)
            .iter()
            .map(|s| s.id())
            .collect();
        assert_eq!(ids, ["Mon 6pm", "Tue 6pm", "Tue 7pm"]);
    }
}
