//! Participant records and their two persisted slot-state shapes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::availability::Availability;

/// One named entry in the schedule store.
///
/// Names are case-insensitive identity keys: the store holds at most one
/// record per normalized name, and submitting again under the same name
/// replaces the record's slot mapping in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantRecord {
    pub name: String,
    pub slots: SlotStates,
}

impl ParticipantRecord {
    pub fn new(name: impl Into<String>, states: BTreeMap<String, Availability>) -> Self {
        ParticipantRecord {
            name: name.into(),
            slots: SlotStates::States(states),
        }
    }

    /// Case-insensitive name match.
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

/// A participant's per-slot states, in either of the two shapes the store
/// has held over time.
///
/// The map form is canonical: slot id to state code, and a slot missing from
/// the map is `Available` (default-fill). The membership form is the legacy
/// binary model: a listed slot is `Available`, any other slot is
/// `Unavailable`. Legacy records keep membership semantics until the
/// participant next submits, at which point the edit surface writes the
/// record back in map form with every catalog slot explicit. Records are
/// never reinterpreted in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SlotStates {
    States(BTreeMap<String, Availability>),
    Membership(Vec<String>),
}

impl SlotStates {
    /// The effective state for one slot, default-filled.
    ///
    /// A record's mapping may cover fewer (or other) slots than the current
    /// catalog when the hour configuration has changed between versions;
    /// lookups must still resolve rather than fail.
    pub fn state_of(&self, slot_id: &str) -> Availability {
        match self {
            SlotStates::States(map) => map.get(slot_id).copied().unwrap_or_default(),
            SlotStates::Membership(list) => {
                if list.iter().any(|s| s == slot_id) {
                    Availability::Available
                } else {
                    Availability::Unavailable
                }
            }
        }
    }
}
