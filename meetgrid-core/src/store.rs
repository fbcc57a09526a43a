//! The schedule store: one JSON file holding every participant record.
//!
//! There is no in-memory authoritative copy. Every operation reloads the
//! persisted file, mutates, and writes the whole sequence back, so the file
//! is always the source of truth.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::availability::Availability;
use crate::error::{MeetgridError, MeetgridResult};
use crate::record::{ParticipantRecord, SlotStates};

/// Outcome of an upsert, for the view layer to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Added,
    Updated,
    /// Every submitted state was the default; nothing was written.
    Skipped,
}

pub struct ScheduleStore {
    path: PathBuf,
}

impl ScheduleStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        ScheduleStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every record, in stored order.
    ///
    /// Fails soft: a missing file, unreadable content, or anything but a
    /// JSON array of records yields an empty sequence. A malformed store
    /// only surfaces as an explicit error through [`ScheduleStore::import`].
    pub fn load_all(&self) -> Vec<ParticipantRecord> {
        let Ok(content) = std::fs::read_to_string(&self.path) else {
            return Vec::new();
        };

        serde_json::from_str(&content).unwrap_or_default()
    }

    /// Serialize and persist the full sequence, replacing any prior value.
    pub fn save_all(&self, records: &[ParticipantRecord]) -> MeetgridResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(records)
            .map_err(|e| MeetgridError::Serialization(e.to_string()))?;

        std::fs::write(&self.path, content)?;
        Ok(())
    }

    /// Insert or replace the record for `name` (case-insensitive match).
    ///
    /// An all-default submission means the participant entered nothing
    /// meaningful; the write is suppressed and the store left unchanged.
    pub fn upsert(
        &self,
        name: &str,
        states: BTreeMap<String, Availability>,
    ) -> MeetgridResult<UpsertOutcome> {
        if states.values().all(|s| *s == Availability::Available) {
            return Ok(UpsertOutcome::Skipped);
        }

        let mut records = self.load_all();

        let outcome = match records.iter_mut().find(|r| r.matches_name(name)) {
            Some(existing) => {
                existing.slots = SlotStates::States(states);
                UpsertOutcome::Updated
            }
            None => {
                records.push(ParticipantRecord::new(name, states));
                UpsertOutcome::Added
            }
        };

        self.save_all(&records)?;
        Ok(outcome)
    }

    /// Remove the record at `index`. Out-of-bounds is a no-op.
    ///
    /// Returns whether a record was removed.
    pub fn remove_at(&self, index: usize) -> MeetgridResult<bool> {
        let mut records = self.load_all();

        if index >= records.len() {
            return Ok(false);
        }

        records.remove(index);
        self.save_all(&records)?;
        Ok(true)
    }

    /// Case-insensitive exact name lookup.
    pub fn find_by_name(&self, name: &str) -> Option<ParticipantRecord> {
        self.load_all().into_iter().find(|r| r.matches_name(name))
    }

    /// Copy the persisted value byte-for-byte to `dest`.
    ///
    /// A store that has never been written exports as an empty array so the
    /// destination is always a valid schedule file.
    pub fn export(&self, dest: &Path) -> MeetgridResult<()> {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => b"[]".to_vec(),
            Err(e) => return Err(e.into()),
        };

        std::fs::write(dest, bytes)?;
        Ok(())
    }

    /// Replace the store wholesale with the contents of `src`.
    ///
    /// Accepts only a top-level JSON array of records; anything else is
    /// rejected with `InvalidFormat` and the existing store is left
    /// untouched. Returns the number of imported records.
    pub fn import(&self, src: &Path) -> MeetgridResult<usize> {
        let content = std::fs::read_to_string(src)?;

        let value: serde_json::Value = serde_json::from_str(&content)
            .map_err(|e| MeetgridError::InvalidFormat(e.to_string()))?;

        if !value.is_array() {
            return Err(MeetgridError::InvalidFormat(
                "top level must be an array of schedules".to_string(),
            ));
        }

        let records: Vec<ParticipantRecord> = serde_json::from_value(value)
            .map_err(|e| MeetgridError::InvalidFormat(e.to_string()))?;

        self.save_all(&records)?;
        Ok(records.len())
    }
}
