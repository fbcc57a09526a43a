//! Core types for meetgrid.
//!
//! This crate provides everything below the view layer:
//! - the fixed weekly slot catalog
//! - the tri-state availability model and participant records
//! - the schedule store (one JSON file, reloaded on every access)
//! - the common-availability computation

pub mod availability;
pub mod catalog;
pub mod common;
pub mod config;
pub mod error;
pub mod meetgrid;
pub mod record;
pub mod store;

pub use availability::Availability;
pub use catalog::{Catalog, Slot};
pub use common::common_slots;
pub use error::{MeetgridError, MeetgridResult};
pub use record::{ParticipantRecord, SlotStates};
pub use store::{ScheduleStore, UpsertOutcome};
