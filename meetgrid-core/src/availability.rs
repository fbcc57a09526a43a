//! The tri-state availability model.

use serde::{Deserialize, Serialize};

/// Per-slot availability for one participant.
///
/// `Available` is the default: any slot a participant never touched counts
/// as available. Persisted as the integer codes 0/1/2 used by every version
/// of the stored format so far.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Availability {
    #[default]
    Available,
    Unavailable,
    Unknown,
}

impl Availability {
    /// Advance to the next state in the edit cycle.
    pub fn cycle(self) -> Self {
        match self {
            Availability::Available => Availability::Unavailable,
            Availability::Unavailable => Availability::Unknown,
            Availability::Unknown => Availability::Available,
        }
    }
}

impl From<Availability> for u8 {
    fn from(state: Availability) -> u8 {
        match state {
            Availability::Available => 0,
            Availability::Unavailable => 1,
            Availability::Unknown => 2,
        }
    }
}

impl TryFrom<u8> for Availability {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Availability::Available),
            1 => Ok(Availability::Unavailable),
            2 => Ok(Availability::Unknown),
            other => Err(format!("unknown availability code: {other}")),
        }
    }
}
