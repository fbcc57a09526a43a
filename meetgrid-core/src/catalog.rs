//! The fixed weekly slot catalog.

/// The seven day labels, in week order. These are fixed; only the hour list
/// is configurable.
pub const DAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Default hour labels for the evening grid.
pub const DEFAULT_HOURS: [&str; 10] = [
    "4pm", "5pm", "6pm", "7pm", "8pm", "9pm", "10pm", "11pm", "12am", "1am",
];

/// One bookable day/hour unit in the weekly grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub day: String,
    pub hour: String,
}

impl Slot {
    /// The identity under which this slot is stored and displayed: `"Mon 6pm"`.
    pub fn id(&self) -> String {
        format!("{} {}", self.day, self.hour)
    }
}

/// The ordered sequence of slots for one weekly grid.
///
/// Generated once at startup as the day-major cartesian product of days and
/// hours. Generation is deterministic, so as long as the hour configuration
/// is unchanged, previously stored records stay addressable under the same
/// slot ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    slots: Vec<Slot>,
    hours: Vec<String>,
}

impl Catalog {
    /// Build the catalog from ordered day and hour labels, day-major.
    pub fn generate(days: &[&str], hours: &[&str]) -> Self {
        let slots = days
            .iter()
            .flat_map(|day| {
                hours.iter().map(move |hour| Slot {
                    day: (*day).to_string(),
                    hour: (*hour).to_string(),
                })
            })
            .collect();

        Catalog {
            slots,
            hours: hours.iter().map(|h| (*h).to_string()).collect(),
        }
    }

    /// The full weekly grid for the given hour labels.
    pub fn with_hours(hours: &[String]) -> Self {
        let hour_refs: Vec<&str> = hours.iter().map(String::as_str).collect();
        Self::generate(&DAYS, &hour_refs)
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn hours(&self) -> &[String] {
        &self.hours
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn contains(&self, slot_id: &str) -> bool {
        self.slots.iter().any(|s| s.id() == slot_id)
    }
}
