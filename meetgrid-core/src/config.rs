//! Global meetgrid configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::catalog::DEFAULT_HOURS;
use crate::error::{MeetgridError, MeetgridResult};

static DEFAULT_DATA_DIR: &str = "~/.meetgrid";

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn is_default_data_dir(p: &PathBuf) -> bool {
    *p == default_data_dir()
}

fn default_hours() -> Vec<String> {
    DEFAULT_HOURS.iter().map(|h| h.to_string()).collect()
}

fn is_default_hours(hours: &Vec<String>) -> bool {
    *hours == default_hours()
}

/// Global configuration at ~/.config/meetgrid/config.toml
///
/// The seven day labels are fixed; only the hour list and the data
/// directory are configurable. Changing the hour list changes which slot
/// ids the grid shows, but stored records keep whatever ids they were
/// written with and default-fill the rest.
#[derive(Serialize, Deserialize, Clone)]
pub struct MeetgridConfig {
    #[serde(default = "default_data_dir", skip_serializing_if = "is_default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(default = "default_hours", skip_serializing_if = "is_default_hours")]
    pub hours: Vec<String>,
}

impl Default for MeetgridConfig {
    fn default() -> Self {
        MeetgridConfig {
            data_dir: default_data_dir(),
            hours: default_hours(),
        }
    }
}

impl MeetgridConfig {
    pub fn config_path() -> MeetgridResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| MeetgridError::Config("Could not determine config directory".into()))?
            .join("meetgrid");

        Ok(config_dir.join("config.toml"))
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &std::path::Path) -> MeetgridResult<()> {
        let contents = format!(
            "\
# meetgrid configuration

# Where your schedules live:
# data_dir = \"{}\"

# Hour labels for the weekly grid:
# hours = [{}]
",
            DEFAULT_DATA_DIR,
            DEFAULT_HOURS
                .iter()
                .map(|h| format!("\"{h}\""))
                .collect::<Vec<_>>()
                .join(", ")
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                MeetgridError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| MeetgridError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
