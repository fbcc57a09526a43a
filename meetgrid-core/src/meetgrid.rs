//! Meetgrid root: configuration plus the handles derived from it.

use std::path::PathBuf;

use config::{Config, File};

use crate::catalog::Catalog;
use crate::config::MeetgridConfig;
use crate::error::{MeetgridError, MeetgridResult};
use crate::store::ScheduleStore;

/// The filename of the single persistent store under the data directory.
pub const STORE_FILE: &str = "schedules.json";

#[derive(Clone)]
pub struct Meetgrid {
    config: MeetgridConfig,
}

impl Meetgrid {
    pub fn load() -> MeetgridResult<Self> {
        let config_path = MeetgridConfig::config_path()?;

        if !config_path.exists() {
            MeetgridConfig::create_default_config(&config_path)?;
        }

        let config: MeetgridConfig = Config::builder()
            .add_source(File::from(config_path).required(false))
            .build()
            .map_err(|e| MeetgridError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| MeetgridError::Config(e.to_string()))?;

        Ok(Meetgrid { config })
    }

    pub fn data_path(&self) -> PathBuf {
        let full_path_str =
            shellexpand::tilde(&self.config.data_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    /// The schedule store under the data directory.
    pub fn store(&self) -> ScheduleStore {
        ScheduleStore::new(self.data_path().join(STORE_FILE))
    }

    /// The weekly grid for the configured hour labels.
    pub fn catalog(&self) -> Catalog {
        Catalog::with_hours(&self.config.hours)
    }
}
