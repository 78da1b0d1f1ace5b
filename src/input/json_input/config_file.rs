use std::path::Path;

use anyhow::Context;
use indexmap::IndexMap;
use serde::Deserialize;

use crate::input::json_input::ProjectFile;
use crate::time::{TimeStamp, WeekDay};
use crate::utils::{self, PathExt};

/// The configuration as it is written by the user.
///
/// Every key is required; validation of the values happens in
/// [`ConfigBuilder::build`](crate::input::ConfigBuilder::build).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ConfigFile {
    projects: IndexMap<String, ProjectFile>,
    work_schedule: IndexMap<WeekDay, String>,
    weeks: usize,
    workday_start: TimeStamp,
    lunch_start: TimeStamp,
    lunch_end: TimeStamp,
    workday_end: TimeStamp,
    paid_time_off: f64,
}

impl ConfigFile {
    pub fn from_json_str(string: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(string)?)
    }

    pub fn from_toml_str(string: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(string)?)
    }

    /// Reads the file as toml if it has a `.toml` extension, otherwise as json.
    pub fn from_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let contents = utils::read_to_string(path)
            .with_context(|| format!("failed to read `{}`", path.display()))?;

        if path.has_extension("toml") {
            Self::from_toml_str(&contents)
        } else {
            Self::from_json_str(&contents)
        }
        .with_context(|| format!("failed to parse `{}`", path.display()))
    }

    pub fn projects(&self) -> impl Iterator<Item = (&String, &ProjectFile)> {
        self.projects.iter()
    }

    pub fn work_schedule(&self) -> &IndexMap<WeekDay, String> {
        &self.work_schedule
    }

    #[must_use]
    pub fn weeks(&self) -> usize {
        self.weeks
    }

    #[must_use]
    pub fn workday_start(&self) -> TimeStamp {
        self.workday_start
    }

    #[must_use]
    pub fn lunch_start(&self) -> TimeStamp {
        self.lunch_start
    }

    #[must_use]
    pub fn lunch_end(&self) -> TimeStamp {
        self.lunch_end
    }

    #[must_use]
    pub fn workday_end(&self) -> TimeStamp {
        self.workday_end
    }

    /// The paid time off in hours, shared by all projects.
    #[must_use]
    pub fn paid_time_off(&self) -> f64 {
        self.paid_time_off
    }
}
