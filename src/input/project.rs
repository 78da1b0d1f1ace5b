use indexmap::IndexMap;

use crate::input::json_input::ProjectFile;
use crate::input::ConfigError;

/// A project with an hour budget that is split over its speedtypes.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    name: String,
    total_hours: f64,
    distribution: IndexMap<String, f64>,
}

impl Project {
    pub fn new(
        name: impl Into<String>,
        total_hours: f64,
        distribution: IndexMap<String, f64>,
    ) -> Result<Self, ConfigError> {
        let name = name.into();

        if !total_hours.is_finite() || total_hours < 0.0 {
            return Err(ConfigError::InvalidTotalHours {
                project: name,
                hours: total_hours,
            });
        }

        if let Some((speedtype, &percentage)) = distribution
            .iter()
            .find(|(_, percentage)| !percentage.is_finite() || **percentage < 0.0)
        {
            return Err(ConfigError::InvalidPercentage {
                project: name,
                speedtype: speedtype.clone(),
                percentage,
            });
        }

        Ok(Self {
            name,
            total_hours,
            distribution,
        })
    }

    pub fn from_file(name: &str, file: &ProjectFile) -> Result<Self, ConfigError> {
        Self::new(name, file.total_hours(), file.distribution().clone())
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn total_hours(&self) -> f64 {
        self.total_hours
    }

    /// The speedtypes with their percentage in the configured order.
    pub fn distribution(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.distribution
            .iter()
            .map(|(speedtype, percentage)| (speedtype.as_str(), *percentage))
    }

    #[must_use]
    pub fn total_percentage(&self) -> f64 {
        self.distribution.values().sum()
    }
}
