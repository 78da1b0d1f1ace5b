use indexmap::IndexMap;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProjectFile {
    total_hours: f64,
    /// Maps each speedtype to its share of the hours in percent.
    speedtype_percentage_distribution: IndexMap<String, f64>,
}

impl ProjectFile {
    #[must_use]
    pub fn total_hours(&self) -> f64 {
        self.total_hours
    }

    pub fn distribution(&self) -> &IndexMap<String, f64> {
        &self.speedtype_percentage_distribution
    }
}
