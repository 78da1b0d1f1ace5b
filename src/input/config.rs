use std::path::Path;

use indexmap::IndexMap;
use log::info;
use thiserror::Error;

use crate::input::allocation::{self, Allocation};
use crate::input::json_input::ConfigFile;
use crate::input::{Clock, Project};
use crate::time::{TimeStamp, WeekDay};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("there are no projects configured")]
    NoProjects,
    #[error("`weeks` must be at least 1")]
    NoWeeks,
    #[error("`weeks` must be at most {max}, got {weeks}")]
    TooManyWeeks { weeks: usize, max: usize },
    #[error("paid time off must be a non-negative number of hours, got {0}")]
    InvalidPaidTimeOff(f64),
    #[error("project `{project}` must have a non-negative number of total hours, got {hours}")]
    InvalidTotalHours { project: String, hours: f64 },
    #[error("speedtype `{speedtype}` of project `{project}` must have a non-negative percentage, got {percentage}")]
    InvalidPercentage {
        project: String,
        speedtype: String,
        percentage: f64,
    },
    #[error("{day} is assigned to project `{project}`, which is not configured")]
    UnknownProject { day: WeekDay, project: String },
    #[error("expected workday start ({workday_start}) <= lunch start ({lunch_start}) <= lunch end ({lunch_end}) <= workday end ({workday_end})")]
    InvalidClock {
        workday_start: TimeStamp,
        lunch_start: TimeStamp,
        lunch_end: TimeStamp,
        workday_end: TimeStamp,
    },
    #[error("project `{project}` has {hours} effective work hours after subtracting its share of paid time off")]
    NegativeEffectiveHours { project: String, hours: f64 },
}

/// The validated configuration every part of the scheduling works with.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    projects: Vec<Project>,
    work_schedule: IndexMap<WeekDay, String>,
    weeks: usize,
    clock: Clock,
    paid_time_off: f64,
}

pub struct ConfigBuilder {
    file: ConfigFile,
    weeks: Option<usize>,
    paid_time_off: Option<f64>,
}

impl ConfigBuilder {
    fn new(file: ConfigFile) -> Self {
        Self {
            file,
            weeks: None,
            paid_time_off: None,
        }
    }

    /// Overrides the number of weeks from the file.
    pub fn weeks(&mut self, weeks: usize) -> &mut Self {
        self.weeks = Some(weeks);
        self
    }

    /// Overrides the paid time off (in hours) from the file.
    pub fn paid_time_off(&mut self, hours: f64) -> &mut Self {
        self.paid_time_off = Some(hours);
        self
    }

    pub fn build(self) -> Result<Config, ConfigError> {
        let file = self.file;

        let projects = file
            .projects()
            .map(|(name, project)| Project::from_file(name, project))
            .collect::<Result<Vec<_>, _>>()?;

        if projects.is_empty() {
            return Err(ConfigError::NoProjects);
        }

        for (day, project) in file.work_schedule() {
            if !projects.iter().any(|p| p.name() == project) {
                return Err(ConfigError::UnknownProject {
                    day: *day,
                    project: project.clone(),
                });
            }
        }

        let weeks = self.weeks.unwrap_or(file.weeks());
        if weeks == 0 {
            return Err(ConfigError::NoWeeks);
        }

        if weeks > Config::MAX_WEEKS {
            return Err(ConfigError::TooManyWeeks {
                weeks,
                max: Config::MAX_WEEKS,
            });
        }

        let paid_time_off = self.paid_time_off.unwrap_or(file.paid_time_off());
        if !paid_time_off.is_finite() || paid_time_off < 0.0 {
            return Err(ConfigError::InvalidPaidTimeOff(paid_time_off));
        }

        let clock = Clock::new(
            file.workday_start(),
            file.lunch_start(),
            file.lunch_end(),
            file.workday_end(),
        )?;

        // keep the schedule in weekday order, regardless of how it was written
        let mut work_schedule = file.work_schedule().clone();
        work_schedule.sort_keys();

        info!(
            "configured {} project(s) over {} week(s) with {} hours of paid time off",
            projects.len(),
            weeks,
            paid_time_off
        );

        Ok(Config {
            projects,
            work_schedule,
            weeks,
            clock,
            paid_time_off,
        })
    }
}

impl Config {
    /// The longest schedule that can be planned, ten years of work weeks.
    pub const MAX_WEEKS: usize = 520;

    pub fn try_from_file(path: impl AsRef<Path>) -> anyhow::Result<ConfigBuilder> {
        Ok(ConfigBuilder::new(ConfigFile::from_path(path)?))
    }

    pub fn try_from_json(string: &str) -> anyhow::Result<ConfigBuilder> {
        Ok(ConfigBuilder::new(ConfigFile::from_json_str(string)?))
    }

    pub fn projects(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter()
    }

    /// Returns the project that is worked on at that week day.
    #[must_use]
    pub fn project_on(&self, day: WeekDay) -> Option<&str> {
        self.work_schedule.get(&day).map(String::as_str)
    }

    #[must_use]
    pub fn weeks(&self) -> usize {
        self.weeks
    }

    #[must_use]
    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    /// The paid time off in hours, which is shared equally by all projects.
    #[must_use]
    pub fn paid_time_off(&self) -> f64 {
        self.paid_time_off
    }

    /// Distributes the hours of every project over its speedtypes.
    pub fn allocations(&self) -> Result<Vec<Allocation>, ConfigError> {
        self.projects
            .iter()
            .map(|project| allocation::allocate(project, self.paid_time_off, self.projects.len()))
            .collect()
    }
}
