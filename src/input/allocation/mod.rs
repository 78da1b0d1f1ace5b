//! Splits the hours of a project over its speedtypes.

mod task;
mod task_queue;

pub use task::*;
pub use task_queue::*;

use log::debug;

use crate::input::{ConfigError, Project};
use crate::time::WorkingDuration;

/// The time every task of a project receives.
#[derive(Debug, Clone, PartialEq)]
pub struct Allocation {
    project: String,
    total_hours: f64,
    effective_hours: f64,
    tasks: Vec<Task>,
}

impl Allocation {
    #[must_use]
    pub fn project(&self) -> &str {
        &self.project
    }

    /// The hour budget of the project before paid time off is subtracted.
    #[must_use]
    pub fn total_hours(&self) -> f64 {
        self.total_hours
    }

    /// The hours that are distributed over the speedtypes.
    #[must_use]
    pub fn effective_hours(&self) -> f64 {
        self.effective_hours
    }

    /// The tasks in the order they will be worked on, paid time off last.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    #[must_use]
    pub fn into_tasks(self) -> Vec<Task> {
        self.tasks
    }

    #[must_use]
    pub fn total_duration(&self) -> WorkingDuration {
        self.tasks.iter().map(Task::duration).sum()
    }
}

/// Computes how many minutes each speedtype of the `project` receives.
///
/// The `paid_time_off` (in hours) is shared equally by `project_count`
/// projects. Each speedtype gets `floor(effective_hours * 60 * percentage / 100)`
/// minutes, so the minutes lost to truncation are not given to anyone.
pub fn allocate(
    project: &Project,
    paid_time_off: f64,
    project_count: usize,
) -> Result<Allocation, ConfigError> {
    let paid_time_off_share = if project_count == 0 {
        0.0
    } else {
        paid_time_off / project_count as f64
    };

    let effective_hours = project.total_hours() - paid_time_off_share;
    if effective_hours < 0.0 {
        return Err(ConfigError::NegativeEffectiveHours {
            project: project.name().to_string(),
            hours: effective_hours,
        });
    }

    let mut tasks = project
        .distribution()
        .map(|(speedtype, percentage)| {
            let minutes = (effective_hours * 60.0 * percentage / 100.0).floor();
            Task::speedtype(speedtype, percentage, WorkingDuration::from_mins(minutes as u32))
        })
        .collect::<Vec<_>>();

    if paid_time_off_share > 0.0 {
        tasks.push(Task::paid_time_off(WorkingDuration::from_hours_truncated(
            paid_time_off_share,
        )));
    }

    for task in &tasks {
        debug!(
            "project `{}`: allocated {} to `{}`",
            project.name(),
            task.duration(),
            task.name()
        );
    }

    Ok(Allocation {
        project: project.name().to_string(),
        total_hours: project.total_hours(),
        effective_hours,
        tasks,
    })
}
