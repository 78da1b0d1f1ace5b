use indexmap::IndexMap;
use log::{debug, info, warn};
use thiserror::Error;

use crate::input::allocation::ProjectQueues;
use crate::input::scheduler::{DayScheduler, DaySheet, TimeSheet};
use crate::input::{Clock, Config};
use crate::time::WeekDay;
use crate::verifier::{UnscheduledTime, Verifier, VerifyDrained};

/// Returned when the tasks need more time than the schedule has.
#[derive(Debug, Clone, Error, PartialEq)]
#[error(
    "the allocated time exceeds the time available in the schedule:\n{}",
    format_unscheduled(.0)
)]
pub struct UnscheduledWork(Vec<UnscheduledTime>);

fn format_unscheduled(projects: &[UnscheduledTime]) -> String {
    projects
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

impl UnscheduledWork {
    #[must_use]
    pub fn projects(&self) -> &[UnscheduledTime] {
        &self.0
    }
}

/// Assigns the projects to the week days of the schedule.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkSchedule {
    assignments: IndexMap<WeekDay, String>,
    weeks: usize,
    clock: Clock,
}

impl WorkSchedule {
    #[must_use]
    pub fn new(assignments: IndexMap<WeekDay, String>, weeks: usize, clock: Clock) -> Self {
        Self {
            assignments,
            weeks,
            clock,
        }
    }

    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let assignments = WeekDay::ALL
            .into_iter()
            .filter_map(|day| config.project_on(day).map(|project| (day, project.to_string())))
            .collect();

        Self::new(assignments, config.weeks(), *config.clock())
    }

    /// Runs through every week day of the schedule and works on the queue of
    /// the project assigned to that day.
    ///
    /// Tasks are consumed across days, so the queues must be worked on in
    /// this order. Fails if any queue has time left at the end.
    pub fn schedule(&self, queues: &mut ProjectQueues) -> Result<TimeSheet, UnscheduledWork> {
        let scheduler = DayScheduler::new(&self.clock);
        let mut days = Vec::new();

        for (i, week_day) in WeekDay::cycle(self.weeks).enumerate() {
            let number = i + 1;

            let Some(project) = self.assignments.get(&week_day) else {
                debug!("day {}: no project is assigned to {}", number, week_day);
                continue;
            };

            let Some(queue) = queues.get_mut(project) else {
                warn!("day {}: project `{}` has no tasks", number, project);
                continue;
            };

            let entries = scheduler.schedule(queue);
            debug!(
                "day {} ({} - {}): scheduled {} entries",
                number,
                week_day,
                project,
                entries.len()
            );

            days.push(DaySheet::new(number, week_day, project.as_str(), entries));
        }

        VerifyDrained.verify(queues).map_err(UnscheduledWork)?;

        info!("scheduled {} days", days.len());

        Ok(TimeSheet::new(days))
    }
}
