use core::fmt;

use crate::input::allocation::{Allocation, TaskKind};
use crate::input::{Config, ConfigError};
use crate::time::WorkingDuration;

/// How the hours of every project are split, counted in full workdays.
#[derive(Debug, Clone, PartialEq)]
pub struct AllocationSummary {
    workday: WorkingDuration,
    allocations: Vec<Allocation>,
}

impl AllocationSummary {
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        Ok(Self {
            workday: config.clock().working_duration_per_day(),
            allocations: config.allocations()?,
        })
    }

    #[must_use]
    pub fn allocations(&self) -> &[Allocation] {
        &self.allocations
    }

    fn workday_hours(&self) -> f64 {
        f64::from(self.workday.as_mins()) / 60.0
    }

    fn split(&self, duration: WorkingDuration) -> (u32, WorkingDuration) {
        if self.workday.is_zero() {
            return (0, duration);
        }

        let workday = self.workday.as_mins();
        (
            duration.as_mins() / workday,
            WorkingDuration::from_mins(duration.as_mins() % workday),
        )
    }
}

impl fmt::Display for AllocationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, allocation) in self.allocations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }

            writeln!(f, "Project: {}", allocation.project())?;
            writeln!(f, "Total Hours: {}", allocation.total_hours())?;
            writeln!(f, "Effective Hours: {}", allocation.effective_hours())?;

            for task in allocation.tasks() {
                let duration = task.duration();
                write!(
                    f,
                    "{}: {} hours and {} minutes",
                    task.name(),
                    duration.hours(),
                    duration.minutes()
                )?;

                match task.kind() {
                    TaskKind::Speedtype { percentage } => writeln!(f, " ({}%)", percentage)?,
                    TaskKind::PaidTimeOff => writeln!(f)?,
                }

                let (days, remainder) = self.split(duration);
                writeln!(
                    f,
                    "    -> {} full {}-hour workdays, {} hours and {} minutes remainder",
                    days,
                    self.workday_hours(),
                    remainder.hours(),
                    remainder.minutes()
                )?;
            }
        }

        Ok(())
    }
}
