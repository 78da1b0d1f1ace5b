use thiserror::Error;

use crate::input::allocation::{ProjectQueues, Task};
use crate::time::WorkingDuration;
use crate::verifier::Verifier;

/// Verifies that every task of every project has been scheduled.
pub struct VerifyDrained;

#[derive(Debug, Clone, Error, PartialEq)]
#[error(
    "project `{project}` has {remaining} left that could not be scheduled ({})",
    format_tasks(.tasks)
)]
pub struct UnscheduledTime {
    project: String,
    remaining: WorkingDuration,
    tasks: Vec<Task>,
}

fn format_tasks(tasks: &[Task]) -> String {
    tasks
        .iter()
        .map(|task| format!("{}: {}", task.name(), task.duration()))
        .collect::<Vec<_>>()
        .join(", ")
}

impl UnscheduledTime {
    #[must_use]
    pub fn project(&self) -> &str {
        &self.project
    }

    #[must_use]
    pub fn remaining(&self) -> WorkingDuration {
        self.remaining
    }

    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }
}

impl Verifier<ProjectQueues> for VerifyDrained {
    type Error = UnscheduledTime;
    type Errors = Vec<UnscheduledTime>;

    fn verify(&self, queues: &ProjectQueues) -> Result<(), Self::Errors> {
        let errors = queues
            .iter()
            .filter(|(_, queue)| !queue.is_empty())
            .map(|(project, queue)| UnscheduledTime {
                project: project.to_string(),
                remaining: queue.remaining_duration(),
                tasks: queue.to_remaining(),
            })
            .collect::<Vec<_>>();

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(())
    }
}
