use indexmap::IndexMap;
use log::debug;

use crate::input::allocation::{Allocation, Task};
use crate::min;
use crate::time::WorkingDuration;

/// The tasks of a project, which are worked on strictly in the order they
/// are given.
///
/// Instead of mutating the tasks, the queue remembers the position of the
/// front task and how much of it is left.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskQueue {
    tasks: Vec<Task>,
    position: usize,
    remaining: WorkingDuration,
}

impl TaskQueue {
    /// Creates a new queue with the provided tasks.
    ///
    /// Tasks without any time are dropped, they are considered done.
    #[must_use]
    pub fn new(tasks: impl IntoIterator<Item = Task>) -> Self {
        let tasks = tasks
            .into_iter()
            .filter(|task| {
                if task.duration().is_zero() {
                    debug!("skipping task `{}` without any allocated time", task.name());
                }

                !task.duration().is_zero()
            })
            .collect::<Vec<_>>();

        let remaining = tasks
            .first()
            .map_or(WorkingDuration::ZERO, Task::duration);

        Self {
            tasks,
            position: 0,
            remaining,
        }
    }

    /// Returns the front task together with the time that is left of it.
    #[must_use]
    pub fn peek_task(&self) -> Option<(&Task, WorkingDuration)> {
        self.tasks
            .get(self.position)
            .map(|task| (task, self.remaining))
    }

    /// Works on the front task for `worked` and returns how much was actually
    /// taken from it (never more than what is left of the task).
    ///
    /// Once nothing is left of the front task, the next task moves up.
    pub fn consume(&mut self, worked: WorkingDuration) -> WorkingDuration {
        let Some(task) = self.tasks.get(self.position) else {
            return WorkingDuration::ZERO;
        };

        let worked = min!(worked, self.remaining);
        self.remaining -= worked;

        if self.remaining.is_zero() {
            debug!("finished task `{}`", task.name());

            self.position += 1;
            self.remaining = self
                .tasks
                .get(self.position)
                .map_or(WorkingDuration::ZERO, Task::duration);
        } else {
            debug!(
                "task `{}` has {} left after working {}",
                task.name(),
                self.remaining,
                worked
            );
        }

        worked
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.position >= self.tasks.len()
    }

    /// The time that is left of all tasks in the queue.
    #[must_use]
    pub fn remaining_duration(&self) -> WorkingDuration {
        self.remaining
            + self
                .tasks
                .iter()
                .skip(self.position + 1)
                .map(Task::duration)
                .sum::<WorkingDuration>()
    }

    /// Returns the tasks that have not been finished, with the time that is
    /// left of them.
    #[must_use]
    pub fn to_remaining(&self) -> Vec<Task> {
        self.tasks
            .iter()
            .enumerate()
            .skip(self.position)
            .map(|(i, task)| {
                if i == self.position {
                    task.clone().with_duration(self.remaining)
                } else {
                    task.clone()
                }
            })
            .collect()
    }
}

/// The task queue of every project, in the configured project order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProjectQueues {
    queues: IndexMap<String, TaskQueue>,
}

impl ProjectQueues {
    #[must_use]
    pub fn new(allocations: impl IntoIterator<Item = Allocation>) -> Self {
        Self {
            queues: allocations
                .into_iter()
                .map(|allocation| {
                    let project = allocation.project().to_string();
                    (project, TaskQueue::new(allocation.into_tasks()))
                })
                .collect(),
        }
    }

    #[must_use]
    pub fn get(&self, project: &str) -> Option<&TaskQueue> {
        self.queues.get(project)
    }

    #[must_use]
    pub fn get_mut(&mut self, project: &str) -> Option<&mut TaskQueue> {
        self.queues.get_mut(project)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TaskQueue)> {
        self.queues
            .iter()
            .map(|(project, queue)| (project.as_str(), queue))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queues.values().all(TaskQueue::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    use crate::working_duration;

    fn queue() -> TaskQueue {
        TaskQueue::new([
            Task::speedtype("a", 25.0, working_duration!(01:00)),
            Task::speedtype("empty", 0.0, working_duration!(00:00)),
            Task::speedtype("b", 75.0, working_duration!(03:00)),
        ])
    }

    #[test]
    fn test_zero_duration_tasks_are_skipped() {
        let queue = queue();

        assert_eq!(
            queue
                .to_remaining()
                .iter()
                .map(Task::name)
                .collect::<Vec<_>>(),
            vec!["a", "b"]
        );
        assert!(TaskQueue::new([Task::paid_time_off(working_duration!(00:00))]).is_empty());
    }

    #[test]
    fn test_consume_partially() {
        let mut queue = queue();

        assert_eq!(queue.consume(working_duration!(00:20)), working_duration!(00:20));

        let (task, remaining) = queue.peek_task().unwrap();
        assert_eq!(task.name(), "a");
        assert_eq!(remaining, working_duration!(00:40));
        assert_eq!(queue.remaining_duration(), working_duration!(03:40));
        assert_eq!(
            queue.to_remaining()[0],
            Task::speedtype("a", 25.0, working_duration!(00:40))
        );
    }

    #[test]
    fn test_consume_moves_to_next_task() {
        let mut queue = queue();

        // can not take more than is left of the front task
        assert_eq!(queue.consume(working_duration!(02:00)), working_duration!(01:00));

        let (task, remaining) = queue.peek_task().unwrap();
        assert_eq!(task.name(), "b");
        assert_eq!(remaining, working_duration!(03:00));

        assert_eq!(queue.consume(working_duration!(03:00)), working_duration!(03:00));
        assert!(queue.is_empty());
        assert_eq!(queue.peek_task(), None);
        assert_eq!(queue.remaining_duration(), WorkingDuration::ZERO);
        assert_eq!(queue.consume(working_duration!(01:00)), WorkingDuration::ZERO);
    }
}
