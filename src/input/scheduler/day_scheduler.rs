use crate::input::allocation::TaskQueue;
use crate::input::scheduler::{ScheduleEntry, SegmentScheduler};
use crate::input::Clock;

/// Lays out the tasks of a single day: the morning, lunch and then the
/// afternoon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayScheduler<'a> {
    clock: &'a Clock,
}

impl<'a> DayScheduler<'a> {
    #[must_use]
    pub const fn new(clock: &'a Clock) -> Self {
        Self { clock }
    }

    /// Schedules the front of the `queue` into the day.
    ///
    /// Whatever does not fit into the day stays in the queue for the next one.
    pub fn schedule(&self, queue: &mut TaskQueue) -> Vec<ScheduleEntry> {
        let mut result = SegmentScheduler::new(self.clock.morning()).fill(queue);

        let lunch = self.clock.lunch();
        if !lunch.is_empty() {
            result.push(ScheduleEntry::lunch(lunch));
        }

        result.extend(SegmentScheduler::new(self.clock.afternoon()).fill(queue));

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    use crate::input::allocation::Task;
    use crate::time::WorkingDuration;
    use crate::{time_stamp, working_duration};

    fn clock() -> Clock {
        Clock::new(
            time_stamp!(08:00),
            time_stamp!(12:00),
            time_stamp!(13:00),
            time_stamp!(17:00),
        )
        .unwrap()
    }

    fn lines(entries: &[ScheduleEntry]) -> Vec<String> {
        entries.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_task_carries_over_to_next_day() {
        let clock = clock();
        let scheduler = DayScheduler::new(&clock);
        let mut queue = TaskQueue::new([Task::speedtype("X", 100.0, working_duration!(10:00))]);

        assert_eq!(
            lines(&scheduler.schedule(&mut queue)),
            vec![
                "8:00 AM - 12:00 PM: X",
                "12:00 PM - 1:00 PM: Lunch",
                "1:00 PM - 5:00 PM: X",
            ]
        );
        assert_eq!(queue.remaining_duration(), working_duration!(02:00));

        assert_eq!(
            lines(&scheduler.schedule(&mut queue)),
            vec!["8:00 AM - 10:00 AM: X", "12:00 PM - 1:00 PM: Lunch"]
        );
        assert!(queue.is_empty());
    }

    #[test]
    fn test_lunch_is_always_scheduled() {
        let clock = clock();
        let mut queue = TaskQueue::new(Vec::new());

        assert_eq!(
            lines(&DayScheduler::new(&clock).schedule(&mut queue)),
            vec!["12:00 PM - 1:00 PM: Lunch"]
        );
    }

    #[test]
    fn test_entries_are_never_empty() {
        let clock = clock();
        let mut queue = TaskQueue::new([
            Task::speedtype("A", 10.0, working_duration!(00:01)),
            Task::speedtype("B", 0.0, WorkingDuration::ZERO),
            Task::speedtype("C", 40.0, working_duration!(03:58)),
            Task::speedtype("D", 50.0, working_duration!(04:30)),
            Task::paid_time_off(working_duration!(04:00)),
        ]);

        let scheduler = DayScheduler::new(&clock);
        while !queue.is_empty() {
            for entry in scheduler.schedule(&mut queue) {
                assert!(entry.span().start() < entry.span().end(), "{}", entry);
                assert_ne!(entry.label(), "B");
            }
        }
    }

    #[test]
    fn test_without_lunch_break() {
        let clock = Clock::new(
            time_stamp!(09:00),
            time_stamp!(12:00),
            time_stamp!(12:00),
            time_stamp!(15:00),
        )
        .unwrap();
        let mut queue = TaskQueue::new([Task::speedtype("X", 100.0, working_duration!(06:00))]);

        assert_eq!(
            lines(&DayScheduler::new(&clock).schedule(&mut queue)),
            vec!["9:00 AM - 12:00 PM: X", "12:00 PM - 3:00 PM: X"]
        );
    }
}
