use crate::input::allocation::TaskQueue;
use crate::input::scheduler::ScheduleEntry;
use crate::min;
use crate::time::{TimeSpan, TimeStamp, WorkingDuration};
use crate::working_duration;

/// Fills a contiguous window of a day (like the morning) with tasks.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentScheduler {
    span: TimeSpan,
    current: TimeStamp,
}

impl SegmentScheduler {
    /// Entries that end at most this far from the end of the segment are
    /// extended to it.
    const SNAP_DISTANCE: WorkingDuration = working_duration!(00:01);

    #[must_use]
    pub fn new(span: TimeSpan) -> Self {
        Self {
            span,
            current: span.start(),
        }
    }

    #[must_use]
    pub fn remaining_time(&self) -> WorkingDuration {
        self.current.until(self.span.end())
    }

    /// Returns how much of the `wanted_duration` fits into the segment.
    #[must_use]
    pub fn has_time_for(&self, wanted_duration: WorkingDuration) -> WorkingDuration {
        min!(wanted_duration, self.remaining_time())
    }

    /// Takes tasks from the front of the queue until either the segment or
    /// the queue is exhausted.
    ///
    /// A task that does not fit is split: the part that fits is scheduled and
    /// the rest stays at the front of the queue.
    pub fn fill(&mut self, queue: &mut TaskQueue) -> Vec<ScheduleEntry> {
        let mut result = Vec::new();

        while !self.remaining_time().is_zero() {
            let Some((task, task_duration)) = queue.peek_task() else {
                break; // nothing left to schedule
            };

            let possible_duration = self.has_time_for(task_duration);
            let start = self.current;
            let mut end = start + possible_duration;

            // absorb the minute lost to truncating, so that the segment
            // ends exactly at its boundary
            if end.elapsed(&self.span.end()) <= Self::SNAP_DISTANCE {
                end = self.span.end();
            }

            let entry = ScheduleEntry::work(TimeSpan::new(start, end), task, possible_duration);
            queue.consume(possible_duration);

            self.current = end;
            result.push(entry);
        }

        result
    }
}
