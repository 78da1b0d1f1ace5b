use derive_more::Display;
use serde::Serialize;

use crate::max;
use crate::min;
use crate::time::{TimeStamp, WorkingDuration};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize)]
#[display("{start} - {end}")]
pub struct TimeSpan {
    start: TimeStamp,
    end: TimeStamp,
}

impl TimeSpan {
    #[must_use]
    pub const fn new(start: TimeStamp, end: TimeStamp) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub const fn start(&self) -> TimeStamp {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> TimeStamp {
        self.end
    }

    /// A span without any time in it (or an inverted one).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    #[must_use]
    pub fn duration(&self) -> WorkingDuration {
        self.start.until(self.end)
    }

    #[must_use]
    pub fn overlapping_duration(&self, other: &TimeSpan) -> Option<WorkingDuration> {
        if self.end <= other.start || self.start >= other.end {
            return None;
        }

        let overlap_window_start = max!(self.start, other.start);
        let overlap_window_end = min!(self.end, other.end);

        Some(overlap_window_start.until(overlap_window_end))
    }
}
