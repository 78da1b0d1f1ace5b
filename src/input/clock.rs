use crate::input::ConfigError;
use crate::time::{TimeSpan, TimeStamp, WorkingDuration};

/// The fixed daily calendar, which is the same for every scheduled day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clock {
    workday_start: TimeStamp,
    lunch_start: TimeStamp,
    lunch_end: TimeStamp,
    workday_end: TimeStamp,
}

impl Clock {
    pub fn new(
        workday_start: TimeStamp,
        lunch_start: TimeStamp,
        lunch_end: TimeStamp,
        workday_end: TimeStamp,
    ) -> Result<Self, ConfigError> {
        if !(workday_start <= lunch_start && lunch_start <= lunch_end && lunch_end <= workday_end)
        {
            return Err(ConfigError::InvalidClock {
                workday_start,
                lunch_start,
                lunch_end,
                workday_end,
            });
        }

        Ok(Self {
            workday_start,
            lunch_start,
            lunch_end,
            workday_end,
        })
    }

    #[must_use]
    pub const fn morning(&self) -> TimeSpan {
        TimeSpan::new(self.workday_start, self.lunch_start)
    }

    #[must_use]
    pub const fn lunch(&self) -> TimeSpan {
        TimeSpan::new(self.lunch_start, self.lunch_end)
    }

    #[must_use]
    pub const fn afternoon(&self) -> TimeSpan {
        TimeSpan::new(self.lunch_end, self.workday_end)
    }

    /// How much can be worked on a single day (lunch excluded).
    #[must_use]
    pub fn working_duration_per_day(&self) -> WorkingDuration {
        self.morning().duration() + self.afternoon().duration()
    }
}
