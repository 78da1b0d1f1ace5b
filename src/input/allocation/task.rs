use crate::time::WorkingDuration;

/// Where the time of a task comes from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TaskKind {
    /// A configured speedtype with its share of the project in percent.
    Speedtype { percentage: f64 },
    /// The project's share of the global paid time off.
    PaidTimeOff,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    name: String,
    duration: WorkingDuration,
    kind: TaskKind,
}

impl Task {
    pub const PAID_TIME_OFF: &'static str = "Paid Time Off";

    #[must_use]
    pub fn speedtype(name: impl Into<String>, percentage: f64, duration: WorkingDuration) -> Self {
        Self {
            name: name.into(),
            duration,
            kind: TaskKind::Speedtype { percentage },
        }
    }

    #[must_use]
    pub fn paid_time_off(duration: WorkingDuration) -> Self {
        Self {
            name: Self::PAID_TIME_OFF.to_string(),
            duration,
            kind: TaskKind::PaidTimeOff,
        }
    }

    #[must_use]
    pub fn with_duration(mut self, duration: WorkingDuration) -> Self {
        self.duration = duration;
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn duration(&self) -> WorkingDuration {
        self.duration
    }

    #[must_use]
    pub fn kind(&self) -> TaskKind {
        self.kind
    }

    #[must_use]
    pub fn is_paid_time_off(&self) -> bool {
        self.kind == TaskKind::PaidTimeOff
    }
}
