use core::fmt;

use serde::Serialize;

use crate::input::allocation::Task;
use crate::time::{TimeSpan, WeekDay, WorkingDuration};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    Speedtype,
    PaidTimeOff,
    Lunch,
}

/// A single line of the time sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleEntry {
    #[serde(flatten)]
    span: TimeSpan,
    label: String,
    kind: EntryKind,
    /// How much time was taken from the task queue for this entry.
    ///
    /// The span can be one minute longer, when its end has been moved to
    /// the end of the segment.
    #[serde(skip)]
    worked: WorkingDuration,
}

impl ScheduleEntry {
    pub const LUNCH: &'static str = "Lunch";

    #[must_use]
    pub fn work(span: TimeSpan, task: &Task, worked: WorkingDuration) -> Self {
        Self {
            span,
            label: task.name().to_string(),
            kind: if task.is_paid_time_off() {
                EntryKind::PaidTimeOff
            } else {
                EntryKind::Speedtype
            },
            worked,
        }
    }

    #[must_use]
    pub fn lunch(span: TimeSpan) -> Self {
        Self {
            span,
            label: Self::LUNCH.to_string(),
            kind: EntryKind::Lunch,
            worked: WorkingDuration::ZERO,
        }
    }

    #[must_use]
    pub fn span(&self) -> TimeSpan {
        self.span
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    #[must_use]
    pub fn is_lunch(&self) -> bool {
        self.kind == EntryKind::Lunch
    }

    #[must_use]
    pub fn worked(&self) -> WorkingDuration {
        self.worked
    }
}

impl fmt::Display for ScheduleEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.span, self.label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DaySheet {
    day: usize,
    week_day: WeekDay,
    project: String,
    entries: Vec<ScheduleEntry>,
}

impl DaySheet {
    #[must_use]
    pub fn new(
        day: usize,
        week_day: WeekDay,
        project: impl Into<String>,
        entries: Vec<ScheduleEntry>,
    ) -> Self {
        Self {
            day,
            week_day,
            project: project.into(),
            entries,
        }
    }

    /// The number of the day in the schedule, starting with 1.
    #[must_use]
    pub fn day(&self) -> usize {
        self.day
    }

    #[must_use]
    pub fn week_day(&self) -> WeekDay {
        self.week_day
    }

    #[must_use]
    pub fn project(&self) -> &str {
        &self.project
    }

    #[must_use]
    pub fn entries(&self) -> &[ScheduleEntry] {
        &self.entries
    }

    /// The time that has been worked on tasks on this day.
    #[must_use]
    pub fn worked(&self) -> WorkingDuration {
        self.entries.iter().map(ScheduleEntry::worked).sum()
    }
}

impl fmt::Display for DaySheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Day {} ({} - {}):",
            self.day, self.week_day, self.project
        )?;

        for entry in &self.entries {
            writeln!(f, "{}", entry)?;
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct TimeSheet {
    days: Vec<DaySheet>,
}

impl TimeSheet {
    #[must_use]
    pub fn new(days: Vec<DaySheet>) -> Self {
        Self { days }
    }

    #[must_use]
    pub fn days(&self) -> &[DaySheet] {
        &self.days
    }

    /// The time that has been worked on tasks of the `project`.
    #[must_use]
    pub fn worked_for(&self, project: &str) -> WorkingDuration {
        self.days
            .iter()
            .filter(|day| day.project() == project)
            .map(DaySheet::worked)
            .sum()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for TimeSheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, day) in self.days.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }

            write!(f, "{}", day)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    use crate::{time_stamp, working_duration};

    fn day() -> DaySheet {
        DaySheet::new(
            1,
            WeekDay::Monday,
            "Orbiter",
            vec![
                ScheduleEntry::work(
                    TimeSpan::new(time_stamp!(08:00), time_stamp!(12:00)),
                    &Task::speedtype("X", 100.0, working_duration!(10:00)),
                    working_duration!(04:00),
                ),
                ScheduleEntry::lunch(TimeSpan::new(time_stamp!(12:00), time_stamp!(13:00))),
                ScheduleEntry::work(
                    TimeSpan::new(time_stamp!(13:00), time_stamp!(14:00)),
                    &Task::paid_time_off(working_duration!(01:00)),
                    working_duration!(01:00),
                ),
            ],
        )
    }

    #[test]
    fn test_display() {
        let sheet = TimeSheet::new(vec![day(), day()]);

        assert_eq!(
            sheet.to_string(),
            concat!(
                "Day 1 (Monday - Orbiter):\n",
                "8:00 AM - 12:00 PM: X\n",
                "12:00 PM - 1:00 PM: Lunch\n",
                "1:00 PM - 2:00 PM: Paid Time Off\n",
                "\n",
                "Day 1 (Monday - Orbiter):\n",
                "8:00 AM - 12:00 PM: X\n",
                "12:00 PM - 1:00 PM: Lunch\n",
                "1:00 PM - 2:00 PM: Paid Time Off\n",
            )
        );
    }

    #[test]
    fn test_worked_excludes_lunch() {
        let sheet = TimeSheet::new(vec![day()]);

        assert_eq!(sheet.worked_for("Orbiter"), working_duration!(05:00));
        assert_eq!(sheet.worked_for("Lander"), WorkingDuration::ZERO);
    }

    #[test]
    fn test_to_json() {
        let json: serde_json::Value =
            serde_json::from_str(&TimeSheet::new(vec![day()]).to_json().unwrap()).unwrap();

        assert_eq!(
            json["days"][0]["entries"][1],
            serde_json::json!({
                "start": "12:00 PM",
                "end": "1:00 PM",
                "label": "Lunch",
                "kind": "lunch",
            })
        );
        assert_eq!(json["days"][0]["week_day"], "Monday");
        assert_eq!(json["days"][0]["entries"][2]["kind"], "paid_time_off");
    }
}
