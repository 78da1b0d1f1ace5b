use thiserror::Error;

use crate::input::scheduler::TimeSheet;
use crate::time::{TimeSpan, WorkingDuration};
use crate::verifier::Verifier;

/// Verifies that the entries of a day are in order and do not overlap.
pub struct VerifyNoOverlap;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum InvalidEntry {
    #[error("day {day}: `{label}` at {span} does not take any time")]
    Empty {
        day: usize,
        label: String,
        span: TimeSpan,
    },
    #[error("day {day}: {first} and {second} overlap by {overlap}")]
    Overlapping {
        day: usize,
        first: TimeSpan,
        second: TimeSpan,
        overlap: WorkingDuration,
    },
    #[error("day {day}: {second} starts before {first}")]
    OutOfOrder {
        day: usize,
        first: TimeSpan,
        second: TimeSpan,
    },
}

impl Verifier<TimeSheet> for VerifyNoOverlap {
    type Error = InvalidEntry;
    type Errors = Vec<Self::Error>;

    fn verify(&self, time_sheet: &TimeSheet) -> Result<(), Self::Errors> {
        let mut errors = Vec::new();

        for day in time_sheet.days() {
            for entry in day.entries() {
                if entry.span().is_empty() {
                    errors.push(InvalidEntry::Empty {
                        day: day.day(),
                        label: entry.label().to_string(),
                        span: entry.span(),
                    });
                }
            }

            for pair in day.entries().windows(2) {
                let (first, second) = (pair[0].span(), pair[1].span());

                if let Some(overlap) = first.overlapping_duration(&second) {
                    errors.push(InvalidEntry::Overlapping {
                        day: day.day(),
                        first,
                        second,
                        overlap,
                    });
                } else if second.start() < first.start() {
                    errors.push(InvalidEntry::OutOfOrder {
                        day: day.day(),
                        first,
                        second,
                    });
                }
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    use crate::input::scheduler::{DaySheet, ScheduleEntry};
    use crate::time::WeekDay;
    use crate::{time_stamp, working_duration};

    fn sheet(spans: &[TimeSpan]) -> TimeSheet {
        TimeSheet::new(vec![DaySheet::new(
            1,
            WeekDay::Monday,
            "Orbiter",
            spans.iter().copied().map(ScheduleEntry::lunch).collect(),
        )])
    }

    #[test]
    fn test_detects_overlap() {
        let first = TimeSpan::new(time_stamp!(08:00), time_stamp!(12:00));
        let second = TimeSpan::new(time_stamp!(11:30), time_stamp!(13:00));

        assert_eq!(
            VerifyNoOverlap.verify(&sheet(&[first, second])),
            Err(vec![InvalidEntry::Overlapping {
                day: 1,
                first,
                second,
                overlap: working_duration!(00:30),
            }])
        );
    }

    #[test]
    fn test_detects_empty_and_unordered() {
        let first = TimeSpan::new(time_stamp!(13:00), time_stamp!(14:00));
        let second = TimeSpan::new(time_stamp!(08:00), time_stamp!(08:00));

        assert_eq!(
            VerifyNoOverlap.verify(&sheet(&[first, second])),
            Err(vec![
                InvalidEntry::Empty {
                    day: 1,
                    label: "Lunch".to_string(),
                    span: second,
                },
                InvalidEntry::OutOfOrder {
                    day: 1,
                    first,
                    second,
                },
            ])
        );
    }

    #[test]
    fn test_adjacent_entries_pass() {
        assert_eq!(
            VerifyNoOverlap.verify(&sheet(&[
                TimeSpan::new(time_stamp!(08:00), time_stamp!(12:00)),
                TimeSpan::new(time_stamp!(12:00), time_stamp!(13:00)),
            ])),
            Ok(())
        );
    }
}
