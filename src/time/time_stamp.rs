use core::fmt;
use std::ops::Add;
use std::str::FromStr;

use serde::{de, ser, Deserialize, Serialize};
use thiserror::Error;

use crate::time::WorkingDuration;

#[macro_export]
macro_rules! time_stamp {
    ( $hour:literal : $minute:literal ) => {{
        static_assertions::const_assert!($hour < 24);
        static_assertions::const_assert!($minute < 60);

        $crate::time::TimeStamp::from_minutes($hour * 60 + $minute)
    }};
}

/// A point in time on a day, stored as the minutes since midnight.
///
/// It is parsed from and displayed as a 12-hour clock (`"8:00 AM"`).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeStamp {
    minutes: u16,
}

#[derive(Debug, Clone, Error, PartialEq)]
#[error("invalid time `{input}`, expected something like `8:00 AM` or `12:30 PM`")]
pub struct InvalidTime {
    input: String,
}

impl InvalidTime {
    fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
        }
    }
}

impl TimeStamp {
    const MINUTES_PER_DAY: u16 = 24 * 60;

    /// Creates a time stamp from a 24-hour `hour` and a `minute`.
    pub fn new(hour: u8, minute: u8) -> Result<Self, InvalidTime> {
        if hour > 23 || minute > 59 {
            return Err(InvalidTime {
                input: format!("{:02}:{:02}", hour, minute),
            });
        }

        Ok(Self {
            minutes: hour as u16 * 60 + minute as u16,
        })
    }

    /// Wraps around at midnight.
    #[must_use]
    pub const fn from_minutes(minutes: u16) -> Self {
        Self {
            minutes: minutes % Self::MINUTES_PER_DAY,
        }
    }

    #[must_use]
    pub const fn as_minutes(&self) -> u16 {
        self.minutes
    }

    #[must_use]
    pub const fn hour(&self) -> u8 {
        (self.minutes / 60) as u8
    }

    #[must_use]
    pub const fn minute(&self) -> u8 {
        (self.minutes % 60) as u8
    }

    /// Returns the time between both time stamps, regardless of their order.
    #[must_use]
    pub fn elapsed(&self, other: &Self) -> WorkingDuration {
        WorkingDuration::from_mins(self.minutes.abs_diff(other.minutes) as u32)
    }

    /// Returns the duration from `self` until `later` or zero if `later` is
    /// not after `self`.
    #[must_use]
    pub fn until(&self, later: Self) -> WorkingDuration {
        WorkingDuration::from_mins(later.minutes.saturating_sub(self.minutes) as u32)
    }
}

impl fmt::Display for TimeStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let meridiem = if self.hour() < 12 { "AM" } else { "PM" };
        let hour = match self.hour() % 12 {
            0 => 12,
            hour => hour,
        };

        write!(f, "{}:{:02} {}", hour, self.minute(), meridiem)
    }
}

impl FromStr for TimeStamp {
    type Err = InvalidTime;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let trimmed = string.trim();
        let invalid = || InvalidTime::new(string);

        if trimmed.len() < 2 || !trimmed.is_char_boundary(trimmed.len() - 2) {
            return Err(invalid());
        }

        let (clock, meridiem) = trimmed.split_at(trimmed.len() - 2);
        let is_afternoon = match meridiem.to_ascii_uppercase().as_str() {
            "AM" => false,
            "PM" => true,
            _ => return Err(invalid()),
        };

        let (hour, minute) = clock.trim_end().split_once(':').ok_or_else(invalid)?;

        // `u8::from_str` would accept a leading `+`
        if hour.is_empty()
            || minute.len() != 2
            || !hour.chars().chain(minute.chars()).all(|c| c.is_ascii_digit())
        {
            return Err(invalid());
        }

        let hour: u8 = hour.parse().map_err(|_| invalid())?;
        let minute: u8 = minute.parse().map_err(|_| invalid())?;

        if !(1..=12).contains(&hour) || minute > 59 {
            return Err(invalid());
        }

        let hour = match (hour, is_afternoon) {
            (12, false) => 0,
            (12, true) => 12,
            (hour, false) => hour,
            (hour, true) => hour + 12,
        };

        Self::new(hour, minute).map_err(|_| invalid())
    }
}

impl<'de> Deserialize<'de> for TimeStamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        FromStr::from_str(&s).map_err(de::Error::custom)
    }
}

impl Serialize for TimeStamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_str(self.to_string().as_str())
    }
}

impl Add<WorkingDuration> for TimeStamp {
    type Output = Self;

    fn add(self, duration: WorkingDuration) -> Self::Output {
        let minutes = (self.minutes as u32 + duration.as_mins()) % Self::MINUTES_PER_DAY as u32;
        Self::from_minutes(minutes as u16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    use crate::working_duration;

    #[test]
    fn test_parse_twelve_hour_clock() {
        assert_eq!("8:00 AM".parse::<TimeStamp>(), Ok(time_stamp!(08:00)));
        assert_eq!("12:00 PM".parse::<TimeStamp>(), Ok(time_stamp!(12:00)));
        assert_eq!("1:00 PM".parse::<TimeStamp>(), Ok(time_stamp!(13:00)));
        assert_eq!("5:45 pm".parse::<TimeStamp>(), Ok(time_stamp!(17:45)));
        assert_eq!("12:15 AM".parse::<TimeStamp>(), Ok(time_stamp!(00:15)));
        assert_eq!("11:59PM".parse::<TimeStamp>(), Ok(time_stamp!(23:59)));
        assert_eq!(" 09:30 AM ".parse::<TimeStamp>(), Ok(time_stamp!(09:30)));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for input in [
            "", "8:00", "13:00 PM", "0:30 AM", "8:60 AM", "8:5 AM", "8 AM", "eight AM", "8:00 XM",
            "+8:00 AM", "8:00 AMX", "ä",
        ] {
            assert!(
                input.parse::<TimeStamp>().is_err(),
                "`{}` should not parse",
                input
            );
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(time_stamp!(08:00).to_string(), "8:00 AM");
        assert_eq!(time_stamp!(12:00).to_string(), "12:00 PM");
        assert_eq!(time_stamp!(13:05).to_string(), "1:05 PM");
        assert_eq!(time_stamp!(00:00).to_string(), "12:00 AM");
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(time_stamp!(08:00) + working_duration!(04:00), time_stamp!(12:00));
        assert_eq!(time_stamp!(13:00).until(time_stamp!(17:00)), working_duration!(04:00));
        assert_eq!(time_stamp!(13:00).until(time_stamp!(12:00)), working_duration!(00:00));
        assert_eq!(
            time_stamp!(12:00).elapsed(&time_stamp!(08:30)),
            working_duration!(03:30)
        );
        // this tests overflowing past midnight:
        assert_eq!(time_stamp!(23:00) + working_duration!(02:00), time_stamp!(01:00));
    }
}
