use std::str::FromStr;

use derive_more::Display;
use serde::{de, ser, Deserialize, Serialize};
use thiserror::Error;

/// A day of the working week. Weekends are never scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub enum WeekDay {
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
}

#[derive(Debug, Clone, Error, PartialEq)]
#[error("invalid week day `{0}`, expected one of Monday, Tuesday, Wednesday, Thursday or Friday")]
pub struct InvalidWeekDay(String);

impl WeekDay {
    pub const ALL: [Self; 5] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
    ];

    /// Iterates over the week days of `weeks` consecutive weeks.
    pub fn cycle(weeks: usize) -> impl Iterator<Item = Self> {
        Self::ALL
            .into_iter()
            .cycle()
            .take(weeks.saturating_mul(Self::ALL.len()))
    }
}

impl FromStr for WeekDay {
    type Err = InvalidWeekDay;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|day| day.to_string().eq_ignore_ascii_case(string.trim()))
            .ok_or_else(|| InvalidWeekDay(string.to_string()))
    }
}

impl<'de> Deserialize<'de> for WeekDay {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        FromStr::from_str(&s).map_err(de::Error::custom)
    }
}

impl Serialize for WeekDay {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_str() {
        assert_eq!("Monday".parse::<WeekDay>(), Ok(WeekDay::Monday));
        assert_eq!("friday".parse::<WeekDay>(), Ok(WeekDay::Friday));
        assert!("Saturday".parse::<WeekDay>().is_err());
        assert!("Mon".parse::<WeekDay>().is_err());
    }

    #[test]
    fn test_cycle() {
        let days = WeekDay::cycle(2).collect::<Vec<_>>();

        assert_eq!(days.len(), 10);
        assert_eq!(days[0], WeekDay::Monday);
        assert_eq!(days[4], WeekDay::Friday);
        assert_eq!(days[5], WeekDay::Monday);
        assert_eq!(WeekDay::cycle(0).count(), 0);

        // the number of days saturates instead of overflowing
        assert_eq!(
            WeekDay::cycle(usize::MAX).nth(7),
            Some(WeekDay::Wednesday)
        );
    }
}
