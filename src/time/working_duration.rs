use core::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use serde::{ser, Serialize};

#[macro_export]
macro_rules! working_duration {
    ( $hours:literal : $mins:literal ) => {{
        static_assertions::const_assert!($mins < 60);

        $crate::time::WorkingDuration::from_mins($hours * 60 + $mins)
    }};
}

/// A number of whole minutes that is worked (or can be worked).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WorkingDuration {
    minutes: u32,
}

impl WorkingDuration {
    pub const ZERO: Self = Self::from_mins(0);

    #[must_use]
    pub const fn from_mins(minutes: u32) -> Self {
        Self { minutes }
    }

    /// Converts fractional hours into minutes, truncating partial minutes.
    ///
    /// Negative hours are clamped to zero.
    #[must_use]
    pub fn from_hours_truncated(hours: f64) -> Self {
        Self::from_mins((hours * 60.0).floor().max(0.0) as u32)
    }

    #[must_use]
    pub const fn as_mins(&self) -> u32 {
        self.minutes
    }

    #[must_use]
    pub const fn hours(&self) -> u32 {
        self.minutes / 60
    }

    /// The minutes that remain after removing all full hours.
    #[must_use]
    pub const fn minutes(&self) -> u32 {
        self.minutes % 60
    }

    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.minutes == 0
    }
}

impl fmt::Display for WorkingDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hours(), self.minutes())
    }
}

impl Serialize for WorkingDuration {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_u32(self.minutes)
    }
}

impl Add for WorkingDuration {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::from_mins(self.minutes + rhs.minutes)
    }
}

impl AddAssign for WorkingDuration {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for WorkingDuration {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::from_mins(self.minutes - rhs.minutes)
    }
}

impl SubAssign for WorkingDuration {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Sum for WorkingDuration {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a WorkingDuration> for WorkingDuration {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
