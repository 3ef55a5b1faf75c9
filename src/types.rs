use crate::calendar;
use crate::consts::{MAX_MONTH, MIN_DAY, MONTH_NAMES};
use std::fmt;
use std::num::NonZeroU8;

/// A BS year guaranteed to have calendar data (`MIN_YEAR..=MAX_YEAR`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Year(u16);

impl Year {
    /// Creates a new Year, validating that the calendar table covers it.
    ///
    /// Returns `None` for years without calendar data.
    pub fn new(value: i32) -> Option<Self> {
        calendar::lookup(value)?;
        u16::try_from(value).ok().map(Self)
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A BS month guaranteed to be in the range `1..=MAX_MONTH` (Baisakh..=Chaitra)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    pub fn new(value: i32) -> Option<Self> {
        let value = u8::try_from(value).ok()?;
        if value > MAX_MONTH {
            return None;
        }
        NonZeroU8::new(value).map(Self)
    }

    /// Resolves a canonical month name. Matching is exact and case-sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        MONTH_NAMES
            .iter()
            .position(|&candidate| candidate == name)
            .and_then(|index| i32::try_from(index + 1).ok())
            .and_then(Self::new)
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Canonical name of the month, e.g. `"Paush"` for month 9
    pub const fn name(self) -> &'static str {
        MONTH_NAMES[self.0.get() as usize - 1]
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A day value guaranteed to be valid for a given BS year and month
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating it against the table length of that
    /// year's month. BS months run 29 to 32 days depending on the year.
    pub fn new(value: i32, year: Year, month: Month) -> Option<Self> {
        let value = u8::try_from(value).ok()?;
        let max_day = calendar::days_in_month(i32::from(year.get()), month.get())?;
        if value < MIN_DAY || value > max_day {
            return None;
        }
        NonZeroU8::new(value).map(Self)
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
