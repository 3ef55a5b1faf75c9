//! Conversion between the Bikram Sambat (BS) calendar used in Nepal and the
//! Gregorian calendar.
//!
//! BS month lengths are irregular and come from an embedded almanac table
//! covering BS 1970 to 2100. Conversions that need data outside that range
//! fail with [`DateError::MissingCalendarData`] instead of approximating.
//!
//! ```
//! use bikram_sambat::BsDate;
//!
//! let date = BsDate::new(16, "Paush", 2077).unwrap();
//! let gregorian = date.to_gregorian().unwrap();
//! assert_eq!(gregorian.to_string(), "2020-12-31");
//!
//! let back = BsDate::from_gregorian(31, 12, 2020).unwrap();
//! assert_eq!(back, date);
//! assert_eq!(back.month_name(), "Paush");
//! ```

pub mod calendar;
mod consts;
mod convert;
mod prelude;
mod types;

pub use calendar::{YearRecord, days_in_month, lookup, supported_years};
pub use consts::*;
pub use types::{Day, Month, Year};

use crate::prelude::*;
use chrono::NaiveDate;
use std::str::FromStr;

/// A validated date in the Bikram Sambat calendar.
///
/// Only constructible through [`BsDate::new`] and the Gregorian
/// constructors, so the day always fits its year's month length.
/// Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct BsDate {
    year:  types::Year,
    month: types::Month,
    day:   types::Day,
}

/// The ways a caller can name a month when constructing a [`BsDate`].
#[derive(Debug, Clone, PartialEq, From, serde::Deserialize)]
#[serde(untagged)]
pub enum MonthSpec {
    /// Month number, 1 (Baisakh) to 12 (Chaitra)
    Numeric(i32),
    /// Exact, case-sensitive month name such as `"Paush"`
    Named(String),
    /// Any other representation; always rejected
    #[from(ignore)]
    #[serde(skip_deserializing)]
    Unsupported(String),
}

/// Error type for construction and conversion of BS dates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// The month was neither a number nor a name.
    #[error("month has to be a number or a month name, got {0}")]
    UnsupportedMonthType(String),

    /// The day, month and year do not form a date in the calendar table.
    #[error("not a valid date: {year}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: i32, day: i32 },

    /// A conversion needed calendar data for a year outside the table.
    #[error("cannot convert date, missing calendar data for BS {year}")]
    MissingCalendarData { year: i32 },

    /// The Gregorian input is not a real calendar date.
    #[error("not a valid gregorian date: {year}-{month:02}-{day:02}")]
    InvalidGregorianDate { year: i32, month: i32, day: i32 },

    /// Text could not be split into year, month and day.
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),
}

impl MonthSpec {
    /// Resolves the month to its number. Unknown names resolve to 0, which
    /// no date accepts.
    ///
    /// # Errors
    /// Returns `DateError::UnsupportedMonthType` for `MonthSpec::Unsupported`.
    pub fn resolve(&self) -> Result<i32, DateError> {
        match self {
            Self::Numeric(month) => Ok(*month),
            Self::Named(name) => Ok(Month::from_name(name).map_or(0, |m| i32::from(m.get()))),
            Self::Unsupported(repr) => Err(DateError::UnsupportedMonthType(repr.clone())),
        }
    }
}

macro_rules! month_spec_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for MonthSpec {
                fn from(month: $t) -> Self {
                    i32::try_from(month).map_or(Self::Numeric(0), Self::Numeric)
                }
            }
        )*
    };
}

month_spec_from_int!(u8, u16, u32, u64, usize, i8, i16, i64, isize);

impl From<&str> for MonthSpec {
    fn from(name: &str) -> Self {
        Self::Named(name.to_owned())
    }
}

impl From<&String> for MonthSpec {
    fn from(name: &String) -> Self {
        Self::Named(name.clone())
    }
}

impl From<Month> for MonthSpec {
    fn from(month: Month) -> Self {
        Self::Numeric(i32::from(month.get()))
    }
}

impl From<f64> for MonthSpec {
    fn from(month: f64) -> Self {
        Self::Unsupported(month.to_string())
    }
}

impl From<f32> for MonthSpec {
    fn from(month: f32) -> Self {
        Self::Unsupported(month.to_string())
    }
}

impl BsDate {
    /// Creates a BS date from day, month and year.
    ///
    /// `month` is a number (`9`) or an exact month name (`"Paush"`).
    ///
    /// # Errors
    /// Returns `DateError::UnsupportedMonthType` if the month is neither, and
    /// `DateError::InvalidDate` if the year has no calendar data, the month is
    /// not 1-12, or the day exceeds that month's length.
    pub fn new(day: i32, month: impl Into<MonthSpec>, year: i32) -> Result<Self, DateError> {
        let month = month.into().resolve()?;
        let invalid = || DateError::InvalidDate { year, month, day };

        let year_typed = types::Year::new(year).ok_or_else(invalid)?;
        let month_typed = types::Month::new(month).ok_or_else(invalid)?;
        let day_typed = types::Day::new(day, year_typed, month_typed).ok_or_else(invalid)?;

        Ok(Self {
            year:  year_typed,
            month: month_typed,
            day:   day_typed,
        })
    }

    /// Creates the BS date falling on the given Gregorian day.
    ///
    /// # Errors
    /// Returns `DateError::InvalidGregorianDate` if the input is not a real
    /// Gregorian date, and `DateError::MissingCalendarData` if the result lies
    /// outside the calendar table.
    pub fn from_gregorian(
        gregorian_day: i32,
        gregorian_month: i32,
        gregorian_year: i32,
    ) -> Result<Self, DateError> {
        let date = u32::try_from(gregorian_month)
            .ok()
            .zip(u32::try_from(gregorian_day).ok())
            .and_then(|(month, day)| NaiveDate::from_ymd_opt(gregorian_year, month, day))
            .ok_or(DateError::InvalidGregorianDate {
                year:  gregorian_year,
                month: gregorian_month,
                day:   gregorian_day,
            })?;
        Self::from_gregorian_date(date)
    }

    /// Creates the BS date falling on a `chrono` date.
    ///
    /// # Errors
    /// Returns `DateError::MissingCalendarData` if the result lies outside the
    /// calendar table.
    pub fn from_gregorian_date(date: NaiveDate) -> Result<Self, DateError> {
        convert::from_gregorian(date)
    }

    /// Converts to the Gregorian calendar.
    ///
    /// # Errors
    /// Returns `DateError::MissingCalendarData` if the conversion walks into a
    /// year without calendar data (dates before Paush in BS 1970).
    pub fn to_gregorian(&self) -> Result<NaiveDate, DateError> {
        convert::to_gregorian(self)
    }

    /// Returns the day of month
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Returns the month number, 1 (Baisakh) to 12 (Chaitra)
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the BS year
    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    /// Returns the canonical month name
    pub const fn month_name(&self) -> &'static str {
        self.month.name()
    }

    pub const fn day_typed(&self) -> types::Day {
        self.day
    }

    pub const fn month_typed(&self) -> types::Month {
        self.month
    }

    pub const fn year_typed(&self) -> types::Year {
        self.year
    }

    /// Number of days in this date's month
    pub fn days_in_month(&self) -> u8 {
        // Year and Month are validated, so the lookup always succeeds
        days_in_month(i32::from(self.year.get()), self.month.get()).unwrap_or(self.day.get())
    }
}

impl FromStr for BsDate {
    type Err = DateError;

    /// Parses `YYYY-MM-DD`. The month may also be a month name, as in
    /// `2077-Paush-16`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::InvalidFormat("Empty date string".to_owned()));
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(DateError::InvalidFormat(format!(
                "expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {} fields",
                parts.len()
            )));
        };

        let year = Self::parse_i32(year)?;
        let day = Self::parse_i32(day)?;
        let month = month
            .parse::<i32>()
            .map_or_else(|_| MonthSpec::from(*month), MonthSpec::Numeric);

        Self::new(day, month, year)
    }
}

impl BsDate {
    fn parse_i32(s: &str) -> Result<i32, DateError> {
        s.parse::<i32>()
            .map_err(|_| DateError::InvalidFormat(s.to_owned()))
    }
}

impl TryFrom<NaiveDate> for BsDate {
    type Error = DateError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        Self::from_gregorian_date(date)
    }
}

impl TryFrom<BsDate> for NaiveDate {
    type Error = DateError;

    fn try_from(date: BsDate) -> Result<Self, Self::Error> {
        date.to_gregorian()
    }
}

impl serde::Serialize for BsDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for BsDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_numeric_month() {
        let date = BsDate::new(1, 1, 1970).unwrap();
        assert_eq!(date.year(), 1970);
        assert_eq!(date.month(), 1);
        assert_eq!(date.day(), 1);
        assert_eq!(date.month_name(), "Baisakh");
    }

    #[test]
    fn test_new_named_month() {
        let date = BsDate::new(19, "Paush", 2074).unwrap();
        assert_eq!(date.month(), 9);
        assert_eq!(date.month_name(), "Paush");
        assert_eq!(date, BsDate::new(19, 9, 2074).unwrap());
    }

    #[test]
    fn test_unknown_month_name_is_invalid_date() {
        let result = BsDate::new(1, "NotExistingMonth", 2076);
        assert_eq!(
            result,
            Err(DateError::InvalidDate {
                year:  2076,
                month: 0,
                day:   1,
            })
        );
        assert_eq!(
            BsDate::new(1, "NotExistingMonth", 2076),
            BsDate::new(1, 0, 2076)
        );
    }

    #[test]
    fn test_unsupported_month_type() {
        let result = BsDate::new(1, 2.345, 2076);
        assert!(matches!(result, Err(DateError::UnsupportedMonthType(_))));
        assert_eq!(
            result.unwrap_err().to_string(),
            "month has to be a number or a month name, got 2.345"
        );
    }

    #[test]
    fn test_invalid_dates() {
        let cases = [
            (1, 1, 0),
            (0, 2, 2074),
            (10, 0, 2074),
            (-1, 2, 2074),
            (1, -1, 2074),
            (1, 2, -1),
            (33, 2, 2074),
            (1, 13, 2074),
            (1, 1, 1969),
            (1, 1, 2101),
            (32, 1, 2076),
            (31, 12, 2067),
        ];
        for (day, month, year) in cases {
            assert!(
                matches!(
                    BsDate::new(day, month, year),
                    Err(DateError::InvalidDate { .. })
                ),
                "{year}-{month}-{day} should be invalid"
            );
        }
    }

    #[test]
    fn test_month_spec_resolve() {
        assert_eq!(MonthSpec::from(9u8).resolve(), Ok(9));
        assert_eq!(MonthSpec::from(9).resolve(), Ok(9));
        assert_eq!(MonthSpec::from("Chaitra").resolve(), Ok(12));
        assert_eq!(MonthSpec::from(String::from("Mangh")).resolve(), Ok(10));
        assert_eq!(MonthSpec::from("chaitra").resolve(), Ok(0));
        assert_eq!(MonthSpec::from(u64::MAX).resolve(), Ok(0));
        assert!(matches!(
            MonthSpec::from(1.0f32).resolve(),
            Err(DateError::UnsupportedMonthType(_))
        ));
    }

    #[test]
    fn test_month_spec_deserialize() {
        let spec: MonthSpec = serde_json::from_str("9").unwrap();
        assert_eq!(spec, MonthSpec::Numeric(9));
        let spec: MonthSpec = serde_json::from_str(r#""Paush""#).unwrap();
        assert_eq!(spec, MonthSpec::Named("Paush".to_owned()));
        assert!(serde_json::from_str::<MonthSpec>("[9]").is_err());
    }

    #[test]
    fn test_display() {
        let date = BsDate::new(1, 4, 2068).unwrap();
        assert_eq!(date.to_string(), "2068-04-01");
    }

    #[test]
    fn test_parse() {
        let date = "2068-04-01".parse::<BsDate>().unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2068, 4, 1));

        let date = " 2077 - Paush - 16 ".parse::<BsDate>().unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2077, 9, 16));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "".parse::<BsDate>(),
            Err(DateError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2068-04".parse::<BsDate>(),
            Err(DateError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2068-04-01-02".parse::<BsDate>(),
            Err(DateError::InvalidFormat(_))
        ));
        assert!(matches!(
            "20A8-04-01".parse::<BsDate>(),
            Err(DateError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2068-04-XX".parse::<BsDate>(),
            Err(DateError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2068-Foo-01".parse::<BsDate>(),
            Err(DateError::InvalidDate { .. })
        ));
        assert!(matches!(
            "2068-13-01".parse::<BsDate>(),
            Err(DateError::InvalidDate { .. })
        ));
    }

    #[test]
    fn test_ordering() {
        let a = BsDate::new(30, 12, 2076).unwrap();
        let b = BsDate::new(1, 1, 2077).unwrap();
        let c = BsDate::new(2, 1, 2077).unwrap();
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(BsDate::new(1, 2, 2076).unwrap().days_in_month(), 32);
        assert_eq!(BsDate::new(1, 12, 2067).unwrap().days_in_month(), 30);
    }

    #[test]
    fn test_typed_accessors() {
        let date = BsDate::new(17, 11, 2076).unwrap();
        assert_eq!(date.year_typed().get(), 2076);
        assert_eq!(date.month_typed().name(), "Falgun");
        assert_eq!(date.day_typed().get(), 17);
    }

    #[test]
    fn test_from_gregorian_invalid_input() {
        let result = BsDate::from_gregorian(29, 2, 2019);
        assert_eq!(
            result,
            Err(DateError::InvalidGregorianDate {
                year:  2019,
                month: 2,
                day:   29,
            })
        );
        assert!(BsDate::from_gregorian(1, 13, 2019).is_err());
        assert!(BsDate::from_gregorian(32, 1, 2019).is_err());
        assert!(BsDate::from_gregorian(-1, 1, 2019).is_err());
        assert!(BsDate::from_gregorian(1, -1, 2019).is_err());
    }

    #[test]
    fn test_try_from_conversions() {
        let gregorian = NaiveDate::from_ymd_opt(2011, 12, 16).unwrap();
        let date = BsDate::try_from(gregorian).unwrap();
        assert_eq!(date, BsDate::new(1, 9, 2068).unwrap());
        let back: NaiveDate = date.try_into().unwrap();
        assert_eq!(back, gregorian);
    }

    #[test]
    fn test_serde_string_format() {
        let date = BsDate::new(16, 9, 2077).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, r#""2077-09-16""#);
        let parsed: BsDate = serde_json::from_str(&json).unwrap();
        assert_eq!(date, parsed);
    }

    #[test]
    fn test_serde_validation() {
        // Jestha 2077 has 32 days but Baisakh has 31
        assert!(serde_json::from_str::<BsDate>(r#""2077-01-32""#).is_err());
        assert!(serde_json::from_str::<BsDate>(r#""1969-01-01""#).is_err());
        assert!(serde_json::from_str::<BsDate>(r#""2077-02-32""#).is_ok());
    }

    #[test]
    fn test_error_display() {
        let e = DateError::InvalidDate {
            year:  2074,
            month: 2,
            day:   33,
        };
        assert_eq!(e.to_string(), "not a valid date: 2074-02-33");

        let e = DateError::MissingCalendarData { year: 1969 };
        assert_eq!(
            e.to_string(),
            "cannot convert date, missing calendar data for BS 1969"
        );
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<DateError>();
    }
}
