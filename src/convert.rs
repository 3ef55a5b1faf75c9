//! Offset arithmetic between BS dates and Gregorian dates.
//!
//! January 1st of Gregorian year `y` always falls in Paush of BS year
//! `y + 56`, on the day recorded as that year's `first_jan_offset`. Both
//! directions count days relative to that anchor, walking month by month
//! through the calendar table.

use chrono::{Datelike, Days, NaiveDate};
use tracing::{debug, trace};

use crate::calendar::{self, YearRecord};
use crate::consts::{CHAITRA, GREGORIAN_YEAR_OFFSET, JANUARY, MAX_MONTH, PAUSH};
use crate::{BsDate, DateError};

fn record_for(year: i32) -> Result<YearRecord, DateError> {
    calendar::lookup(year).ok_or_else(|| {
        debug!(bs_year = year, "no calendar data");
        DateError::MissingCalendarData { year }
    })
}

fn month_length(record: &YearRecord, month: u8, year: i32) -> Result<i64, DateError> {
    record
        .month_length(month)
        .map(i64::from)
        .ok_or(DateError::MissingCalendarData { year })
}

const fn days_in_gregorian_year(year: i32) -> i64 {
    if (year % 4 == 0 && year % 100 != 0) || year % 400 == 0 {
        366
    } else {
        365
    }
}

/// Converts a validated BS date to its Gregorian equivalent.
pub(crate) fn to_gregorian(date: &BsDate) -> Result<NaiveDate, DateError> {
    let year = i32::from(date.year());
    let month = date.month();
    let day = i64::from(date.day());
    let record = record_for(year)?;

    // Paush on or after January 1st starts the next Gregorian year
    let gregorian_year = if month > PAUSH
        || (month == PAUSH && day >= i64::from(record.first_jan_offset()))
    {
        year - GREGORIAN_YEAR_OFFSET
    } else {
        year - GREGORIAN_YEAR_OFFSET - 1
    };

    let mut days_since_january: i64 = 0;
    let mut cursor_month = month;
    let mut cursor_year = year;
    let mut cursor = record;

    if month != PAUSH {
        days_since_january = day;
        cursor_month -= 1;
    }

    // Whole months between the date and Paush, walking backwards
    while cursor_month != PAUSH {
        if cursor_month == 0 {
            cursor_month = CHAITRA;
            cursor_year -= 1;
            cursor = record_for(cursor_year)?;
        }
        days_since_january += month_length(&cursor, cursor_month, cursor_year)?;
        cursor_month -= 1;
    }

    let offset = i64::from(cursor.first_jan_offset());
    if month == PAUSH {
        days_since_january += day - offset;
        if days_since_january < 0 {
            // before January 1st: count from January 1st of the previous Gregorian year
            days_since_january += days_in_gregorian_year(gregorian_year);
        }
    } else {
        days_since_january += month_length(&cursor, PAUSH, cursor_year)? - offset;
    }

    let result = NaiveDate::from_ymd_opt(gregorian_year, JANUARY, 1)
        .zip(u64::try_from(days_since_january).ok())
        .and_then(|(january, days)| january.checked_add_days(Days::new(days)))
        .ok_or(DateError::MissingCalendarData { year })?;

    trace!(bs = %date, gregorian = %result, "converted to gregorian");
    Ok(result)
}

/// Converts a Gregorian date to a validated BS date.
pub(crate) fn from_gregorian(date: NaiveDate) -> Result<BsDate, DateError> {
    let mut bs_year = date.year() + GREGORIAN_YEAR_OFFSET;
    let mut bs_month = PAUSH;
    let mut record = record_for(bs_year)?;
    let day_of_year = i64::from(date.ordinal());

    // Days from January 1st through the end of the current BS month
    let mut days_to_month_end = i64::from(record.paush_days_from_january());

    while day_of_year > days_to_month_end {
        bs_month += 1;
        if bs_month > MAX_MONTH {
            bs_month = 1;
            bs_year += 1;
            record = record_for(bs_year)?;
        }
        days_to_month_end += month_length(&record, bs_month, bs_year)?;
    }

    let bs_day =
        month_length(&record, bs_month, bs_year)? - (days_to_month_end - day_of_year);
    // out-of-range days are rejected by validation below
    let bs_day = i32::try_from(bs_day).unwrap_or(0);

    let result = BsDate::new(bs_day, bs_month, bs_year)?;
    trace!(gregorian = %date, bs = %result, "converted from gregorian");
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bs(year: i32, month: u8, day: i32) -> BsDate {
        BsDate::new(day, month, year).unwrap()
    }

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_days_in_gregorian_year() {
        assert_eq!(days_in_gregorian_year(2019), 365);
        assert_eq!(days_in_gregorian_year(2020), 366);
        assert_eq!(days_in_gregorian_year(1900), 365);
        assert_eq!(days_in_gregorian_year(2000), 366);
    }

    #[test]
    fn test_paush_before_january_rebases_to_previous_year() {
        // 1st Paush 2068 is before January 1st (Paush 17)
        assert_eq!(to_gregorian(&bs(2068, 9, 1)).unwrap(), ymd(2011, 12, 16));
        // Same situation in a leap year
        assert_eq!(to_gregorian(&bs(2077, 9, 1)).unwrap(), ymd(2020, 12, 16));
        assert_eq!(to_gregorian(&bs(2077, 9, 16)).unwrap(), ymd(2020, 12, 31));
    }

    #[test]
    fn test_first_jan_offset_maps_to_january_first() {
        for year in 1970..=2100 {
            let offset = calendar::lookup(year).unwrap().first_jan_offset();
            let date = bs(year, PAUSH, i32::from(offset));
            assert_eq!(
                to_gregorian(&date).unwrap(),
                ymd(year - GREGORIAN_YEAR_OFFSET, 1, 1),
                "BS {year}: Paush {offset} should be January 1st"
            );
        }
    }

    #[test]
    fn test_months_after_paush() {
        assert_eq!(to_gregorian(&bs(2076, 11, 17)).unwrap(), ymd(2020, 2, 29));
        assert_eq!(to_gregorian(&bs(2037, 11, 28)).unwrap(), ymd(1981, 3, 11));
    }

    #[test]
    fn test_months_before_paush_cross_year_boundary() {
        assert_eq!(to_gregorian(&bs(2068, 1, 1)).unwrap(), ymd(2011, 4, 14));
        assert_eq!(to_gregorian(&bs(2076, 2, 32)).unwrap(), ymd(2019, 6, 15));
    }

    #[test]
    fn test_to_gregorian_missing_previous_year() {
        // Baisakh 1970 needs the Paush row of BS 1969
        let result = to_gregorian(&bs(1970, 1, 1));
        assert_eq!(result, Err(DateError::MissingCalendarData { year: 1969 }));

        // Paush 1970 only needs its own row
        assert_eq!(to_gregorian(&bs(1970, 9, 1)).unwrap(), ymd(1913, 12, 15));
        assert_eq!(to_gregorian(&bs(1970, 9, 18)).unwrap(), ymd(1914, 1, 1));
    }

    #[test]
    fn test_from_gregorian_scans_forward_from_paush() {
        // January 1st 2011 is Paush 17 2067; February 4th is in Mangh
        let date = from_gregorian(ymd(2011, 2, 4)).unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2067, 10, 21));

        let date = from_gregorian(ymd(2020, 12, 31)).unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2077, 9, 16));
    }

    #[test]
    fn test_from_gregorian_missing_data() {
        assert_eq!(
            from_gregorian(ymd(1913, 1, 1)),
            Err(DateError::MissingCalendarData { year: 1969 })
        );
        // Chaitra 30 2100 is the last convertible day
        let last = from_gregorian(ymd(2044, 4, 12)).unwrap();
        assert_eq!((last.year(), last.month(), last.day()), (2100, 12, 30));
        assert_eq!(
            from_gregorian(ymd(2044, 12, 31)),
            Err(DateError::MissingCalendarData { year: 2101 })
        );
    }
}
