//! Embedded Bikram Sambat calendar data.
//!
//! BS month lengths follow the almanac and have no closed-form rule, so every
//! supported year is one row of reference data. Rows are ordered by year,
//! starting at [`MIN_YEAR`]. Supporting more years means appending rows and
//! moving [`MAX_YEAR`].

use std::ops::RangeInclusive;

use crate::consts::{MAX_MONTH, MAX_YEAR, MIN_YEAR, PAUSH};

/// Calendar data of a single BS year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct YearRecord {
    first_jan_offset: u8,
    month_lengths: [u8; MAX_MONTH as usize],
}

impl YearRecord {
    const fn new(first_jan_offset: u8, month_lengths: [u8; MAX_MONTH as usize]) -> Self {
        Self {
            first_jan_offset,
            month_lengths,
        }
    }

    /// Day of Paush on which January 1st of Gregorian year `bs_year - 56` falls.
    #[inline]
    pub const fn first_jan_offset(&self) -> u8 {
        self.first_jan_offset
    }

    /// Number of days in `month` (1-indexed).
    ///
    /// Returns `None` if `month` is not in `1..=12`.
    #[inline]
    pub const fn month_length(&self, month: u8) -> Option<u8> {
        if month == 0 || month > MAX_MONTH {
            return None;
        }
        Some(self.month_lengths[month as usize - 1])
    }

    /// Lengths of all twelve months, Baisakh first.
    #[inline]
    pub const fn month_lengths(&self) -> &[u8; MAX_MONTH as usize] {
        &self.month_lengths
    }

    /// Total number of days in the year.
    pub fn total_days(&self) -> u16 {
        self.month_lengths.iter().map(|&len| u16::from(len)).sum()
    }

    /// Days of Paush from January 1st through the last day of the month (inclusive).
    pub(crate) const fn paush_days_from_january(&self) -> u8 {
        self.month_lengths[PAUSH as usize - 1] - self.first_jan_offset + 1
    }
}

#[rustfmt::skip]
static CALENDAR_DATA: [YearRecord; (MAX_YEAR - MIN_YEAR + 1) as usize] = [
    YearRecord::new(18, [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30]), // 1970
    YearRecord::new(18, [31, 31, 32, 31, 32, 30, 30, 29, 30, 29, 30, 30]), // 1971
    YearRecord::new(17, [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30]), // 1972
    YearRecord::new(19, [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31]), // 1973
    YearRecord::new(19, [31, 31, 32, 30, 31, 31, 30, 29, 30, 29, 30, 30]), // 1974
    YearRecord::new(18, [31, 31, 32, 32, 30, 31, 30, 29, 30, 29, 30, 30]), // 1975
    YearRecord::new(17, [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31]), // 1976
    YearRecord::new(18, [31, 32, 31, 32, 31, 31, 29, 30, 29, 30, 29, 31]), // 1977
    YearRecord::new(18, [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30]), // 1978
    YearRecord::new(18, [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30]), // 1979
    YearRecord::new(17, [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31]), // 1980
    YearRecord::new(18, [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30]), // 1981
    YearRecord::new(18, [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30]), // 1982
    YearRecord::new(18, [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30]), // 1983
    YearRecord::new(17, [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31]), // 1984
    YearRecord::new(18, [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30]), // 1985
    YearRecord::new(18, [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30]), // 1986
    YearRecord::new(18, [31, 32, 31, 32, 31, 30, 30, 29, 30, 29, 30, 30]), // 1987
    YearRecord::new(17, [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31]), // 1988
    YearRecord::new(18, [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30]), // 1989
    YearRecord::new(18, [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30]), // 1990
    YearRecord::new(18, [31, 32, 31, 32, 31, 30, 30, 29, 30, 29, 30, 30]), // 1991
    YearRecord::new(17, [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31]), // 1992
    YearRecord::new(18, [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30]), // 1993
    YearRecord::new(18, [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30]), // 1994
    YearRecord::new(17, [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30]), // 1995
    YearRecord::new(17, [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31]), // 1996
    YearRecord::new(18, [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30]), // 1997
    YearRecord::new(18, [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30]), // 1998
    YearRecord::new(17, [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31]), // 1999
    YearRecord::new(17, [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31]), // 2000
    YearRecord::new(18, [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30]), // 2001
    YearRecord::new(18, [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30]), // 2002
    YearRecord::new(17, [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31]), // 2003
    YearRecord::new(17, [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31]), // 2004
    YearRecord::new(18, [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30]), // 2005
    YearRecord::new(18, [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30]), // 2006
    YearRecord::new(17, [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31]), // 2007
    YearRecord::new(17, [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 29, 31]), // 2008
    YearRecord::new(18, [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30]), // 2009
    YearRecord::new(18, [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30]), // 2010
    YearRecord::new(17, [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31]), // 2011
    YearRecord::new(17, [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30]), // 2012
    YearRecord::new(18, [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30]), // 2013
    YearRecord::new(18, [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30]), // 2014
    YearRecord::new(17, [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31]), // 2015
    YearRecord::new(17, [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30]), // 2016
    YearRecord::new(18, [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30]), // 2017
    YearRecord::new(18, [31, 32, 31, 32, 31, 30, 30, 29, 30, 29, 30, 30]), // 2018
    YearRecord::new(17, [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31]), // 2019
    YearRecord::new(17, [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30]), // 2020
    YearRecord::new(18, [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30]), // 2021
    YearRecord::new(17, [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30]), // 2022
    YearRecord::new(17, [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31]), // 2023
    YearRecord::new(17, [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30]), // 2024
    YearRecord::new(18, [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30]), // 2025
    YearRecord::new(17, [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31]), // 2026
    YearRecord::new(17, [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31]), // 2027
    YearRecord::new(17, [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30]), // 2028
    YearRecord::new(18, [31, 31, 32, 31, 32, 30, 30, 29, 30, 29, 30, 30]), // 2029
    YearRecord::new(17, [31, 32, 31, 32, 31, 30, 30, 30, 30, 30, 30, 31]), // 2030
    YearRecord::new(17, [31, 32, 31, 32, 31, 31, 31, 31, 31, 31, 31, 31]), // 2031
    YearRecord::new(17, [32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32]), // 2032
    YearRecord::new(18, [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30]), // 2033
    YearRecord::new(17, [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31]), // 2034
    YearRecord::new(17, [30, 32, 31, 32, 31, 31, 29, 30, 30, 29, 29, 31]), // 2035
    YearRecord::new(17, [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30]), // 2036
    YearRecord::new(18, [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30]), // 2037
    YearRecord::new(17, [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31]), // 2038
    YearRecord::new(17, [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30]), // 2039
    YearRecord::new(17, [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30]), // 2040
    YearRecord::new(18, [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30]), // 2041
    YearRecord::new(17, [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31]), // 2042
    YearRecord::new(17, [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30]), // 2043
    YearRecord::new(17, [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30]), // 2044
    YearRecord::new(18, [31, 32, 31, 32, 31, 30, 30, 29, 30, 29, 30, 30]), // 2045
    YearRecord::new(17, [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31]), // 2046
    YearRecord::new(17, [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30]), // 2047
    YearRecord::new(17, [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30]), // 2048
    YearRecord::new(17, [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30]), // 2049
    YearRecord::new(17, [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31]), // 2050
    YearRecord::new(17, [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30]), // 2051
    YearRecord::new(17, [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30]), // 2052
    YearRecord::new(17, [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30]), // 2053
    YearRecord::new(17, [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31]), // 2054
    YearRecord::new(17, [31, 31, 32, 31, 31, 31, 30, 29, 30, 30, 29, 30]), // 2055
    YearRecord::new(17, [31, 31, 32, 31, 32, 30, 30, 29, 30, 29, 30, 30]), // 2056
    YearRecord::new(17, [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31]), // 2057
    YearRecord::new(17, [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31]), // 2058
    YearRecord::new(17, [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30]), // 2059
    YearRecord::new(17, [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30]), // 2060
    YearRecord::new(17, [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31]), // 2061
    YearRecord::new(17, [30, 32, 31, 32, 31, 31, 29, 30, 29, 30, 29, 31]), // 2062
    YearRecord::new(17, [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30]), // 2063
    YearRecord::new(17, [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30]), // 2064
    YearRecord::new(17, [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31]), // 2065
    YearRecord::new(17, [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 29, 31]), // 2066
    YearRecord::new(17, [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30]), // 2067
    YearRecord::new(17, [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30]), // 2068
    YearRecord::new(17, [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31]), // 2069
    YearRecord::new(17, [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30]), // 2070
    YearRecord::new(17, [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30]), // 2071
    YearRecord::new(17, [31, 32, 31, 32, 31, 30, 30, 29, 30, 29, 30, 30]), // 2072
    YearRecord::new(17, [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31]), // 2073
    YearRecord::new(17, [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30]), // 2074
    YearRecord::new(17, [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30]), // 2075
    YearRecord::new(16, [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30]), // 2076
    YearRecord::new(17, [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31]), // 2077
    YearRecord::new(17, [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30]), // 2078
    YearRecord::new(17, [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30]), // 2079
    YearRecord::new(16, [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30]), // 2080
    YearRecord::new(17, [31, 31, 32, 32, 31, 30, 30, 30, 29, 30, 30, 30]), // 2081
    YearRecord::new(17, [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 30, 30]), // 2082
    YearRecord::new(17, [31, 31, 32, 31, 31, 30, 30, 30, 29, 30, 30, 30]), // 2083
    YearRecord::new(17, [31, 31, 32, 31, 31, 30, 30, 30, 29, 30, 30, 30]), // 2084
    YearRecord::new(17, [31, 32, 31, 32, 31, 31, 30, 30, 29, 30, 30, 30]), // 2085
    YearRecord::new(17, [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 30, 30]), // 2086
    YearRecord::new(16, [31, 31, 32, 31, 31, 31, 30, 30, 29, 30, 30, 30]), // 2087
    YearRecord::new(16, [30, 31, 32, 32, 30, 31, 30, 30, 29, 30, 30, 30]), // 2088
    YearRecord::new(17, [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 30, 30]), // 2089
    YearRecord::new(17, [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 30, 30]), // 2090
    YearRecord::new(16, [31, 31, 32, 31, 31, 31, 30, 30, 29, 30, 30, 30]), // 2091
    YearRecord::new(16, [31, 31, 32, 32, 31, 30, 30, 30, 29, 30, 30, 30]), // 2092
    YearRecord::new(17, [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 30, 30]), // 2093
    YearRecord::new(17, [31, 31, 32, 31, 31, 30, 30, 30, 29, 30, 30, 30]), // 2094
    YearRecord::new(17, [31, 31, 32, 31, 31, 31, 30, 29, 30, 30, 30, 30]), // 2095
    YearRecord::new(17, [30, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30]), // 2096
    YearRecord::new(17, [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 30, 30]), // 2097
    YearRecord::new(17, [31, 31, 32, 31, 31, 31, 29, 30, 29, 30, 30, 31]), // 2098
    YearRecord::new(17, [31, 31, 32, 31, 31, 31, 30, 29, 29, 30, 30, 30]), // 2099
    YearRecord::new(17, [31, 32, 31, 32, 30, 31, 30, 29, 30, 29, 30, 30]), // 2100
];

/// Looks up the calendar data of a BS year.
///
/// `None` means the year is outside the supported range.
pub fn lookup(year: i32) -> Option<YearRecord> {
    let index = year.checked_sub(i32::from(MIN_YEAR))?;
    let index = usize::try_from(index).ok()?;
    CALENDAR_DATA.get(index).copied()
}

/// Number of days in the given BS month, if the year is supported and the
/// month is in `1..=12`.
pub fn days_in_month(year: i32, month: u8) -> Option<u8> {
    lookup(year)?.month_length(month)
}

/// Range of BS years with calendar data.
pub const fn supported_years() -> RangeInclusive<u16> {
    MIN_YEAR..=MAX_YEAR
}
