/// Earliest Bikram Sambat year with calendar data (inclusive)
pub const MIN_YEAR: u16 = 1970;

/// Latest Bikram Sambat year with calendar data (inclusive)
pub const MAX_YEAR: u16 = 2100;

/// Maximum valid month (Chaitra)
pub const MAX_MONTH: u8 = 12;

/// First day of month
pub const MIN_DAY: u8 = 1;

/// Month number for Baisakh, the first month of the BS year
pub const BAISAKH: u8 = 1;
/// Month number for Paush. January 1st always falls in Paush.
pub const PAUSH: u8 = 9;
/// Month number for Chaitra, the last month of the BS year
pub const CHAITRA: u8 = 12;

/// Gregorian month number for January
pub const JANUARY: u32 = 1;

/// BS year containing January 1st of Gregorian year `y` is `y + GREGORIAN_YEAR_OFFSET`
pub const GREGORIAN_YEAR_OFFSET: i32 = 56;

/// Canonical month names, index = month - 1
pub const MONTH_NAMES: [&str; 12] = [
    "Baisakh", "Jestha", "Ashadh", "Shrawan", "Bhadra", "Ashwin", "Kartik", "Mangsir", "Paush",
    "Mangh", "Falgun", "Chaitra",
];

/// Date component separator (`YYYY-MM-DD`)
pub const DATE_SEPARATOR: char = '-';
