use crate::consts::{
    CENTURY_CYCLE, DATE_SEPARATOR, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE,
    HIJRI_MONTH_MAX_DAYS, LEAP_YEAR_CYCLE, MAX_MONTH, MAX_YEAR, MIN_YEAR,
};
use crate::julian;
use crate::prelude::*;
use std::str::FromStr;

/// Error type for date construction and parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// Input string is not a `YYYY-MM-DD` date.
    #[error("invalid date format: {0}")]
    InvalidFormat(String),

    /// Year outside the supported range.
    #[error("invalid year: {0}")]
    InvalidYear(i32),

    /// Month outside 1-12.
    #[error("invalid month: {0}")]
    InvalidMonth(u8),

    /// Day invalid for the given year and month.
    #[error("invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: i32, month: u8, day: u8 },

    /// Empty date string.
    #[error("empty date string")]
    EmptyInput,
}

/// A date in the proleptic Gregorian calendar.
///
/// Construction through [`GregorianDate::new`] validates the day against the
/// standard month lengths and leap-year rule, so every value of this type is
/// a real calendar date. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Into)]
#[display(fmt = "{:04}-{:02}-{:02}", year, month, day)]
pub struct GregorianDate {
    year: i32,
    month: u8,
    day: u8,
}

impl GregorianDate {
    /// Creates a date, validating year, month, and day.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear`, `InvalidMonth`, or `InvalidDay` when
    /// the respective component is out of range.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, DateError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(DateError::InvalidYear(year));
        }
        if month == 0 || month > MAX_MONTH {
            return Err(DateError::InvalidMonth(month));
        }
        if day == 0 || day > days_in_month(year, month) {
            return Err(DateError::InvalidDay { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    /// Builds a date the converters have already resolved. Callers guarantee
    /// month and day validity; the year may lie outside `MIN_YEAR..=MAX_YEAR`
    /// when a far-range conversion lands there.
    pub(crate) const fn from_parts(year: i32, month: u8, day: u8) -> Self {
        debug_assert!(month != 0 && month <= MAX_MONTH);
        debug_assert!(day != 0 && day <= 31);
        Self { year, month, day }
    }

    /// Returns the year
    #[inline]
    pub const fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1-12)
    #[inline]
    pub const fn month(self) -> u8 {
        self.month
    }

    /// Returns the day of month
    #[inline]
    pub const fn day(self) -> u8 {
        self.day
    }

    /// Julian Day Number of this date (midnight-based integer count).
    pub(crate) const fn jdn(self) -> i64 {
        julian::gregorian_to_jdn(self.year, self.month, self.day)
    }

    /// Weekday index of this date, Sunday = 0, usable with [`crate::WEEKDAYS`].
    pub const fn weekday(self) -> usize {
        julian::weekday_index(self.jdn())
    }
}

impl TryFrom<(i32, u8, u8)> for GregorianDate {
    type Error = DateError;

    fn try_from(value: (i32, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1, value.2)
    }
}

impl FromStr for GregorianDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month, day) = parse_ymd(s)?;
        Self::new(year, month, day)
    }
}

impl serde::Serialize for GregorianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for GregorianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A date in the Umm-al-Qura Hijri calendar.
///
/// Construction through [`HijriDate::new`] validates the month and bounds the
/// day by 30, the longest any Hijri month can be. Whether a specific month
/// has 29 or 30 days is a resolver question ([`crate::hijri_month_length`]);
/// a day of 30 in a 29-day month is clamped during conversion, never rolled
/// into the following month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Into)]
#[display(fmt = "{:04}-{:02}-{:02}", year, month, day)]
pub struct HijriDate {
    year: i32,
    month: u8,
    day: u8,
}

impl HijriDate {
    /// Creates a date, validating year, month, and the structural day bound.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear`, `InvalidMonth`, or `InvalidDay` when
    /// the respective component is out of range.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, DateError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(DateError::InvalidYear(year));
        }
        if month == 0 || month > MAX_MONTH {
            return Err(DateError::InvalidMonth(month));
        }
        if day == 0 || day > HIJRI_MONTH_MAX_DAYS {
            return Err(DateError::InvalidDay { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    /// Builds a date the converters have already resolved. Callers guarantee
    /// month and day validity; the year may be non-positive when a Gregorian
    /// date before the Hijri epoch is converted.
    pub(crate) const fn from_parts(year: i32, month: u8, day: u8) -> Self {
        debug_assert!(month != 0 && month <= MAX_MONTH);
        debug_assert!(day != 0 && day <= HIJRI_MONTH_MAX_DAYS);
        Self { year, month, day }
    }

    /// Returns the year
    #[inline]
    pub const fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1-12)
    #[inline]
    pub const fn month(self) -> u8 {
        self.month
    }

    /// Returns the day of month
    #[inline]
    pub const fn day(self) -> u8 {
        self.day
    }
}

impl TryFrom<(i32, u8, u8)> for HijriDate {
    type Error = DateError;

    fn try_from(value: (i32, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1, value.2)
    }
}

impl FromStr for HijriDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month, day) = parse_ymd(s)?;
        Self::new(year, month, day)
    }
}

impl serde::Serialize for HijriDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for HijriDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// --- parsing helpers ---

fn parse_ymd(s: &str) -> Result<(i32, u8, u8), DateError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(DateError::EmptyInput);
    }

    let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
    if parts.len() != 3 {
        return Err(DateError::InvalidFormat(trimmed.to_owned()));
    }

    let year = parts[0]
        .parse::<i32>()
        .map_err(|_| DateError::InvalidFormat(parts[0].to_owned()))?;
    let month = parts[1]
        .parse::<u8>()
        .map_err(|_| DateError::InvalidFormat(parts[1].to_owned()))?;
    let day = parts[2]
        .parse::<u8>()
        .map_err(|_| DateError::InvalidFormat(parts[2].to_owned()))?;

    Ok((year, month, day))
}

// --- Gregorian month arithmetic ---

pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}
