//! Conversion between the two calendars.
//!
//! Both directions consult the anchor table first and fall back to the
//! arithmetic cycle only when the requested date lies outside the table's
//! covered span. Results carry a [`Precision`] so callers can tell an
//! authoritative answer from an approximate one.

use serde::Serialize;

use crate::anchors::{self, LAST_INDEX};
use crate::consts::MAX_MONTH;
use crate::cycle;
use crate::julian;
use crate::prelude::*;
use crate::types::{self, GregorianDate, HijriDate};

/// Provenance of a conversion result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Precision {
    /// Resolved from the Umm-al-Qura anchor table.
    #[display(fmt = "authoritative")]
    Authoritative,
    /// Resolved by the 30-year arithmetic cycle; can differ from the
    /// administratively declared calendar by a day.
    #[display(fmt = "approximate")]
    Approximate,
}

/// A conversion result together with its provenance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Converted<T> {
    value: T,
    precision: Precision,
}

impl<T> Converted<T> {
    const fn authoritative(value: T) -> Self {
        Self {
            value,
            precision: Precision::Authoritative,
        }
    }

    const fn approximate(value: T) -> Self {
        Self {
            value,
            precision: Precision::Approximate,
        }
    }

    /// The converted date.
    pub fn value(&self) -> T
    where
        T: Copy,
    {
        self.value
    }

    /// How the result was resolved.
    pub const fn precision(&self) -> Precision {
        self.precision
    }

    /// Whether the result came from the anchor table.
    pub fn is_authoritative(&self) -> bool {
        self.precision == Precision::Authoritative
    }

    /// Unwraps the converted date, discarding provenance.
    pub fn into_inner(self) -> T {
        self.value
    }
}

/// Converts a Gregorian date to Hijri.
///
/// Selects the latest anchor not after the date; the day of month is the
/// whole-day offset from that anchor. Dates outside the covered span
/// resolve through the arithmetic cycle and are marked
/// [`Precision::Approximate`]; Gregorian dates before the Hijri epoch
/// yield non-positive years.
pub fn gregorian_to_hijri(date: GregorianDate) -> Converted<HijriDate> {
    let jdn = julian::gregorian_to_jdn(date.year(), date.month(), date.day());

    match anchors::latest_at_or_before(jdn) {
        Some((index, anchor)) if index < LAST_INDEX => {
            // The successor anchor is strictly after `jdn`, so the offset
            // never reaches the month's tabulated length.
            let day = (jdn - anchor.jdn() + 1) as u8;
            Converted::authoritative(HijriDate::from_parts(
                anchor.hijri_year,
                anchor.hijri_month,
                day,
            ))
        }
        _ => {
            let (year, month, day) = cycle::jdn_to_hijri(jdn);
            Converted::approximate(HijriDate::from_parts(year, month, day))
        }
    }
}

/// Converts a Hijri date to Gregorian.
///
/// The result is the month's anchor date plus the day offset. A day past
/// the resolved month length (day 30 of a 29-day month) is clamped to the
/// month's last day, never rolled into the following month. Months outside
/// the covered span resolve through the arithmetic cycle and are marked
/// [`Precision::Approximate`].
pub fn hijri_to_gregorian(date: HijriDate) -> Converted<GregorianDate> {
    match anchors::lookup(date.year(), date.month()) {
        Some((index, anchor)) if index < LAST_INDEX => {
            let length = (anchors::at(index + 1).jdn() - anchor.jdn()) as u8;
            let day = date.day().min(length);
            let (year, month, day) = julian::jdn_to_gregorian(anchor.jdn() + i64::from(day) - 1);
            Converted::authoritative(GregorianDate::from_parts(year, month, day))
        }
        _ => {
            let length = cycle::month_days(date.year(), date.month());
            let day = date.day().min(length);
            let jdn = cycle::hijri_to_jdn(date.year(), date.month(), day);
            let (year, month, day) = julian::jdn_to_gregorian(jdn);
            Converted::approximate(GregorianDate::from_parts(year, month, day))
        }
    }
}

/// Number of days (29 or 30) in a Hijri month.
///
/// Table-covered months derive the length from adjacent anchors; outside
/// the table the arithmetic cycle's alternation is an estimate.
pub fn hijri_month_length(year: i32, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    match anchors::lookup(year, month) {
        Some((index, anchor)) if index < LAST_INDEX => {
            (anchors::at(index + 1).jdn() - anchor.jdn()) as u8
        }
        _ => cycle::month_days(year, month),
    }
}

/// Number of days (28-31) in a Gregorian month.
pub fn gregorian_month_length(year: i32, month: u8) -> u8 {
    types::days_in_month(year, month)
}

impl HijriDate {
    /// Weekday index, Sunday = 0, usable with [`crate::WEEKDAYS`].
    /// Derived through Gregorian conversion so the two calendars always
    /// agree on the day of week.
    pub fn weekday(self) -> usize {
        hijri_to_gregorian(self).value().weekday()
    }
}
