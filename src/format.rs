//! Display strings for resolved dates.
//!
//! Pure presentation over the fixed English name tables: weekday, day,
//! month name, year, and the calendar-system suffix. The dual rendering
//! shows a Gregorian date with its Hijri equivalent alongside.

use crate::consts::{GREGORIAN_MONTHS, GREGORIAN_SUFFIX, HIJRI_MONTHS, HIJRI_SUFFIX, WEEKDAYS};
use crate::convert::gregorian_to_hijri;
use crate::types::{GregorianDate, HijriDate};

/// Name of a Hijri month (1-12).
pub fn hijri_month_name(month: u8) -> &'static str {
    debug_assert!(month != 0 && month <= 12);
    HIJRI_MONTHS[usize::from(month) - 1]
}

/// Name of a Gregorian month (1-12).
pub fn gregorian_month_name(month: u8) -> &'static str {
    debug_assert!(month != 0 && month <= 12);
    GREGORIAN_MONTHS[usize::from(month) - 1]
}

/// Name of a weekday by index (Sunday = 0).
pub fn weekday_name(weekday: usize) -> &'static str {
    debug_assert!(weekday < 7);
    WEEKDAYS[weekday]
}

/// Renders a Gregorian date, e.g. `Thursday, 26 June 2025 CE`.
pub fn format_gregorian(date: GregorianDate) -> String {
    format!(
        "{}, {} {} {} {}",
        weekday_name(date.weekday()),
        date.day(),
        gregorian_month_name(date.month()),
        date.year(),
        GREGORIAN_SUFFIX
    )
}

/// Renders a Hijri date, e.g. `Thursday, 1 Muharram 1447 AH`.
pub fn format_hijri(date: HijriDate) -> String {
    format!(
        "{}, {} {} {} {}",
        weekday_name(date.weekday()),
        date.day(),
        hijri_month_name(date.month()),
        date.year(),
        HIJRI_SUFFIX
    )
}

/// Renders a Gregorian date with its Hijri equivalent,
/// e.g. `Thursday, 26 June 2025 CE (1 Muharram 1447 AH)`.
pub fn format_dual(date: GregorianDate) -> String {
    let hijri = gregorian_to_hijri(date).into_inner();
    format!(
        "{} ({} {} {} {})",
        format_gregorian(date),
        hijri.day(),
        hijri_month_name(hijri.month()),
        hijri.year(),
        HIJRI_SUFFIX
    )
}
