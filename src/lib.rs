//! Bidirectional conversion between the proleptic Gregorian calendar and the
//! Umm-al-Qura Hijri calendar.
//!
//! Hijri month lengths are declared administratively, not derived from a
//! formula, so conversion runs off a compiled-in table of month anchors (the
//! Gregorian date of each Hijri month's first day) covering Hijri years
//! 1445-1450. Inside that span results are authoritative. Outside it the
//! engine degrades gracefully to a deterministic 30-year arithmetic cycle;
//! such results can differ from the declared calendar by a day and are
//! flagged [`Precision::Approximate`] by the [`gregorian_to_hijri`] /
//! [`hijri_to_gregorian`] layer.
//!
//! Everything is pure and immutable: the anchor table is a compile-time
//! constant validated during constant evaluation, and every function is safe
//! to call concurrently.
//!
//! ```
//! use dual_calendar::{to_hijri, to_gregorian, GregorianDate};
//!
//! let date = GregorianDate::new(2025, 6, 26)?;
//! let hijri = to_hijri(date);
//! assert_eq!((hijri.year(), hijri.month(), hijri.day()), (1447, 1, 1));
//!
//! assert_eq!(to_gregorian(1447, 1, 1)?, date);
//! # Ok::<(), dual_calendar::DateError>(())
//! ```

mod anchors;
mod consts;
mod convert;
mod cycle;
mod format;
mod julian;
mod prelude;
mod span;
mod types;

pub use consts::*;
pub use convert::{
    Converted, Precision, gregorian_month_length, gregorian_to_hijri, hijri_month_length,
    hijri_to_gregorian,
};
pub use format::{
    format_dual, format_gregorian, format_hijri, gregorian_month_name, hijri_month_name,
    weekday_name,
};
pub use span::{CoveredSpan, covered_span};
pub use types::{DateError, GregorianDate, HijriDate, days_in_month, is_leap_year};

/// Converts a Gregorian date to its Hijri equivalent.
///
/// Picker-facing shorthand for [`gregorian_to_hijri`] without the precision
/// flag; use the latter to distinguish authoritative from approximate
/// results.
pub fn to_hijri(date: GregorianDate) -> HijriDate {
    convert::gregorian_to_hijri(date).into_inner()
}

/// Converts a Hijri date to its Gregorian equivalent.
///
/// Picker-facing shorthand for [`hijri_to_gregorian`] without the precision
/// flag. A day past the month's resolved length is clamped to its last day.
///
/// # Errors
/// Returns a [`DateError`] when the components do not form a structurally
/// valid Hijri date (month outside 1-12, day outside 1-30, year outside the
/// supported range).
pub fn to_gregorian(year: i32, month: u8, day: u8) -> Result<GregorianDate, DateError> {
    let date = HijriDate::new(year, month, day)?;
    Ok(convert::hijri_to_gregorian(date).into_inner())
}
