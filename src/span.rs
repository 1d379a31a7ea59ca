use serde::Serialize;

use crate::anchors::{ANCHOR_TABLE, LAST_INDEX};
use crate::types::{GregorianDate, HijriDate};

/// The contiguous extent over which conversion is backed by the anchor
/// table. Dates inside it resolve authoritatively; dates outside fall back
/// to the arithmetic approximation. Pickers query this up front to flag
/// reduced precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CoveredSpan {
    start: GregorianDate,
    end_exclusive: GregorianDate,
    first_month: (i32, u8),
    last_month: (i32, u8),
}

/// The span covered by the compiled-in anchor table.
pub fn covered_span() -> CoveredSpan {
    let first = ANCHOR_TABLE[0];
    let terminal = ANCHOR_TABLE[LAST_INDEX];
    let last_covered = ANCHOR_TABLE[LAST_INDEX - 1];
    CoveredSpan {
        start: first.first_day,
        end_exclusive: terminal.first_day,
        first_month: (first.hijri_year, first.hijri_month),
        last_month: (last_covered.hijri_year, last_covered.hijri_month),
    }
}

impl CoveredSpan {
    /// First Gregorian day of the span (inclusive).
    pub const fn start(&self) -> GregorianDate {
        self.start
    }

    /// First Gregorian day past the span (exclusive upper bound).
    pub const fn end_exclusive(&self) -> GregorianDate {
        self.end_exclusive
    }

    /// First covered Hijri month as `(year, month)`.
    pub const fn first_hijri_month(&self) -> (i32, u8) {
        self.first_month
    }

    /// Last covered Hijri month as `(year, month)`.
    pub const fn last_hijri_month(&self) -> (i32, u8) {
        self.last_month
    }

    /// Whether a Gregorian date resolves from the table.
    pub fn contains_gregorian(&self, date: GregorianDate) -> bool {
        (self.start..self.end_exclusive).contains(&date)
    }

    /// Whether a Hijri month resolves from the table.
    pub fn contains_hijri(&self, date: HijriDate) -> bool {
        (self.first_month..=self.last_month).contains(&(date.year(), date.month()))
    }
}
