//! The Umm-al-Qura month anchor table.
//!
//! Each row maps a Hijri month to the Gregorian date of its first day, per
//! the published Umm-al-Qura calendar. Within this table the mapping is
//! authoritative; the administrative month boundaries deviate from the
//! arithmetic cycle in several months (Sha'ban-Dhu al-Qi'dah 1445 and
//! Sha'ban-Ramadan 1446/1447 each start a day later than the cycle
//! predicts). The final row is the terminal boundary: it closes the length
//! of the last covered month and is not itself covered.
//!
//! Maintenance: as the authority announces further years, append one row
//! per month in chronological order. Ordering, month contiguity, and 29/30
//! day month lengths are asserted at compile time, so a bad row fails the
//! build.

use crate::types::GregorianDate;

/// Gregorian date of the first day of one Hijri month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct MonthAnchor {
    pub(crate) hijri_year: i32,
    pub(crate) hijri_month: u8,
    pub(crate) first_day: GregorianDate,
}

impl MonthAnchor {
    /// Julian Day Number of the month's first day.
    pub(crate) const fn jdn(&self) -> i64 {
        self.first_day.jdn()
    }
}

const fn a(hijri_year: i32, hijri_month: u8, year: i32, month: u8, day: u8) -> MonthAnchor {
    MonthAnchor {
        hijri_year,
        hijri_month,
        first_day: GregorianDate::from_parts(year, month, day),
    }
}

pub(crate) const ANCHOR_COUNT: usize = 73;

/// Index of the terminal boundary row.
pub(crate) const LAST_INDEX: usize = ANCHOR_COUNT - 1;

pub(crate) const ANCHOR_TABLE: [MonthAnchor; ANCHOR_COUNT] = [
    a(1445, 1, 2023, 7, 18),
    a(1445, 2, 2023, 8, 17),
    a(1445, 3, 2023, 9, 15),
    a(1445, 4, 2023, 10, 15),
    a(1445, 5, 2023, 11, 13),
    a(1445, 6, 2023, 12, 13),
    a(1445, 7, 2024, 1, 11),
    a(1445, 8, 2024, 2, 10),
    a(1445, 9, 2024, 3, 11),
    a(1445, 10, 2024, 4, 10),
    a(1445, 11, 2024, 5, 9),
    a(1445, 12, 2024, 6, 7),
    a(1446, 1, 2024, 7, 7),
    a(1446, 2, 2024, 8, 6),
    a(1446, 3, 2024, 9, 4),
    a(1446, 4, 2024, 10, 4),
    a(1446, 5, 2024, 11, 2),
    a(1446, 6, 2024, 12, 2),
    a(1446, 7, 2024, 12, 31),
    a(1446, 8, 2025, 1, 30),
    a(1446, 9, 2025, 3, 1),
    a(1446, 10, 2025, 3, 30),
    a(1446, 11, 2025, 4, 28),
    a(1446, 12, 2025, 5, 28),
    a(1447, 1, 2025, 6, 26),
    a(1447, 2, 2025, 7, 26),
    a(1447, 3, 2025, 8, 24),
    a(1447, 4, 2025, 9, 23),
    a(1447, 5, 2025, 10, 22),
    a(1447, 6, 2025, 11, 21),
    a(1447, 7, 2025, 12, 20),
    a(1447, 8, 2026, 1, 19),
    a(1447, 9, 2026, 2, 18),
    a(1447, 10, 2026, 3, 19),
    a(1447, 11, 2026, 4, 17),
    a(1447, 12, 2026, 5, 17),
    a(1448, 1, 2026, 6, 16),
    a(1448, 2, 2026, 7, 16),
    a(1448, 3, 2026, 8, 14),
    a(1448, 4, 2026, 9, 13),
    a(1448, 5, 2026, 10, 12),
    a(1448, 6, 2026, 11, 11),
    a(1448, 7, 2026, 12, 10),
    a(1448, 8, 2027, 1, 9),
    a(1448, 9, 2027, 2, 7),
    a(1448, 10, 2027, 3, 9),
    a(1448, 11, 2027, 4, 7),
    a(1448, 12, 2027, 5, 7),
    a(1449, 1, 2027, 6, 5),
    a(1449, 2, 2027, 7, 5),
    a(1449, 3, 2027, 8, 3),
    a(1449, 4, 2027, 9, 2),
    a(1449, 5, 2027, 10, 1),
    a(1449, 6, 2027, 10, 31),
    a(1449, 7, 2027, 11, 29),
    a(1449, 8, 2027, 12, 29),
    a(1449, 9, 2028, 1, 27),
    a(1449, 10, 2028, 2, 26),
    a(1449, 11, 2028, 3, 26),
    a(1449, 12, 2028, 4, 25),
    a(1450, 1, 2028, 5, 24),
    a(1450, 2, 2028, 6, 23),
    a(1450, 3, 2028, 7, 22),
    a(1450, 4, 2028, 8, 21),
    a(1450, 5, 2028, 9, 19),
    a(1450, 6, 2028, 10, 19),
    a(1450, 7, 2028, 11, 17),
    a(1450, 8, 2028, 12, 17),
    a(1450, 9, 2029, 1, 15),
    a(1450, 10, 2029, 2, 14),
    a(1450, 11, 2029, 3, 15),
    a(1450, 12, 2029, 4, 14),
    a(1451, 1, 2029, 5, 14),
];

// Table integrity is a build-time contract: rows must cover consecutive
// Hijri months in chronological order, every implied month length must be
// 29 or 30 days, and both boundary rows must coincide with the arithmetic
// cycle so conversion is continuous across the table edges.
const _: () = {
    let mut i = 1;
    while i < ANCHOR_COUNT {
        let prev = ANCHOR_TABLE[i - 1];
        let cur = ANCHOR_TABLE[i];

        let contiguous = (cur.hijri_year == prev.hijri_year
            && cur.hijri_month == prev.hijri_month + 1)
            || (cur.hijri_year == prev.hijri_year + 1
                && cur.hijri_month == 1
                && prev.hijri_month == 12);
        assert!(contiguous, "anchor rows must cover consecutive Hijri months");

        let length = cur.jdn() - prev.jdn();
        assert!(
            length == 29 || length == 30,
            "adjacent anchors must be 29 or 30 days apart"
        );

        i += 1;
    }

    let first = ANCHOR_TABLE[0];
    let last = ANCHOR_TABLE[LAST_INDEX];
    assert!(
        first.jdn() == crate::cycle::hijri_to_jdn(first.hijri_year, first.hijri_month, 1),
        "first anchor must agree with the arithmetic cycle"
    );
    assert!(
        last.jdn() == crate::cycle::hijri_to_jdn(last.hijri_year, last.hijri_month, 1),
        "terminal anchor must agree with the arithmetic cycle"
    );
};

/// Row at `index`. Panics on an out-of-bounds index; callers only pass
/// indices returned by the lookups below.
pub(crate) fn at(index: usize) -> MonthAnchor {
    ANCHOR_TABLE[index]
}

/// Anchor for an exact (Hijri year, Hijri month) pair, with its row index.
/// `None` signals the pair is outside the table.
pub(crate) fn lookup(year: i32, month: u8) -> Option<(usize, MonthAnchor)> {
    ANCHOR_TABLE
        .binary_search_by_key(&(year, month), |row| (row.hijri_year, row.hijri_month))
        .ok()
        .map(|index| (index, ANCHOR_TABLE[index]))
}

/// Latest anchor whose first day is at or before `jdn`, with its row index.
/// `None` signals the date precedes the table entirely.
pub(crate) fn latest_at_or_before(jdn: i64) -> Option<(usize, MonthAnchor)> {
    let index = ANCHOR_TABLE.partition_point(|row| row.jdn() <= jdn);
    index.checked_sub(1).map(|i| (i, ANCHOR_TABLE[i]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_lengths_are_29_or_30() {
        for pair in ANCHOR_TABLE.windows(2) {
            let length = pair[1].jdn() - pair[0].jdn();
            assert!(
                length == 29 || length == 30,
                "{}-{:02} spans {length} days",
                pair[0].hijri_year,
                pair[0].hijri_month
            );
        }
    }

    #[test]
    fn test_rows_are_chronological_and_contiguous() {
        for pair in ANCHOR_TABLE.windows(2) {
            assert!(pair[0].first_day < pair[1].first_day);
            let expected = if pair[0].hijri_month == 12 {
                (pair[0].hijri_year + 1, 1)
            } else {
                (pair[0].hijri_year, pair[0].hijri_month + 1)
            };
            assert_eq!((pair[1].hijri_year, pair[1].hijri_month), expected);
        }
    }

    #[test]
    fn test_lookup_hits_every_row() {
        for (index, row) in ANCHOR_TABLE.iter().enumerate() {
            let (found_index, found) = lookup(row.hijri_year, row.hijri_month).unwrap();
            assert_eq!(found_index, index);
            assert_eq!(found.first_day, row.first_day);
        }
    }

    #[test]
    fn test_lookup_misses_outside_table() {
        assert!(lookup(1444, 12).is_none());
        assert!(lookup(1451, 2).is_none());
        assert!(lookup(1500, 1).is_none());
    }

    #[test]
    fn test_latest_at_or_before() {
        let first = ANCHOR_TABLE[0];

        // a day before the table starts
        assert!(latest_at_or_before(first.jdn() - 1).is_none());

        // exactly on an anchor
        let (index, found) = latest_at_or_before(first.jdn()).unwrap();
        assert_eq!(index, 0);
        assert_eq!(found.first_day, first.first_day);

        // mid-month selects the month's own anchor, not its successor
        let (index, _) = latest_at_or_before(first.jdn() + 15).unwrap();
        assert_eq!(index, 0);

        // far past the table selects the terminal row
        let last = ANCHOR_TABLE[LAST_INDEX];
        let (index, _) = latest_at_or_before(last.jdn() + 400).unwrap();
        assert_eq!(index, LAST_INDEX);
    }

    #[test]
    fn test_documented_anchor() {
        let (_, anchor) = lookup(1447, 1).unwrap();
        assert_eq!(
            anchor.first_day,
            GregorianDate::new(2025, 6, 26).unwrap()
        );
    }
}
