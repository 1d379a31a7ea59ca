//! Arithmetic Hijri approximation for dates outside the anchor table.
//!
//! Implements the deterministic 30-year intercalation cycle: 354-day common
//! years, eleven 355-day long years per cycle, months alternating 30/29 days
//! with a 30-day Dhu al-Hijjah in long years. Umm-al-Qura month boundaries
//! are declared administratively and can differ from any fixed formula by a
//! day; results from this module are therefore approximate, and the
//! converters mark them as such.

use crate::consts::{HIJRI_COMMON_YEAR_DAYS, HIJRI_CYCLE_DAYS, HIJRI_EPOCH_JDN, MAX_MONTH};

/// Long (355-day) year of the 30-year cycle.
pub(crate) const fn is_long_year(year: i32) -> bool {
    (3 + 11 * year as i64).rem_euclid(30) >= 19
}

/// Month length under the cycle: odd months 30 days, even months 29,
/// except a 30-day month 12 in long years.
pub(crate) const fn month_days(year: i32, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month % 2 == 1 || (month == MAX_MONTH && is_long_year(year)) {
        30
    } else {
        29
    }
}

/// Day offset of the first of `month` from the first of the year.
const fn month_offset(month: u8) -> i64 {
    // ceil(29.5 * (month - 1))
    (59 * (month as i64 - 1) + 1).div_euclid(2)
}

/// Julian Day Number of an arithmetic Hijri date.
pub(crate) const fn hijri_to_jdn(year: i32, month: u8, day: u8) -> i64 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    let y = year as i64;
    let elapsed_years = (y - 1) * HIJRI_COMMON_YEAR_DAYS + (3 + 11 * y).div_euclid(30);
    HIJRI_EPOCH_JDN + elapsed_years + month_offset(month) + day as i64 - 1
}

/// Arithmetic Hijri (year, month, day) of a Julian Day Number.
pub(crate) const fn jdn_to_hijri(jdn: i64) -> (i32, u8, u8) {
    let days = jdn - HIJRI_EPOCH_JDN;
    let year = (30 * days + 10_646).div_euclid(HIJRI_CYCLE_DAYS) as i32;

    let day_of_year = jdn - hijri_to_jdn(year, 1, 1);
    let estimate = (2 * day_of_year).div_euclid(59) + 1;
    let month = if estimate > MAX_MONTH as i64 {
        MAX_MONTH
    } else {
        estimate as u8
    };
    let day = (jdn - hijri_to_jdn(year, month, 1) + 1) as u8;

    (year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_year_pattern() {
        // long years of the 30-year cycle: 2, 5, 7, 10, 13, 16, 18, 21, 24, 26, 29
        let long = [2, 5, 7, 10, 13, 16, 18, 21, 24, 26, 29];
        for offset in 1..=30 {
            let year = 1440 + offset; // 1440 is a cycle boundary
            assert_eq!(
                is_long_year(year),
                long.contains(&offset),
                "cycle offset {offset}"
            );
        }
    }

    #[test]
    fn test_cycle_day_total() {
        // 30 consecutive years span exactly one full cycle of days
        let start = hijri_to_jdn(1441, 1, 1);
        let end = hijri_to_jdn(1471, 1, 1);
        assert_eq!(end - start, HIJRI_CYCLE_DAYS);
    }

    #[test]
    fn test_month_days_alternation() {
        assert_eq!(month_days(1446, 1), 30);
        assert_eq!(month_days(1446, 2), 29);
        assert_eq!(month_days(1446, 11), 30);
        assert_eq!(month_days(1446, 12), 29); // 1446 is a common year
        assert_eq!(month_days(1447, 12), 30); // 1447 is a long year
    }

    #[test]
    fn test_year_lengths_match_month_sums() {
        for year in 1440..1480 {
            let total: i64 = (1..=12).map(|m| i64::from(month_days(year, m))).sum();
            let expected = if is_long_year(year) { 355 } else { 354 };
            assert_eq!(total, expected, "year {year}");
            assert_eq!(
                hijri_to_jdn(year + 1, 1, 1) - hijri_to_jdn(year, 1, 1),
                expected
            );
        }
    }

    #[test]
    fn test_epoch() {
        assert_eq!(hijri_to_jdn(1, 1, 1), HIJRI_EPOCH_JDN);
        assert_eq!(jdn_to_hijri(HIJRI_EPOCH_JDN), (1, 1, 1));
    }

    #[test]
    fn test_round_trip_over_three_centuries() {
        let start = hijri_to_jdn(1300, 1, 1);
        let end = hijri_to_jdn(1600, 1, 1);
        let mut jdn = start;
        while jdn < end {
            let (y, m, d) = jdn_to_hijri(jdn);
            assert!((1..=12).contains(&m));
            assert!((1..=month_days(y, m)).contains(&d));
            assert_eq!(hijri_to_jdn(y, m, d), jdn, "drift at {y}-{m:02}-{d:02}");
            jdn += 1;
        }
    }

    #[test]
    fn test_known_alignment() {
        // 1 Muharram 1447 falls on JDN 2460853 (2025-06-26)
        assert_eq!(hijri_to_jdn(1447, 1, 1), 2_460_853);
        assert_eq!(jdn_to_hijri(2_460_853), (1447, 1, 1));
    }
}
