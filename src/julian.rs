//! Julian Day Number arithmetic.
//!
//! A Julian Day Number here is the midnight-based integer day count used as
//! the common intermediate representation between the two calendars. The
//! conversions are the standard century-correction decomposition and are
//! exact inverses of each other for the whole supported year range.

/// Julian Day Number of a proleptic Gregorian date.
pub(crate) const fn gregorian_to_jdn(year: i32, month: u8, day: u8) -> i64 {
    debug_assert!(month != 0 && month <= 12);

    // January and February count as months 13 and 14 of the previous year
    let (y, m) = if month <= 2 {
        (year as i64 - 1, month as i64 + 12)
    } else {
        (year as i64, month as i64)
    };

    let century = y.div_euclid(100);
    let correction = 2 - century + century.div_euclid(4);

    // (1461 * x) / 4 == floor(365.25 * x); (153 * x) / 5 == floor(30.6001 * x)
    let year_days = (1461 * (y + 4716)).div_euclid(4);
    let month_days = (153 * (m + 1)).div_euclid(5);

    year_days + month_days + day as i64 + correction - 1524
}

/// Proleptic Gregorian (year, month, day) of a Julian Day Number.
pub(crate) const fn jdn_to_gregorian(jdn: i64) -> (i32, u8, u8) {
    let alpha = (4 * jdn - 7_468_865).div_euclid(146_097);
    let a = jdn + 1 + alpha - alpha.div_euclid(4);
    let b = a + 1524;
    let c = (100 * b - 12_210).div_euclid(36_525);
    let year_days = (1461 * c).div_euclid(4);
    let e = (10_000 * (b - year_days)).div_euclid(306_001);

    let day = b - year_days - (306_001 * e).div_euclid(10_000);
    let month = if e < 14 { e - 1 } else { e - 13 };
    let year = if month > 2 { c - 4716 } else { c - 4715 };

    (year as i32, month as u8, day as u8)
}

/// Weekday index of a Julian Day Number, Sunday = 0.
pub(crate) const fn weekday_index(jdn: i64) -> usize {
    (jdn + 1).rem_euclid(7) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_day_numbers() {
        assert_eq!(gregorian_to_jdn(1970, 1, 1), 2_440_588);
        assert_eq!(gregorian_to_jdn(2000, 1, 1), 2_451_545);
        assert_eq!(gregorian_to_jdn(2025, 6, 26), 2_460_853);
        assert_eq!(gregorian_to_jdn(1, 1, 1), 1_721_426);
    }

    #[test]
    fn test_decomposition_of_known_day_numbers() {
        assert_eq!(jdn_to_gregorian(2_440_588), (1970, 1, 1));
        assert_eq!(jdn_to_gregorian(2_451_545), (2000, 1, 1));
        assert_eq!(jdn_to_gregorian(2_460_853), (2025, 6, 26));
        assert_eq!(jdn_to_gregorian(1_721_426), (1, 1, 1));
    }

    #[test]
    fn test_exact_inverse_across_centuries() {
        // every 13 days over ~8000 years, crossing all century corrections
        let start = gregorian_to_jdn(100, 1, 1);
        let end = gregorian_to_jdn(8000, 12, 31);
        let mut jdn = start;
        while jdn <= end {
            let (y, m, d) = jdn_to_gregorian(jdn);
            assert_eq!(gregorian_to_jdn(y, m, d), jdn, "drift at {y}-{m:02}-{d:02}");
            jdn += 13;
        }
    }

    #[test]
    fn test_consecutive_days_are_consecutive() {
        // month and year rollovers, including a leap February and a century
        let samples = [
            (2024, 2, 28),
            (2024, 12, 31),
            (1900, 2, 28),
            (2000, 2, 28),
            (2025, 6, 30),
        ];
        for (y, m, d) in samples {
            let jdn = gregorian_to_jdn(y, m, d);
            let (ny, nm, nd) = jdn_to_gregorian(jdn + 1);
            assert_eq!(gregorian_to_jdn(ny, nm, nd), jdn + 1);
            assert!((ny, nm, nd) > (y, m, d));
        }
    }

    #[test]
    fn test_weekday_index() {
        assert_eq!(weekday_index(gregorian_to_jdn(2025, 6, 26)), 4); // Thursday
        assert_eq!(weekday_index(gregorian_to_jdn(2000, 1, 1)), 6); // Saturday
        assert_eq!(weekday_index(gregorian_to_jdn(2024, 7, 7)), 0); // Sunday
    }
}
