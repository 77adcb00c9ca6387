//! The Common calendar: Julian before the 1582 reform, Gregorian after.
//!
//! Julian 4 October 1582 is followed immediately by Gregorian
//! 15 October 1582. The canonical timeline has no gap; only the calendar's
//! own labels jump. Labels inside the dropped range (5-14 October 1582)
//! follow the Julian rule, as the plain boundary comparison dictates.

use crate::consts::REFORM_CDN;
use crate::num::split_day;
use crate::{gregorian, julian};

/// First date written in the Gregorian rule.
const REFORM_YMD: (i64, i64, i64) = (1582, 10, 15);

/// Converts a Common-calendar date to its canonical day number.
///
/// # Example
///
/// ```
/// use polycal::common;
///
/// assert_eq!(common::to_cdn(1582, 10, 4) + 1, common::to_cdn(1582, 10, 15));
/// ```
pub fn to_cdn(year: i64, month: i64, day: i64) -> i64 {
    if (year, month, day) >= REFORM_YMD {
        gregorian::to_cdn(year, month, day)
    } else {
        julian::to_cdn(year, month, day)
    }
}

/// Converts a canonical day number to a Common-calendar `(year, month, day)`.
pub fn from_cdn(cdn: i64) -> (i64, i64, i64) {
    if cdn >= REFORM_CDN {
        gregorian::from_cdn(cdn)
    } else {
        julian::from_cdn(cdn)
    }
}

/// Fractional-day variant of [`to_cdn`].
pub fn to_cd(year: i64, month: i64, day: f64) -> f64 {
    let (whole, frac) = split_day(day);
    to_cdn(year, month, whole) as f64 + frac
}

/// Fractional-day variant of [`from_cdn`].
pub fn from_cd(cd: f64) -> (i64, i64, f64) {
    let cdn = cd.floor();
    let (y, m, d) = from_cdn(cdn as i64);
    (y, m, d as f64 + (cd - cdn))
}

/// `true` if `year` is a leap year under the rule in force for that year.
pub fn is_leap_year(year: i64) -> bool {
    if year >= REFORM_YMD.0 {
        gregorian::is_leap_year(year)
    } else {
        julian::is_leap_year(year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn switchover_has_no_day_gap() {
        assert_eq!(to_cdn(1582, 10, 4), 2_299_160);
        assert_eq!(to_cdn(1582, 10, 15), 2_299_161);
        assert_eq!(from_cdn(2_299_160), (1582, 10, 4));
        assert_eq!(from_cdn(2_299_161), (1582, 10, 15));
    }

    #[test]
    fn matches_julian_below_and_gregorian_above() {
        for cdn in 2_299_100..2_299_161 {
            assert_eq!(from_cdn(cdn), julian::from_cdn(cdn));
        }
        for cdn in 2_299_161..2_299_220 {
            assert_eq!(from_cdn(cdn), gregorian::from_cdn(cdn));
        }
    }

    #[test]
    fn round_trip_across_the_reform() {
        let mut cdn = -1_000_000;
        while cdn < 4_000_000 {
            let (y, m, d) = from_cdn(cdn);
            assert_eq!(to_cdn(y, m, d), cdn, "cdn {cdn}");
            cdn += 991;
        }
    }

    #[test]
    fn century_leap_rule_changes_at_reform() {
        assert!(is_leap_year(1500)); // Julian rule
        assert!(!is_leap_year(1700)); // Gregorian rule
        assert!(is_leap_year(1600));
    }
}
