//! Egyptian civil calendar (the 365-day wandering year).
//!
//! Twelve months of 30 days plus five epagomenal days counted as a short
//! thirteenth month. No leap rule at all, so both directions are a single
//! floored division against the Nabonassar epoch.

use crate::consts::EGYPTIAN_EPOCH;
use crate::num::{floor_div, floor_mod, split_day};

/// Converts an Egyptian date to its canonical day number.
pub fn to_cdn(year: i64, month: i64, day: i64) -> i64 {
    EGYPTIAN_EPOCH + 365 * (year - 1) + 30 * (month - 1) + day - 1
}

/// Converts a canonical day number to an Egyptian `(year, month, day)`.
pub fn from_cdn(cdn: i64) -> (i64, i64, i64) {
    let days = cdn - EGYPTIAN_EPOCH;
    let year = floor_div(days, 365) + 1;
    let doy = floor_mod(days, 365);
    (year, doy / 30 + 1, doy % 30 + 1)
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch() {
        assert_eq!(to_cdn(1, 1, 1), 1_448_638);
        assert_eq!(from_cdn(1_448_638), (1, 1, 1));
        // 26 February 747 BC, Julian
        assert_eq!(crate::julian::from_cdn(1_448_638), (-746, 2, 26));
    }

    #[test]
    fn epagomenal_days() {
        // Day 365 of a year is the 5th epagomenal day; day 366 starts year+1.
        let last = to_cdn(100, 13, 5);
        assert_eq!(from_cdn(last), (100, 13, 5));
        assert_eq!(from_cdn(last + 1), (101, 1, 1));
    }

    #[test]
    fn round_trip_including_pre_epoch() {
        let mut cdn = -500_000;
        while cdn < 4_000_000 {
            let (y, m, d) = from_cdn(cdn);
            assert!((1..=13).contains(&m) && (1..=30).contains(&d));
            assert!(m != 13 || d <= 5, "cdn {cdn}");
            assert_eq!(to_cdn(y, m, d), cdn, "cdn {cdn}");
            cdn += 367;
        }
    }

    #[test]
    fn known_date() {
        assert_eq!(from_cdn(2_451_545), (2748, 9, 13));
    }
}
