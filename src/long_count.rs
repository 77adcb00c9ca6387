//! Mesoamerican Long Count.
//!
//! A mixed-radix positional day count against the same epoch as the
//! calendar round: 20 kin to the uinal, 18 uinal to the tun, then 20 tun to
//! the katun and 20 katun to the baktun. `from_cdn` always yields canonical
//! digits (kin and tun 0..=19, uinal 0..=17, katun 0..=19, baktun carrying
//! the sign); `to_cdn` accepts any integers and lets excess roll upward.

use crate::consts::MESOAMERICAN_EPOCH;
use crate::num::{floor_div, floor_mod, split_day};

/// Days per place: kin, uinal, tun, katun, baktun.
pub const PLACE_VALUES: [i64; 5] = [1, 20, 360, 7_200, 144_000];

/// Converts a Long Count to its canonical day number.
///
/// # Example
///
/// ```
/// // 13.0.0.0.0 completed on 21 December 2012.
/// let cdn = polycal::long_count::to_cdn(13, 0, 0, 0, 0);
/// assert_eq!(polycal::gregorian::from_cdn(cdn), (2012, 12, 21));
/// ```
pub fn to_cdn(baktun: i64, katun: i64, tun: i64, uinal: i64, kin: i64) -> i64 {
    MESOAMERICAN_EPOCH + kin + 20 * uinal + 360 * tun + 7_200 * katun + 144_000 * baktun
}

/// Converts a canonical day number to `(baktun, katun, tun, uinal, kin)`.
///
/// # Example
///
/// ```
/// assert_eq!(polycal::long_count::from_cdn(584283), (0, 0, 0, 0, 0));
/// ```
pub fn from_cdn(cdn: i64) -> (i64, i64, i64, i64, i64) {
    let days = cdn - MESOAMERICAN_EPOCH;
    let baktun = floor_div(days, 144_000);
    let r = floor_mod(days, 144_000);
    let katun = r / 7_200;
    let r = r % 7_200;
    let tun = r / 360;
    let r = r % 360;
    (baktun, katun, tun, r / 20, r % 20)
}

/// Fractional-day variant of [`to_cdn`]; the fraction rides on the kin.
pub fn to_cd(baktun: i64, katun: i64, tun: i64, uinal: i64, kin: f64) -> f64 {
    let (whole, frac) = split_day(kin);
    to_cdn(baktun, katun, tun, uinal, whole) as f64 + frac
}

/// Fractional-day variant of [`from_cdn`].
pub fn from_cd(cd: f64) -> (i64, i64, i64, i64, f64) {
    let cdn = cd.floor();
    let (b, k, t, u, kin) = from_cdn(cdn as i64);
    (b, k, t, u, kin as f64 + (cd - cdn))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_and_known_dates() {
        assert_eq!(from_cdn(584_283), (0, 0, 0, 0, 0));
        assert_eq!(to_cdn(0, 0, 0, 0, 0), 584_283);
        assert_eq!(from_cdn(2_451_545), (12, 19, 6, 15, 2));
        assert_eq!(to_cdn(13, 0, 0, 0, 0), 2_456_283);
    }

    #[test]
    fn field_round_trip_within_declared_ranges() {
        for b in [-2, 0, 7, 13, 19] {
            for k in [0, 9, 19] {
                for t in [0, 11, 19] {
                    for u in [0, 8, 17] {
                        for kin in [0, 13, 19] {
                            let cdn = to_cdn(b, k, t, u, kin);
                            assert_eq!(from_cdn(cdn), (b, k, t, u, kin));
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn excess_digits_roll_upward() {
        assert_eq!(to_cdn(0, 0, 0, 0, 20), to_cdn(0, 0, 0, 1, 0));
        assert_eq!(to_cdn(0, 0, 0, 18, 0), to_cdn(0, 0, 1, 0, 0));
    }

    #[test]
    fn negative_days_keep_canonical_digits() {
        let (b, k, t, u, kin) = from_cdn(584_283 - 1);
        assert_eq!((b, k, t, u, kin), (-1, 19, 19, 17, 19));
        assert_eq!(to_cdn(b, k, t, u, kin), 584_282);
    }
}
