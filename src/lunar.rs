//! Mean synodic lunation count.
//!
//! Dates in this system are a single number: lunations elapsed since the
//! mean new moon nearest 6 January 2000 (negative before it). The mean new
//! moon drifts slowly as the synodic month changes, so the forward direction
//! is the Chapront-Touzé/Chapront polynomial and the inverse is a linear
//! estimate refined by one Newton step against the residual.

use crate::consts::{LUNATION_EPOCH_CD, SYNODIC_MONTH};

/// Canonical day of the mean new moon starting lunation `lunation`.
///
/// Accepts a fractional lunation; the fraction interpolates linearly into
/// the month.
pub fn to_cd(lunation: f64) -> f64 {
    // Julian centuries since the epoch lunation.
    let t = lunation / 1236.85;
    LUNATION_EPOCH_CD
        + SYNODIC_MONTH * lunation
        + t * t * (0.000_154_37 + t * (-0.000_000_150 + t * 0.000_000_000_73))
}

/// Lunation in progress at canonical day `cd`, as a real number whose
/// fractional part is the phase of the month.
pub fn from_cd(cd: f64) -> f64 {
    let estimate = (cd - LUNATION_EPOCH_CD) / SYNODIC_MONTH;
    // One Newton step absorbs the polynomial correction terms.
    estimate + (cd - to_cd(estimate)) / SYNODIC_MONTH
}

/// Canonical day number containing the mean new moon of `lunation`.
pub fn to_cdn(lunation: i64) -> i64 {
    to_cd(lunation as f64).floor() as i64
}

/// Lunation in progress at noon of canonical day `cdn`.
pub fn from_cdn(cdn: i64) -> i64 {
    from_cd(crate::num::cd_from_cdn(cdn)).floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_lunation() {
        assert!((to_cd(0.0) - 2_451_550.097_66).abs() < 1e-9);
        assert!(from_cd(2_451_550.097_66).abs() < 1e-9);
    }

    #[test]
    fn inverse_is_exact_to_microdays() {
        for k in (-20_000..20_000).step_by(137) {
            let cd = to_cd(k as f64);
            assert!((from_cd(cd) - k as f64).abs() < 1e-6, "lunation {k}");
        }
    }

    #[test]
    fn lunation_brackets_its_days() {
        // Every day between two consecutive mean new moons reports the
        // earlier lunation number.
        for k in (-5_000..5_000).step_by(61) {
            let day_after_new_moon = to_cdn(k) + 1;
            assert_eq!(from_cdn(day_after_new_moon), k, "lunation {k}");
            let start = to_cdn(k);
            let end = to_cdn(k + 1);
            assert!((29..=30).contains(&(end - start)), "lunation {k}");
            assert!(from_cdn(end + 1) > k, "lunation {k}");
        }
    }

    #[test]
    fn century_drift_is_small_but_real() {
        // 1236.85 lunations per Julian century; the correction terms move
        // the mean new moon by minutes, not days.
        let plain = LUNATION_EPOCH_CD + SYNODIC_MONTH * 12_368.5;
        let drift = to_cd(12_368.5) - plain;
        assert!(drift > 0.01 && drift < 0.03, "drift {drift}");
    }
}
