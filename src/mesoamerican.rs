//! Mesoamerican Tzolkin/Haab calendar round.
//!
//! Two interlocking cycles: the 260-day Tzolkin (a count of 1..=13 against
//! 20 day names) and the 365-day Haab (18 months of 20 days, numbered from
//! 0, plus the five days of Wayeb'). A date is the six-tuple
//! `(trecena, day-name, haab-day, haab-month, year-trecena, year-day-name)`
//! where the trailing pair is the year bearer: the Tzolkin of the current
//! 0 Pop. The pair of cycles repeats only every `lcm(260, 365) = 18980`
//! days, one calendar round.
//!
//! The forward direction is closed-form modular arithmetic. The reverse
//! direction is a bounded search: each given pair pins the day index to one
//! residue class, and simultaneous classes are combined pairwise by stepping
//! the candidate down by the first period until the second constraint holds,
//! at most `lcm/period` steps. An inconsistent combination has no solution
//! and reports `None`.

use crate::consts::{HAAB_CYCLE, MESOAMERICAN_EPOCH, TZOLKIN_CYCLE};
use crate::num::{floor_mod, split_day};

/// Day-of-year of the epoch within the Haab (8 Kumk'u).
const EPOCH_HAAB_DOY: i64 = 348;

/// Tzolkin pair of a canonical day: `(count 1..=13, name 1..=20)`.
pub fn tzolkin(cdn: i64) -> (i64, i64) {
    let days = cdn - MESOAMERICAN_EPOCH;
    (floor_mod(days + 3, 13) + 1, floor_mod(days + 19, 20) + 1)
}

/// Haab pair of a canonical day: `(day 0..=19, month 1..=19)`.
pub fn haab(cdn: i64) -> (i64, i64) {
    let doy = floor_mod(cdn - MESOAMERICAN_EPOCH + EPOCH_HAAB_DOY, HAAB_CYCLE);
    (doy % 20, doy / 20 + 1)
}

/// Year bearer: the Tzolkin pair of the day 0 Pop opening the Haab year
/// that contains `cdn`.
pub fn year_bearer(cdn: i64) -> (i64, i64) {
    let doy = floor_mod(cdn - MESOAMERICAN_EPOCH + EPOCH_HAAB_DOY, HAAB_CYCLE);
    tzolkin(cdn - doy)
}

/// All six numeric fields of a canonical day.
pub fn from_cdn(cdn: i64) -> [i64; 6] {
    let (count, name) = tzolkin(cdn);
    let (hday, hmonth) = haab(cdn);
    let (ycount, yname) = year_bearer(cdn);
    [count, name, hday, hmonth, ycount, yname]
}

/// Latest canonical day at or below `bound` matching every given pair.
///
/// Any non-empty subset of the three pairs may be supplied; omitted pairs
/// are unconstrained. A year-bearer pair without a Haab pair resolves to
/// the 0 Pop day of the latest matching year. Returns `None` when a pair is
/// out of range or the combination is internally inconsistent (a Tzolkin
/// and Haab that never coincide).
pub fn to_cdn(
    tzolkin_pair: Option<(i64, i64)>,
    haab_pair: Option<(i64, i64)>,
    bearer_pair: Option<(i64, i64)>,
    bound: i64,
) -> Option<i64> {
    let mut constraints: Vec<(i64, i64)> = Vec::with_capacity(3);
    if let Some((count, name)) = tzolkin_pair {
        constraints.push((tzolkin_offset(count, name)?, TZOLKIN_CYCLE));
    }
    if let Some((day, month)) = haab_pair {
        constraints.push((haab_offset(day, month)?, HAAB_CYCLE));
    }
    if let Some((count, name)) = bearer_pair {
        let year_start = tzolkin_offset(count, name)?;
        if let Some((day, month)) = haab_pair {
            // The bearer names the year's first day, so the target day sits
            // exactly day-of-year after a day in that Tzolkin class.
            let doy = (month - 1) * 20 + day;
            constraints.push((year_start + doy, TZOLKIN_CYCLE));
        } else {
            // Bearer alone: resolve to the matching 0 Pop itself.
            constraints.push((year_start, TZOLKIN_CYCLE));
            constraints.push((-EPOCH_HAAB_DOY, HAAB_CYCLE));
        }
    }
    let (&(first_offset, first_period), rest) = constraints.split_first()?;
    let mut period = first_period;
    let mut days = latest_in_class(first_offset, first_period, bound - MESOAMERICAN_EPOCH);
    for &(offset, p) in rest {
        days = step_to_class(days, period, offset, p)?;
        period = lcm(period, p);
    }
    Some(days + MESOAMERICAN_EPOCH)
}

/// Residue of the day index (mod 260) for a Tzolkin pair, itself found by
/// the pairwise solver over the 13- and 20-day sub-cycles.
fn tzolkin_offset(count: i64, name: i64) -> Option<i64> {
    if !(1..=13).contains(&count) || !(1..=20).contains(&name) {
        return None;
    }
    let v = latest_in_class(count - 4, 13, TZOLKIN_CYCLE - 1);
    step_to_class(v, 13, name - 20, 20)
}

/// Residue of the day index (mod 365) for a Haab pair.
fn haab_offset(day: i64, month: i64) -> Option<i64> {
    if !(0..=19).contains(&day) || !(1..=19).contains(&month) {
        return None;
    }
    let doy = (month - 1) * 20 + day;
    if doy >= HAAB_CYCLE {
        return None; // Wayeb' has only five days
    }
    Some(doy - EPOCH_HAAB_DOY)
}

/// Largest value at or below `bound` congruent to `offset` modulo `period`.
fn latest_in_class(offset: i64, period: i64, bound: i64) -> i64 {
    bound - floor_mod(bound - offset, period)
}

/// Steps `value` down by `period` until it is congruent to `offset` modulo
/// `other`, trying one combined period's worth of candidates.
fn step_to_class(mut value: i64, period: i64, offset: i64, other: i64) -> Option<i64> {
    let target = floor_mod(offset, other);
    for _ in 0..lcm(period, other) / period {
        if floor_mod(value, other) == target {
            return Some(value);
        }
        value -= period;
    }
    None
}

fn gcd(mut a: i64, mut b: i64) -> i64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a.abs()
}

fn lcm(a: i64, b: i64) -> i64 {
    a / gcd(a, b) * b
}

/// Fractional-day variant of [`from_cdn`]; the fraction rides on the Haab
/// day field.
pub fn from_cd(cd: f64) -> [f64; 6] {
    let cdn = cd.floor();
    let fields = from_cdn(cdn as i64);
    let mut out = fields.map(|v| v as f64);
    out[2] += cd - cdn;
    out
}

/// Fractional-day variant of [`to_cdn`].
pub fn to_cd(
    tzolkin_pair: Option<(i64, i64)>,
    haab_pair: Option<(f64, i64)>,
    bearer_pair: Option<(i64, i64)>,
    bound: f64,
) -> Option<f64> {
    let (haab_int, frac) = match haab_pair {
        Some((day, month)) => {
            let (whole, frac) = split_day(day);
            (Some((whole, month)), frac)
        }
        None => (None, 0.0),
    };
    let cdn = to_cdn(tzolkin_pair, haab_int, bearer_pair, bound.floor() as i64)?;
    Some(cdn as f64 + frac)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::CALENDAR_ROUND;

    #[test]
    fn epoch_is_four_ajaw_eight_kumku() {
        assert_eq!(tzolkin(MESOAMERICAN_EPOCH), (4, 20)); // 4 Ajaw
        assert_eq!(haab(MESOAMERICAN_EPOCH), (8, 18)); // 8 Kumk'u
        assert_eq!(year_bearer(MESOAMERICAN_EPOCH), (7, 12)); // 7 Eb'
        assert_eq!(from_cdn(MESOAMERICAN_EPOCH), [4, 20, 8, 18, 7, 12]);
    }

    #[test]
    fn known_date() {
        // 1 January 2000 = 11 Ik' 10 K'ank'in, year 1 Eb'.
        assert_eq!(from_cdn(2_451_545), [11, 2, 10, 14, 1, 12]);
    }

    #[test]
    fn cycle_periods() {
        for cdn in (0..200_000).step_by(257) {
            assert_eq!(tzolkin(cdn), tzolkin(cdn + TZOLKIN_CYCLE));
            assert_eq!(haab(cdn), haab(cdn + HAAB_CYCLE));
            let combined = (tzolkin(cdn), haab(cdn));
            assert_eq!(combined, (tzolkin(cdn + CALENDAR_ROUND), haab(cdn + CALENDAR_ROUND)));
        }
    }

    #[test]
    fn no_smaller_combined_period() {
        let base = (tzolkin(MESOAMERICAN_EPOCH), haab(MESOAMERICAN_EPOCH));
        for p in 1..CALENDAR_ROUND {
            let here = (
                tzolkin(MESOAMERICAN_EPOCH + p),
                haab(MESOAMERICAN_EPOCH + p),
            );
            assert_ne!(base, here, "repeat after {p} days");
        }
    }

    #[test]
    fn reverse_lookup_recovers_the_day() {
        for cdn in (584_283..3_000_000).step_by(7919) {
            let [c, n, hd, hm, yc, yn] = from_cdn(cdn);
            assert_eq!(to_cdn(Some((c, n)), Some((hd, hm)), Some((yc, yn)), cdn), Some(cdn));
            assert_eq!(to_cdn(Some((c, n)), Some((hd, hm)), None, cdn), Some(cdn));
            assert_eq!(to_cdn(Some((c, n)), None, None, cdn), Some(cdn));
            assert_eq!(to_cdn(None, Some((hd, hm)), None, cdn), Some(cdn));
            // A later bound lands on the same or a later repetition.
            let again = to_cdn(Some((c, n)), Some((hd, hm)), None, cdn + 25_000);
            assert_eq!(again, Some(cdn + CALENDAR_ROUND));
        }
    }

    #[test]
    fn bearer_alone_resolves_to_year_start() {
        let cdn = 2_451_545;
        let doy = (haab(cdn).1 - 1) * 20 + haab(cdn).0;
        let start = cdn - doy;
        let (yc, yn) = year_bearer(cdn);
        assert_eq!(to_cdn(None, None, Some((yc, yn)), cdn), Some(start));
        assert_eq!(haab(start), (0, 1)); // 0 Pop
    }

    #[test]
    fn inconsistent_pairs_have_no_solution() {
        // 4 Ajaw can fall on 8 Kumk'u but never on 9 Kumk'u.
        assert_eq!(to_cdn(Some((4, 20)), Some((9, 18)), None, 10_000_000), None);
        // Epoch day with the wrong year bearer.
        assert_eq!(
            to_cdn(Some((4, 20)), Some((8, 18)), Some((8, 12)), 10_000_000),
            None
        );
    }

    #[test]
    fn out_of_range_pairs_rejected() {
        assert_eq!(to_cdn(Some((0, 5)), None, None, 1_000_000), None);
        assert_eq!(to_cdn(Some((14, 5)), None, None, 1_000_000), None);
        assert_eq!(to_cdn(None, Some((5, 19)), None, 1_000_000), None); // 5 Wayeb'
        assert_eq!(to_cdn(None, Some((20, 3)), None, 1_000_000), None);
    }

    #[test]
    fn wayeb_days_exist_up_to_four() {
        assert!(to_cdn(None, Some((4, 19)), None, 1_000_000).is_some());
    }
}
