//! Hebrew calendar.
//!
//! Arithmetic follows the fixed (calculated) calendar: the 19-year/235-month
//! metonic relation positions the mean conjunction of Tishri, and four
//! postponement rules (dehiyyot) move New Year so that only year lengths of
//! 353, 354, 355, 383, 384 or 385 days occur. Months are numbered
//! 1 = Nisan through 12 (13 in leap years, when month 12 is Adar I and
//! month 13 Adar II); the year number changes at Tishri, month 7. The
//! internal running day count starts the year before the first New Year, so
//! every delay arithmetic stays on non-negative values.
//!
//! Valid domain: years 1 through roughly 5 × 10^13; beyond that the parts
//! accumulator in the conjunction formula would overflow 64-bit arithmetic.

use crate::consts::{HEBREW_EPOCH, MOLAD_EPOCH_PARTS, MOLAD_PARTS_PER_MONTH, PARTS_PER_DAY};
use crate::num::{affine_floor_div, floor_mod, split_day};

/// `true` if `year` is one of the seven leap years of the 19-year cycle.
pub fn is_leap_year(year: i64) -> bool {
    floor_mod(7 * year + 1, 19) < 7
}

/// Number of months in `year`: 12, or 13 in a leap year.
pub fn months_in_year(year: i64) -> i64 {
    if is_leap_year(year) { 13 } else { 12 }
}

/// Months elapsed from the epoch conjunction to the Tishri conjunction of
/// `year`; the metonic relation `floor((235·year - 234)/19)` with the
/// coefficient pre-reduced for the affine contract.
fn months_before(year: i64) -> i64 {
    12 * year - 13 + affine_floor_div(year, 7, 13, 19)
}

/// Running day and leftover parts of the mean conjunction `months` lunations
/// after the epoch conjunction. Each lunation is 29 days 13753 parts; the
/// affine identity keeps the parts product bounded by a single day's parts.
fn molad(months: i64) -> (i64, i64) {
    let day = 1
        + 29 * months
        + affine_floor_div(months, MOLAD_PARTS_PER_MONTH, MOLAD_EPOCH_PARTS, PARTS_PER_DAY);
    let parts = floor_mod(
        MOLAD_PARTS_PER_MONTH * floor_mod(months, PARTS_PER_DAY) + MOLAD_EPOCH_PARTS,
        PARTS_PER_DAY,
    );
    (day, parts)
}

/// Running day of the provisional New Year of `year`: the Tishri conjunction
/// with the two conjunction-timing delays applied (the noon rule and the
/// third/second-day parity corrections), then the Sunday/Wednesday/Friday
/// postponement.
fn provisional_new_year(year: i64) -> i64 {
    let (mut day, parts) = molad(months_before(year));
    if parts >= 19440
        || (floor_mod(day, 7) == 2 && parts >= 9924 && !is_leap_year(year))
        || (floor_mod(day, 7) == 1 && parts >= 16789 && is_leap_year(year - 1))
    {
        day += 1;
    }
    if matches!(floor_mod(day, 7), 0 | 3 | 5) {
        day += 1;
    }
    day
}

/// Running day of 1 Tishri of `year`, with the two year-length delays: a raw
/// length of 356 days shortens the current year by starting it two days
/// late, a preceding raw length of 382 days stretches that year by one day.
fn new_year_day(year: i64) -> i64 {
    let day = provisional_new_year(year);
    if provisional_new_year(year + 1) - day == 356 {
        day + 2
    } else if day - provisional_new_year(year - 1) == 382 {
        day + 1
    } else {
        day
    }
}

/// Canonical day number of 1 Tishri of `year`.
///
/// # Example
///
/// ```
/// // Rosh Hashanah 5784 fell on 16 September 2023.
/// assert_eq!(polycal::hebrew::new_year_cdn(5784), 2460204);
/// ```
pub fn new_year_cdn(year: i64) -> i64 {
    HEBREW_EPOCH + new_year_day(year)
}

/// Length of `year` in days; always one of 353, 354, 355, 383, 384, 385.
pub fn year_days(year: i64) -> i64 {
    new_year_day(year + 1) - new_year_day(year)
}

/// Length of `month` of `year` in days.
///
/// Cheshvan (8) and Kislev (9) soak up the year-length variation: Cheshvan
/// is long only in a 355/385-day year, Kislev short only in a 353/383-day
/// year.
pub fn month_days(year: i64, month: i64) -> i64 {
    match month {
        2 | 4 | 6 | 10 | 13 => 29,
        12 if !is_leap_year(year) => 29,
        8 if floor_mod(year_days(year), 10) != 5 => 29,
        9 if floor_mod(year_days(year), 10) == 3 => 29,
        _ => 30,
    }
}

/// Days from 1 Tishri of `year` to the first of `month`, walking the
/// calendar order Tishri..Adar, Nisan..Elul.
fn days_before_month(year: i64, month: i64) -> i64 {
    let mut days = 0;
    if month >= 7 {
        for m in 7..month {
            days += month_days(year, m);
        }
    } else {
        for m in 7..=months_in_year(year) {
            days += month_days(year, m);
        }
        for m in 1..month {
            days += month_days(year, m);
        }
    }
    days
}

/// Converts a Hebrew date to its canonical day number.
///
/// # Example
///
/// ```
/// // 1 January 2000 was 23 Tevet 5760.
/// assert_eq!(polycal::hebrew::to_cdn(5760, 10, 23), 2451545);
/// ```
pub fn to_cdn(year: i64, month: i64, day: i64) -> i64 {
    new_year_cdn(year) + days_before_month(year, month) + day - 1
}

/// Converts a canonical day number to a Hebrew `(year, month, day)`.
pub fn from_cdn(cdn: i64) -> (i64, i64, i64) {
    // Mean year of the 19-year cycle: 35975351/98496 days. The estimate is
    // off by at most one year either way.
    let mut year = affine_floor_div(cdn - HEBREW_EPOCH - 1, 98_496, 0, 35_975_351) + 1;
    while new_year_cdn(year) > cdn {
        year -= 1;
    }
    while new_year_cdn(year + 1) <= cdn {
        year += 1;
    }
    let mut start = new_year_cdn(year);
    let mut month = 7;
    loop {
        let len = month_days(year, month);
        if cdn < start + len {
            return (year, month, cdn - start + 1);
        }
        start += len;
        month = if month == months_in_year(year) {
            1
        } else {
            month + 1
        };
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

/// Display name of `month` in `year`, resolving the leap-year Adar split.
pub fn month_name(year: i64, month: i64) -> &'static str {
    if is_leap_year(year) && month == 12 {
        "Adar I"
    } else {
        let idx = (month - 1).clamp(0, 12) as usize;
        crate::consts::HEBREW_MONTHS[idx]
    }
}
