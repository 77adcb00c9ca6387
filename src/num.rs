//! Overflow-safe integer arithmetic for calendar formulas.
//!
//! Calendar rules are stated as "day index modulo cycle length", so every
//! division here is floored: the remainder is always in `[0, |d|)` no matter
//! the sign of the dividend.

/// Floored quotient of `n / d`; pairs with [`floor_mod`].
///
/// # Panics
///
/// Panics if `d` is zero (as ordinary division would).
#[inline]
pub const fn floor_div(n: i64, d: i64) -> i64 {
    n.div_euclid(d)
}

/// Remainder of `n / d`, always in `[0, |d|)`.
#[inline]
pub const fn floor_mod(n: i64, d: i64) -> i64 {
    n.rem_euclid(d)
}

/// Evaluates `floor((f·n + t) / d)` without forming the product `f·n`.
///
/// Decomposed as `f·floor(n/d) + floor((f·(n mod d) + t)/d)`, which bounds
/// the intermediate magnitude by `|f·d|` instead of `|f·n|`. Several
/// calendar formulas pair coefficients in the tens of thousands with day
/// indices spanning billions of days; the direct product would overflow long
/// before any legitimate date does.
///
/// Caller contract: `|f| < |d|` and `|t| < |d|`. A caller holding larger
/// coefficients must pre-reduce them modulo `d` and fold the quotient
/// adjustment in separately.
#[inline]
pub const fn affine_floor_div(n: i64, f: i64, t: i64, d: i64) -> i64 {
    debug_assert!(f.unsigned_abs() < d.unsigned_abs());
    debug_assert!(t.unsigned_abs() < d.unsigned_abs());
    f * floor_div(n, d) + floor_div(f * floor_mod(n, d) + t, d)
}

/// Canonical (fractional) day at noon of the given canonical day number.
#[inline]
pub fn cd_from_cdn(cdn: i64) -> f64 {
    cdn as f64 + 0.5
}

/// Canonical day number containing the given canonical day.
#[inline]
pub fn cdn_from_cd(cd: f64) -> i64 {
    cd.floor() as i64
}

/// Splits a fractional day field into its whole and fractional parts.
#[inline]
pub fn split_day(day: f64) -> (i64, f64) {
    let whole = day.floor();
    (whole as i64, day - whole)
}
