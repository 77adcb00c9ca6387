//! Convert dates between nine historical calendars through a canonical day
//! number.
//!
//! Every supported calendar maps to and from one continuous timeline: the
//! canonical day number (CDN), an `i64` counting days from 1 January 4713 BC
//! in the proleptic Julian calendar. Its fractional companion, the canonical
//! day (CD), is an `f64` whose integer part is the CDN and whose fraction is
//! the local time of day; a bare date promotes to noon, `cdn + 0.5`.
//!
//! # Examples
//!
//! Direct conversion through a calendar module:
//!
//! ```
//! use polycal::{gregorian, hebrew, long_count};
//!
//! let cdn = gregorian::to_cdn(2000, 1, 1);
//! assert_eq!(cdn, 2451545);
//! assert_eq!(hebrew::from_cdn(cdn), (5760, 10, 23));
//! assert_eq!(long_count::from_cdn(cdn), (12, 19, 6, 15, 2));
//! ```
//!
//! Batch conversion through the dispatcher, including text:
//!
//! ```
//! use polycal::{convert, Calendar, ConvertOptions, Values};
//!
//! let input = Values::Text(vec!["1 January 2000".into()]);
//! let out = convert(
//!     Calendar::Common,
//!     Calendar::DayCount,
//!     &input,
//!     &ConvertOptions::default(),
//! )
//! .unwrap();
//! assert_eq!(out, Values::Int(vec![2451545]));
//! ```
//!
//! All conversions are pure functions: no I/O, no shared mutable state, and
//! the per-calendar dispatch table is read-only after startup, so everything
//! here may be called concurrently without locking.

pub mod common;
pub mod consts;
pub mod dispatch;
pub mod egyptian;
pub mod gregorian;
pub mod hebrew;
pub mod islamic;
pub mod julian;
pub mod long_count;
pub mod lunar;
pub mod mesoamerican;
pub mod num;
pub mod text;

mod prelude;

pub use dispatch::{
    Calendar, ConvertError, ConvertOptions, Descriptor, Direction, FixedOffset, TimeBase, Values,
    convert, today_cdn,
};
pub use num::{cd_from_cdn, cdn_from_cd};

/// Day of week of a canonical day number, ISO-8601 numbered: `1..=7` for
/// Monday through Sunday.
///
/// # Example
///
/// ```
/// // 1 January 2000 was a Saturday.
/// assert_eq!(polycal::day_of_week(2451545), 6);
/// ```
pub fn day_of_week(cdn: i64) -> i64 {
    num::floor_mod(cdn, 7) + 1
}
