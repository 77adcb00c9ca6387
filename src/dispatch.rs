//! Calendar registry and the generic conversion dispatcher.
//!
//! Every calendar is one variant of the closed [`Calendar`] enum and one
//! immutable [`Descriptor`] in a process-wide table: its numeric arities,
//! the two total numeric conversion pairs, and four optional text function
//! references. An absent reference is a checked condition
//! ([`ConvertError::UnsupportedDirection`]), not a crash. The table is
//! built at compile time and only ever read, so concurrent conversion needs
//! no synchronization.

use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::prelude::*;
use crate::{
    common, consts, egyptian, gregorian, hebrew, islamic, julian, long_count, lunar, mesoamerican,
    text,
};

/// The registered calendars plus the canonical day count itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Calendar {
    #[display(fmt = "gregorian")]
    Gregorian,
    #[display(fmt = "julian")]
    Julian,
    #[display(fmt = "common")]
    Common,
    #[display(fmt = "islamic")]
    Islamic,
    #[display(fmt = "egyptian")]
    Egyptian,
    #[display(fmt = "hebrew")]
    Hebrew,
    #[display(fmt = "lunar")]
    Lunar,
    #[display(fmt = "mesoamerican")]
    Mesoamerican,
    #[display(fmt = "long-count")]
    LongCount,
    #[display(fmt = "day-count")]
    DayCount,
}

/// A conversion direction a calendar may or may not support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Direction {
    #[display(fmt = "day to text")]
    DayToText,
    #[display(fmt = "text to day")]
    TextToDay,
}

/// Error type for dispatcher operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    /// The calendar name matches no registered calendar.
    #[error("unknown calendar \"{0}\"")]
    UnknownCalendar(String),

    /// The calendar has no conversion function for the requested direction.
    #[error("the {calendar} calendar does not support {direction} conversion")]
    UnsupportedDirection {
        /// Calendar missing the function.
        calendar: Calendar,
        /// Direction that was requested.
        direction: Direction,
    },

    /// The input length does not divide into whole dates.
    #[error("input length {len} is not a multiple of {arity} values per {calendar} date")]
    ShapeMismatch {
        /// Number of elements supplied.
        len: usize,
        /// Elements consumed per date.
        arity: usize,
        /// Calendar whose arity was violated.
        calendar: Calendar,
    },
}

/// Immutable per-calendar conversion record.
///
/// The numeric pairs are total; the text references are optional. Reverse
/// lookups receive the caller's upper bound; calendars that do not need one
/// ignore it. A numeric `to_*` returning `None` marks an internally
/// inconsistent date, which batch conversion turns into the canonical
/// sentinel 0.
pub struct Descriptor {
    /// Numeric elements consumed per input date.
    pub numeric_in: usize,
    /// Numeric elements produced per output date.
    pub numeric_out: usize,
    /// Canonical day number to numeric fields.
    pub from_cdn: fn(i64, &mut Vec<i64>),
    /// Numeric fields to canonical day number, given an upper bound.
    pub to_cdn: fn(&[i64], i64) -> Option<i64>,
    /// Fractional canonical day to numeric fields.
    pub from_cd: fn(f64, &mut Vec<f64>),
    /// Numeric fields to fractional canonical day, given an upper bound.
    pub to_cd: fn(&[f64], f64) -> Option<f64>,
    /// Canonical day number to text.
    pub format_cdn: Option<fn(i64) -> String>,
    /// Fractional canonical day to text.
    pub format_cd: Option<fn(f64) -> String>,
    /// Text to canonical day number, given an upper bound.
    pub parse_cdn: Option<fn(&str, i64) -> Option<i64>>,
    /// Text to fractional canonical day, given an upper bound.
    pub parse_cd: Option<fn(&str, f64) -> Option<f64>>,
}

/// Hebrew month names for parsing only: the public table plus the leap-year
/// spelling of month 12, which folds back onto 12.
const HEBREW_PARSE_MONTHS: [&str; 14] = [
    "Nisan", "Iyar", "Sivan", "Tammuz", "Av", "Elul", "Tishri", "Cheshvan", "Kislev", "Tevet",
    "Shevat", "Adar", "Adar II", "Adar I",
];

static GREGORIAN: Descriptor = Descriptor {
    numeric_in: 3,
    numeric_out: 3,
    from_cdn: |cdn, out| {
        let (y, m, d) = gregorian::from_cdn(cdn);
        out.extend([y, m, d]);
    },
    to_cdn: |fields, _| match *fields {
        [y, m, d] => Some(gregorian::to_cdn(y, m, d)),
        _ => None,
    },
    from_cd: |cd, out| {
        let (y, m, d) = gregorian::from_cd(cd);
        out.extend([y as f64, m as f64, d]);
    },
    to_cd: |fields, _| match *fields {
        [y, m, d] => Some(gregorian::to_cd(y as i64, m as i64, d)),
        _ => None,
    },
    format_cdn: Some(|cdn| {
        let (y, m, d) = gregorian::from_cdn(cdn);
        text::format_dmy(d, consts::GREGORIAN_MONTHS[(m - 1) as usize], y)
    }),
    format_cd: Some(|cd| {
        let (y, m, d) = gregorian::from_cd(cd);
        text::format_dmy(d, consts::GREGORIAN_MONTHS[(m - 1) as usize], y)
    }),
    parse_cdn: Some(|input, _| {
        let (y, m, d) = text::parse_dmy(input, &consts::GREGORIAN_MONTHS)?;
        Some(gregorian::to_cdn(y, m, d.floor() as i64))
    }),
    parse_cd: Some(|input, _| {
        let (y, m, d) = text::parse_dmy(input, &consts::GREGORIAN_MONTHS)?;
        Some(gregorian::to_cd(y, m, d))
    }),
};

static JULIAN: Descriptor = Descriptor {
    numeric_in: 3,
    numeric_out: 3,
    from_cdn: |cdn, out| {
        let (y, m, d) = julian::from_cdn(cdn);
        out.extend([y, m, d]);
    },
    to_cdn: |fields, _| match *fields {
        [y, m, d] => Some(julian::to_cdn(y, m, d)),
        _ => None,
    },
    from_cd: |cd, out| {
        let (y, m, d) = julian::from_cd(cd);
        out.extend([y as f64, m as f64, d]);
    },
    to_cd: |fields, _| match *fields {
        [y, m, d] => Some(julian::to_cd(y as i64, m as i64, d)),
        _ => None,
    },
    format_cdn: Some(|cdn| {
        let (y, m, d) = julian::from_cdn(cdn);
        text::format_dmy(d, consts::GREGORIAN_MONTHS[(m - 1) as usize], y)
    }),
    format_cd: Some(|cd| {
        let (y, m, d) = julian::from_cd(cd);
        text::format_dmy(d, consts::GREGORIAN_MONTHS[(m - 1) as usize], y)
    }),
    parse_cdn: Some(|input, _| {
        let (y, m, d) = text::parse_dmy(input, &consts::GREGORIAN_MONTHS)?;
        Some(julian::to_cdn(y, m, d.floor() as i64))
    }),
    parse_cd: Some(|input, _| {
        let (y, m, d) = text::parse_dmy(input, &consts::GREGORIAN_MONTHS)?;
        Some(julian::to_cd(y, m, d))
    }),
};

static COMMON: Descriptor = Descriptor {
    numeric_in: 3,
    numeric_out: 3,
    from_cdn: |cdn, out| {
        let (y, m, d) = common::from_cdn(cdn);
        out.extend([y, m, d]);
    },
    to_cdn: |fields, _| match *fields {
        [y, m, d] => Some(common::to_cdn(y, m, d)),
        _ => None,
    },
    from_cd: |cd, out| {
        let (y, m, d) = common::from_cd(cd);
        out.extend([y as f64, m as f64, d]);
    },
    to_cd: |fields, _| match *fields {
        [y, m, d] => Some(common::to_cd(y as i64, m as i64, d)),
        _ => None,
    },
    format_cdn: Some(|cdn| {
        let (y, m, d) = common::from_cdn(cdn);
        text::format_dmy(d, consts::GREGORIAN_MONTHS[(m - 1) as usize], y)
    }),
    format_cd: Some(|cd| {
        let (y, m, d) = common::from_cd(cd);
        text::format_dmy(d, consts::GREGORIAN_MONTHS[(m - 1) as usize], y)
    }),
    parse_cdn: Some(|input, _| {
        let (y, m, d) = text::parse_dmy(input, &consts::GREGORIAN_MONTHS)?;
        Some(common::to_cdn(y, m, d.floor() as i64))
    }),
    parse_cd: Some(|input, _| {
        let (y, m, d) = text::parse_dmy(input, &consts::GREGORIAN_MONTHS)?;
        Some(common::to_cd(y, m, d))
    }),
};

static ISLAMIC: Descriptor = Descriptor {
    numeric_in: 3,
    numeric_out: 3,
    from_cdn: |cdn, out| {
        let (y, m, d) = islamic::from_cdn(cdn);
        out.extend([y, m, d]);
    },
    to_cdn: |fields, _| match *fields {
        [y, m, d] => Some(islamic::to_cdn(y, m, d)),
        _ => None,
    },
    from_cd: |cd, out| {
        let (y, m, d) = islamic::from_cd(cd);
        out.extend([y as f64, m as f64, d]);
    },
    to_cd: |fields, _| match *fields {
        [y, m, d] => Some(islamic::to_cd(y as i64, m as i64, d)),
        _ => None,
    },
    format_cdn: Some(|cdn| {
        let (y, m, d) = islamic::from_cdn(cdn);
        text::format_dmy(d, consts::ISLAMIC_MONTHS[(m - 1) as usize], y)
    }),
    format_cd: Some(|cd| {
        let (y, m, d) = islamic::from_cd(cd);
        text::format_dmy(d, consts::ISLAMIC_MONTHS[(m - 1) as usize], y)
    }),
    parse_cdn: Some(|input, _| {
        let (y, m, d) = text::parse_dmy(input, &consts::ISLAMIC_MONTHS)?;
        Some(islamic::to_cdn(y, m, d.floor() as i64))
    }),
    parse_cd: Some(|input, _| {
        let (y, m, d) = text::parse_dmy(input, &consts::ISLAMIC_MONTHS)?;
        Some(islamic::to_cd(y, m, d))
    }),
};

static EGYPTIAN: Descriptor = Descriptor {
    numeric_in: 3,
    numeric_out: 3,
    from_cdn: |cdn, out| {
        let (y, m, d) = egyptian::from_cdn(cdn);
        out.extend([y, m, d]);
    },
    to_cdn: |fields, _| match *fields {
        [y, m, d] => Some(egyptian::to_cdn(y, m, d)),
        _ => None,
    },
    from_cd: |cd, out| {
        let (y, m, d) = egyptian::from_cd(cd);
        out.extend([y as f64, m as f64, d]);
    },
    to_cd: |fields, _| match *fields {
        [y, m, d] => Some(egyptian::to_cd(y as i64, m as i64, d)),
        _ => None,
    },
    format_cdn: Some(|cdn| {
        let (y, m, d) = egyptian::from_cdn(cdn);
        text::format_dmy(d, consts::EGYPTIAN_MONTHS[(m - 1) as usize], y)
    }),
    format_cd: Some(|cd| {
        let (y, m, d) = egyptian::from_cd(cd);
        text::format_dmy(d, consts::EGYPTIAN_MONTHS[(m - 1) as usize], y)
    }),
    parse_cdn: Some(|input, _| {
        let (y, m, d) = text::parse_dmy(input, &consts::EGYPTIAN_MONTHS)?;
        Some(egyptian::to_cdn(y, m, d.floor() as i64))
    }),
    parse_cd: Some(|input, _| {
        let (y, m, d) = text::parse_dmy(input, &consts::EGYPTIAN_MONTHS)?;
        Some(egyptian::to_cd(y, m, d))
    }),
};

static HEBREW: Descriptor = Descriptor {
    numeric_in: 3,
    numeric_out: 3,
    from_cdn: |cdn, out| {
        let (y, m, d) = hebrew::from_cdn(cdn);
        out.extend([y, m, d]);
    },
    to_cdn: |fields, _| match *fields {
        [y, m, d] => Some(hebrew::to_cdn(y, m, d)),
        _ => None,
    },
    from_cd: |cd, out| {
        let (y, m, d) = hebrew::from_cd(cd);
        out.extend([y as f64, m as f64, d]);
    },
    to_cd: |fields, _| match *fields {
        [y, m, d] => Some(hebrew::to_cd(y as i64, m as i64, d)),
        _ => None,
    },
    format_cdn: Some(|cdn| {
        let (y, m, d) = hebrew::from_cdn(cdn);
        text::format_dmy(d, hebrew::month_name(y, m), y)
    }),
    format_cd: Some(|cd| {
        let (y, m, d) = hebrew::from_cd(cd);
        text::format_dmy(d, hebrew::month_name(y, m), y)
    }),
    parse_cdn: Some(|input, _| {
        let (y, m, d) = text::parse_dmy(input, &HEBREW_PARSE_MONTHS)?;
        Some(hebrew::to_cdn(y, if m == 14 { 12 } else { m }, d.floor() as i64))
    }),
    parse_cd: Some(|input, _| {
        let (y, m, d) = text::parse_dmy(input, &HEBREW_PARSE_MONTHS)?;
        Some(hebrew::to_cd(y, if m == 14 { 12 } else { m }, d))
    }),
};

static LUNAR: Descriptor = Descriptor {
    numeric_in: 1,
    numeric_out: 1,
    from_cdn: |cdn, out| out.push(lunar::from_cdn(cdn)),
    to_cdn: |fields, _| match *fields {
        [lunation] => Some(lunar::to_cdn(lunation)),
        _ => None,
    },
    from_cd: |cd, out| out.push(lunar::from_cd(cd)),
    to_cd: |fields, _| match *fields {
        [lunation] => Some(lunar::to_cd(lunation)),
        _ => None,
    },
    format_cdn: None,
    format_cd: None,
    parse_cdn: None,
    parse_cd: None,
};

static MESOAMERICAN: Descriptor = Descriptor {
    numeric_in: 6,
    numeric_out: 6,
    from_cdn: |cdn, out| out.extend(mesoamerican::from_cdn(cdn)),
    to_cdn: |fields, bound| match *fields {
        [c, n, hd, hm, yc, yn] => {
            mesoamerican::to_cdn(Some((c, n)), Some((hd, hm)), Some((yc, yn)), bound)
        }
        _ => None,
    },
    from_cd: |cd, out| out.extend(mesoamerican::from_cd(cd)),
    to_cd: |fields, bound| match *fields {
        [c, n, hd, hm, yc, yn] => mesoamerican::to_cd(
            Some((c as i64, n as i64)),
            Some((hd, hm as i64)),
            Some((yc as i64, yn as i64)),
            bound,
        ),
        _ => None,
    },
    format_cdn: Some(|cdn| {
        let fields = mesoamerican::from_cdn(cdn);
        text::format_calendar_round(&fields, fields[2])
    }),
    format_cd: Some(|cd| {
        let fields = mesoamerican::from_cdn(cd.floor() as i64);
        text::format_calendar_round(&fields, fields[2] as f64 + (cd - cd.floor()))
    }),
    parse_cdn: Some(|input, bound| {
        let parsed = text::parse_calendar_round(input)?;
        let bound = parsed.bound.map_or(bound, |b| b as i64);
        let haab = parsed.haab.map(|(d, m)| (d.floor() as i64, m));
        mesoamerican::to_cdn(parsed.tzolkin, haab, parsed.bearer, bound)
    }),
    parse_cd: Some(|input, bound| {
        let parsed = text::parse_calendar_round(input)?;
        let bound = parsed.bound.unwrap_or(bound);
        mesoamerican::to_cd(parsed.tzolkin, parsed.haab, parsed.bearer, bound)
    }),
};

static LONG_COUNT: Descriptor = Descriptor {
    numeric_in: 5,
    numeric_out: 5,
    from_cdn: |cdn, out| {
        let (b, k, t, u, kin) = long_count::from_cdn(cdn);
        out.extend([b, k, t, u, kin]);
    },
    to_cdn: |fields, _| match *fields {
        [b, k, t, u, kin] => Some(long_count::to_cdn(b, k, t, u, kin)),
        _ => None,
    },
    from_cd: |cd, out| {
        let (b, k, t, u, kin) = long_count::from_cd(cd);
        out.extend([b as f64, k as f64, t as f64, u as f64, kin]);
    },
    to_cd: |fields, _| match *fields {
        [b, k, t, u, kin] => Some(long_count::to_cd(
            b as i64, k as i64, t as i64, u as i64, kin,
        )),
        _ => None,
    },
    format_cdn: Some(|cdn| {
        let (b, k, t, u, kin) = long_count::from_cdn(cdn);
        text::format_long_count(b, k, t, u, kin)
    }),
    format_cd: Some(|cd| {
        let (b, k, t, u, kin) = long_count::from_cd(cd);
        text::format_long_count(b, k, t, u, kin)
    }),
    parse_cdn: Some(|input, _| {
        let [b, k, t, u, kin] = text::parse_long_count(input)?;
        Some(long_count::to_cdn(b, k, t, u, kin))
    }),
    parse_cd: Some(|input, _| {
        let [b, k, t, u, kin] = text::parse_long_count(input)?;
        Some(long_count::to_cdn(b, k, t, u, kin) as f64)
    }),
};

static DAY_COUNT: Descriptor = Descriptor {
    numeric_in: 1,
    numeric_out: 1,
    from_cdn: |cdn, out| out.push(cdn),
    to_cdn: |fields, _| match *fields {
        [cdn] => Some(cdn),
        _ => None,
    },
    from_cd: |cd, out| out.push(cd),
    to_cd: |fields, _| match *fields {
        [cd] => Some(cd),
        _ => None,
    },
    format_cdn: None,
    format_cd: None,
    parse_cdn: None,
    parse_cd: None,
};

impl Calendar {
    /// Every registered calendar, in registry order.
    pub const ALL: [Self; 10] = [
        Self::Gregorian,
        Self::Julian,
        Self::Common,
        Self::Islamic,
        Self::Egyptian,
        Self::Hebrew,
        Self::Lunar,
        Self::Mesoamerican,
        Self::LongCount,
        Self::DayCount,
    ];

    /// The calendar's conversion record in the process-wide table.
    pub fn descriptor(self) -> &'static Descriptor {
        match self {
            Self::Gregorian => &GREGORIAN,
            Self::Julian => &JULIAN,
            Self::Common => &COMMON,
            Self::Islamic => &ISLAMIC,
            Self::Egyptian => &EGYPTIAN,
            Self::Hebrew => &HEBREW,
            Self::Lunar => &LUNAR,
            Self::Mesoamerican => &MESOAMERICAN,
            Self::LongCount => &LONG_COUNT,
            Self::DayCount => &DAY_COUNT,
        }
    }

    /// Looks a calendar up by name, case- and punctuation-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::UnknownCalendar`] for an unregistered name.
    pub fn from_name(name: &str) -> Result<Self, ConvertError> {
        let key: String = name
            .chars()
            .filter(|c| c.is_alphanumeric())
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "gregorian" => Ok(Self::Gregorian),
            "julian" => Ok(Self::Julian),
            "common" | "civil" => Ok(Self::Common),
            "islamic" | "hijri" => Ok(Self::Islamic),
            "egyptian" => Ok(Self::Egyptian),
            "hebrew" | "jewish" => Ok(Self::Hebrew),
            "lunar" | "lunation" => Ok(Self::Lunar),
            "mesoamerican" | "tzolkinhaab" | "calendarround" => Ok(Self::Mesoamerican),
            "longcount" => Ok(Self::LongCount),
            "daycount" | "canonical" | "julianday" => Ok(Self::DayCount),
            _ => Err(ConvertError::UnknownCalendar(name.to_owned())),
        }
    }
}

impl FromStr for Calendar {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl Serialize for Calendar {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Calendar {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A homogeneous collection of date values, standing in for the host's
/// array storage: integers, floats, or one string per date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, From)]
pub enum Values {
    /// Integer fields, `numeric_in` per date.
    Int(Vec<i64>),
    /// Floating fields, `numeric_in` per date.
    Float(Vec<f64>),
    /// One string per date.
    Text(Vec<String>),
}

impl Values {
    /// Number of elements (not dates) in the collection.
    pub fn len(&self) -> usize {
        match self {
            Self::Int(v) => v.len(),
            Self::Float(v) => v.len(),
            Self::Text(v) => v.len(),
        }
    }

    /// `true` if the collection holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Opaque time-base adjustment applied to the canonical day between source
/// and destination, the seam toward the ephemeris subsystem.
pub trait TimeBase {
    /// Maps a canonical day in the source time base to the destination one.
    fn adjust(&self, cd: f64) -> f64;
}

/// A fixed UTC offset, the only time-zone handling this crate does.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedOffset {
    hours: f64,
}

impl FixedOffset {
    /// Offset of `hours` east of the reference meridian.
    pub const fn new(hours: f64) -> Self {
        Self { hours }
    }
}

impl TimeBase for FixedOffset {
    fn adjust(&self, cd: f64) -> f64 {
        cd + self.hours / 24.0
    }
}

/// Options for [`convert`].
#[derive(Default, Clone, Copy)]
pub struct ConvertOptions<'a> {
    /// Force the fractional canonical day as internal representation even
    /// for integer input.
    pub fractional: bool,
    /// Produce text output instead of numeric fields.
    pub text_output: bool,
    /// Upper bound for cyclic reverse lookups; today when absent.
    pub bound: Option<i64>,
    /// Time-base adjustment between source and destination; forces the
    /// fractional representation.
    pub time_base: Option<&'a dyn TimeBase>,
}

/// Today's canonical day number from the system clock.
pub fn today_cdn() -> i64 {
    let days = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| (d.as_secs() / 86_400) as i64)
        .unwrap_or(0);
    consts::UNIX_EPOCH_CDN + days
}

/// Converts a collection of dates from one calendar to another.
///
/// The internal representation is the integer canonical day number, or the
/// fractional canonical day when the input is floating, a time base is
/// supplied, or `options.fractional` is set. Unparseable or internally
/// inconsistent dates degrade element-by-element to canonical day 0; shape
/// and capability problems fail the whole call.
///
/// # Example
///
/// ```
/// use polycal::{convert, Calendar, ConvertOptions, Values};
///
/// let input = Values::Text(vec!["1 January 2000".into(), "25 December 1999".into()]);
/// let out = convert(
///     Calendar::Common,
///     Calendar::DayCount,
///     &input,
///     &ConvertOptions::default(),
/// )
/// .unwrap();
/// assert_eq!(out, Values::Int(vec![2451545, 2451538]));
/// ```
///
/// # Errors
///
/// [`ConvertError::UnsupportedDirection`] when text input or output is
/// requested for a calendar without the matching text function;
/// [`ConvertError::ShapeMismatch`] when the input length is not a multiple
/// of the source calendar's arity.
pub fn convert(
    from: Calendar,
    to: Calendar,
    input: &Values,
    options: &ConvertOptions<'_>,
) -> Result<Values, ConvertError> {
    let src = from.descriptor();
    let dst = to.descriptor();
    let float_internal =
        matches!(input, Values::Float(_)) || options.fractional || options.time_base.is_some();

    let per_date = match input {
        Values::Text(_) => 1,
        _ => src.numeric_in,
    };
    let len = input.len();
    if len % per_date != 0 {
        return Err(ConvertError::ShapeMismatch {
            len,
            arity: per_date,
            calendar: from,
        });
    }
    let dates = len / per_date;
    let bound = options.bound.unwrap_or_else(today_cdn);

    if float_internal {
        if matches!(input, Values::Text(_)) {
            require(src.parse_cd, from, Direction::TextToDay)?;
        }
        let format = if options.text_output {
            Some(require(dst.format_cd, to, Direction::DayToText)?)
        } else {
            None
        };

        let mut canonical = Vec::with_capacity(dates);
        match input {
            Values::Int(v) => {
                let mut fields = Vec::with_capacity(src.numeric_in);
                for chunk in v.chunks_exact(per_date) {
                    fields.clear();
                    fields.extend(chunk.iter().map(|&x| x as f64));
                    canonical.push((src.to_cd)(&fields, bound as f64).unwrap_or(0.0));
                }
            }
            Values::Float(v) => {
                for chunk in v.chunks_exact(per_date) {
                    canonical.push((src.to_cd)(chunk, bound as f64).unwrap_or(0.0));
                }
            }
            Values::Text(items) => {
                for item in items {
                    let cd = src.parse_cd.and_then(|parse| parse(item, bound as f64));
                    canonical.push(cd.unwrap_or(0.0));
                }
            }
        }
        if let Some(time_base) = options.time_base {
            for cd in &mut canonical {
                *cd = time_base.adjust(*cd);
            }
        }

        if let Some(format) = format {
            let out: Vec<String> = canonical.iter().map(|&cd| format(cd)).collect();
            debug_assert_eq!(out.len(), dates);
            Ok(Values::Text(out))
        } else {
            let mut out = Vec::with_capacity(dates * dst.numeric_out);
            for &cd in &canonical {
                (dst.from_cd)(cd, &mut out);
            }
            debug_assert_eq!(out.len(), dates * dst.numeric_out);
            Ok(Values::Float(out))
        }
    } else {
        if matches!(input, Values::Text(_)) {
            require(src.parse_cdn, from, Direction::TextToDay)?;
        }
        let format = if options.text_output {
            Some(require(dst.format_cdn, to, Direction::DayToText)?)
        } else {
            None
        };

        let mut canonical = Vec::with_capacity(dates);
        match input {
            Values::Int(v) => {
                for chunk in v.chunks_exact(per_date) {
                    canonical.push((src.to_cdn)(chunk, bound).unwrap_or(0));
                }
            }
            Values::Text(items) => {
                for item in items {
                    let cdn = src.parse_cdn.and_then(|parse| parse(item, bound));
                    canonical.push(cdn.unwrap_or(0));
                }
            }
            Values::Float(_) => unreachable!("float input always takes the fractional path"),
        }

        if let Some(format) = format {
            let out: Vec<String> = canonical.iter().map(|&cdn| format(cdn)).collect();
            debug_assert_eq!(out.len(), dates);
            Ok(Values::Text(out))
        } else {
            let mut out = Vec::with_capacity(dates * dst.numeric_out);
            for &cdn in &canonical {
                (dst.from_cdn)(cdn, &mut out);
            }
            debug_assert_eq!(out.len(), dates * dst.numeric_out);
            Ok(Values::Int(out))
        }
    }
}

fn require<T>(slot: Option<T>, calendar: Calendar, direction: Direction) -> Result<T, ConvertError> {
    slot.ok_or(ConvertError::UnsupportedDirection {
        calendar,
        direction,
    })
}
