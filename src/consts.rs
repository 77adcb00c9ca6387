/// First Gregorian day of the Common calendar: 15 October 1582.
///
/// The preceding canonical day, 2299160, is labelled 4 October 1582 in the
/// Julian calendar; no canonical day is skipped, only calendar labels.
pub const REFORM_CDN: i64 = 2_299_161;

/// 1 Muharram AH 1 (Friday 16 July 622, Julian) in the tabular civil reckoning.
pub const ISLAMIC_EPOCH: i64 = 1_948_440;

/// Days in the 30-year Islamic intercalation cycle (19 × 354 + 11 × 355).
pub const ISLAMIC_CYCLE_DAYS: i64 = 10_631;

/// 1 Thoth, year 1 of the Nabonassar era (26 February 747 BC, Julian).
pub const EGYPTIAN_EPOCH: i64 = 1_448_638;

/// Canonical day immediately before 1 Tishri AM 1, so that day 1 of the
/// Hebrew running day count lands on CDN 347998.
pub const HEBREW_EPOCH: i64 = 347_997;

/// Halakic parts (chalakim) per day: 24 × 1080.
pub const PARTS_PER_DAY: i64 = 25_920;

/// Parts in excess of 29 whole days per mean lunation (12 × 1080 + 793).
pub const MOLAD_PARTS_PER_MONTH: i64 = 13_753;

/// Parts from midnight to the epoch conjunction (Tishri AM 1, 5h 204p).
pub const MOLAD_EPOCH_PARTS: i64 = 5_604;

/// Long Count 0.0.0.0.0 and 4 Ajaw 8 Kumk'u under the GMT correlation.
pub const MESOAMERICAN_EPOCH: i64 = 584_283;

/// Days in the Tzolkin cycle (13 × 20).
pub const TZOLKIN_CYCLE: i64 = 260;

/// Days in the Haab year (18 × 20 + 5).
pub const HAAB_CYCLE: i64 = 365;

/// Days in the calendar round, `lcm(260, 365)`.
pub const CALENDAR_ROUND: i64 = 18_980;

/// Mean new moon nearest 6 January 2000, as a canonical (fractional) day.
pub const LUNATION_EPOCH_CD: f64 = 2_451_550.097_66;

/// Mean synodic month in days (Chapront-Touzé & Chapront).
pub const SYNODIC_MONTH: f64 = 29.530_588_861;

/// 1 January 1970, Gregorian.
pub const UNIX_EPOCH_CDN: i64 = 2_440_588;

/// Month names shared by the Gregorian, Julian and Common calendars.
pub const GREGORIAN_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Islamic month names, Muharram through Dhu al-Hijja.
pub const ISLAMIC_MONTHS: [&str; 12] = [
    "Muharram",
    "Safar",
    "Rabi I",
    "Rabi II",
    "Jumada I",
    "Jumada II",
    "Rajab",
    "Sha'ban",
    "Ramadan",
    "Shawwal",
    "Dhu al-Qa'da",
    "Dhu al-Hijja",
];

/// Egyptian month names; the 13th entry is the five epagomenal days.
pub const EGYPTIAN_MONTHS: [&str; 13] = [
    "Thoth",
    "Phaophi",
    "Athyr",
    "Choiak",
    "Tybi",
    "Mechir",
    "Phamenoth",
    "Pharmuthi",
    "Pachons",
    "Payni",
    "Epiphi",
    "Mesore",
    "Epagomenai",
];

/// Hebrew month names in the 1 = Nisan numbering.
///
/// In a leap year month 12 is Adar I and month 13 is Adar II; formatting
/// special-cases the leap-year names, parsing matches "Adar" to month 12.
pub const HEBREW_MONTHS: [&str; 13] = [
    "Nisan",
    "Iyar",
    "Sivan",
    "Tammuz",
    "Av",
    "Elul",
    "Tishri",
    "Cheshvan",
    "Kislev",
    "Tevet",
    "Shevat",
    "Adar",
    "Adar II",
];

/// The 20 Tzolkin day names; index 0 is name 1 (Imix).
pub const TZOLKIN_NAMES: [&str; 20] = [
    "Imix",
    "Ik'",
    "Ak'b'al",
    "K'an",
    "Chikchan",
    "Kimi",
    "Manik'",
    "Lamat",
    "Muluk",
    "Ok",
    "Chuwen",
    "Eb'",
    "B'en",
    "Ix",
    "Men",
    "Kib'",
    "Kab'an",
    "Etz'nab'",
    "Kawak",
    "Ajaw",
];

/// The 19 Haab months; the last, Wayeb', has only days 0 through 4.
pub const HAAB_MONTHS: [&str; 19] = [
    "Pop",
    "Wo'",
    "Sip",
    "Sotz'",
    "Sek",
    "Xul",
    "Yaxk'in",
    "Mol",
    "Ch'en",
    "Yax",
    "Sak'",
    "Keh",
    "Mak",
    "K'ank'in",
    "Muwan",
    "Pax",
    "K'ayab'",
    "Kumk'u",
    "Wayeb'",
];
