//! Generic text rendering and parsing for calendar dates.
//!
//! One formatter/parser pair serves every day-month-year calendar through
//! its month-name table; the Mesoamerican calendar round and the Long Count
//! get their own composite forms. Parsing is tolerant: whitespace is
//! flexible and month names are matched case- and punctuation-insensitively,
//! exact name first, then prefix, then substring. An input in which no date
//! can be recognized yields `None`, never an error.

/// A classified input token: a number, or a candidate name word.
#[derive(Debug, Clone, PartialEq)]
enum Token {
    Number(f64),
    Word(String),
}

/// Lowercases and strips everything but letters and digits, so "Kumk'u"
/// compares equal to "kumku".
fn normalize(word: &str) -> String {
    word.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Splits the input on whitespace, trims decorations like parentheses and
/// commas, and classifies each piece.
fn tokenize(input: &str) -> Vec<Token> {
    input
        .split_whitespace()
        .filter_map(|raw| {
            let piece = raw.trim_matches(|c: char| !c.is_alphanumeric() && c != '-' && c != '.');
            if piece.is_empty() {
                return None;
            }
            if let Ok(n) = piece.parse::<f64>() {
                return Some(Token::Number(n));
            }
            let word = normalize(piece);
            if word.is_empty() {
                None
            } else {
                Some(Token::Word(word))
            }
        })
        .collect()
}

/// 1-based index of the table entry exactly equal to the normalized token.
fn lookup_exact(token: &str, table: &[&str]) -> Option<usize> {
    table
        .iter()
        .position(|name| normalize(name) == token)
        .map(|i| i + 1)
}

/// 1-based index of the first entry the token abbreviates: prefix matches
/// win over substring matches.
fn lookup_fuzzy(token: &str, table: &[&str]) -> Option<usize> {
    let prefix = table
        .iter()
        .position(|name| normalize(name).starts_with(token));
    prefix
        .or_else(|| table.iter().position(|name| normalize(name).contains(token)))
        .map(|i| i + 1)
}

/// Exact-then-fuzzy lookup.
fn lookup(token: &str, table: &[&str]) -> Option<usize> {
    lookup_exact(token, table).or_else(|| lookup_fuzzy(token, table))
}

/// Formats a day-month-year date; `day` renders via `Display`, so integer
/// days have no decimal point and fractional ones keep theirs.
pub fn format_dmy<D: std::fmt::Display>(day: D, month_name: &str, year: i64) -> String {
    format!("{day} {month_name} {year}")
}

/// Parses a day-month-year string against a month-name table.
///
/// Needs two numeric tokens (day, then year) and one word token naming a
/// month; other words are ignored. Two adjacent words are also tried joined,
/// so "Adar II" and "Dhu al-Hijja" resolve as single names.
///
/// Returns `(year, month, day)`; the day keeps any fractional part.
pub fn parse_dmy(input: &str, table: &[&str]) -> Option<(i64, i64, f64)> {
    let tokens = tokenize(input);
    let numbers: Vec<f64> = tokens
        .iter()
        .filter_map(|t| match t {
            Token::Number(n) => Some(*n),
            Token::Word(_) => None,
        })
        .collect();
    if numbers.len() < 2 {
        return None;
    }
    let mut month = None;
    let mut i = 0;
    while i < tokens.len() {
        if let Token::Word(word) = &tokens[i] {
            let joined = match tokens.get(i + 1) {
                Some(Token::Word(next)) => Some(format!("{word}{next}")),
                _ => None,
            };
            // A two-word exact name outranks a one-word exact name, which
            // outranks every abbreviation.
            month = joined
                .as_deref()
                .and_then(|j| lookup_exact(j, table))
                .or_else(|| lookup_exact(word, table))
                .or_else(|| lookup_fuzzy(word, table))
                .or_else(|| joined.as_deref().and_then(|j| lookup_fuzzy(j, table)));
            if month.is_some() {
                break;
            }
        }
        i += 1;
    }
    Some((numbers[1] as i64, month? as i64, numbers[0]))
}

/// Formats the six calendar-round fields, year bearer in parentheses.
pub fn format_calendar_round<D: std::fmt::Display>(fields: &[i64; 6], haab_day: D) -> String {
    use crate::consts::{HAAB_MONTHS, TZOLKIN_NAMES};
    let [count, name, _, hmonth, ycount, yname] = *fields;
    debug_assert!((1..=20).contains(&name) && (1..=19).contains(&hmonth));
    format!(
        "{count} {} {haab_day} {} ({ycount} {})",
        TZOLKIN_NAMES[(name - 1) as usize],
        HAAB_MONTHS[(hmonth - 1) as usize],
        TZOLKIN_NAMES[(yname - 1) as usize],
    )
}

/// Parsed components of a calendar-round string.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CalendarRoundText {
    /// `(count, name)` of the day's Tzolkin pair.
    pub tzolkin: Option<(i64, i64)>,
    /// `(day, month)` of the Haab pair; the day keeps any fraction.
    pub haab: Option<(f64, i64)>,
    /// `(count, name)` of the year bearer.
    pub bearer: Option<(i64, i64)>,
    /// Trailing number not attached to any name: the reverse-lookup bound.
    pub bound: Option<f64>,
}

/// Parses any subset of "count name" pairs from a calendar-round string,
/// e.g. `"4 Ajaw 8 Kumk'u (7 Eb') 584283"`.
///
/// Each name is pulled to the slot its table admits: a Tzolkin name fills
/// the day pair first and the year bearer second, a Haab name fills the
/// Haab pair. A recognized name must follow its number. Returns `None` when
/// nothing was recognized.
pub fn parse_calendar_round(input: &str) -> Option<CalendarRoundText> {
    use crate::consts::{HAAB_MONTHS, TZOLKIN_NAMES};
    let mut out = CalendarRoundText::default();
    let mut pending: Option<f64> = None;
    for token in tokenize(&input.replace('(', " ").replace(')', " ")) {
        match token {
            Token::Number(n) => pending = Some(n),
            Token::Word(word) => {
                let in_tzolkin = lookup(&word, &TZOLKIN_NAMES);
                let in_haab = lookup(&word, &HAAB_MONTHS);
                let slot = if out.tzolkin.is_none() && in_tzolkin.is_some() {
                    Some(0)
                } else if out.haab.is_none() && in_haab.is_some() {
                    Some(1)
                } else if out.bearer.is_none() && in_tzolkin.is_some() {
                    Some(2)
                } else {
                    None
                };
                let Some(slot) = slot else { continue };
                let number = pending.take()?;
                match slot {
                    0 => out.tzolkin = in_tzolkin.map(|idx| (number as i64, idx as i64)),
                    1 => out.haab = in_haab.map(|idx| (number, idx as i64)),
                    _ => out.bearer = in_tzolkin.map(|idx| (number as i64, idx as i64)),
                }
            }
        }
    }
    if out.tzolkin.is_none() && out.haab.is_none() && out.bearer.is_none() {
        return None;
    }
    out.bound = pending;
    Some(out)
}

/// Formats a Long Count as five dot-separated places, most significant
/// first.
pub fn format_long_count<D: std::fmt::Display>(
    baktun: i64,
    katun: i64,
    tun: i64,
    uinal: i64,
    kin: D,
) -> String {
    format!("{baktun}.{katun}.{tun}.{uinal}.{kin}")
}

/// Parses a dotted Long Count, ignoring any trailing bound number.
pub fn parse_long_count(input: &str) -> Option<[i64; 5]> {
    let mut places = input
        .split(|c: char| c == '.' || c.is_whitespace())
        .filter(|piece| !piece.is_empty())
        .map(str::parse::<i64>);
    let mut out = [0_i64; 5];
    for place in &mut out {
        *place = places.next()?.ok()?;
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{GREGORIAN_MONTHS, HEBREW_MONTHS, ISLAMIC_MONTHS};

    #[test]
    fn normalization_drops_case_and_punctuation() {
        assert_eq!(normalize("Kumk'u"), "kumku");
        assert_eq!(normalize("Etz'nab'"), "etznab");
        assert_eq!(normalize("JANUARY"), "january");
    }

    #[test]
    fn dmy_parses_plain_and_abbreviated() {
        assert_eq!(
            parse_dmy("1 January 2000", &GREGORIAN_MONTHS),
            Some((2000, 1, 1.0))
        );
        assert_eq!(
            parse_dmy("  25   dec  1999 ", &GREGORIAN_MONTHS),
            Some((1999, 12, 25.0))
        );
        assert_eq!(
            parse_dmy("17 ramadan 1445", &ISLAMIC_MONTHS),
            Some((1445, 9, 17.0))
        );
    }

    #[test]
    fn dmy_keeps_fractional_day() {
        let (y, m, d) = parse_dmy("1.25 January 2000", &GREGORIAN_MONTHS).unwrap();
        assert_eq!((y, m), (2000, 1));
        assert!((d - 1.25).abs() < 1e-12);
    }

    #[test]
    fn dmy_negative_year() {
        assert_eq!(
            parse_dmy("24 November -4713", &GREGORIAN_MONTHS),
            Some((-4713, 11, 24.0))
        );
    }

    #[test]
    fn dmy_rejects_incomplete_input() {
        assert_eq!(parse_dmy("January 2000", &GREGORIAN_MONTHS), None);
        assert_eq!(parse_dmy("1 2 2000", &GREGORIAN_MONTHS), None);
        assert_eq!(parse_dmy("", &GREGORIAN_MONTHS), None);
        assert_eq!(parse_dmy("no date here", &GREGORIAN_MONTHS), None);
    }

    #[test]
    fn two_word_names_resolve_exactly() {
        assert_eq!(
            parse_dmy("10 Dhu al-Hijja 1445", &ISLAMIC_MONTHS),
            Some((1445, 12, 10.0))
        );
        assert_eq!(
            parse_dmy("14 Adar II 5784", &HEBREW_MONTHS),
            Some((5784, 13, 14.0))
        );
        // Bare "Adar" still lands on the single-word entry.
        assert_eq!(
            parse_dmy("14 Adar 5785", &HEBREW_MONTHS),
            Some((5785, 12, 14.0))
        );
    }

    #[test]
    fn calendar_round_full_form() {
        let parsed = parse_calendar_round("4 Ajaw 8 Kumk'u (7 Eb') 584283").unwrap();
        assert_eq!(parsed.tzolkin, Some((4, 20)));
        assert_eq!(parsed.haab, Some((8.0, 18)));
        assert_eq!(parsed.bearer, Some((7, 12)));
        assert_eq!(parsed.bound, Some(584_283.0));
    }

    #[test]
    fn calendar_round_subsets() {
        let parsed = parse_calendar_round("4 Ajaw").unwrap();
        assert_eq!(parsed.tzolkin, Some((4, 20)));
        assert_eq!(parsed.haab, None);
        assert_eq!(parsed.bound, None);

        let parsed = parse_calendar_round("8 Kumk'u 600000").unwrap();
        assert_eq!(parsed.tzolkin, None);
        assert_eq!(parsed.haab, Some((8.0, 18)));
        assert_eq!(parsed.bound, Some(600_000.0));

        assert_eq!(parse_calendar_round("no names at all"), None);
        assert_eq!(parse_calendar_round("Ajaw"), None); // name without count
    }

    #[test]
    fn calendar_round_kan_vs_kankin() {
        // "K'an" is a Tzolkin name, "K'ank'in" a Haab month; exact matching
        // keeps them apart in either order.
        let parsed = parse_calendar_round("4 K'an 2 K'ank'in").unwrap();
        assert_eq!(parsed.tzolkin, Some((4, 4)));
        assert_eq!(parsed.haab, Some((2.0, 14)));
        let parsed = parse_calendar_round("2 K'ank'in 4 K'an").unwrap();
        assert_eq!(parsed.tzolkin, Some((4, 4)));
        assert_eq!(parsed.haab, Some((2.0, 14)));
    }

    #[test]
    fn round_trip_through_format() {
        let fields = [4, 20, 8, 18, 7, 12];
        let rendered = format_calendar_round(&fields, 8);
        assert_eq!(rendered, "4 Ajaw 8 Kumk'u (7 Eb')");
        let parsed = parse_calendar_round(&rendered).unwrap();
        assert_eq!(parsed.tzolkin, Some((4, 20)));
        assert_eq!(parsed.haab, Some((8.0, 18)));
        assert_eq!(parsed.bearer, Some((7, 12)));
    }

    #[test]
    fn long_count_text() {
        assert_eq!(format_long_count(9, 12, 11, 5, 18), "9.12.11.5.18");
        assert_eq!(parse_long_count("9.12.11.5.18"), Some([9, 12, 11, 5, 18]));
        assert_eq!(
            parse_long_count("9.12.11.5.18 2500000"),
            Some([9, 12, 11, 5, 18])
        );
        assert_eq!(parse_long_count("9.12.11"), None);
        assert_eq!(parse_long_count("not a count"), None);
    }

    #[test]
    fn dmy_formatting() {
        assert_eq!(format_dmy(1, "January", 2000), "1 January 2000");
        assert_eq!(format_dmy(1.5, "January", 2000), "1.5 January 2000");
        assert_eq!(format_dmy(24, "November", -4713), "24 November -4713");
    }
}
