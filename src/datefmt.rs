// src/datefmt.rs
//! Token-pattern date formatting for date sections.
//!
//! The pattern mini-language is the one the section editor documents
//! (`DD`, `Do`, `MMM`, ...). Month names are fixed English tables, so
//! formatting is identical regardless of host locale.

use chrono::{DateTime, Datelike, Timelike, Utc};
use serde::{Deserialize, Deserializer};

const MONTHS_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const MONTHS_LONG: [&str; 12] = [
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

/// Recognized tokens, longest match first. Order matters: `MMMM` must be
/// tried before `MMM` before `MM`, or a long token would be eaten by its
/// own prefix.
const TOKENS: [&str; 16] = [
    "MMMM", "MMM", "MM", "DD", "Do", "YYYY", "YY", "HH", "H", "hh", "h", "mm", "m", "ss", "s", "A",
];

/// Ordinal suffix for a day of month: 1st, 2nd, 3rd, 4th .. 11th-13th
/// all "th", 21st, 22nd, ...
fn ordinal_suffix(n: u32) -> &'static str {
    if n > 3 && n < 21 {
        return "th";
    }
    match n % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// Render `date` through a token pattern. Characters outside recognized
/// tokens pass through unchanged.
pub fn format_date(date: &DateTime<Utc>, pattern: &str) -> String {
    let day = date.day();
    let year = date.year();
    let month_index = date.month0() as usize;
    let hours24 = date.hour();
    let hours12 = if hours24 % 12 == 0 { 12 } else { hours24 % 12 };
    let minutes = date.minute();
    let seconds = date.second();
    let ampm = if hours24 >= 12 { "PM" } else { "AM" };

    let replacement = |token: &str| -> String {
        match token {
            "MMMM" => MONTHS_LONG[month_index].to_string(),
            "MMM" => MONTHS_SHORT[month_index].to_string(),
            "MM" => format!("{:02}", month_index + 1),
            "DD" => format!("{:02}", day),
            "Do" => format!("{}{}", day, ordinal_suffix(day)),
            "YYYY" => format!("{:04}", year),
            "YY" => format!("{:02}", year.rem_euclid(100)),
            "HH" => format!("{:02}", hours24),
            "H" => hours24.to_string(),
            "hh" => format!("{:02}", hours12),
            "h" => hours12.to_string(),
            "mm" => format!("{:02}", minutes),
            "m" => minutes.to_string(),
            "ss" => format!("{:02}", seconds),
            "s" => seconds.to_string(),
            "A" => ampm.to_string(),
            _ => unreachable!("unknown token"),
        }
    };

    let mut out = String::with_capacity(pattern.len());
    let mut rest = pattern;
    'scan: while !rest.is_empty() {
        for token in TOKENS {
            if rest.starts_with(token) {
                out.push_str(&replacement(token));
                rest = &rest[token.len()..];
                continue 'scan;
            }
        }
        let ch = rest.chars().next().expect("non-empty remainder");
        out.push(ch);
        rest = &rest[ch.len_utf8()..];
    }
    out
}

/// Tolerant deserializer for persisted `dateValue` fields.
///
/// Stored dates are RFC 3339 strings. A malformed value recovers to the
/// current time instead of failing the whole load (§ the desktop app
/// behaved the same way when reviving its stored JSON).
pub fn deserialize_date_value<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<serde_json::Value> = Option::deserialize(deserializer)?;
    Ok(match raw {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(s)) => match DateTime::parse_from_rfc3339(&s) {
            Ok(parsed) => Some(parsed.with_timezone(&Utc)),
            Err(error) => {
                tracing::warn!(value = %s, %error, "unparsable dateValue, substituting now");
                Some(Utc::now())
            }
        },
        Some(other) => {
            tracing::warn!(?other, "non-string dateValue, substituting now");
            Some(Utc::now())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn test_zero_padded_date_tokens() {
        let d = date(2024, 1, 5, 0, 0, 0);
        assert_eq!(format_date(&d, "DD/MM/YYYY"), "05/01/2024");
        assert_eq!(format_date(&d, "YYYY-MM-DD"), "2024-01-05");
    }

    #[test]
    fn test_month_names_and_ordinal() {
        let d = date(2024, 1, 1, 0, 0, 0);
        assert_eq!(format_date(&d, "Do MMMM YYYY"), "1st January 2024");
        assert_eq!(format_date(&d, "MMM DD YYYY"), "Jan 01 2024");
        assert_eq!(format_date(&d, "MMMM Do, YYYY"), "January 1st, 2024");
    }

    #[test]
    fn test_ordinal_suffixes() {
        assert_eq!(ordinal_suffix(1), "st");
        assert_eq!(ordinal_suffix(2), "nd");
        assert_eq!(ordinal_suffix(3), "rd");
        assert_eq!(ordinal_suffix(4), "th");
        assert_eq!(ordinal_suffix(11), "th");
        assert_eq!(ordinal_suffix(12), "th");
        assert_eq!(ordinal_suffix(13), "th");
        assert_eq!(ordinal_suffix(21), "st");
        assert_eq!(ordinal_suffix(22), "nd");
        assert_eq!(ordinal_suffix(23), "rd");
        assert_eq!(ordinal_suffix(31), "st");
    }

    #[test]
    fn test_time_tokens() {
        let d = date(2024, 6, 15, 14, 7, 9);
        assert_eq!(format_date(&d, "HH:mm:ss"), "14:07:09");
        assert_eq!(format_date(&d, "H:m:s"), "14:7:9");
        assert_eq!(format_date(&d, "hh:mm A"), "02:07 PM");
        assert_eq!(format_date(&d, "h A"), "2 PM");
    }

    #[test]
    fn test_twelve_hour_midnight_and_noon() {
        let midnight = date(2024, 6, 15, 0, 30, 0);
        assert_eq!(format_date(&midnight, "hh:mm A"), "12:30 AM");

        let noon = date(2024, 6, 15, 12, 0, 0);
        assert_eq!(format_date(&noon, "h A"), "12 PM");
    }

    #[test]
    fn test_two_digit_year() {
        assert_eq!(format_date(&date(2024, 3, 1, 0, 0, 0), "YY"), "24");
        assert_eq!(format_date(&date(2007, 3, 1, 0, 0, 0), "YY"), "07");
    }

    #[test]
    fn test_literals_pass_through() {
        let d = date(2024, 1, 5, 0, 0, 0);
        assert_eq!(format_date(&d, "on DD/MM!"), "on 05/01!");
        // Bare D and M are not tokens, only their longer forms.
        assert_eq!(format_date(&d, "D M"), "D M");
    }

    #[test]
    fn test_longest_match_wins() {
        let d = date(2024, 1, 5, 0, 0, 0);
        // MMMM must not be consumed as MM + MM.
        assert_eq!(format_date(&d, "MMMM"), "January");
        assert_eq!(format_date(&d, "MMM"), "Jan");
    }

    #[test]
    fn test_deserialize_valid_date() {
        #[derive(Deserialize)]
        struct Holder {
            #[serde(deserialize_with = "deserialize_date_value")]
            value: Option<DateTime<Utc>>,
        }

        let holder: Holder =
            serde_json::from_str(r#"{"value": "2024-01-05T00:00:00Z"}"#).unwrap();
        assert_eq!(holder.value, Some(date(2024, 1, 5, 0, 0, 0)));

        let holder: Holder = serde_json::from_str(r#"{"value": null}"#).unwrap();
        assert!(holder.value.is_none());
    }

    #[test]
    fn test_deserialize_malformed_date_recovers() {
        #[derive(Deserialize)]
        struct Holder {
            #[serde(deserialize_with = "deserialize_date_value")]
            value: Option<DateTime<Utc>>,
        }

        let before = Utc::now();
        let holder: Holder = serde_json::from_str(r#"{"value": "not-a-date"}"#).unwrap();
        let substituted = holder.value.expect("substituted with now");
        assert!(substituted >= before);
    }
}
