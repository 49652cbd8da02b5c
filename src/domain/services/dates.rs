//! Date tokens as they appear in content files.
//!
//! Accepted forms, after trimming and collapsing whitespace:
//! `2024-03-15`, `2024/03/15`, `03/15/2024`, RFC 3339 timestamps,
//! zone-less ISO date-times (`2024-03-15T10:00:00`, fractional seconds allowed),
//! `March 15, 2024`, `Mar 15 2024`, `15 March 2024`,
//! `Mar 2024`, `March 2024`, `2024-03` (first of the month) and `2024` (January 1).
//! `Sept` is accepted as an abbreviation of September.

use crate::utils::error::{Result, SiteError};
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

const FULL_DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%B %d, %Y",
    "%B %d %Y",
    "%d %B %Y",
];

const DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

pub fn parse_date_token(token: &str) -> Result<NaiveDate> {
    let normalized = token
        .split_whitespace()
        .map(|word| {
            // chrono 只認得 Sep
            if word.eq_ignore_ascii_case("sept") || word.eq_ignore_ascii_case("sept.") {
                "Sep"
            } else {
                word
            }
        })
        .collect::<Vec<_>>()
        .join(" ");
    if normalized.is_empty() {
        return Err(invalid(token));
    }

    for format in FULL_DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(&normalized, format) {
            return Ok(date);
        }
    }

    if let Ok(datetime) = DateTime::parse_from_rfc3339(&normalized) {
        return Ok(datetime.date_naive());
    }

    for format in DATE_TIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(&normalized, format) {
            return Ok(datetime.date());
        }
    }

    // 只有年月：補上當月第一天
    if let Ok(date) = NaiveDate::parse_from_str(&format!("1 {}", normalized), "%d %B %Y") {
        return Ok(date);
    }
    if let Ok(date) = NaiveDate::parse_from_str(&format!("{}-01", normalized), "%Y-%m-%d") {
        return Ok(date);
    }

    if normalized.len() == 4 && normalized.chars().all(|c| c.is_ascii_digit()) {
        if let Some(date) = normalized
            .parse::<i32>()
            .ok()
            .and_then(|year| NaiveDate::from_ymd_opt(year, 1, 1))
        {
            return Ok(date);
        }
    }

    Err(invalid(token))
}

fn invalid(token: &str) -> SiteError {
    SiteError::InvalidDate {
        token: token.to_string(),
    }
}

/// `"March 15, 2024"`, optionally followed by a relative suffix such as `"(3mo ago)"`.
pub fn format_date(date: NaiveDate, include_relative: bool, today: NaiveDate) -> String {
    let full = date.format("%B %-d, %Y").to_string();
    if !include_relative {
        return full;
    }
    format!("{} ({})", full, relative_label(date, today))
}

fn relative_label(date: NaiveDate, today: NaiveDate) -> String {
    let years = today.year() - date.year();
    let months = today.month() as i32 - date.month() as i32;
    let days = today.day() as i32 - date.day() as i32;

    if years > 0 {
        format!("{}y ago", years)
    } else if months > 0 {
        format!("{}mo ago", months)
    } else if days > 0 {
        format!("{}d ago", days)
    } else {
        "Today".to_string()
    }
}
