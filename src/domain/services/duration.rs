use crate::domain::ports::Clock;
use crate::domain::services::dates::parse_date_token;
use crate::utils::error::{Result, SiteError};
use chrono::{Datelike, NaiveDate};

pub const RANGE_SEPARATOR: &str = " - ";
const PRESENT: &str = "present";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeEnd {
    Date(NaiveDate),
    Present,
}

/// A parsed `<date> " - " (<date> | "present")` range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationRange {
    pub start: NaiveDate,
    pub end: RangeEnd,
}

/// Splits a range on its single separator, without parsing either side.
pub fn split_range(duration: &str) -> Result<(&str, &str)> {
    let malformed = || SiteError::MalformedRange {
        value: duration.to_string(),
    };

    let (start, end) = duration.split_once(RANGE_SEPARATOR).ok_or_else(malformed)?;
    if end.contains(RANGE_SEPARATOR) {
        return Err(malformed());
    }
    Ok((start, end))
}

impl DurationRange {
    pub fn parse(duration: &str) -> Result<Self> {
        let (start_token, end_token) = split_range(duration)?;
        let start = parse_date_token(start_token)?;

        let end = if end_token.trim().eq_ignore_ascii_case(PRESENT) {
            RangeEnd::Present
        } else {
            RangeEnd::Date(parse_date_token(end_token)?)
        };

        Ok(Self { start, end })
    }

    /// `Present` resolves against the clock on every call.
    pub fn end_date(&self, clock: &dyn Clock) -> NaiveDate {
        match self.end {
            RangeEnd::Date(date) => date,
            RangeEnd::Present => clock.today(),
        }
    }

    /// Whole months, counting the starting month. Negative when the end precedes the start.
    pub fn months(&self, clock: &dyn Clock) -> i64 {
        let end = self.end_date(clock);
        let years = i64::from(end.year()) - i64::from(self.start.year());
        let months = i64::from(end.month()) - i64::from(self.start.month());
        years * 12 + months + 1
    }
}

pub fn format_duration(duration: &str, clock: &dyn Clock) -> Result<String> {
    let range = DurationRange::parse(duration)?;
    Ok(format_months(range.months(clock)))
}

pub fn format_months(months: i64) -> String {
    if months < 12 {
        return unit(months, "month");
    }

    let years = months / 12;
    let remainder = months % 12;
    if remainder == 0 {
        unit(years, "year")
    } else {
        format!("{} {}", unit(years, "year"), unit(remainder, "month"))
    }
}

fn unit(value: i64, singular: &str) -> String {
    if value == 1 {
        format!("{} {}", value, singular)
    } else {
        format!("{} {}s", value, singular)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::FixedClock;

    fn june_2020() -> FixedClock {
        FixedClock::new(NaiveDate::from_ymd_opt(2020, 6, 15).unwrap())
    }

    #[test]
    fn test_same_month_counts_as_one() {
        assert_eq!(
            format_duration("Jan 2020 - Jan 2020", &june_2020()).unwrap(),
            "1 month"
        );
    }

    #[test]
    fn test_twelve_months_rolls_into_a_year() {
        assert_eq!(
            format_duration("Jan 2020 - Dec 2020", &june_2020()).unwrap(),
            "1 year"
        );
    }

    #[test]
    fn test_years_and_months() {
        let clock = june_2020();
        assert_eq!(
            format_duration("Jan 2020 - Mar 2021", &clock).unwrap(),
            "1 year 3 months"
        );
        assert_eq!(
            format_duration("Feb 2018 - Feb 2020", &clock).unwrap(),
            "2 years 1 month"
        );
        assert_eq!(
            format_duration("2017-03-10 - 2020-02-01", &clock).unwrap(),
            "3 years"
        );
    }

    #[test]
    fn test_present_uses_clock() {
        assert_eq!(
            format_duration("Jan 2020 - present", &june_2020()).unwrap(),
            "6 months"
        );
        assert_eq!(
            format_duration("Jan 2020 -  Present ", &june_2020()).unwrap(),
            "6 months"
        );

        let later = FixedClock::new(NaiveDate::from_ymd_opt(2022, 1, 3).unwrap());
        assert_eq!(
            format_duration("Jan 2020 - PRESENT", &later).unwrap(),
            "2 years 1 month"
        );
    }

    #[test]
    fn test_pluralization() {
        assert_eq!(format_months(0), "0 months");
        assert_eq!(format_months(1), "1 month");
        assert_eq!(format_months(2), "2 months");
        assert_eq!(format_months(13), "1 year 1 month");
        assert_eq!(format_months(26), "2 years 2 months");
        assert_eq!(format_months(-1), "-1 months");
    }

    #[test]
    fn test_end_before_start_renders_negative() {
        assert_eq!(
            format_duration("Mar 2021 - Jan 2020", &june_2020()).unwrap(),
            "-13 months"
        );
    }

    #[test]
    fn test_malformed_ranges() {
        for value in ["Jan 2020", "Jan 2020 -present", "Jan 2020 - Feb 2020 - Mar 2020"] {
            assert!(
                matches!(
                    format_duration(value, &june_2020()),
                    Err(SiteError::MalformedRange { .. })
                ),
                "{} should be malformed",
                value
            );
        }
    }

    #[test]
    fn test_invalid_dates() {
        let clock = june_2020();
        match format_duration("Someday - present", &clock) {
            Err(SiteError::InvalidDate { token }) => assert_eq!(token, "Someday"),
            other => panic!("unexpected {:?}", other),
        }
        match format_duration("Jan 2020 - later", &clock) {
            Err(SiteError::InvalidDate { token }) => assert_eq!(token, "later"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_same_inputs_same_output() {
        let clock = june_2020();
        let first = format_duration("Aug 2019 - present", &clock).unwrap();
        let second = format_duration("Aug 2019 - present", &clock).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, "11 months");
    }

    #[test]
    fn test_parse_keeps_present_unresolved() {
        let range = DurationRange::parse("May 2023 - present").unwrap();
        assert_eq!(range.end, RangeEnd::Present);
        assert_eq!(range.start, NaiveDate::from_ymd_opt(2023, 5, 1).unwrap());
    }
}
