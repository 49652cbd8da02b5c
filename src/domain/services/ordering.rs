//! Most-recent-first ordering of content records.
//!
//! Sorting never fails. A record whose date does not parse sorts after every
//! dated record; among themselves such records keep their input order.

use crate::domain::services::dates::parse_date_token;
use crate::domain::services::duration::RANGE_SEPARATOR;
use chrono::NaiveDate;
use std::cmp::Reverse;

fn sort_key(token: &str) -> Reverse<Option<NaiveDate>> {
    let date = parse_date_token(token).ok();
    if date.is_none() {
        tracing::debug!("Undated record '{}' sorted last", token);
    }
    Reverse(date)
}

/// Stable sort on a single date field, newest first.
pub fn sort_by_date_descending<R, F>(records: &mut [R], date_field: F)
where
    F: Fn(&R) -> &str,
{
    records.sort_by_cached_key(|record| sort_key(date_field(record)));
}

/// Stable sort on the start of a `"<start> - <end>"` range field, newest first.
/// Only the text before the first separator matters here, even for ranges
/// that `format_duration` would reject.
pub fn sort_by_range_start_descending<R, F>(records: &mut [R], range_field: F)
where
    F: Fn(&R) -> &str,
{
    sort_by_date_descending(records, |record| {
        let range = range_field(record);
        range.split(RANGE_SEPARATOR).next().unwrap_or(range)
    });
}

pub fn sorted_by_date_descending<R, F>(mut records: Vec<R>, date_field: F) -> Vec<R>
where
    F: Fn(&R) -> &str,
{
    sort_by_date_descending(&mut records, date_field);
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Experience, Project};

    fn project(name: &str, date: &str) -> Project {
        Project {
            name: name.to_string(),
            date: date.to_string(),
            summary: String::new(),
            github: format!("https://github.com/me/{}", name),
        }
    }

    fn experience(company: &str, duration: &str) -> Experience {
        Experience {
            company: company.to_string(),
            position: "Engineer".to_string(),
            duration: duration.to_string(),
            location: "Remote".to_string(),
            description: String::new(),
        }
    }

    fn names(projects: &[Project]) -> Vec<&str> {
        projects.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_projects_newest_first() {
        let mut projects = vec![
            project("old", "2021-02-01"),
            project("new", "2024-05-20"),
            project("mid", "March 3, 2023"),
        ];
        sort_by_date_descending(&mut projects, |p| p.date.as_str());
        assert_eq!(names(&projects), vec!["new", "mid", "old"]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let mut projects = vec![
            project("a", "2023-01-01"),
            project("b", "2024-01-01"),
            project("c", "Jan 2023"),
            project("d", "2023"),
        ];
        sort_by_date_descending(&mut projects, |p| p.date.as_str());
        assert_eq!(names(&projects), vec!["b", "a", "c", "d"]);
    }

    #[test]
    fn test_output_is_a_non_increasing_permutation() {
        let input = vec![
            project("p1", "2020-06-01"),
            project("p2", "2022-01-15"),
            project("p3", "2019-11-30"),
            project("p4", "2022-01-15"),
            project("p5", "2021-07-04"),
        ];
        let sorted = sorted_by_date_descending(input.clone(), |p| p.date.as_str());

        assert_eq!(sorted.len(), input.len());
        for p in &input {
            assert!(sorted.contains(p));
        }
        let dates: Vec<NaiveDate> = sorted
            .iter()
            .map(|p| parse_date_token(&p.date).unwrap())
            .collect();
        assert!(dates.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_unparseable_dates_do_not_fail() {
        let mut projects = vec![
            project("bad1", "soon"),
            project("good", "2020-01-01"),
            project("bad2", ""),
            project("newer", "2021-01-01"),
        ];
        sort_by_date_descending(&mut projects, |p| p.date.as_str());
        assert_eq!(names(&projects), vec!["newer", "good", "bad1", "bad2"]);
    }

    #[test]
    fn test_experiences_sort_by_range_start() {
        let mut experiences = vec![
            experience("Acme", "Jan 2019 - Dec 2020"),
            experience("Globex", "Mar 2022 - present"),
            experience("Initech", "Jun 2020 - Feb 2022"),
        ];
        sort_by_range_start_descending(&mut experiences, |e| e.duration.as_str());
        let companies: Vec<&str> = experiences.iter().map(|e| e.company.as_str()).collect();
        assert_eq!(companies, vec!["Globex", "Initech", "Acme"]);
    }

    #[test]
    fn test_malformed_range_still_sorts() {
        let mut experiences = vec![
            experience("NoSeparator", "2018"),
            experience("Broken", "whenever - present"),
            experience("Fine", "Jan 2017 - Feb 2017"),
        ];
        sort_by_range_start_descending(&mut experiences, |e| e.duration.as_str());
        let companies: Vec<&str> = experiences.iter().map(|e| e.company.as_str()).collect();
        assert_eq!(companies, vec!["NoSeparator", "Fine", "Broken"]);
    }

    #[test]
    fn test_extra_separator_still_sorts_by_first_token() {
        let mut experiences = vec![
            experience("Older", "Jan 2019 - Dec 2019"),
            experience("DoubleDash", "Jun 2021 - Jan 2022 - present"),
            experience("Newest", "Mar 2023 - present"),
        ];
        sort_by_range_start_descending(&mut experiences, |e| e.duration.as_str());
        let companies: Vec<&str> = experiences.iter().map(|e| e.company.as_str()).collect();
        assert_eq!(companies, vec!["Newest", "DoubleDash", "Older"]);
    }
}
