pub mod dates;
pub mod duration;
pub mod ordering;

pub use dates::{format_date, parse_date_token};
pub use duration::{format_duration, format_months, DurationRange, RangeEnd};
pub use ordering::{sort_by_date_descending, sort_by_range_start_descending, sorted_by_date_descending};
