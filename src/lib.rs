pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{cli::LocalStorage, CliConfig, SiteConfig};
pub use crate::core::{
    clock::{FixedClock, SystemClock},
    engine::{BuildOutcome, SiteEngine},
    pipeline::SitePipeline,
    render::SiteRenderer,
};
pub use crate::domain::model::{Experience, Post, PostMetadata, Project};
pub use crate::domain::services::{format_duration, sort_by_date_descending, sort_by_range_start_descending};
pub use crate::utils::error::{Result, SiteError};
