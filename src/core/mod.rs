pub mod clock;
pub mod engine;
pub mod pipeline;
pub mod posts;
pub mod render;
pub mod templates;

pub use crate::domain::model::{RenderedSite, SiteContent};
pub use crate::domain::ports::{Clock, ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
