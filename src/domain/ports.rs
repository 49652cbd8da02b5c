use crate::domain::model::{RenderedSite, SiteContent};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    /// Files directly under `dir` whose extension is in `extensions`, sorted by name.
    /// A missing directory yields `Ok(None)`.
    fn list_files(
        &self,
        dir: &str,
        extensions: &[&str],
    ) -> impl std::future::Future<Output = Result<Option<Vec<String>>>> + Send;
    fn root(&self) -> &str;
}

pub trait ConfigProvider: Send + Sync {
    fn site_title(&self) -> &str;
    fn experiences_path(&self) -> &str;
    fn projects_path(&self) -> &str;
    fn posts_dir(&self) -> &str;
}

/// Source of "today" for `present` ranges and relative dates.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<SiteContent>;
    async fn transform(&self, content: SiteContent) -> Result<RenderedSite>;
    async fn load(&self, site: RenderedSite) -> Result<String>;
}
