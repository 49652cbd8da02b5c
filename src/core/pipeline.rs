use crate::core::posts::{PostParser, POST_EXTENSIONS};
use crate::core::render::SiteRenderer;
use crate::core::{Clock, ConfigProvider, Pipeline, RenderedSite, SiteContent, Storage};
use crate::domain::model::{Experience, ExperienceFile, Post, Project, ProjectFile};
use crate::domain::services::{sort_by_date_descending, sort_by_range_start_descending};
use crate::utils::error::Result;
use std::path::Path;
use std::sync::Arc;

/// Reads content through one storage, renders it, and writes pages through another.
pub struct SitePipeline<S: Storage, C: ConfigProvider> {
    content: S,
    output: S,
    config: C,
    renderer: SiteRenderer,
    parser: PostParser,
    clock: Arc<dyn Clock>,
}

impl<S: Storage, C: ConfigProvider> SitePipeline<S, C> {
    pub fn new(content: S, output: S, config: C, renderer: SiteRenderer, clock: Arc<dyn Clock>) -> Self {
        Self {
            content,
            output,
            config,
            renderer,
            parser: PostParser::new(),
            clock,
        }
    }

    async fn load_experiences(&self) -> Result<Vec<Experience>> {
        let path = self.config.experiences_path();
        let data = self.content.read_file(path).await?;
        let file: ExperienceFile = serde_json::from_slice(&data)?;
        tracing::debug!("Loaded {} experiences from {}", file.experiences.len(), path);
        Ok(file.experiences)
    }

    async fn load_projects(&self) -> Result<Vec<Project>> {
        let path = self.config.projects_path();
        let data = self.content.read_file(path).await?;
        let file: ProjectFile = serde_json::from_slice(&data)?;
        tracing::debug!("Loaded {} projects from {}", file.projects.len(), path);
        Ok(file.projects)
    }

    async fn load_posts(&self) -> Result<Vec<Post>> {
        let dir = self.config.posts_dir();
        let Some(files) = self.content.list_files(dir, POST_EXTENSIONS).await? else {
            tracing::warn!("Posts directory '{}' not found, building without posts", dir);
            return Ok(Vec::new());
        };

        let mut posts = Vec::with_capacity(files.len());
        for file_name in files {
            let relative = Path::new(dir).join(&file_name);
            let data = self.content.read_file(&relative.to_string_lossy()).await?;
            let text = String::from_utf8_lossy(&data);
            let post = self.parser.parse_content(&text, &file_name)?;
            tracing::debug!("Parsed post '{}' ({})", post.slug, post.metadata.published_at);
            posts.push(post);
        }
        Ok(posts)
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for SitePipeline<S, C> {
    async fn extract(&self) -> Result<SiteContent> {
        tracing::info!("📥 Loading content for '{}'", self.config.site_title());

        let content = SiteContent {
            experiences: self.load_experiences().await?,
            projects: self.load_projects().await?,
            posts: self.load_posts().await?,
        };

        tracing::info!(
            "Loaded {} experiences, {} projects, {} posts",
            content.experiences.len(),
            content.projects.len(),
            content.posts.len()
        );
        Ok(content)
    }

    async fn transform(&self, mut content: SiteContent) -> Result<RenderedSite> {
        // 全部依日期由新到舊
        sort_by_range_start_descending(&mut content.experiences, |e| e.duration.as_str());
        sort_by_date_descending(&mut content.projects, |p| p.date.as_str());
        sort_by_date_descending(&mut content.posts, |p| p.metadata.published_at.as_str());

        self.renderer.render_site(&content, self.clock.as_ref())
    }

    async fn load(&self, site: RenderedSite) -> Result<String> {
        for page in &site.pages {
            self.output.write_file(&page.path, page.body.as_bytes()).await?;
        }
        tracing::info!("📝 Wrote {} files", site.pages.len());
        Ok(self.output.root().to_string())
    }
}
