use crate::core::{Pipeline, RenderedSite};
use crate::utils::error::Result;
use std::time::Instant;

/// What a build produced.
#[derive(Debug)]
pub enum BuildOutcome {
    /// Pages were written under this output root.
    Written(String),
    /// Dry run: pages were rendered and nothing was written.
    DryRun(RenderedSite),
}

pub struct SiteEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> SiteEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn build(&self, dry_run: bool) -> Result<BuildOutcome> {
        if dry_run {
            tracing::info!("🔍 DRY RUN MODE - nothing will be written");
            let site = self.render().await?;
            for page in &site.pages {
                tracing::info!("Would write {} ({} bytes)", page.path, page.body.len());
            }
            return Ok(BuildOutcome::DryRun(site));
        }
        Ok(BuildOutcome::Written(self.run().await?))
    }

    /// Extract, transform and load. Returns the output root.
    pub async fn run(&self) -> Result<String> {
        let started = Instant::now();
        let site = self.render().await?;

        tracing::info!("Writing site...");
        let output_path = self.pipeline.load(site).await?;
        tracing::info!(
            "Site written to {} in {} ms",
            output_path,
            started.elapsed().as_millis()
        );

        Ok(output_path)
    }

    /// Extract and transform only; nothing is written.
    pub async fn render(&self) -> Result<RenderedSite> {
        tracing::info!("Extracting content...");
        let content = self.pipeline.extract().await?;
        tracing::info!("Extracted {} records", content.record_count());

        tracing::info!("Rendering pages...");
        let site = self.pipeline.transform(content).await?;
        tracing::info!("Rendered {} pages", site.pages.len());

        Ok(site)
    }
}
