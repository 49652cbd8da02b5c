pub mod cli;
pub mod site_config;

use crate::config::cli::LocalStorage;
use crate::core::clock::{FixedClock, SystemClock};
use crate::core::engine::{BuildOutcome, SiteEngine};
use crate::core::pipeline::SitePipeline;
use crate::core::render::SiteRenderer;
use crate::core::Clock;
use crate::domain::services::parse_date_token;
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::Validate;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

pub use site_config::SiteConfig;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "folio")]
#[command(about = "Build a static portfolio site from flat content files")]
pub struct CliConfig {
    /// Path to the site TOML configuration
    #[arg(short, long, default_value = "site.toml")]
    pub config: String,

    /// Override [content].root from the config
    #[arg(long)]
    pub content_dir: Option<String>,

    /// Override [build].output_path from the config
    #[arg(long)]
    pub output_path: Option<String>,

    /// Pin "today" (e.g. 2024-06-01) instead of reading the system clock
    #[arg(long)]
    pub today: Option<String>,

    /// Render everything but write nothing
    #[arg(long)]
    pub dry_run: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// 命令列參數覆蓋設定檔
    pub fn apply_overrides(&self, config: &mut SiteConfig) {
        if let Some(dir) = &self.content_dir {
            tracing::info!("🔧 Content directory overridden to: {}", dir);
            config.content.root = dir.clone();
        }
        if let Some(path) = &self.output_path {
            tracing::info!("🔧 Output path overridden to: {}", path);
            config.build.output_path = path.clone();
        }
    }

    /// 讀取設定檔、套用覆蓋、驗證，並確認內容目錄存在
    pub fn load_site_config(&self) -> Result<SiteConfig> {
        tracing::info!("📁 Loading configuration from: {}", self.config);
        let mut config = SiteConfig::from_file(&self.config)?;
        self.apply_overrides(&mut config);
        config.validate()?;

        if !Path::new(&config.content.root).is_dir() {
            return Err(SiteError::InvalidConfigValueError {
                field: "content.root".to_string(),
                value: config.content.root.clone(),
                reason: "Directory does not exist".to_string(),
            });
        }

        tracing::info!("✅ Configuration loaded and validated successfully");
        tracing::debug!(
            "Content root: {}, output: {}",
            config.content.root,
            config.build.output_path
        );
        Ok(config)
    }

    /// Full build as the `folio` binary runs it, honouring `--dry-run`.
    pub async fn build_site(&self) -> Result<BuildOutcome> {
        let config = self.load_site_config()?;
        let clock = self.clock()?;
        let renderer = SiteRenderer::new(&config)?;

        let pipeline = SitePipeline::new(
            LocalStorage::new(config.content.root.clone()),
            LocalStorage::new(config.build.output_path.clone()),
            config,
            renderer,
            clock,
        );
        SiteEngine::new(pipeline).build(self.dry_run).await
    }

    pub fn clock(&self) -> Result<Arc<dyn Clock>> {
        match &self.today {
            Some(token) => {
                let today =
                    parse_date_token(token).map_err(|_| SiteError::InvalidConfigValueError {
                        field: "--today".to_string(),
                        value: token.clone(),
                        reason: "Not a recognised date".to_string(),
                    })?;
                tracing::info!("🕒 Clock pinned to {}", today);
                Ok(Arc::new(FixedClock::new(today)))
            }
            None => Ok(Arc::new(SystemClock)),
        }
    }
}
