use anyhow::Result;
use chrono::NaiveDate;
use folio::utils::validation::Validate;
use folio::{FixedClock, LocalStorage, SiteConfig, SiteEngine, SitePipeline, SiteRenderer};
use std::path::Path;
use std::sync::Arc;

/// 專案內附的 site.toml 與 content/ 必須能直接建置
#[tokio::test]
async fn test_bundled_sample_site_renders() -> Result<()> {
    let root = Path::new(env!("CARGO_MANIFEST_DIR"));
    let config = SiteConfig::from_file(root.join("site.toml"))?;
    config.validate()?;

    let renderer = SiteRenderer::new(&config)?;
    let content_root = root.join(&config.content.root);
    let clock = Arc::new(FixedClock::new(NaiveDate::from_ymd_opt(2024, 10, 16).unwrap()));

    let pipeline = SitePipeline::new(
        LocalStorage::new(content_root.to_string_lossy().into_owned()),
        LocalStorage::new(root.join("public").to_string_lossy().into_owned()),
        config,
        renderer,
        clock,
    );
    let site = SiteEngine::new(pipeline).render().await?;

    let experience = &site.page("experience/index.html").unwrap().body;
    assert!(experience.contains("Aug 2022 - present | Remote | 2 years 3 months"));
    assert!(experience.contains("Jan 2023 - Dec 2023 | Hybrid | 1 year"));
    assert!(experience.contains("May 2024 - Aug 2024 | Remote | 4 months"));

    let projects = &site.page("projects/index.html").unwrap().body;
    let newest = projects.find("portfolio").unwrap();
    let oldest = projects.find("tiny-shell").unwrap();
    assert!(newest < oldest);

    assert!(site.page("blog/testing-habits/index.html").is_some());
    assert!(site.page("blog/hello-world/index.html").is_some());
    Ok(())
}
