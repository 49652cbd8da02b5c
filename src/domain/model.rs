use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub company: String,
    pub position: String,
    /// `"<start> - <end|present>"`
    pub duration: String,
    pub location: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub date: String,
    pub summary: String,
    pub github: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostMetadata {
    pub title: String,
    pub published_at: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub slug: String,
    pub metadata: PostMetadata,
    /// Markdown body, front matter stripped.
    pub content: String,
}

/// `experience/config.json`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExperienceFile {
    #[serde(default)]
    pub experiences: Vec<Experience>,
}

/// `projects/config.json`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectFile {
    #[serde(default)]
    pub projects: Vec<Project>,
}

/// Everything the extract stage loaded for one build.
#[derive(Debug, Clone, Default)]
pub struct SiteContent {
    pub experiences: Vec<Experience>,
    pub projects: Vec<Project>,
    pub posts: Vec<Post>,
}

impl SiteContent {
    pub fn record_count(&self) -> usize {
        self.experiences.len() + self.projects.len() + self.posts.len()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPage {
    /// Relative to the output root, e.g. `blog/hello/index.html`.
    pub path: String,
    pub body: String,
}

#[derive(Debug, Clone, Default)]
pub struct RenderedSite {
    pub pages: Vec<RenderedPage>,
}

impl RenderedSite {
    pub fn page(&self, path: &str) -> Option<&RenderedPage> {
        self.pages.iter().find(|p| p.path == path)
    }
}
