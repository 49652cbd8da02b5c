use crate::domain::model::{Post, PostMetadata};
use crate::utils::error::{Result, SiteError};
use gray_matter::engine::YAML;
use gray_matter::{Matter, ParsedEntity};
use std::path::Path;

pub const POST_EXTENSIONS: &[&str] = &["md", "mdx"];

/// Splits a markdown post into YAML front matter and body.
pub struct PostParser {
    matter: Matter<YAML>,
}

impl Default for PostParser {
    fn default() -> Self {
        Self::new()
    }
}

impl PostParser {
    pub fn new() -> Self {
        Self {
            matter: Matter::<YAML>::new(),
        }
    }

    /// `file_name` supplies the slug (its stem) and names the file in errors.
    pub fn parse_content(&self, content: &str, file_name: &str) -> Result<Post> {
        let front_matter_error = |message: String| SiteError::FrontMatter {
            path: file_name.to_string(),
            message,
        };

        let parsed: ParsedEntity<PostMetadata> = self
            .matter
            .parse(content)
            .map_err(|e| front_matter_error(e.to_string()))?;

        let metadata = parsed
            .data
            .ok_or_else(|| front_matter_error("missing front matter block".to_string()))?;

        let slug = Path::new(file_name)
            .file_stem()
            .and_then(|s| s.to_str())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| front_matter_error("cannot derive a slug from the file name".to_string()))?
            .to_string();

        Ok(Post {
            slug,
            metadata,
            content: parsed.content,
        })
    }
}
