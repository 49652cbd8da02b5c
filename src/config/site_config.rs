use crate::core::ConfigProvider;
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub site: SiteInfo,
    pub contact: Option<ContactConfig>,
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub build: BuildConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteInfo {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub base_url: String,
    #[serde(default)]
    pub intro: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactConfig {
    pub email: Option<String>,
    pub calendly_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    pub root: String,
    pub experiences: String,
    pub projects: String,
    pub posts_dir: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            root: "content".to_string(),
            experiences: "experience/config.json".to_string(),
            projects: "projects/config.json".to_string(),
            posts_dir: "blog/posts".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    pub output_path: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output_path: "public".to_string(),
        }
    }
}

impl SiteConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        // 設定檔讀不到算設定錯誤，不是系統錯誤
        let content = std::fs::read_to_string(&path).map_err(|e| {
            SiteError::ConfigValidationError {
                field: "config_file".to_string(),
                message: format!("Cannot read {}: {}", path.as_ref().display(), e),
            }
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SiteError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SITE_BASE_URL})，未設定的保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = regex::Regex::new(r"\$\{([^}]+)\}").map_err(|e| {
            SiteError::ConfigValidationError {
                field: "env_substitution".to_string(),
                message: e.to_string(),
            }
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("site.title", &self.site.title)?;
        validation::validate_url("site.base_url", &self.site.base_url)?;
        validation::validate_path("content.root", &self.content.root)?;
        validation::validate_path("content.posts_dir", &self.content.posts_dir)?;
        validation::validate_path("build.output_path", &self.build.output_path)?;

        if let Some(contact) = &self.contact {
            if contact.email.is_none() && contact.calendly_url.is_none() {
                return Err(SiteError::MissingConfigError {
                    field: "contact.email".to_string(),
                });
            }
            if let Some(email) = &contact.email {
                validation::validate_email("contact.email", email)?;
            }
            if let Some(url) = &contact.calendly_url {
                validation::validate_url("contact.calendly_url", url)?;
            }
        }

        Ok(())
    }

    /// `base_url` without a trailing slash, for building absolute links.
    pub fn base_url(&self) -> &str {
        self.site.base_url.trim_end_matches('/')
    }
}

impl ConfigProvider for SiteConfig {
    fn site_title(&self) -> &str {
        &self.site.title
    }

    fn experiences_path(&self) -> &str {
        &self.content.experiences
    }

    fn projects_path(&self) -> &str {
        &self.content.projects
    }

    fn posts_dir(&self) -> &str {
        &self.content.posts_dir
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
