use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Malformed duration range '{value}': expected '<start> - <end|present>'")]
    MalformedRange { value: String },

    #[error("Invalid date '{token}'")]
    InvalidDate { token: String },

    #[error("Front matter error in {path}: {message}")]
    FrontMatter { path: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Template error: {0}")]
    TemplateError(#[from] tera::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Data,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SiteError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SiteError::MalformedRange { .. }
            | SiteError::InvalidDate { .. }
            | SiteError::FrontMatter { .. }
            | SiteError::SerializationError(_) => ErrorCategory::Data,
            SiteError::ConfigValidationError { .. }
            | SiteError::InvalidConfigValueError { .. }
            | SiteError::MissingConfigError { .. } => ErrorCategory::Configuration,
            SiteError::IoError(_) | SiteError::TemplateError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 依嚴重程度對應的 CLI 結束碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            SiteError::MalformedRange { .. } => {
                "Write durations as '<start> - <end>' or '<start> - present', e.g. 'Jan 2020 - Mar 2021'".to_string()
            }
            SiteError::InvalidDate { .. } => {
                "Use a date like '2024-03-15', 'March 15, 2024', 'Mar 2024' or '2024'".to_string()
            }
            SiteError::FrontMatter { .. } => {
                "Every post needs a YAML front matter block with 'title' and 'publishedAt'".to_string()
            }
            SiteError::SerializationError(_) => {
                "Check the JSON record files for syntax errors or missing fields".to_string()
            }
            SiteError::ConfigValidationError { .. } | SiteError::MissingConfigError { .. } => {
                "Check site.toml against the documented layout".to_string()
            }
            SiteError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' in site.toml", field)
            }
            SiteError::IoError(_) => {
                "Make sure the content directory exists and the output directory is writable".to_string()
            }
            SiteError::TemplateError(_) => {
                "A page template failed to render; rerun with --verbose for details".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Data => format!("Content problem: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::System => format!("Build failed: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_errors_map_to_exit_code_one() {
        let err = SiteError::InvalidDate {
            token: "someday".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Data);
        assert_eq!(err.exit_code(), 1);
        assert!(err.user_friendly_message().contains("someday"));
    }

    #[test]
    fn test_config_and_system_exit_codes() {
        let config = SiteError::MissingConfigError {
            field: "site.title".to_string(),
        };
        assert_eq!(config.exit_code(), 2);

        let io = SiteError::IoError(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(io.severity(), ErrorSeverity::Critical);
        assert_eq!(io.exit_code(), 3);
    }
}
