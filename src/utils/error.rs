use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorefrontError {
    #[error("Content API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Content source returned status {status}: {message}")]
    ContentSourceError { status: u16, message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Network,
    Data,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl StorefrontError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. }
            | Self::TomlError(_) => ErrorCategory::Configuration,
            Self::ApiError(_) | Self::ContentSourceError { .. } => ErrorCategory::Network,
            Self::SerializationError(_) | Self::ValidationError { .. } => ErrorCategory::Data,
            Self::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Data => ErrorSeverity::Low,
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::ApiError(_) | Self::ContentSourceError { .. } => {
                "Check that the content project is reachable and the dataset exists"
            }
            Self::IoError(_) => "Check file permissions and that the bind address is free",
            Self::SerializationError(_) => "Check that the content schema matches the storefront model",
            Self::TomlError(_) => "Fix the syntax of the site configuration file",
            Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => {
                "Review the command line flags and the [content_source] table of the config file"
            }
            Self::ValidationError { .. } => "Correct the submitted fields and try again",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value for '{}' is invalid: {}", field, reason)
            }
            Self::MissingConfigError { field } => {
                format!("Configuration value '{}' is required", field)
            }
            Self::ContentSourceError { status, .. } => {
                format!("The content service answered with HTTP {}", status)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, StorefrontError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_errors_are_high_severity() {
        let err = StorefrontError::MissingConfigError {
            field: "content_source.project_id".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.user_friendly_message().contains("project_id"));
    }

    #[test]
    fn test_content_source_error_message() {
        let err = StorefrontError::ContentSourceError {
            status: 503,
            message: "unavailable".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Network);
        assert_eq!(err.user_friendly_message(), "The content service answered with HTTP 503");
    }
}
