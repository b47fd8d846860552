use thiserror::Error;

#[derive(Error, Debug)]
pub enum FolioError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Upstream returned {status} for {url}")]
    UpstreamStatus { status: u16, url: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Upstream,
    Configuration,
    Io,
    Data,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl FolioError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FolioError::ApiError(_) => ErrorCategory::Network,
            FolioError::UpstreamStatus { .. } => ErrorCategory::Upstream,
            FolioError::IoError(_) => ErrorCategory::Io,
            FolioError::ConfigValidationError { .. }
            | FolioError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            FolioError::SerializationError(_) => ErrorCategory::Data,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 網路與上游錯誤通常重試即可
            ErrorCategory::Network | ErrorCategory::Upstream => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            FolioError::ApiError(_) => {
                "Check network connectivity and that the API base URL is reachable".to_string()
            }
            FolioError::UpstreamStatus { status, .. } if *status == 403 || *status == 429 => {
                "The API is rate limiting requests; wait a few minutes and try again".to_string()
            }
            FolioError::UpstreamStatus { status, .. } if *status == 404 => {
                "Verify the account name in [site].account".to_string()
            }
            FolioError::UpstreamStatus { .. } => {
                "The upstream service returned an error; try again later".to_string()
            }
            FolioError::IoError(_) => {
                "Check that the output directory exists and is writable".to_string()
            }
            FolioError::SerializationError(_) => {
                "The upstream payload was not in the expected format".to_string()
            }
            FolioError::ConfigValidationError { .. } => {
                "Review the site configuration file for syntax errors".to_string()
            }
            FolioError::InvalidConfigValueError { field, .. } => {
                format!("Correct the value of '{}' in the configuration or on the command line", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => format!("無法連線到遠端服務: {}", self),
            ErrorCategory::Upstream => format!("遠端服務回應錯誤: {}", self),
            ErrorCategory::Configuration => format!("設定錯誤: {}", self),
            ErrorCategory::Io => format!("檔案讀寫失敗: {}", self),
            ErrorCategory::Data => format!("資料處理失敗: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, FolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_status_is_retryable() {
        let err = FolioError::UpstreamStatus {
            status: 500,
            url: "https://api.example.com/users/x/repos".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Upstream);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert!(err.to_string().contains("500"));
    }

    #[test]
    fn test_rate_limit_suggestion() {
        let err = FolioError::UpstreamStatus {
            status: 403,
            url: "u".to_string(),
        };
        assert!(err.recovery_suggestion().contains("rate limiting"));
    }

    #[test]
    fn test_config_errors_are_high_severity() {
        let err = FolioError::InvalidConfigValueError {
            field: "site.account".to_string(),
            value: "-bad".to_string(),
            reason: "Account name cannot start or end with a hyphen".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.recovery_suggestion().contains("site.account"));
        assert!(err.user_friendly_message().starts_with("設定錯誤"));
    }
}
