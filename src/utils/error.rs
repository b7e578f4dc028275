use thiserror::Error;

#[derive(Error, Debug)]
pub enum BinderError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("API returned status {status} for {url}")]
    HttpStatus { status: u16, url: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

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

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Configuration,
    Storage,
    Data,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// 根據錯誤嚴重程度決定退出碼
    pub fn exit_code(self) -> i32 {
        match self {
            Self::Medium => 2,
            Self::High => 1,
            Self::Critical => 3,
        }
    }
}

impl BinderError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ApiError(_) | Self::NotFound { .. } | Self::HttpStatus { .. } => {
                ErrorCategory::Network
            }
            Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Configuration,
            Self::IoError(_) | Self::CsvError(_) => ErrorCategory::Storage,
            Self::SerializationError(_) | Self::ProcessingError { .. } => ErrorCategory::Data,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 網路錯誤通常可以重試
            Self::ApiError(_) => ErrorSeverity::Medium,
            Self::HttpStatus { status, .. } if *status >= 500 => ErrorSeverity::Medium,
            Self::HttpStatus { .. } | Self::NotFound { .. } => ErrorSeverity::High,
            Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorSeverity::High,
            Self::SerializationError(_) | Self::ProcessingError { .. } => ErrorSeverity::High,
            Self::IoError(_) | Self::CsvError(_) => ErrorSeverity::Critical,
        }
    }

    /// 可重試的錯誤（由呼叫端決定是否重試）
    pub fn is_retryable(&self) -> bool {
        self.severity() == ErrorSeverity::Medium
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::ApiError(_) => {
                "Check your network connection and the source endpoint, then run again".to_string()
            }
            Self::NotFound { resource } => format!(
                "Make sure '{}' exists for the configured language (e.g. set id 'sv03')",
                resource
            ),
            Self::HttpStatus { status, .. } if *status >= 500 => {
                "The card API is having trouble, try again later".to_string()
            }
            Self::HttpStatus { .. } => "Check the source endpoint and language settings".to_string(),
            Self::CsvError(_) | Self::IoError(_) => {
                "Check that the output directory exists and is writable".to_string()
            }
            Self::SerializationError(_) => {
                "The API response did not match the expected card format".to_string()
            }
            Self::ConfigValidationError { field, .. }
            | Self::InvalidConfigValueError { field, .. } => {
                format!("Fix the '{}' setting in your configuration file", field)
            }
            Self::MissingConfigError { field } => {
                format!("Add the '{}' setting to your configuration file", field)
            }
            Self::ProcessingError { .. } => "Run with --verbose for more details".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => format!("Could not fetch the card set: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::Storage => format!("Could not write the binder files: {}", self),
            ErrorCategory::Data => format!("Could not build the binder: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, BinderError>;
