use thiserror::Error;

#[derive(Error, Debug)]
pub enum AsterError {
    #[error("{message}")]
    InvalidArgument { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
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

impl ErrorSeverity {
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl AsterError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AsterError::InvalidArgument { .. } => ErrorCategory::Input,
            AsterError::ConfigError { .. } | AsterError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            AsterError::IoError(_) | AsterError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AsterError::InvalidArgument { .. } => ErrorSeverity::Medium,
            AsterError::ConfigError { .. } | AsterError::InvalidConfigValueError { .. } => {
                ErrorSeverity::High
            }
            AsterError::IoError(_) | AsterError::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            AsterError::InvalidArgument { .. } => "Pass a non-empty INPUT argument",
            AsterError::ConfigError { .. } => "Check that the config file exists and is valid TOML",
            AsterError::InvalidConfigValueError { .. } => {
                "Fix the highlighted field in the config file or command line"
            }
            AsterError::IoError(_) => "Check file paths and permissions",
            AsterError::SerializationError(_) => "Retry with --format text",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AsterError::InvalidArgument { message } => format!("Invalid input: {}", message),
            AsterError::ConfigError { message } => format!("Configuration problem: {}", message),
            AsterError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
            AsterError::IoError(e) => format!("File operation failed: {}", e),
            AsterError::SerializationError(e) => format!("Could not format output: {}", e),
        }
    }
}

pub type Result<T> = std::result::Result<T, AsterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display_is_bare_message() {
        let err = AsterError::InvalidArgument {
            message: "input_data cannot be empty".to_string(),
        };
        assert_eq!(err.to_string(), "input_data cannot be empty");
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity().exit_code(), 2);
    }

    #[test]
    fn test_config_errors_are_high_severity() {
        let err = AsterError::InvalidConfigValueError {
            field: "logging.level".to_string(),
            value: "loud".to_string(),
            reason: "unknown level".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.user_friendly_message().contains("logging.level"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: AsterError = io.into();
        assert_eq!(err.severity().exit_code(), 3);
    }
}
