use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortfolioError {
    #[error("Failed to read config file '{path}': {source}")]
    ConfigLoadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Config file '{path}' is not valid YAML: {message}")]
    ConfigParseError { path: String, message: String },

    #[error("Required config field '{field}' is missing")]
    FieldAccessError { field: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidSettingError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Template rendering error: {0}")]
    TemplateError(#[from] tera::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Failed to write output '{path}': {source}")]
    OutputWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Rendering,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// The build was misconfigured; fix the config or arguments and rerun.
    High,
    /// Rendering or writing failed after the config was accepted.
    Critical,
}

impl ErrorSeverity {
    /// Process exit code for a run that ended with this severity.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl PortfolioError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PortfolioError::ConfigLoadError { .. }
            | PortfolioError::ConfigParseError { .. }
            | PortfolioError::FieldAccessError { .. }
            | PortfolioError::InvalidSettingError { .. } => ErrorCategory::Configuration,
            PortfolioError::TemplateError(_) | PortfolioError::SerializationError(_) => {
                ErrorCategory::Rendering
            }
            PortfolioError::OutputWriteError { .. } => ErrorCategory::Output,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Rendering | ErrorCategory::Output => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            PortfolioError::ConfigLoadError { path, .. } => {
                format!("Check that '{}' exists and is readable", path)
            }
            PortfolioError::ConfigParseError { .. } => {
                "Fix the YAML syntax; indentation and list markers are the usual culprits".to_string()
            }
            PortfolioError::FieldAccessError { field } => {
                format!("Add '{}' to the portfolio config", field)
            }
            PortfolioError::InvalidSettingError { field, .. } => {
                format!("Pass a valid value for '{}'", field)
            }
            PortfolioError::TemplateError(_) => {
                "The page template is bundled with the binary; please report this".to_string()
            }
            PortfolioError::SerializationError(_) => {
                "Check the project_carousel entries in the config".to_string()
            }
            PortfolioError::OutputWriteError { path, .. } => {
                format!("Make sure '{}' is writable", path)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PortfolioError::ConfigLoadError { path, .. } => {
                format!("Could not read the portfolio config at '{}'", path)
            }
            PortfolioError::ConfigParseError { path, message } => {
                format!("The portfolio config at '{}' could not be parsed: {}", path, message)
            }
            PortfolioError::FieldAccessError { field } => {
                format!("The portfolio config is missing '{}'", field)
            }
            PortfolioError::InvalidSettingError { field, reason, .. } => {
                format!("Invalid {}: {}", field, reason)
            }
            PortfolioError::TemplateError(e) => format!("Could not render the page: {}", e),
            PortfolioError::SerializationError(e) => {
                format!("Could not encode the carousel data: {}", e)
            }
            PortfolioError::OutputWriteError { path, source } => {
                format!("Could not write '{}': {}", path, source)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, PortfolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_errors_exit_with_one() {
        let err = PortfolioError::FieldAccessError {
            field: "personal.name".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity().exit_code(), 1);
        assert!(err.user_friendly_message().contains("personal.name"));
    }

    #[test]
    fn test_write_errors_are_critical() {
        let err = PortfolioError::OutputWriteError {
            path: "out/index.html".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.category(), ErrorCategory::Output);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.severity().exit_code(), 3);
        assert!(err.recovery_suggestion().contains("out/index.html"));
    }

    #[test]
    fn test_every_failure_exits_non_zero() {
        let errors = vec![
            PortfolioError::ConfigParseError {
                path: "portfolio-config.yaml".to_string(),
                message: "bad indent".to_string(),
            },
            PortfolioError::InvalidSettingError {
                field: "config".to_string(),
                value: String::new(),
                reason: "Path cannot be empty".to_string(),
            },
            PortfolioError::SerializationError(
                serde_json::from_str::<serde_json::Value>("{").unwrap_err(),
            ),
        ];

        for err in errors {
            assert!(err.severity().exit_code() > 0, "{:?}", err);
        }
    }
}
