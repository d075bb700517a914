use thiserror::Error;

#[derive(Error, Debug)]
pub enum WidgetError {
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

    #[error("Widget '{id_base}' is already registered")]
    DuplicateWidget { id_base: String },

    #[error("Widget '{id_base}' is not registered")]
    UnknownWidget { id_base: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
    Registration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl WidgetError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            WidgetError::IoError(_) | WidgetError::SerializationError(_) => ErrorCategory::Io,
            WidgetError::ConfigValidationError { .. }
            | WidgetError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            WidgetError::DuplicateWidget { .. } | WidgetError::UnknownWidget { .. } => {
                ErrorCategory::Registration
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 重複註冊不影響已註冊的 widget
            WidgetError::DuplicateWidget { .. } => ErrorSeverity::Low,
            WidgetError::IoError(_) => ErrorSeverity::Medium,
            WidgetError::SerializationError(_)
            | WidgetError::ConfigValidationError { .. }
            | WidgetError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            WidgetError::UnknownWidget { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            WidgetError::IoError(_) => {
                "Check that the file exists and is readable, then retry".to_string()
            }
            WidgetError::SerializationError(_) => {
                "Settings could not be serialized; report this as a bug".to_string()
            }
            WidgetError::ConfigValidationError { field, .. } => {
                format!("Fix the TOML syntax near '{}'", field)
            }
            WidgetError::InvalidConfigValueError { field, .. } => {
                format!("Provide a valid value for '{}'", field)
            }
            WidgetError::DuplicateWidget { .. } => {
                "Register each widget only once at start-up".to_string()
            }
            WidgetError::UnknownWidget { id_base } => {
                format!("Register '{}' before creating it", id_base)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Io => format!("Could not read or write widget data: {}", self),
            ErrorCategory::Configuration => format!("Widget configuration is invalid: {}", self),
            ErrorCategory::Registration => format!("Widget registration problem: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, WidgetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        let err = WidgetError::DuplicateWidget {
            id_base: "pet_of_the_day_widget".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Registration);
        assert_eq!(err.severity(), ErrorSeverity::Low);

        let err = WidgetError::InvalidConfigValueError {
            field: "widget.number".to_string(),
            value: "0".to_string(),
            reason: "Value must be at least 1".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert!(err.recovery_suggestion().contains("widget.number"));
        assert!(err.user_friendly_message().contains("configuration is invalid"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: WidgetError = io.into();
        assert_eq!(err.category(), ErrorCategory::Io);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
    }
}
