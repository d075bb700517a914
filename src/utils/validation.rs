use crate::utils::error::{Result, WidgetError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(WidgetError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    validate_no_null_bytes(field_name, path)
}

pub fn validate_no_null_bytes(field_name: &str, value: &str) -> Result<()> {
    if value.contains('\0') {
        return Err(WidgetError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.escape_default().to_string(),
            reason: "Value contains null bytes".to_string(),
        });
    }
    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u32, min_value: u32) -> Result<()> {
    if value < min_value {
        return Err(WidgetError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("config", "widget.toml").is_ok());
        assert!(validate_path("config", "").is_err());
        assert!(validate_path("config", "   ").is_err());
        assert!(validate_path("config", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("widget.number", 2, 1).is_ok());
        assert!(validate_positive_number("widget.number", 0, 1).is_err());
    }
}
