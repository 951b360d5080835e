use crate::utils::error::{PortfolioError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(PortfolioError::InvalidSettingError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(PortfolioError::InvalidSettingError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// Looks up a field the document cannot be built without.
pub fn required<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| PortfolioError::FieldAccessError {
        field: field_name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("config", "portfolio-config.yaml").is_ok());
        assert!(validate_path("config", "").is_err());
        assert!(validate_path("config", "   ").is_err());
        assert!(validate_path("config", "bad\0name").is_err());
    }

    #[test]
    fn test_required_names_missing_field() {
        let present = Some("Ada".to_string());
        assert_eq!(required("personal.name", &present).unwrap(), "Ada");

        let missing: Option<String> = None;
        match required("personal.name", &missing) {
            Err(PortfolioError::FieldAccessError { field }) => assert_eq!(field, "personal.name"),
            other => panic!("expected FieldAccessError, got {:?}", other),
        }
    }
}
