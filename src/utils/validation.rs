use crate::utils::error::{Field, RegistrarError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Rejects an empty value. No trimming happens here; callers that read
/// from a prompt trim before constructing an entity.
pub fn validate_required_text(field: Field, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(RegistrarError::ValidationError { field });
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(RegistrarError::InvalidConfigValueError {
            field: field_name.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(RegistrarError::InvalidConfigValueError {
            field: field_name.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required_text() {
        assert!(validate_required_text(Field::FirstName, "Jane").is_ok());
        assert!(validate_required_text(Field::FirstName, " ").is_ok());
        assert!(matches!(
            validate_required_text(Field::LastName, ""),
            Err(RegistrarError::ValidationError {
                field: Field::LastName
            })
        ));
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("storage.file_name", "Enrollments.json").is_ok());
        assert!(validate_path("storage.file_name", "").is_err());
        assert!(validate_path("storage.file_name", "bad\0name").is_err());
    }
}
