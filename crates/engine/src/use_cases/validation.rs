//! Common validation helpers for use cases.

/// Validation error type.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field_name} cannot be empty")]
    Empty { field_name: &'static str },

    #[error("{field_name} is required")]
    Missing { field_name: &'static str },

    #[error("{field_name} must be greater than {min}, got {actual}")]
    NotGreaterThan {
        field_name: &'static str,
        min: f64,
        actual: f64,
    },

    #[error("{field_name} is invalid: {reason}")]
    Invalid { field_name: &'static str, reason: String },
}

/// Validate a string is non-empty after trimming.
pub fn require_non_empty(value: &str, field_name: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field_name });
    }
    Ok(())
}

/// Unwrap a required field.
pub fn require_present<T>(value: Option<T>, field_name: &'static str) -> Result<T, ValidationError> {
    value.ok_or(ValidationError::Missing { field_name })
}

/// Validate a number is strictly greater than `min`.
pub fn require_greater_than(
    value: f64,
    min: f64,
    field_name: &'static str,
) -> Result<(), ValidationError> {
    // NaN fails this comparison as well
    if !(value > min) {
        return Err(ValidationError::NotGreaterThan {
            field_name,
            min,
            actual: value,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_non_empty() {
        assert!(require_non_empty("CARGO_1", "code").is_ok());
        assert_eq!(
            require_non_empty("  ", "code"),
            Err(ValidationError::Empty { field_name: "code" })
        );
    }

    #[test]
    fn test_require_present() {
        assert_eq!(require_present(Some(3), "weight"), Ok(3));
        assert_eq!(
            require_present::<u32>(None, "destination"),
            Err(ValidationError::Missing {
                field_name: "destination"
            })
        );
    }

    #[test]
    fn test_require_greater_than_is_exclusive() {
        assert!(require_greater_than(100.5, 100.0, "weight").is_ok());
        assert!(require_greater_than(100.0, 100.0, "weight").is_err());
        assert!(require_greater_than(f64::NAN, 100.0, "weight").is_err());
    }

    #[test]
    fn test_not_greater_than_message() {
        let err = ValidationError::NotGreaterThan {
            field_name: "weight",
            min: 100.0,
            actual: 50.0,
        };
        assert_eq!(err.to_string(), "weight must be greater than 100, got 50");
    }
}
