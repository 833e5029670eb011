// Engine error type
// One kind: an input failed its documented constraint

use serde::Serialize;

// ============================================================================
// INVALID INPUT ERROR
// ============================================================================

/// Raised when an engine input violates its documented constraint.
/// Carries the offending field name and the constraint text so the shell
/// can surface the message next to the field that caused it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvalidInputError {
    pub field: String,
    pub constraint: String,
}

impl InvalidInputError {
    pub fn new(field: &str, constraint: &str) -> Self {
        InvalidInputError {
            field: field.to_string(),
            constraint: constraint.to_string(),
        }
    }
}

impl std::fmt::Display for InvalidInputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.constraint)
    }
}

impl std::error::Error for InvalidInputError {}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_field_and_constraint() {
        let err = InvalidInputError::new("home_price", "must be > 0");
        assert_eq!(err.to_string(), "home_price: must be > 0");
    }

    #[test]
    fn test_serializes_to_json() {
        let err = InvalidInputError::new("monthly_gross_income", "must be > 0");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["field"], "monthly_gross_income");
        assert_eq!(json["constraint"], "must be > 0");
    }
}
