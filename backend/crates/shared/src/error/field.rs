//! Field Errors
//!
//! A single form-field validation failure. Forms report a list of these,
//! one entry per failing rule.

use serde::Serialize;
use std::borrow::Cow;
use std::fmt;

/// Validation failure attached to one form field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Field name as the client sends it (camelCase)
    pub field: Cow<'static, str>,
    /// User-facing message
    pub message: Cow<'static, str>,
}

impl FieldError {
    pub fn new(field: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Helpers over a collected list of field errors
pub trait FieldErrorsExt {
    /// Whether any error targets `field`
    fn has_field(&self, field: &str) -> bool;

    /// Message of the first error targeting `field`
    fn message_for(&self, field: &str) -> Option<&str>;
}

impl FieldErrorsExt for [FieldError] {
    fn has_field(&self, field: &str) -> bool {
        self.iter().any(|e| e.field == field)
    }

    fn message_for(&self, field: &str) -> Option<&str> {
        self.iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_field() {
        let errors = vec![
            FieldError::new("username", "too short"),
            FieldError::new("terms", "must accept"),
        ];
        assert!(errors.has_field("terms"));
        assert!(!errors.has_field("email"));
        assert_eq!(errors.message_for("username"), Some("too short"));
    }

    #[test]
    fn test_serializes_flat() {
        let json = serde_json::to_value(FieldError::new("code", "bad")).unwrap();
        assert_eq!(json, serde_json::json!({ "field": "code", "message": "bad" }));
    }
}
