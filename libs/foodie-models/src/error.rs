//! Error types for foodie-models

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Raised when a payload or a list parameter violates the data model.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Restaurant validation failed: {}", .0.join(", "))]
    Payload(Vec<String>),

    #[error("Invalid price range: {0:?} (expected one of $, $$, $$$, $$$$)")]
    PriceRange(String),

    #[error("Invalid value for '{param}': {value:?} ({expected})")]
    Parameter {
        param: &'static str,
        value: String,
        expected: &'static str,
    },
}

impl ValidationError {
    pub(crate) fn parameter(param: &'static str, value: &str, expected: &'static str) -> Self {
        Self::Parameter {
            param,
            value: value.to_string(),
            expected,
        }
    }
}

impl From<validator::ValidationErrors> for ValidationError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter()
                    .map(|e| match &e.message {
                        Some(message) => message.to_string(),
                        None => format!("{} is invalid", field),
                    })
                    .collect::<Vec<_>>()
            })
            .collect();
        messages.sort();
        messages.dedup();
        Self::Payload(messages)
    }
}
