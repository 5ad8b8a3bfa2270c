//! # Error Types
//!
//! Domain-specific error types for estoque-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  estoque-core (this file)                                              │
//! │  └── ValidationError  - Form input rejected before any I/O             │
//! │                                                                         │
//! │  estoque-db                                                            │
//! │  └── DbError          - Database operation failures                    │
//! │                                                                         │
//! │  estoque-export                                                        │
//! │  └── ExportError / BarcodeError - Encoding and file writes             │
//! │                                                                         │
//! │  estoque-web                                                           │
//! │  └── ApiError         - What the browser sees (status + HTML page)     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! "Product not found" and "out of stock" are NOT errors here: they are
//! ordinary [`Adjustment`](crate::types::Adjustment) outcomes rendered as
//! messages with HTTP 200.

use thiserror::Error;

/// Input validation errors.
///
/// Raised while turning raw form fields into domain values. The web layer
/// maps every variant to 400 Bad Request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be zero or greater.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Value is not in the allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed {
        field: String,
        allowed: Vec<String>,
    },
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "nome".to_string(),
        };
        assert_eq!(err.to_string(), "nome is required");

        let err = ValidationError::Negative {
            field: "quantidade".to_string(),
        };
        assert_eq!(err.to_string(), "quantidade must not be negative");

        let err = ValidationError::NotAllowed {
            field: "operacao".to_string(),
            allowed: vec!["entrada".to_string(), "saida".to_string()],
        };
        assert_eq!(
            err.to_string(),
            r#"operacao must be one of: ["entrada", "saida"]"#
        );
    }
}
