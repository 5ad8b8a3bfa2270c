//! # Validation Module
//!
//! Checks on registration input that the HTML form cannot enforce.
//!
//! ## Validation Layers
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Layer 1: Browser                                                       │
//! │  └── `required`, `type="number"` on the form inputs                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: axum Form extractor                                           │
//! │  └── missing / non-numeric quantidade → 422 (framework rejection)       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: THIS MODULE                                                   │
//! │  └── blank nome, negative quantidade → 400                              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 4: SQLite                                                        │
//! │  └── PRIMARY KEY on codigo                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::types::NewProduct;

/// Validates a product name. The name is kept exactly as submitted; only
/// a blank (empty or whitespace-only) name is refused.
///
/// ## Example
/// ```rust
/// use estoque_core::validation::validate_product_name;
///
/// assert_eq!(validate_product_name(" Widget ").unwrap(), " Widget ");
/// assert!(validate_product_name("   ").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<String> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "nome".to_string(),
        });
    }

    Ok(name.to_string())
}

/// Validates an initial stock quantity. Zero is allowed.
pub fn validate_initial_quantity(quantity: i64) -> ValidationResult<i64> {
    if quantity < 0 {
        return Err(ValidationError::Negative {
            field: "quantidade".to_string(),
        });
    }

    Ok(quantity)
}

/// Validates the registration form as a whole.
pub fn validate_new_product(name: &str, quantity: i64) -> ValidationResult<NewProduct> {
    Ok(NewProduct {
        name: validate_product_name(name)?,
        quantity: validate_initial_quantity(quantity)?,
    })
}

/// Normalizes a code typed by hand or decoded by the scanner.
///
/// Only surrounding whitespace is removed; case is preserved so lookups stay
/// exact.
pub fn normalize_code(code: &str) -> &str {
    code.trim()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_product_name() {
        assert_eq!(validate_product_name("Widget").unwrap(), "Widget");
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name("\t\n ").is_err());

        let long = "Parafuso ".repeat(30);
        assert_eq!(validate_product_name(&long).unwrap(), long);
    }

    #[test]
    fn test_validate_initial_quantity() {
        assert_eq!(validate_initial_quantity(0).unwrap(), 0);
        assert_eq!(validate_initial_quantity(10).unwrap(), 10);
        assert_eq!(
            validate_initial_quantity(-1).unwrap_err(),
            ValidationError::Negative {
                field: "quantidade".to_string()
            }
        );
    }

    #[test]
    fn test_validate_new_product() {
        let product = validate_new_product(" Parafuso 3mm ", 25).unwrap();
        assert_eq!(product.name, " Parafuso 3mm ");
        assert_eq!(product.quantity, 25);

        assert!(validate_new_product(" ", 25).is_err());
        assert!(validate_new_product("Parafuso", -5).is_err());
    }

    #[test]
    fn test_normalize_code() {
        assert_eq!(normalize_code("  P00001\n"), "P00001");
        assert_eq!(normalize_code("p00001"), "p00001");
    }
}
