//! # Domain Types
//!
//! Core domain types used throughout Estoque.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────────┐   │
//! │  │    Product      │   │   NewProduct    │   │   StockOperation    │   │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────────  │   │
//! │  │  code (P00001)  │   │  name           │   │  Entrada (+1)       │   │
//! │  │  name           │   │  quantity       │   │  Saida   (-1)       │   │
//! │  │  quantity       │   │  (validated)    │   └─────────────────────┘   │
//! │  └─────────────────┘   └─────────────────┘                              │
//! │                                                                         │
//! │  ┌───────────────────────────────────────────────────────────────────┐ │
//! │  │  Adjustment: Applied { product } | OutOfStock { product }         │ │
//! │  │              | NotFound { code }                                  │ │
//! │  └───────────────────────────────────────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

// =============================================================================
// Product
// =============================================================================

/// A product row.
///
/// `code` is the primary key and never changes after registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    /// Generated identifier, e.g. `P00001`.
    pub code: String,

    /// Free-text product name.
    pub name: String,

    /// Units in stock.
    pub quantity: i64,
}

impl Product {
    /// Creates a product row from its parts.
    pub fn new(code: impl Into<String>, name: impl Into<String>, quantity: i64) -> Self {
        Product {
            code: code.into(),
            name: name.into(),
            quantity,
        }
    }
}

/// Registration input after validation.
///
/// Built with [`validation::validate_new_product`](crate::validation::validate_new_product).
/// The code is assigned later, at insert time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub quantity: i64,
}

impl NewProduct {
    /// Attaches a generated code, producing the row to insert.
    pub fn with_code(self, code: impl Into<String>) -> Product {
        Product {
            code: code.into(),
            name: self.name,
            quantity: self.quantity,
        }
    }
}

// =============================================================================
// Stock Operation
// =============================================================================

/// Direction of a single-unit stock adjustment.
///
/// Deserializes from the scanner form's `operacao` field through
/// [`FromStr`](std::str::FromStr), so `saída` and mixed case are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum StockOperation {
    /// Stock in: quantity + 1, no upper bound.
    #[default]
    Entrada,

    /// Stock out: quantity - 1, refused at zero.
    Saida,
}

impl StockOperation {
    /// Form value for this operation.
    pub const fn as_str(&self) -> &'static str {
        match self {
            StockOperation::Entrada => "entrada",
            StockOperation::Saida => "saida",
        }
    }
}

impl std::fmt::Display for StockOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for StockOperation {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "entrada" => Ok(StockOperation::Entrada),
            "saida" | "saída" => Ok(StockOperation::Saida),
            _ => Err(ValidationError::NotAllowed {
                field: "operacao".to_string(),
                allowed: vec!["entrada".to_string(), "saida".to_string()],
            }),
        }
    }
}

impl TryFrom<String> for StockOperation {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// =============================================================================
// Adjustment Outcome
// =============================================================================

/// Result of trying to move a product's quantity by one unit.
///
/// Only `Applied` means a row changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Adjustment {
    /// The row was updated. `product.quantity` is the new value.
    Applied { product: Product },

    /// A decrement was refused because the quantity is already zero.
    OutOfStock { product: Product },

    /// No product has this code.
    NotFound { code: String },
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_operation_parsing() {
        assert_eq!(
            "entrada".parse::<StockOperation>().unwrap(),
            StockOperation::Entrada
        );
        assert_eq!(
            "SAIDA".parse::<StockOperation>().unwrap(),
            StockOperation::Saida
        );
        assert_eq!(
            "saída".parse::<StockOperation>().unwrap(),
            StockOperation::Saida
        );
        assert!("devolucao".parse::<StockOperation>().is_err());
    }

    #[test]
    fn test_stock_operation_default_is_entrada() {
        assert_eq!(StockOperation::default(), StockOperation::Entrada);
        assert_eq!(StockOperation::Saida.to_string(), "saida");
        assert_eq!(
            StockOperation::try_from(" Saída ".to_string()).unwrap(),
            StockOperation::Saida
        );
    }

    #[test]
    fn test_new_product_with_code() {
        let product = NewProduct {
            name: "Widget".to_string(),
            quantity: 10,
        }
        .with_code("P00001");

        assert_eq!(product, Product::new("P00001", "Widget", 10));
    }
}
