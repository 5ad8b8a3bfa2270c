//! # estoque-core: Pure Domain Logic for Estoque
//!
//! Everything the inventory app decides without touching a disk or a socket
//! lives here.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Estoque Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Browser (HTML + QuaggaJS)                    │   │
//! │  │    Cadastro ──► Relatório ──► Baixa ──► Scanner ──► Export      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ HTTP forms                             │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    estoque-web (axum handlers)                  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ estoque-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   code    │  │   stock   │  │ validation│  │   │
//! │  │   │  Product  │  │  P00001   │  │ Adjustment│  │  nome,    │  │   │
//! │  │   │ NewProduct│  │ generator │  │  messages │  │ quantidade│  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │           estoque-db / estoque-export (I/O crates)              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, NewProduct, StockOperation, Adjustment)
//! - [`code`] - Product code generator
//! - [`stock`] - Status messages for stock adjustments
//! - [`error`] - Domain error types
//! - [`validation`] - Registration input validation
//!
//! ## Example Usage
//!
//! ```rust
//! use estoque_core::code::next_product_code;
//!
//! // Two products already registered, the third gets P00003
//! assert_eq!(next_product_code(2), "P00003");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod code;
pub mod error;
pub mod stock;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{ValidationError, ValidationResult};
pub use stock::{MessageLevel, StatusMessage};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Prefix of every generated product code.
pub const CODE_PREFIX: char = 'P';

/// Minimum number of digits after [`CODE_PREFIX`].
pub const CODE_DIGITS: usize = 5;

/// Column headers shared by the report table and both export formats.
pub const REPORT_HEADERS: [&str; 3] = ["Código", "Nome", "Quantidade"];
