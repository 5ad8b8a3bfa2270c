//! # estoque-export: Export Encoder and Barcode Renderer
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  GET /export/csv  ─┐                                                    │
//! │  GET /export/xlsx ─┼─► Vec<Product> ─► ExportFormat::encode ─► Vec<u8> │
//! │                    │                   (csv_export / xlsx_export)       │
//! │                    │                                                    │
//! │  POST /cadastro ───┴─► code ─► BarcodeRenderer::render ─► codigos/*.png │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`csv_export`] - CSV document (`Código,Nome,Quantidade`)
//! - [`xlsx_export`] - XLSX workbook with one `Estoque` sheet
//! - [`barcode`] - Code 128 PNG images written to disk
//! - [`error`] - Error types for both halves

pub mod barcode;
pub mod csv_export;
pub mod error;
pub mod xlsx_export;

pub use barcode::BarcodeRenderer;
pub use error::{BarcodeError, BarcodeResult, ExportError, ExportResult};

use estoque_core::Product;

/// Download formats offered on the report page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Xlsx,
}

impl ExportFormat {
    /// Attachment file name.
    pub const fn file_name(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "estoque.csv",
            ExportFormat::Xlsx => "estoque.xlsx",
        }
    }

    /// MIME type for the `Content-Type` header.
    pub const fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv",
            ExportFormat::Xlsx => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
        }
    }

    /// Encodes the product list in this format.
    pub fn encode(&self, products: &[Product]) -> ExportResult<Vec<u8>> {
        match self {
            ExportFormat::Csv => csv_export::encode_csv(products),
            ExportFormat::Xlsx => xlsx_export::encode_xlsx(products),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_metadata() {
        assert_eq!(ExportFormat::Csv.file_name(), "estoque.csv");
        assert_eq!(ExportFormat::Csv.content_type(), "text/csv");
        assert_eq!(ExportFormat::Xlsx.file_name(), "estoque.xlsx");
        assert!(ExportFormat::Xlsx.content_type().ends_with("spreadsheetml.sheet"));
    }

    #[test]
    fn test_encode_dispatches() {
        let products = vec![Product::new("P00001", "Widget", 10)];

        let csv = ExportFormat::Csv.encode(&products).unwrap();
        assert!(csv.starts_with("Código".as_bytes()));

        let xlsx = ExportFormat::Xlsx.encode(&products).unwrap();
        assert!(xlsx.starts_with(b"PK"));
    }
}
