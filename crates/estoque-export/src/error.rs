//! # Export Error Types

use thiserror::Error;

/// Failures while encoding a download.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV encoding failed: {0}")]
    Csv(#[from] csv::Error),

    /// The in-memory CSV buffer could not be recovered from the writer.
    #[error("CSV buffer flush failed: {0}")]
    CsvFlush(String),

    #[error("XLSX encoding failed: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}

/// Failures while producing a barcode image.
#[derive(Debug, Error)]
pub enum BarcodeError {
    /// The code cannot be used as a file name.
    #[error("Invalid code for barcode file name: '{0}'")]
    InvalidCode(String),

    /// The symbology rejected the data.
    #[error("Barcode encoding failed for '{code}': {reason}")]
    Encode { code: String, reason: String },

    /// PNG generation failed.
    #[error("Barcode image generation failed for '{code}': {reason}")]
    Image { code: String, reason: String },

    /// Output directory or file could not be written.
    #[error("Barcode file write failed: {0}")]
    Io(#[from] std::io::Error),
}

pub type ExportResult<T> = Result<T, ExportError>;

pub type BarcodeResult<T> = Result<T, BarcodeError>;
