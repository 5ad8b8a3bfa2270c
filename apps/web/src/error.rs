//! # HTTP Error Mapping
//!
//! Every handler returns [`ApiResult`]. Failures from the lower crates are
//! converted with `?` and rendered as a small HTML page:
//!
//! ```text
//!   ValidationError ──► ApiError::Validation ──► 400  (message shown)
//!   DbError         ──► ApiError::Database   ──► 500  (logged, generic page)
//!   ExportError     ──► ApiError::Export     ──► 500
//!   BarcodeError    ──► ApiError::Barcode    ──► 500
//! ```
//!
//! "Product not found" is not an error here: the baixa and scanner pages
//! report it as a status message with 200.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use estoque_core::ValidationError;
use estoque_db::DbError;
use estoque_export::{BarcodeError, ExportError};
use thiserror::Error;
use tracing::error;

use crate::pages;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    #[error("Database error: {0}")]
    Database(#[from] DbError),

    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    #[error("Barcode error: {0}")]
    Barcode(#[from] BarcodeError),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Database(_) | ApiError::Export(_) | ApiError::Barcode(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Text shown to the user. Server-side details stay in the log.
    fn public_detail(&self) -> String {
        match self {
            ApiError::Validation(e) => e.to_string(),
            _ => "Erro interno do servidor. Tente novamente.".to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            error!(error = %self, status = status.as_u16(), "Request failed");
        }

        let page = pages::erro(
            status.as_u16(),
            status.canonical_reason().unwrap_or("Erro"),
            &self.public_detail(),
        );

        (status, pages::into_response(page)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let validation = ApiError::from(ValidationError::Required {
            field: "nome".into(),
        });
        assert_eq!(validation.status_code(), StatusCode::BAD_REQUEST);

        let db = ApiError::from(DbError::duplicate("codigo", "P00001"));
        assert_eq!(db.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let barcode = ApiError::from(BarcodeError::InvalidCode("../x".into()));
        assert_eq!(barcode.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_internal_details_are_not_shown() {
        let err = ApiError::from(DbError::QueryFailed("no such table: produtos".into()));
        assert!(!err.public_detail().contains("produtos"));

        let err = ApiError::from(ValidationError::Negative {
            field: "quantidade".into(),
        });
        assert!(err.public_detail().contains("quantidade"));
    }

    #[test]
    fn test_into_response_status() {
        let response = ApiError::from(ValidationError::Required {
            field: "nome".into(),
        })
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
