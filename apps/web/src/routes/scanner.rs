//! Camera scanner page.
//!
//! The browser decodes Code 128 with QuaggaJS and posts the code together
//! with the selected operation. The response is the same page with a
//! status message, which the script swaps in place of the current one.

use axum::extract::State;
use axum::response::Html;
use axum::Form;
use estoque_core::code::is_product_code;
use estoque_core::stock::scanner_message;
use estoque_core::validation::normalize_code;
use estoque_core::{Adjustment, StockOperation};
use serde::Deserialize;
use tracing::{info, warn};

use crate::error::ApiResult;
use crate::pages;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ScannerForm {
    #[serde(default)]
    pub codigo: String,

    /// Missing means `entrada`. Unknown values are rejected by the extractor.
    #[serde(default)]
    pub operacao: StockOperation,
}

pub async fn page() -> Html<String> {
    pages::into_response(pages::scanner(StockOperation::default(), None))
}

/// Applies one entrada or saida to the scanned code.
pub async fn adjust(
    State(state): State<AppState>,
    Form(input): Form<ScannerForm>,
) -> ApiResult<Html<String>> {
    let code = normalize_code(&input.codigo);
    let operation = input.operacao;

    let outcome = state.db.products().adjust(code, operation).await?;

    match &outcome {
        Adjustment::Applied { product } => info!(
            code = %code,
            operation = %operation,
            quantity = product.quantity,
            "Scanner adjustment applied"
        ),
        Adjustment::OutOfStock { .. } => {
            warn!(code = %code, operation = %operation, "Scanner saida refused: out of stock")
        }
        Adjustment::NotFound { .. } => {
            warn!(
                code = %code,
                operation = %operation,
                well_formed = is_product_code(code),
                "Scanned code not found"
            )
        }
    }

    let message = scanner_message(operation, &outcome);
    Ok(pages::into_response(pages::scanner(operation, Some(&message))))
}
