//! Manual single-unit decrement ("baixa").

use axum::extract::State;
use axum::response::Html;
use axum::Form;
use estoque_core::code::is_product_code;
use estoque_core::stock::baixa_message;
use estoque_core::validation::normalize_code;
use estoque_core::Adjustment;
use serde::Deserialize;
use tracing::{info, warn};

use crate::error::ApiResult;
use crate::pages;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct BaixaForm {
    #[serde(default)]
    pub codigo: String,
}

pub async fn form() -> Html<String> {
    pages::into_response(pages::baixa(None))
}

/// Takes one unit out of stock. Never goes below zero.
pub async fn decrement(
    State(state): State<AppState>,
    Form(input): Form<BaixaForm>,
) -> ApiResult<Html<String>> {
    let code = normalize_code(&input.codigo);
    let outcome = state.db.products().decrement(code).await?;

    match &outcome {
        Adjustment::Applied { product } => {
            info!(code = %code, quantity = product.quantity, "Baixa applied");
        }
        Adjustment::OutOfStock { .. } => warn!(code = %code, "Baixa refused: out of stock"),
        Adjustment::NotFound { .. } => warn!(
            code = %code,
            well_formed = is_product_code(code),
            "Baixa refused: product not found"
        ),
    }

    let message = baixa_message(&outcome);
    Ok(pages::into_response(pages::baixa(Some(&message))))
}
