//! Product registration.
//!
//! ```text
//!   POST nome, quantidade
//!        │ validate_new_product      (400 on blank name / negative qty)
//!        ▼
//!   count rows ─► next_product_code ─► P000NN
//!        │
//!        ├─► BarcodeRenderer::render ─► <dir>/P000NN.png
//!        ▼
//!   INSERT produtos ─► confirmation page
//! ```

use axum::extract::State;
use axum::response::Html;
use axum::Form;
use estoque_core::code::next_product_code;
use estoque_core::validation::validate_new_product;
use serde::Deserialize;
use tracing::info;

use crate::error::ApiResult;
use crate::pages;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CadastroForm {
    pub nome: String,
    pub quantidade: i64,
}

pub async fn form() -> Html<String> {
    pages::into_response(pages::cadastro())
}

pub async fn register(
    State(state): State<AppState>,
    Form(input): Form<CadastroForm>,
) -> ApiResult<Html<String>> {
    let new_product = validate_new_product(&input.nome, input.quantidade)?;

    let products = state.db.products();
    let count = products.count().await?;
    let code = next_product_code(u64::try_from(count).unwrap_or_default());

    let image_path = state.barcodes.render(&code).await?;
    let product = products.insert(&new_product.with_code(code)).await?;

    info!(
        code = %product.code,
        name = %product.name,
        quantity = product.quantity,
        "Product registered"
    );

    let image_url = format!("/codigos/{}.png", product.code);
    let image_path = image_path.display().to_string();

    Ok(pages::into_response(pages::confirmacao(
        &product,
        &image_path,
        &image_url,
    )))
}
