//! Stock report with optional substring search.

use axum::extract::{Query, State};
use axum::response::Html;
use serde::Deserialize;
use tracing::debug;

use crate::error::ApiResult;
use crate::pages;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct RelatorioQuery {
    #[serde(default)]
    pub busca: Option<String>,
}

/// Lists every product, or those whose name or code contains `busca`.
pub async fn report(
    State(state): State<AppState>,
    Query(query): Query<RelatorioQuery>,
) -> ApiResult<Html<String>> {
    let busca = query.busca.unwrap_or_default().trim().to_string();

    let products = state.db.products().search(&busca).await?;
    debug!(term = %busca, rows = products.len(), "Report rendered");

    Ok(pages::into_response(pages::relatorio(&products, &busca)))
}
