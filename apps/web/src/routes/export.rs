//! Spreadsheet downloads of the full product list.

use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use estoque_export::ExportFormat;
use tracing::info;

use crate::error::ApiResult;
use crate::state::AppState;

pub async fn csv(State(state): State<AppState>) -> ApiResult<Response> {
    download(&state, ExportFormat::Csv).await
}

pub async fn xlsx(State(state): State<AppState>) -> ApiResult<Response> {
    download(&state, ExportFormat::Xlsx).await
}

/// Encodes every product and sends it as an attachment.
async fn download(state: &AppState, format: ExportFormat) -> ApiResult<Response> {
    let products = state.db.products().list_all().await?;
    let body = format.encode(&products)?;

    info!(
        file = format.file_name(),
        rows = products.len(),
        bytes = body.len(),
        "Export generated"
    );

    let disposition = format!("attachment; filename=\"{}\"", format.file_name());
    Ok((
        [
            (header::CONTENT_TYPE, format.content_type().to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    )
        .into_response())
}
