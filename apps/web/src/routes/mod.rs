//! # HTTP Routes
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  GET  /               → 303 /cadastro                                  │
//! │  GET  /cadastro       → registration form                              │
//! │  POST /cadastro       → code + barcode + insert → confirmation         │
//! │  GET  /relatorio      → table, optional ?busca=                        │
//! │  GET  /baixa          → manual decrement form                          │
//! │  POST /baixa          → decrement by one, status message               │
//! │  GET  /scanner        → camera scanner page                            │
//! │  POST /scanner        → entrada / saida by one, status message         │
//! │  GET  /export/csv     → estoque.csv                                    │
//! │  GET  /export/xlsx    → estoque.xlsx                                   │
//! │  GET  /codigos/*      → stored barcode PNGs                            │
//! │  GET  /health         → OK / 503                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod baixa;
pub mod cadastro;
pub mod export;
pub mod health;
pub mod relatorio;
pub mod scanner;

use axum::response::Redirect;
use axum::routing::get;
use axum::Router;
use tower_http::services::ServeDir;

use crate::state::AppState;

/// Builds the application routes (without middleware layers).
pub fn router(state: AppState) -> Router {
    let barcode_files = ServeDir::new(state.barcodes.output_dir());

    Router::new()
        .route("/", get(index))
        .route("/cadastro", get(cadastro::form).post(cadastro::register))
        .route("/relatorio", get(relatorio::report))
        .route("/baixa", get(baixa::form).post(baixa::decrement))
        .route("/scanner", get(scanner::page).post(scanner::adjust))
        .route("/export/csv", get(export::csv))
        .route("/export/xlsx", get(export::xlsx))
        .route("/health", get(health::health))
        .nest_service("/codigos", barcode_files)
        .with_state(state)
}

async fn index() -> Redirect {
    Redirect::to("/cadastro")
}
