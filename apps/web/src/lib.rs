//! # estoque-web: Inventory Web Application
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Browser ──► TraceLayer ──► Router ──► handler (routes/*)               │
//! │                                           │                             │
//! │                   ┌───────────────────────┼────────────────────┐        │
//! │                   ▼                       ▼                    ▼        │
//! │             estoque-core            estoque-db          estoque-export  │
//! │             (codes, rules,          (produtos table)    (CSV, XLSX,     │
//! │              messages)                                   barcodes)      │
//! │                   │                       │                    │        │
//! │                   └───────────────────────┼────────────────────┘        │
//! │                                           ▼                             │
//! │                              maud page markup ──► Html<String>          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`config`] - TOML + environment configuration
//! - [`error`] - `ApiError` and its HTTP mapping
//! - [`pages`] - HTML pages built with maud
//! - [`routes`] - One module per page
//! - [`state`] - `AppState` shared by handlers

pub mod config;
pub mod error;
pub mod pages;
pub mod routes;
pub mod state;

pub use config::AppConfig;
pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::Router;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

/// Builds the complete application: routes plus request tracing.
pub fn build_router(state: AppState) -> Router {
    routes::router(state).layer(TraceLayer::new_for_http())
}

/// Initializes the tracing subscriber.
///
/// `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,estoque=debug,sqlx=warn,tower_http=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
