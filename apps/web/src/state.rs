//! Shared handler state.

use estoque_db::Database;
use estoque_export::BarcodeRenderer;

/// Handles shared by every request.
///
/// Built once in `main` and handed to the router. Cloning shares the
/// same connection pool.
#[derive(Debug, Clone)]
pub struct AppState {
    pub db: Database,
    pub barcodes: BarcodeRenderer,
}

impl AppState {
    pub fn new(db: Database, barcodes: BarcodeRenderer) -> Self {
        AppState { db, barcodes }
    }
}
