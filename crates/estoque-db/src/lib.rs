//! # estoque-db: Database Layer for Estoque
//!
//! SQLite storage for the single `produtos` table, through sqlx.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Estoque Data Flow                                │
//! │                                                                         │
//! │  axum handler (POST /baixa)                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     estoque-db (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────────┐  ┌─────────────┐  │   │
//! │  │   │   Database    │    │ ProductRepository │  │ Migrations  │  │   │
//! │  │   │   (pool.rs)   │◄───│ insert / search   │  │ (embedded)  │  │   │
//! │  │   │  SqlitePool   │    │ increment / ...   │  │ 001_*.sql   │  │   │
//! │  │   └───────────────┘    └───────────────────┘  └─────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  estoque.db (SQLite file, WAL mode)                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`pool`] - Connection pool and database handle
//! - [`migrations`] - Embedded schema migrations
//! - [`error`] - Database error types
//! - [`repository`] - The product repository
//!
//! ## Usage
//!
//! ```rust,ignore
//! use estoque_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("estoque.db")).await?;
//! let products = db.products().search("Widget").await?;
//! ```

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};
pub use repository::product::ProductRepository;
