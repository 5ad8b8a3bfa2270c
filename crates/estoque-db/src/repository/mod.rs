//! # Repository Module
//!
//! ```text
//! axum handler
//!      │  state.db.products().decrement("P00001")
//!      ▼
//! ProductRepository
//! ├── insert / count              (registration)
//! ├── list_all / search           (report, export)
//! ├── get_by_code / set_quantity
//! └── increment / decrement       (baixa, scanner)
//!      │  SQL
//!      ▼
//! produtos (SQLite)
//! ```

pub mod product;
