//! # Product Repository
//!
//! Database operations on the `produtos` table.
//!
//! ## Column Mapping
//! ```text
//!   produtos.codigo      TEXT PRIMARY KEY  →  Product.code
//!   produtos.nome        TEXT              →  Product.name      (NULL → "")
//!   produtos.quantidade  INTEGER           →  Product.quantity  (NULL → 0)
//! ```
//!
//! ## Stock Updates
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Stock Update Strategy                                │
//! │                                                                         │
//! │  ❌ Read-then-write (two requests can lose an update)                  │
//! │     SELECT quantidade ...; UPDATE ... SET quantidade = 4               │
//! │                                                                         │
//! │  ✅ Single conditional statement                                       │
//! │     UPDATE produtos SET quantidade = quantidade - 1                    │
//! │     WHERE codigo = ? AND quantidade > 0                                │
//! │     RETURNING ...                                                      │
//! │                                                                         │
//! │  No row returned? A second lookup tells "out of stock" apart from      │
//! │  "no such code". That lookup never writes.                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use estoque_core::{Adjustment, Product, StockOperation};

/// Columns selected for every `Product` read.
const PRODUCT_COLUMNS: &str =
    "codigo AS code, COALESCE(nome, '') AS name, COALESCE(quantidade, 0) AS quantity";

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = db.products();
///
/// let code = next_product_code(repo.count().await? as u64);
/// repo.insert(&Product::new(code, "Widget", 10)).await?;
///
/// let outcome = repo.decrement("P00001").await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Inserts a new product.
    ///
    /// ## Returns
    /// * `Ok(Product)` - The inserted row
    /// * `Err(DbError::UniqueViolation)` - The code already exists
    pub async fn insert(&self, product: &Product) -> DbResult<Product> {
        debug!(code = %product.code, "Inserting product");

        sqlx::query("INSERT INTO produtos (codigo, nome, quantidade) VALUES (?1, ?2, ?3)")
            .bind(&product.code)
            .bind(&product.name)
            .bind(product.quantity)
            .execute(&self.pool)
            .await
            .map_err(|e| match DbError::from(e) {
                DbError::UniqueViolation { field, .. } => {
                    DbError::duplicate(field, product.code.clone())
                }
                other => other,
            })?;

        Ok(product.clone())
    }

    /// Lists every product in insertion order.
    pub async fn list_all(&self) -> DbResult<Vec<Product>> {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM produtos ORDER BY rowid");

        let products = sqlx::query_as::<_, Product>(&sql)
            .fetch_all(&self.pool)
            .await?;

        debug!(count = products.len(), "Listed products");
        Ok(products)
    }

    /// Searches by case-sensitive substring on name or code.
    ///
    /// `instr` is used instead of `LIKE` so matching is case-sensitive and
    /// `%` / `_` in the term are literal. A blank term lists everything.
    ///
    /// ## Example
    /// ```rust,ignore
    /// // Matches P00002 (and any name containing "00002")
    /// let products = repo.search("00002").await?;
    /// ```
    pub async fn search(&self, term: &str) -> DbResult<Vec<Product>> {
        let term = term.trim();

        debug!(term = %term, "Searching products");

        if term.is_empty() {
            return self.list_all().await;
        }

        let sql = format!(
            "SELECT {PRODUCT_COLUMNS} FROM produtos \
             WHERE instr(nome, ?1) > 0 OR instr(codigo, ?1) > 0 \
             ORDER BY rowid"
        );

        let products = sqlx::query_as::<_, Product>(&sql)
            .bind(term)
            .fetch_all(&self.pool)
            .await?;

        debug!(count = products.len(), "Search returned products");
        Ok(products)
    }

    /// Gets a product by its code.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - Product found
    /// * `Ok(None)` - No product with that code
    pub async fn get_by_code(&self, code: &str) -> DbResult<Option<Product>> {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM produtos WHERE codigo = ?1");

        let product = sqlx::query_as::<_, Product>(&sql)
            .bind(code)
            .fetch_optional(&self.pool)
            .await?;

        Ok(product)
    }

    /// Overwrites the quantity of a product.
    ///
    /// Returns `false` (and changes nothing) when the code does not exist.
    pub async fn set_quantity(&self, code: &str, quantity: i64) -> DbResult<bool> {
        debug!(code = %code, quantity = %quantity, "Setting quantity");

        let result = sqlx::query("UPDATE produtos SET quantidade = ?2 WHERE codigo = ?1")
            .bind(code)
            .bind(quantity)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Adds one unit. No upper bound.
    pub async fn increment(&self, code: &str) -> DbResult<Adjustment> {
        debug!(code = %code, "Incrementing stock");

        let sql = format!(
            "UPDATE produtos SET quantidade = COALESCE(quantidade, 0) + 1 \
             WHERE codigo = ?1 \
             RETURNING {PRODUCT_COLUMNS}"
        );

        let updated = sqlx::query_as::<_, Product>(&sql)
            .bind(code)
            .fetch_optional(&self.pool)
            .await?;

        Ok(match updated {
            Some(product) => Adjustment::Applied { product },
            None => Adjustment::NotFound {
                code: code.to_string(),
            },
        })
    }

    /// Removes one unit unless the quantity is already zero.
    pub async fn decrement(&self, code: &str) -> DbResult<Adjustment> {
        debug!(code = %code, "Decrementing stock");

        let sql = format!(
            "UPDATE produtos SET quantidade = quantidade - 1 \
             WHERE codigo = ?1 AND quantidade > 0 \
             RETURNING {PRODUCT_COLUMNS}"
        );

        let updated = sqlx::query_as::<_, Product>(&sql)
            .bind(code)
            .fetch_optional(&self.pool)
            .await?;

        if let Some(product) = updated {
            return Ok(Adjustment::Applied { product });
        }

        Ok(match self.get_by_code(code).await? {
            Some(product) => Adjustment::OutOfStock { product },
            None => Adjustment::NotFound {
                code: code.to_string(),
            },
        })
    }

    /// Applies a one-unit stock operation.
    pub async fn adjust(&self, code: &str, operation: StockOperation) -> DbResult<Adjustment> {
        match operation {
            StockOperation::Entrada => self.increment(code).await,
            StockOperation::Saida => self.decrement(code).await,
        }
    }

    /// Counts all rows. Feeds the code generator.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM produtos")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
