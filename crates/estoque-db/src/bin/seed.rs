//! # Seed Data Generator
//!
//! Fills an empty database with demo products for development.
//!
//! ## Usage
//! ```bash
//! # 25 products (default) into ./estoque.db
//! cargo run -p estoque-db --bin seed
//!
//! # Custom amount and path
//! cargo run -p estoque-db --bin seed -- --count 200 --db ./data/estoque.db
//! ```
//!
//! Codes come from the same row-count generator as the registration page.
//! Barcode images are not rendered; register through the web form for those.

use std::env;

use estoque_core::code::next_product_code;
use estoque_core::Product;
use estoque_db::{Database, DbConfig};
use tracing_subscriber::EnvFilter;

const NAMES: &[&str] = &[
    "Parafuso 3mm",
    "Porca sextavada",
    "Arruela lisa",
    "Chave Phillips",
    "Fita isolante",
    "Lâmpada LED 9W",
    "Cabo flexível 2,5mm",
    "Disjuntor 20A",
    "Tomada 10A",
    "Interruptor simples",
    "Luva de raspa",
    "Óculos de proteção",
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args: Vec<String> = env::args().collect();

    let mut count: usize = 25;
    let mut db_path = "./estoque.db".to_string();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(count);
                    i += 1;
                }
            }
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Estoque Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of products to generate (default: 25)");
                println!("  -d, --db <PATH>    Database file path (default: ./estoque.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Estoque Seed Data Generator");
    println!("Database: {}", db_path);
    println!("Products: {}", count);

    let db = Database::new(DbConfig::new(&db_path)).await?;
    let repo = db.products();

    let existing = repo.count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} products, skipping seed.", existing);
        return Ok(());
    }

    for n in 0..count {
        let product = demo_product(n);
        if let Err(e) = repo.insert(&product).await {
            eprintln!("Failed to insert {}: {}", product.code, e);
        }
    }

    println!("✓ Inserted {} products", repo.count().await?);
    db.close().await;

    Ok(())
}

/// The n-th demo product (0-based), coded as the n-th registration would be.
fn demo_product(n: usize) -> Product {
    let base = NAMES[n % NAMES.len()];
    let name = match n / NAMES.len() {
        0 => base.to_string(),
        batch => format!("{} (lote {})", base, batch + 1),
    };
    let quantity = ((n * 7) % 50) as i64;

    Product::new(next_product_code(n as u64), name, quantity)
}
