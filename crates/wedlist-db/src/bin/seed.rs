//! # Catalogue Seeder
//!
//! Loads the product catalogue into the database for development.
//!
//! ## Usage
//! ```bash
//! # Import the embedded twenty-product catalogue (default)
//! cargo run -p wedlist-db --bin seed
//!
//! # Specify database path
//! cargo run -p wedlist-db --bin seed -- --db ./data/wedlist.db
//!
//! # Import a catalogue description from a file instead
//! cargo run -p wedlist-db --bin seed -- --catalogue ./products.json
//! ```
//!
//! The import is all-or-nothing: a single malformed entry aborts the
//! run with nothing inserted, and a database that already holds
//! products is left untouched.

use std::env;
use std::fs;

use wedlist_db::{bootstrap, Database, DbConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from("./wedlist_dev.db");
    let mut catalogue_path: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--catalogue" | "-c" => {
                if i + 1 < args.len() {
                    catalogue_path = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Wedlist Catalogue Seeder");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>         Database file path (default: ./wedlist_dev.db)");
                println!("  -c, --catalogue <PATH>  Catalogue JSON file (default: embedded catalogue)");
                println!("  -h, --help              Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Wedlist Catalogue Seeder");
    println!("===========================");
    println!("Database: {}", db_path);
    println!(
        "Catalogue: {}",
        catalogue_path.as_deref().unwrap_or("(embedded)")
    );
    println!();

    let source = match &catalogue_path {
        Some(path) => fs::read_to_string(path)?,
        None => bootstrap::DEFAULT_CATALOGUE.to_string(),
    };

    // Connect to database
    let config = DbConfig::new(&db_path);
    let db = Database::new(config).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");
    println!();

    let imported = bootstrap::import_catalogue(&db, &source).await?;

    if imported == 0 {
        let existing = db.products().count().await?;
        println!("⚠ Database already has {} products", existing);
        println!("  Skipping import to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    println!("✓ Imported {} products", imported);

    for product in db.products().list_all().await? {
        let stock = if product.in_stock() {
            format!("{} in stock", product.stock_quantity)
        } else {
            "out of stock".to_string()
        };
        println!("  [{:>2}] {} ({}) - {}, {}", product.id, product.name, product.brand, product.price, stock);
    }

    println!();
    println!("✓ Seed complete!");

    Ok(())
}
