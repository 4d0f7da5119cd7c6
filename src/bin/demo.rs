//! Catalog demonstration driver
//!
//! Walks through the catalog operations end to end against a JSON file.
//!
//! Run with: cargo run --bin demo -- --path products.json

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use stockroom::{Catalog, ProductDraft};

#[derive(Parser, Debug)]
#[command(name = "stockroom-demo")]
#[command(about = "Exercise the product catalog against a JSON backing file")]
struct Args {
    /// Path to the catalog backing file
    #[arg(short, long, default_value = "products.json")]
    path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let mut catalog = Catalog::open(&args.path)
        .with_context(|| format!("opening catalog at {}", args.path.display()))?;

    println!("=== Stockroom Demo ===\n");

    println!("1. Adding products...");
    let drafts = [
        ProductDraft::new("Product 1", "First product", 100.0, "images/1.jpg", "code1", 10),
        ProductDraft::new("Product 2", "Second product", 200.0, "images/2.jpg", "code2", 5),
        ProductDraft::new("Product 3", "Third product", 150.0, "images/3.jpg", "code3", 8),
    ];
    for d in drafts {
        match catalog.add_product(d) {
            Ok(product) => println!("   ✓ added '{}' as id {}", product.title, product.id),
            Err(err) => eprintln!("   ✗ add failed: {}", err),
        }
    }
    println!();

    println!("2. All products:");
    for product in catalog.products()? {
        println!(
            "   - [{}] {} (code {}, price {}, stock {})",
            product.id, product.title, product.code, product.price, product.stock
        );
    }
    println!();

    println!("3. Lookup by id:");
    match catalog.product_by_id(2)? {
        Some(product) => println!("   id 2 -> '{}'", product.title),
        None => println!("   id 2 -> not found"),
    }
    match catalog.product_by_id(99)? {
        Some(product) => println!("   id 99 -> '{}'", product.title),
        None => println!("   id 99 -> not found"),
    }
    println!();

    println!("4. Updating product 2...");
    let updated = catalog.update_product(
        2,
        ProductDraft::new(
            "Product 2 (restocked)",
            "Second product, fresh batch",
            210.0,
            "images/2.jpg",
            "code2",
            50,
        ),
    )?;
    println!("   updated: {}", updated);
    println!();

    println!("5. Deleting product 2...");
    println!("   removed: {}", catalog.delete_product(2)?);
    println!("   removed again: {}", catalog.delete_product(2)?);
    println!();

    println!("6. Final state:");
    for product in catalog.products()? {
        println!("   - [{}] {} (code {})", product.id, product.title, product.code);
    }

    Ok(())
}
