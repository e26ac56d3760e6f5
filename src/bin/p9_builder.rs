//! Tipp 9: Builder Pattern
//! Example: Consuming builder with validation in build()
//!
//! Run with: cargo run --bin p9_builder

use colored::Colorize;
use rust_tipps::tipp::{Tipp, TippBuilder};
use rust_tipps::logging;

fn main() -> anyhow::Result<()> {
    logging::init();

    println!("=== Building Tipps ===");
    let tipps = vec![
        Tipp::builder("Let the compiler infer types in closures")
            .topic("closures")
            .topic("type inference")
            .build()?,
        Tipp::builder("Prefer &str parameters over &String")
            .topics(["strings", "api design", "strings"])
            .build()?,
        TippBuilder::new("Derive Debug on every public type").build()?,
    ];
    for tipp in &tipps {
        println!("  {}", tipp);
    }

    println!("\n=== Filtering by Topic ===");
    for tipp in tipps.iter().filter(|t| t.has_topic("strings")) {
        println!("  {}", tipp.text());
    }

    println!("\n=== Validation ===");
    match TippBuilder::new("   ").topic("nothing").build() {
        Ok(tipp) => println!("  unexpected: {}", tipp),
        Err(e) => println!("  rejected: {}", e.to_string().red()),
    }

    println!("\n=== Key Points ===");
    println!("1. Each setter takes self and returns Self for chaining");
    println!("2. build() validates and returns Result");
    println!("3. #[must_use] warns when a builder is dropped unused");
    Ok(())
}
