//! Tipp 2: Static Initialization
//! Example: lazy_static values computed once, on first use
//!
//! Run with: cargo run --bin p2_static_init

use rust_tipps::{init, logging};

fn main() {
    logging::init();

    println!("=== Before First Access ===");
    println!("Initialized so far: {:?}", init::init_log());

    println!("\n=== First Access ===");
    // Touching GREETING pulls in DERIVED, which pulls in BASE.
    println!("greeting(): {}", init::greeting());
    println!("Initialized so far: {:?}", init::init_log());

    println!("\n=== Second Access ===");
    println!("greeting(): {}", init::greeting());
    println!("derived(): {}", init::derived());
    println!("base(): {}", init::base());
    println!("Initialized so far: {:?}", init::init_log());

    println!("\n=== Key Points ===");
    println!("1. Nothing runs before main(); statics initialize lazily");
    println!("2. Dependencies finish before the value that uses them");
    println!("3. Each initializer runs exactly once, even across threads");
}
