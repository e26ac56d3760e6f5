//! Tipp 5: Error Handling
//! Example: try/catch/finally ordering, ?, and narrow vs broad matches
//!
//! Run with: cargo run --bin p5_error_handling

use colored::Colorize;
use rust_tipps::exceptions::{
    catch_narrow_or_broad, catch_panic, propagate_missing, run_guarded, Finally,
};
use rust_tipps::{logging, TippError};

fn main() -> anyhow::Result<()> {
    logging::init();

    println!("=== Cleanup Always Runs ===");
    for fail_at in [None, Some(1)] {
        println!("fail_at = {:?}", fail_at);
        for event in run_guarded(&["open", "read", "close"], fail_at) {
            println!("  {}", event);
        }
    }

    println!("\n=== Guard on Early Return ===");
    let early = || -> Result<(), TippError> {
        let _finally = Finally::new(|| println!("  guard: cleaned up"));
        println!("  working...");
        propagate_missing(None)?;
        println!("  never printed");
        Ok(())
    };
    if let Err(e) = early() {
        println!("  returned: {}", e.to_string().red());
    }

    println!("\n=== Propagating Missing Values ===");
    for input in [Some("  rust  "), None] {
        match propagate_missing(input) {
            Ok(len) => println!("  {:?} -> length {}", input, len),
            Err(e) => println!("  {:?} -> {}", input, e),
        }
    }

    println!("\n=== Narrow Before Broad ===");
    for input in ["04 2025", "13 2025", "next month"] {
        println!("  {:<12} {}", format!("'{}'", input), catch_narrow_or_broad(input));
    }

    println!("\n=== Containing a Panic ===");
    let values: Vec<i32> = Vec::new();
    match catch_panic(move || values[3]) {
        Ok(v) => println!("  got {}", v),
        Err(e) => println!("  {}", e.to_string().yellow()),
    }

    println!("\n=== Key Points ===");
    println!("1. Drop guards play the role of finally");
    println!("2. ? returns early with the error; no value is used by accident");
    println!("3. Match the variant you can handle, then a catch-all");
    println!("4. Panics are for bugs; catch_unwind only contains them");
    Ok(())
}
