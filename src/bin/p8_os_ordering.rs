//! Tipp 8: Ordering Strategies
//! Example: Natural Ord plus interchangeable comparators
//!
//! Run with: cargo run --bin p8_os_ordering

use rust_tipps::logging;
use rust_tipps::os::{sample_systems, sort_with, sorted_with, Os, OsOrdering};

fn show(systems: &[Os]) {
    for os in systems {
        println!("  {}", os);
    }
}

fn main() {
    logging::init();

    let systems = sample_systems();

    println!("=== Natural Order (Ord) ===");
    let mut natural = systems.clone();
    natural.sort();
    show(&natural);

    for ordering in OsOrdering::ALL {
        println!("\n=== {:?} ===", ordering);
        show(&sorted_with(&systems, ordering));
    }

    println!("\n=== Sorting in Place ===");
    let mut in_place = systems.clone();
    sort_with(&mut in_place, OsOrdering::ByVersion);
    if let (Some(oldest), Some(newest)) = (in_place.first(), in_place.last()) {
        println!("  lowest version: {}", oldest);
        println!("  highest version: {}", newest);
    }

    println!("\n=== Version Components ===");
    for os in &systems {
        println!("  {:<16} {:?}", os.to_string(), os.version_parts());
    }

    println!("\n=== Key Points ===");
    println!("1. Ord gives a type one natural order");
    println!("2. Other orders are comparators chosen at the call site");
    println!("3. Versions compare by number: 6.8 < 6.10");
}
