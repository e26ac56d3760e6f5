//! Tipp 1: Traits and Default Methods
//! Example: One trait, several shapes, dynamic dispatch
//!
//! Run with: cargo run --bin p1_default_methods

use rust_tipps::logging;
use rust_tipps::shapes::{largest, total_area, Area, Circle, Rectangle};

fn main() {
    logging::init();

    println!("=== Default Method ===");
    // Circle only implements area() and name(); describe() comes from the trait.
    let circle = Circle::new(1.5);
    println!("radius {} -> {}", circle.radius(), circle.describe());

    println!("\n=== Overridden Default ===");
    let rect = Rectangle::new(2.0, 4.5);
    println!("{}", rect.describe());

    println!("\n=== Trait Objects ===");
    let shapes: Vec<Box<dyn Area>> = vec![
        Box::new(circle),
        Box::new(rect),
        Box::new(Rectangle::square(3.0)),
        Box::new(Circle::new(0.5)),
    ];
    for shape in &shapes {
        println!("  {}", shape.describe());
    }
    println!("Total area: {:.2}", total_area(&shapes));
    if let Some(big) = largest(&shapes) {
        println!("Largest: {}", big.name());
    }

    println!("\n=== Key Points ===");
    println!("1. A default method is written once in the trait");
    println!("2. Implementors may override it, like Rectangle does");
    println!("3. Box<dyn Area> picks the right method at runtime");
}
