//! Tipp 3: Closures and Function Traits
//! Example: Fn, FnMut and FnOnce in practice
//!
//! Run with: cargo run --bin p3_closures

use rust_tipps::functional::{
    apply_twice, compose, consume, make_adder, make_counter, Consumer, Function, OperationTable,
    Supplier,
};
use rust_tipps::logging;

fn main() {
    logging::init();

    println!("=== Fn: Borrowing the Environment ===");
    let add_five = make_adder(5);
    println!("add_five(10) = {}", add_five(10));
    println!("apply_twice(add_five, 10) = {}", apply_twice(&add_five, 10));

    println!("\n=== Composition ===");
    let shout = compose(|s: &str| s.trim().to_string(), |s: String| s.to_uppercase() + "!");
    println!("{}", shout("  hello closures "));

    println!("\n=== FnMut: Mutating Captured State ===");
    let mut next_id = make_counter();
    for _ in 0..3 {
        println!("  id {}", next_id());
    }

    println!("\n=== FnOnce: Consuming Captured Values ===");
    let report = String::from("moved into the closure");
    println!("{}", consume(move || report));

    println!("\n=== Boxed Function Vocabulary ===");
    let supplier: Supplier<Vec<u32>> = Box::new(|| vec![3, 1, 2]);
    let summarize: Function<Vec<u32>, String> =
        Box::new(|v: Vec<u32>| format!("{} items, sum {}", v.len(), v.iter().sum::<u32>()));
    let print: Consumer<String> = Box::new(|s: &String| println!("  {}", s));
    print(&summarize(supplier()));

    println!("\n=== Operation Table ===");
    let table = OperationTable::standard();
    for symbol in table.symbols() {
        match table.apply(symbol, 84, 2) {
            Some(result) => println!("  84 {} 2 = {}", symbol, result),
            None => println!("  84 {} 2 is undefined", symbol),
        }
    }
    println!("  7 / 0 -> {:?}", table.apply("/", 7, 0));

    println!("\n=== Key Points ===");
    println!("1. Fn can be called many times and only reads its captures");
    println!("2. FnMut may change captured state between calls");
    println!("3. FnOnce may give its captures away, so it runs once");
}
