//! Tipp 4: Predicates
//! Example: Combining small tests with and/or/negate
//!
//! Run with: cargo run --bin p4_predicates

use anyhow::Context;
use colored::Colorize;
use rust_tipps::config::Settings;
use rust_tipps::logging;
use rust_tipps::person::{sample_people, Person};
use rust_tipps::predicates::{filter, is_equal, Predicate};

fn print_all(label: &str, people: &[&Person]) {
    let names: Vec<String> = people.iter().map(|p| p.to_string()).collect();
    println!("{:<22} {}", label, names.join(", "));
}

fn main() -> anyhow::Result<()> {
    logging::init();
    Settings::discover()
        .context("reading tipps.toml")?
        .apply();

    let people = sample_people();

    println!("{}", "=== Single Predicates ===".bold());
    let adult = |p: &Person| p.is_adult();
    let short_name = |p: &Person| p.name.len() <= 4;
    print_all("adults:", &filter(&people, &adult));
    print_all("short names:", &filter(&people, &short_name));

    println!("\n{}", "=== Combined ===".bold());
    print_all("adult and short:", &filter(&people, &adult.and(short_name)));
    print_all("adult or short:", &filter(&people, &adult.or(short_name)));
    print_all("minors:", &filter(&people, &adult.negate()));

    println!("\n{}", "=== Equality Predicate ===".bold());
    let ages: Vec<u32> = people.iter().map(|p| p.age).collect();
    let hits = filter(&ages, &is_equal(34u32));
    println!("age 34 occurs {} times", hits.len());

    // The filtered result goes to stderr, separate from the lesson text.
    let minors = filter(&people, &adult.negate());
    for person in &minors {
        eprintln!("{} {}", "minor:".yellow(), person);
    }

    println!("\n=== Key Points ===");
    println!("1. Any Fn(&T) -> bool closure is a Predicate<T>");
    println!("2. and/or/negate are default methods returning new predicates");
    println!("3. Combinators are plain structs, so no allocation is needed");
    Ok(())
}
