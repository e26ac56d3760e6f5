//! Tipp 7: Sorting Strings
//! Example: The same list under different comparators
//!
//! Run with: cargo run --bin p7_string_sorting

use rust_tipps::logging;
use rust_tipps::person::{oldest, sample_people, sort_by_age, sort_by_name, Person};
use rust_tipps::strings::{
    by_length, sort_by_last_char, sort_by_length, sort_case_insensitive, sort_natural,
    sort_reversed, to_owned_words,
};

fn show(label: &str, words: &[String]) {
    println!("{:<18} {}", label, words.join(" "));
}

fn show_people(label: &str, people: &[Person]) {
    let rendered: Vec<String> = people.iter().map(|p| p.to_string()).collect();
    println!("{:<18} {}", label, rendered.join(", "));
}

fn main() {
    logging::init();

    let original = to_owned_words(&["pear", "Apple", "fig", "banana", "apple", "Kiwi", "Äpfel"]);
    show("original:", &original);

    println!("\n=== Comparators ===");
    let sorts: [(&str, fn(&mut [String])); 5] = [
        ("natural:", sort_natural),
        ("case-insensitive:", sort_case_insensitive),
        ("by length:", sort_by_length),
        ("reversed:", sort_reversed),
        ("by last char:", sort_by_last_char),
    ];
    for (label, sort) in sorts {
        let mut words = original.clone();
        sort(&mut words);
        show(label, &words);
    }

    println!("\n=== Ad-hoc Comparator ===");
    let mut words = original.clone();
    // Longest first, reusing by_length with the arguments swapped.
    words.sort_by(|a, b| by_length(b, a));
    show("longest first:", &words);

    println!("\n=== Sorting People ===");
    let mut people = sample_people();
    sort_by_name(&mut people);
    show_people("by name:", &people);
    // Stable sort: Anna and Emma (both 34) keep their by-name order.
    sort_by_age(&mut people);
    show_people("then by age:", &people);
    if let Some(person) = oldest(&people) {
        println!("{:<18} {}", "oldest:", person);
    }

    println!("\n=== Key Points ===");
    println!("1. sort() uses Ord, which compares bytes: uppercase before lowercase");
    println!("2. sort_by takes a comparator; then_with breaks ties");
    println!("3. sort_by_key with Reverse flips the order without a custom Ord");
    println!("4. Stable sorts keep earlier orderings among equal keys");
}
