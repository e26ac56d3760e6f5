//! Sorting strings with different comparators.

use std::cmp::{Ordering, Reverse};

pub fn sort_natural(words: &mut [String]) {
    words.sort();
}

pub fn sort_case_insensitive(words: &mut [String]) {
    // Ties on the lowercase form fall back to the raw string for a total order.
    words.sort_by(|a, b| {
        a.to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| a.cmp(b))
    });
}

pub fn sort_by_length(words: &mut [String]) {
    words.sort_by(|a, b| by_length(a, b));
}

pub fn sort_reversed(words: &mut [String]) {
    words.sort_by_key(|w| Reverse(w.clone()));
}

pub fn sort_by_last_char(words: &mut [String]) {
    words.sort_by_key(|w| w.chars().last());
}

/// Shorter first; equal lengths alphabetically. Length counts characters, not bytes.
pub fn by_length(a: &str, b: &str) -> Ordering {
    a.chars()
        .count()
        .cmp(&b.chars().count())
        .then_with(|| a.cmp(b))
}

pub fn to_owned_words(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}
