//! Tipp 6: Dates
//! Example: Formatting in several locales and counting days
//!
//! Run with: cargo run --bin p6_dates [YYYY-MM-DD ...]

use anyhow::Context;
use chrono::{Local, NaiveDate};
use rust_tipps::config::Settings;
use rust_tipps::dates::{self, DateStyle};
use rust_tipps::logging;

fn main() -> anyhow::Result<()> {
    logging::init();
    let settings = Settings::discover().context("reading tipps.toml")?;
    settings.apply();

    let today = Local::now().date_naive();
    let mut days: Vec<NaiveDate> = std::env::args()
        .skip(1)
        .map(|arg| dates::parse_iso(&arg))
        .collect::<Result<_, _>>()
        .context("dates must look like YYYY-MM-DD")?;
    if days.is_empty() {
        days.push(today);
    }

    println!("=== Formatting ===");
    for day in &days {
        println!("ISO:      {}", dates::format(*day, DateStyle::Iso));
        println!("German:   {}", dates::format(*day, DateStyle::FullGerman));
        println!("US:       {}", dates::format(*day, DateStyle::FullUs));
        println!(
            "Config:   {}{}",
            dates::format(*day, settings.locale.style()),
            if dates::is_weekend(*day) { " (weekend)" } else { "" }
        );
        println!();
    }

    println!("=== Days Between ===");
    for day in &days {
        println!(
            "{} is {} days away from today",
            dates::to_iso_string(*day),
            dates::diff_between_dates(*day, today)
        );
    }
    if let [first, .., last] = days.as_slice() {
        println!(
            "{} -> {}: {} days (same both ways: {})",
            first,
            last,
            dates::diff_between_dates(*first, *last),
            dates::diff_between_dates(*last, *first)
        );
    }

    println!("\n=== Key Points ===");
    println!("1. NaiveDate is a calendar date without time zone");
    println!("2. Locale names come from chrono's locale tables");
    println!("3. Subtracting dates yields a duration; abs() makes it symmetric");
    Ok(())
}
