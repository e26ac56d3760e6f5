//! Tipp 6b: Reading Input
//! Example: Ask for a month and print its calendar sheet
//!
//! Run with: cargo run --bin p6_calendar

use anyhow::Context;
use chrono::{Datelike, Local};
use colored::Colorize;
use rust_tipps::config::Settings;
use rust_tipps::{dates, logging};
use std::io::{self, Write};

fn prompt(message: &str) -> io::Result<String> {
    print!("{}", message);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

fn main() -> anyhow::Result<()> {
    logging::init();
    let settings = Settings::discover().context("reading tipps.toml")?;
    settings.apply();

    let input = prompt("Month and year (MM YYYY, empty for this month): ")
        .context("reading from stdin")?;

    let (year, month) = if input.is_empty() {
        let today = Local::now().date_naive();
        (today.year(), today.month())
    } else {
        dates::parse_month_year(&input).context("expected 'MM YYYY'")?
    };

    let sheet = dates::month_calendar(year, month, settings.week_start)?;
    let mut lines = sheet.lines();
    if let Some(title) = lines.next() {
        println!("\n{}", title.bold());
    }
    for line in lines {
        println!("{}", line);
    }
    Ok(())
}
