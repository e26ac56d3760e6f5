//! Error type shared by every tipp module.

use std::io;
use thiserror::Error;

/// Each variant represents a distinct failure mode a tipp can run into.
#[derive(Error, Debug)]
pub enum TippError {
    #[error("invalid date '{input}': {reason}")]
    InvalidDate { input: String, reason: String },

    #[error("month {0} is out of range (expected 1-12)")]
    InvalidMonth(u32),

    #[error("a tipp needs some text")]
    EmptyTipp,

    #[error("missing value for '{0}'")]
    MissingValue(String),

    #[error("operation panicked: {0}")]
    Panicked(String),

    #[error("failed to parse config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("failed to read file: {0}")]
    Io(#[from] io::Error),
}

impl TippError {
    pub fn invalid_date(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidDate {
            input: input.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TippError>;
