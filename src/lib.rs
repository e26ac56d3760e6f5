//! Rust Tipps - one language idea per program.
//!
//! The programs under `src/bin/` each demonstrate a single idea; the
//! subjects they work with live here so they can be tested.
//!
//! Run any tipp with:
//! ```bash
//! cargo run --bin <tipp_name>
//! ```

pub mod config;
pub mod dates;
pub mod error;
pub mod exceptions;
pub mod functional;
pub mod init;
pub mod logging;
pub mod os;
pub mod person;
pub mod predicates;
pub mod shapes;
pub mod strings;
pub mod tipp;

pub use error::{Result, TippError};
