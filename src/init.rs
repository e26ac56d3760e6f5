//! Process-wide values that are computed once, on first access.
//!
//! Each value records itself in `INIT_LOG` after it finished computing, so
//! the log shows dependencies completing before the values that need them.

use lazy_static::lazy_static;
use std::sync::Mutex;
use tracing::debug;

lazy_static! {
    static ref INIT_LOG: Mutex<Vec<&'static str>> = Mutex::new(Vec::new());
    static ref BASE: u64 = {
        let value = 40;
        record("base");
        value
    };
    static ref DERIVED: u64 = {
        let value = *BASE + 2;
        record("derived");
        value
    };
    static ref GREETING: String = {
        let value = format!("the answer is {}", *DERIVED);
        record("greeting");
        value
    };
}

fn record(step: &'static str) {
    debug!(step, "static initialized");
    // A poisoned log still holds valid entries.
    let mut log = INIT_LOG.lock().unwrap_or_else(|e| e.into_inner());
    log.push(step);
}

pub fn base() -> u64 {
    *BASE
}

pub fn derived() -> u64 {
    *DERIVED
}

pub fn greeting() -> &'static str {
    GREETING.as_str()
}

/// Steps initialized so far, in completion order.
pub fn init_log() -> Vec<&'static str> {
    INIT_LOG.lock().unwrap_or_else(|e| e.into_inner()).clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(log: &[&str], step: &str) -> usize {
        log.iter().position(|s| *s == step).unwrap()
    }

    #[test]
    fn dependencies_finish_first_and_run_once() {
        assert_eq!(greeting(), "the answer is 42");
        assert_eq!(greeting(), "the answer is 42");
        assert_eq!(derived(), 42);
        assert_eq!(base(), 40);

        let log = init_log();
        assert!(position(&log, "base") < position(&log, "derived"));
        assert!(position(&log, "derived") < position(&log, "greeting"));
        for step in ["base", "derived", "greeting"] {
            assert_eq!(log.iter().filter(|s| **s == step).count(), 1);
        }
    }
}
