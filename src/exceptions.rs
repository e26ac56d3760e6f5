//! Error handling idioms: cleanup that always runs, `?` propagation,
//! matching one error variant versus all of them, and containing panics.

use crate::dates;
use crate::error::{Result, TippError};
use std::any::Any;
use std::cell::RefCell;
use std::panic::{self, UnwindSafe};
use tracing::warn;

/// Runs the closure when dropped, whether the scope ends normally, through
/// an early return, or by unwinding.
pub struct Finally<F: FnOnce()> {
    cleanup: Option<F>,
}

impl<F: FnOnce()> Finally<F> {
    pub fn new(cleanup: F) -> Self {
        Finally {
            cleanup: Some(cleanup),
        }
    }

    /// Disarms the guard; the cleanup will not run.
    pub fn cancel(mut self) {
        self.cleanup = None;
    }
}

impl<F: FnOnce()> Drop for Finally<F> {
    fn drop(&mut self) {
        if let Some(cleanup) = self.cleanup.take() {
            cleanup();
        }
    }
}

/// Executes `steps` in order, failing at `fail_at`, and returns the trace of
/// what ran: every `try`, at most one `catch`, and always a final `finally`.
pub fn run_guarded(steps: &[&str], fail_at: Option<usize>) -> Vec<String> {
    let trace = RefCell::new(Vec::new());
    {
        let _finally = Finally::new(|| trace.borrow_mut().push("finally".to_string()));

        let outcome: Result<()> = steps.iter().enumerate().try_for_each(|(i, step)| {
            trace.borrow_mut().push(format!("try {}", step));
            if fail_at == Some(i) {
                Err(TippError::MissingValue(step.to_string()))
            } else {
                Ok(())
            }
        });

        if let Err(e) = outcome {
            trace.borrow_mut().push(format!("catch {}", e));
        }
    }
    trace.into_inner()
}

/// A missing input becomes an error at the first `?`, not a crash later on.
pub fn propagate_missing(value: Option<&str>) -> Result<usize> {
    let value = value.ok_or_else(|| TippError::MissingValue("value".to_string()))?;
    Ok(value.trim().len())
}

pub fn catch_narrow_or_broad(input: &str) -> String {
    match dates::parse_month_year(input) {
        Ok((year, month)) => format!("ok: {:02}/{}", month, year),
        Err(TippError::InvalidMonth(month)) => format!("narrow: month {} rejected", month),
        Err(other) => format!("broad: {}", other),
    }
}

pub fn catch_panic<T, F>(f: F) -> Result<T>
where
    F: FnOnce() -> T + UnwindSafe,
{
    panic::catch_unwind(f).map_err(|payload| {
        let message = panic_message(payload.as_ref());
        warn!(%message, "caught panic");
        TippError::Panicked(message)
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn finally_runs_on_success_and_failure() {
        assert_eq!(
            run_guarded(&["open", "read"], None),
            ["try open", "try read", "finally"]
        );
        assert_eq!(
            run_guarded(&["open", "read", "close"], Some(1)),
            [
                "try open",
                "try read",
                "catch missing value for 'read'",
                "finally"
            ]
        );
    }

    #[test]
    fn finally_guard_can_be_cancelled() {
        let ran = Cell::new(false);
        {
            let guard = Finally::new(|| ran.set(true));
            guard.cancel();
        }
        assert!(!ran.get());

        {
            let _guard = Finally::new(|| ran.set(true));
        }
        assert!(ran.get());
    }

    #[test]
    fn missing_value_propagates() {
        assert_eq!(propagate_missing(Some(" abc ")).unwrap(), 3);
        assert!(matches!(
            propagate_missing(None),
            Err(TippError::MissingValue(name)) if name == "value"
        ));
    }

    #[test]
    fn narrow_before_broad() {
        assert_eq!(catch_narrow_or_broad("03 2024"), "ok: 03/2024");
        assert_eq!(catch_narrow_or_broad("13 2024"), "narrow: month 13 rejected");
        assert!(catch_narrow_or_broad("soon").starts_with("broad: invalid date"));
    }

    #[test]
    fn panics_become_errors() {
        assert_eq!(catch_panic(|| 7).unwrap(), 7);
        match catch_panic(|| -> u8 { panic!("boom {}", 1) }) {
            Err(TippError::Panicked(msg)) => assert_eq!(msg, "boom 1"),
            other => panic!("expected Panicked, got {:?}", other),
        }
    }
}
