//! Shared helpers for integration tests.

#![expect(
    dead_code,
    reason = "helpers are reused across multiple tests so some may be unused"
)]

use linecalc::{Context, Session};

/// Assert that `actual` evaluated to a value within `1e-12` of `expected`.
#[track_caller]
#[expect(clippy::float_arithmetic, reason = "tolerance comparison")]
pub fn assert_close(actual: Option<f64>, expected: f64) {
    let Some(value) = actual else {
        panic!("expected {expected}, expression failed to evaluate");
    };
    assert!(
        (value - expected).abs() <= 1e-12,
        "expected {expected}, got {value}"
    );
}

/// Build a context with the given slots filled in.
pub fn context_with(slots: &[(usize, f64)]) -> Context {
    let mut ctx = Context::new();
    for &(slot, value) in slots {
        assert!(ctx.set_slot(slot, value), "slot {slot} out of range");
    }
    ctx
}

/// Run `script` through a fresh session, returning the outcome and output.
pub fn run_script(script: &str) -> (Result<linecalc::Flow, linecalc::CalcError>, String) {
    let mut session = Session::new(Vec::new());
    let result = session.run(script.as_bytes());
    let out = String::from_utf8(session.into_output()).unwrap_or_else(|e| panic!("utf8: {e}"));
    (result, out)
}
