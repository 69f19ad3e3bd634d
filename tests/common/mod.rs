//! Shared helpers for the integration tests.

#![allow(dead_code)]

/// Absolute tolerance for rupee amounts that pass through several products.
pub const EPS: f64 = 1e-9;

/// Assert `actual` is within `tol` of `expected`.
#[track_caller]
pub fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "expected {expected}, got {actual} (tolerance {tol})"
    );
}

/// Install a test-writer subscriber so `RUST_LOG=debug` shows calculator logs.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
