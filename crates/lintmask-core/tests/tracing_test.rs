//! Tests for the lintmask tracing setup.

use std::sync::Mutex;

use lintmask_core::tracing::init_tracing;

/// Global mutex to serialize tracing tests (env var manipulation).
static TRACING_MUTEX: Mutex<()> = Mutex::new(());

#[test]
fn test_lintmask_log_debug() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var("LINTMASK_LOG", "debug");
    init_tracing();
    tracing::debug!("tracing initialised");
    std::env::remove_var("LINTMASK_LOG");
}

#[test]
fn test_init_tracing_idempotent() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    init_tracing();
    init_tracing();
    init_tracing();
}

#[test]
fn test_invalid_lintmask_log_fallback() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var("LINTMASK_LOG", "this_is_garbage=not_a_level");
    init_tracing();
    std::env::remove_var("LINTMASK_LOG");
}
