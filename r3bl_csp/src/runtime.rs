// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Process-wide init/spawn/close façade over a single hidden [`Supervisor`].
//!
//! The supervisor type itself is not exported: callers interact with the
//! runtime only through [`init`], [`spawn`], and [`close`], matching the
//! spec's "hide the handle inside the module; do not export the supervisor
//! record type" design note.

use std::sync::{Mutex, OnceLock};

use crate::config::RuntimeConfig;
use crate::supervisor::Supervisor;

enum RuntimeState {
    Uninitialized,
    Running(Supervisor),
    Closed,
}

static RUNTIME: OnceLock<Mutex<RuntimeState>> = OnceLock::new();

fn state() -> &'static Mutex<RuntimeState> {
    RUNTIME.get_or_init(|| Mutex::new(RuntimeState::Uninitialized))
}

/// Starts the process-wide runtime with default [`RuntimeConfig`].
///
/// # Panics
/// Aborts the process with a diagnostic if the service thread cannot be
/// started — matching the spec's "allocation or OS-task-create failures
/// during init are fatal" rule. Also panics if called more than once, or
/// after [`close`] — re-initialization is not supported.
pub fn init() {
    init_with_config(RuntimeConfig::default());
}

/// Like [`init`], with an explicit [`RuntimeConfig`].
pub fn init_with_config(config: RuntimeConfig) {
    let mut guard = state().lock().expect("runtime mutex poisoned");
    assert!(
        matches!(*guard, RuntimeState::Uninitialized),
        "r3bl_csp::init called on an already-initialized or closed runtime"
    );
    match Supervisor::init(config) {
        Ok(supervisor) => *guard = RuntimeState::Running(supervisor),
        Err(err) => {
            tracing::error!(error = %err, "failed to initialize r3bl_csp runtime");
            std::process::exit(1);
        }
    }
}

/// Submits `task` to run on its own OS thread, supervised by the runtime.
///
/// # Panics
/// Panics if called before [`init`] or after [`close`].
pub fn spawn<F>(task: F)
where
    F: FnOnce() + Send + 'static,
{
    let guard = state().lock().expect("runtime mutex poisoned");
    match &*guard {
        RuntimeState::Running(supervisor) => supervisor.spawn(task),
        _ => panic!("r3bl_csp::spawn called before init or after close"),
    }
}

/// Shuts the runtime down: terminates any still-running tasks and releases
/// the supervisor. Re-initializing after this is not supported.
///
/// # Panics
/// Panics if called before [`init`] or more than once.
pub fn close() {
    let supervisor = {
        let mut guard = state().lock().expect("runtime mutex poisoned");
        match std::mem::replace(&mut *guard, RuntimeState::Closed) {
            RuntimeState::Running(supervisor) => supervisor,
            other => {
                *guard = other;
                panic!("r3bl_csp::close called before init or after a previous close");
            }
        }
    };
    supervisor.close();
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    // These tests share the process-wide runtime singleton, so they must not
    // run concurrently with each other.

    #[test]
    #[serial]
    fn init_spawn_close_round_trip() {
        init();
        let ran = Arc::new(AtomicBool::new(false));
        let worker_ran = Arc::clone(&ran);
        spawn(move || worker_ran.store(true, Ordering::SeqCst));
        std::thread::sleep(Duration::from_millis(100));
        assert!(ran.load(Ordering::SeqCst));
        close();
    }

    #[test]
    #[serial]
    #[should_panic(expected = "before init or after close")]
    fn spawn_before_init_panics() {
        // Runs in isolation from the other `#[serial]` tests in this file,
        // but the static is process-wide, so this only holds if it runs
        // before `init_spawn_close_round_trip` establishes `Running`. Since
        // `RuntimeState` never goes back to `Uninitialized`, this test is
        // ordered first by naming it earlier alphabetically within the
        // `#[serial]` group is not guaranteed either — so it asserts the
        // weaker, always-true property instead: spawning outside of
        // `Running` state panics with this message, whether the prior state
        // is `Uninitialized` or `Closed`.
        let mut guard = state().lock().expect("runtime mutex poisoned");
        *guard = RuntimeState::Closed;
        drop(guard);
        spawn(|| {});
    }
}
