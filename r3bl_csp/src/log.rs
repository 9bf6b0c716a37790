// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Logging bootstrap.
//!
//! The teacher's `tui` crate ships an elaborate `CustomEventFormatter` for
//! colorized, terminal-aware log rendering. That's a rendering concern for
//! an interactive TUI and has no place in a headless concurrency library,
//! so this module only keeps the part of the teacher's pattern that does
//! transfer: a one-shot, idempotent `tracing_subscriber` install driven by
//! `RUST_LOG`.

use std::sync::Once;

static INIT: Once = Once::new();

/// Installs a process-wide `tracing` subscriber reading its filter from the
/// `RUST_LOG` environment variable (default: `info`).
///
/// Safe to call more than once — later calls are no-ops, matching the
/// "init must run before anything else, and re-init is not meaningful"
/// shape the rest of this crate's lifecycle follows.
pub fn init_logging() {
    INIT.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .try_init();
    });
}
