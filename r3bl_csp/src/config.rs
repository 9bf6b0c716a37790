// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Runtime configuration.
//!
//! Built in code rather than parsed from a file, mirroring how the teacher
//! constructs its own `TracingConfig` — there's nothing here that benefits
//! from an external file format, and adding one (`config`, `toml`, …) would
//! be a dependency with no real job to do.

/// Capacities for the supervisor's internal service channels.
///
/// The spec these defaults come from calls for "capacity 4 or 8"; `8` is
/// used here for both, matching the original `sego_init()`.
#[derive(Debug, Clone, Copy)]
pub struct RuntimeConfig {
    pub(crate) start_capacity: usize,
    pub(crate) stop_capacity: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            start_capacity: 8,
            stop_capacity: 8,
        }
    }
}

impl RuntimeConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_start_capacity(mut self, capacity: usize) -> Self {
        self.start_capacity = capacity;
        self
    }

    #[must_use]
    pub fn with_stop_capacity(mut self, capacity: usize) -> Self {
        self.stop_capacity = capacity;
        self
    }
}
