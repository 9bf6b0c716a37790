// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Binary cancellation flag with delayed toggling. See [`Context`].

use std::sync::Mutex;
use std::thread;
use std::time::Duration;

use crate::readiness::{bell, SelectSource};

/// The two states a [`Context`] can be in.
///
/// The C design this is based on has a third `ERROR` sentinel returned when
/// a context argument is a null pointer. Rust's type system makes "no
/// context" unrepresentable wherever a `&Context` is required, so that
/// sentinel has no Rust equivalent and is not reproduced here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextFlag {
    Lowered,
    Raised,
}

/// A cooperative cancellation signal with two states, raised and lowered.
///
/// Contexts are the only cancellation mechanism in this runtime: a task
/// selects on a context of its own (typically alongside the channels it
/// already listens to) and exits voluntarily when it observes `Raised`.
/// Raising or lowering an already-raised/lowered context is a no-op —
/// both operations are idempotent on the public flag, even though the
/// underlying readiness signal is edge-triggered internally.
#[derive(Debug, Default)]
pub struct Context {
    flag: Mutex<ContextFlag>,
}

impl Default for ContextFlag {
    fn default() -> Self {
        ContextFlag::Lowered
    }
}

impl Context {
    #[must_use]
    pub fn new() -> Self {
        Self {
            flag: Mutex::new(ContextFlag::Lowered),
        }
    }

    /// Raises the flag. No-op if already raised.
    pub fn raise(&self) {
        let mut flag = self.flag.lock().expect("context mutex poisoned");
        if *flag != ContextFlag::Raised {
            *flag = ContextFlag::Raised;
            drop(flag);
            bell().ring();
        }
    }

    /// Lowers the flag. No-op if already lowered.
    pub fn lower(&self) {
        let mut flag = self.flag.lock().expect("context mutex poisoned");
        if *flag != ContextFlag::Lowered {
            *flag = ContextFlag::Lowered;
            drop(flag);
            bell().ring();
        }
    }

    #[must_use]
    pub fn flag(&self) -> ContextFlag {
        *self.flag.lock().expect("context mutex poisoned")
    }

    /// Raises the flag after `delay` elapses, without blocking the caller.
    ///
    /// Spawns a dedicated delay thread, matching the spec's "the
    /// implementation may use OS timers, a dedicated task, or a timer
    /// wheel" latitude. The thread is detached; it outlives this call and
    /// does not need to be joined, since raising a context the caller no
    /// longer holds a reference to is still observable by anyone else
    /// holding an `Arc` to it.
    pub fn raise_after(self: &std::sync::Arc<Self>, delay: Duration) {
        let ctx = std::sync::Arc::clone(self);
        thread::spawn(move || {
            thread::sleep(delay);
            ctx.raise();
        });
    }

    /// Lowers the flag after `delay` elapses, without blocking the caller.
    pub fn lower_after(self: &std::sync::Arc<Self>, delay: Duration) {
        let ctx = std::sync::Arc::clone(self);
        thread::spawn(move || {
            thread::sleep(delay);
            ctx.lower();
        });
    }
}

impl SelectSource for Context {
    fn is_ready(&self) -> bool {
        self.flag() == ContextFlag::Raised
    }
}
