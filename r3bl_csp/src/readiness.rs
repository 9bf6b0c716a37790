// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The readiness "doorbell" that backs [`crate::select`].
//!
//! The C implementation this crate's design is based on gives every channel
//! and context its own `pipe(2)` file descriptor: sends/raises write a byte,
//! receives/lowers read one, and `poll(2)` multiplexes the file descriptors
//! in a single syscall. That design exists because C has no portable
//! "wait on several condition variables at once" primitive.
//!
//! Rust doesn't need the file-descriptor detour. A single process-wide
//! [`Condvar`] that every [`crate::channel::Channel`] and [`crate::context::Context`]
//! rings on every state change gives [`select`](crate::select) the same
//! "block until something I care about changes, then rescan" shape, without
//! a side channel that can drift out of sync with the real queue occupancy
//! (see the note on [`SelectSource`]).

use std::sync::{Condvar, Mutex, OnceLock};
use std::time::Instant;

/// A source a [`select`](crate::select) call can wait on: a channel or a context.
///
/// `is_ready` must read the *real* state (queue occupancy, context flag) —
/// never a separately-maintained counter — so that readiness can never drift
/// from the thing it describes. This sidesteps the open question spec.md
/// raises about drop-oldest eviction desynchronizing a pipe-based readiness
/// count from queue occupancy: there is no separate count to desynchronize.
pub trait SelectSource: Send + Sync {
    /// Returns whether this source currently has something for a selector to
    /// act on (a queued item, or a raised context). Must not block and must
    /// not mutate state.
    fn is_ready(&self) -> bool;
}

/// Process-wide doorbell. A single instance is shared by every channel and
/// context so that one [`select`](crate::select) call can be woken by a
/// state change on any of them.
#[derive(Debug, Default)]
pub(crate) struct Bell {
    generation: Mutex<u64>,
    cv: Condvar,
}

impl Bell {
    /// Bumps the generation counter and wakes every waiter. Called after any
    /// state change that could make a previously-unready source ready (or
    /// vice versa): channel send/evict/recv, context raise/lower.
    pub(crate) fn ring(&self) {
        let mut gen = self.generation.lock().expect("bell mutex poisoned");
        *gen = gen.wrapping_add(1);
        self.cv.notify_all();
    }

    /// Blocks until the generation counter differs from `last_seen`, or
    /// `deadline` passes, whichever comes first. Returns the generation
    /// observed when it woke, so callers can pass it back in on the next
    /// iteration of their scan-then-wait loop.
    pub(crate) fn wait(&self, last_seen: u64, deadline: Option<Instant>) -> u64 {
        let mut gen = self.generation.lock().expect("bell mutex poisoned");
        loop {
            if *gen != last_seen {
                return *gen;
            }
            match deadline {
                None => gen = self.cv.wait(gen).expect("bell mutex poisoned"),
                Some(deadline) => {
                    let Some(remaining) = deadline.checked_duration_since(Instant::now()) else {
                        return *gen;
                    };
                    let (guard, timeout) = self
                        .cv
                        .wait_timeout(gen, remaining)
                        .expect("bell mutex poisoned");
                    gen = guard;
                    if timeout.timed_out() {
                        return *gen;
                    }
                }
            }
        }
    }
}

static BELL: OnceLock<Bell> = OnceLock::new();

pub(crate) fn bell() -> &'static Bell {
    BELL.get_or_init(Bell::default)
}
