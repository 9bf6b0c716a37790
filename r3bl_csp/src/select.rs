// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Readiness multiplexing over channels and contexts. See [`select`],
//! [`select_default`], [`select_with_context`], and
//! [`select_default_with_context`].

use crate::context::Context;
use crate::readiness::{bell, SelectSource};

/// What a with-context select call found ready.
///
/// Indices refer back into the slice the caller passed in — this crate
/// never hands out a source it didn't receive, so the caller already holds
/// a typed handle to whatever index comes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selected {
    Context(usize),
    Channel(usize),
}

/// Blocks until at least one of `sources` is ready, then returns the index
/// of the first ready one in argument order.
///
/// Select only reports readiness; it never consumes the item or resets the
/// context flag itself. Callers follow up with `recv`/`try_recv`/`flag` on
/// the source the returned index identifies.
pub fn select(sources: &[&dyn SelectSource]) -> usize {
    let mut seen_generation = 0;
    loop {
        if let Some(index) = scan(sources) {
            return index;
        }
        // A spurious wake (e.g. another selector drained the channel
        // between our scan and the bell ringing) just sends us around the
        // loop again — there is no distinct "retry" path to implement.
        seen_generation = bell().wait(seen_generation, None);
    }
}

/// Non-blocking: returns the index of a ready source, or `None` if nothing
/// is immediately ready.
#[must_use]
pub fn select_default(sources: &[&dyn SelectSource]) -> Option<usize> {
    scan(sources)
}

/// Blocks until at least one context is raised or at least one channel is
/// ready. Contexts are checked before channels when both are ready in the
/// same scan; within each group, the lowest index wins.
pub fn select_with_context(contexts: &[&Context], channels: &[&dyn SelectSource]) -> Selected {
    let mut seen_generation = 0;
    loop {
        if let Some(selected) = scan_with_context(contexts, channels) {
            return selected;
        }
        seen_generation = bell().wait(seen_generation, None);
    }
}

/// Non-blocking variant of [`select_with_context`].
#[must_use]
pub fn select_default_with_context(
    contexts: &[&Context],
    channels: &[&dyn SelectSource],
) -> Option<Selected> {
    scan_with_context(contexts, channels)
}

fn scan(sources: &[&dyn SelectSource]) -> Option<usize> {
    sources.iter().position(|source| source.is_ready())
}

fn scan_with_context(contexts: &[&Context], channels: &[&dyn SelectSource]) -> Option<Selected> {
    if let Some(index) = contexts.iter().position(|ctx| ctx.is_ready()) {
        return Some(Selected::Context(index));
    }
    scan(channels).map(Selected::Channel)
}
