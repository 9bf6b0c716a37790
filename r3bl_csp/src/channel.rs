// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Bounded, drop-oldest, multi-producer multi-consumer channel. See [`Channel`].

use std::sync::{Condvar, Mutex};
use std::time::{Duration, Instant};

use crate::error::{RecvTimeoutError, TryRecvError};
use crate::queue::BoundedQueue;
use crate::readiness::{bell, SelectSource};

/// A bounded FIFO channel with drop-oldest overflow.
///
/// Sending never blocks and never fails: once the channel is at capacity, a
/// new send silently evicts the oldest queued item before appending. This
/// trades a lossy producer for a producer that never stalls — see the
/// module docs on [`crate::queue::BoundedQueue`] for why that trade is
/// deliberate.
///
/// Unlike [`std::sync::mpsc`], a `Channel` has no separate sender/receiver
/// halves and no disconnect state: any number of threads can hold a shared
/// reference and call [`send`](Self::send) or [`recv`](Self::recv) on it.
/// Fairness between concurrent receivers on the same channel is explicitly
/// out of scope.
#[derive(Debug)]
pub struct Channel<T> {
    inner: Mutex<BoundedQueue<T>>,
    not_empty: Condvar,
}

impl<T> Channel<T> {
    /// Creates a channel holding at most `capacity` items.
    ///
    /// # Panics
    /// Panics if `capacity` is zero.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Mutex::new(BoundedQueue::new(capacity)),
            not_empty: Condvar::new(),
        }
    }

    /// Sends `item`, evicting the oldest queued item first if the channel is
    /// already full. Never blocks.
    pub fn send(&self, item: T) {
        {
            let mut queue = self.inner.lock().expect("channel mutex poisoned");
            queue.push_evicting(item);
        }
        // A drop-oldest eviction retires one token and the new item issues
        // one, netting to no change when full — so readiness here is read
        // straight off queue occupancy rather than a parallel counter (see
        // `readiness::SelectSource`), and a single notification always
        // reflects the true state.
        self.not_empty.notify_one();
        bell().ring();
    }

    /// Blocks until an item is available, then returns it.
    pub fn recv(&self) -> T {
        let mut queue = self.inner.lock().expect("channel mutex poisoned");
        loop {
            if let Some(item) = queue.pop() {
                bell().ring();
                return item;
            }
            queue = self.not_empty.wait(queue).expect("channel mutex poisoned");
        }
    }

    /// Blocks until an item is available or `timeout` elapses.
    ///
    /// # Errors
    /// Returns [`RecvTimeoutError::Timeout`] if the deadline passes with
    /// nothing queued. On timeout, no state is mutated and no readiness
    /// token is consumed.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<T, RecvTimeoutError> {
        let deadline = Instant::now() + timeout;
        let mut queue = self.inner.lock().expect("channel mutex poisoned");
        loop {
            if let Some(item) = queue.pop() {
                bell().ring();
                return Ok(item);
            }
            let Some(remaining) = deadline.checked_duration_since(Instant::now()) else {
                return Err(RecvTimeoutError::Timeout);
            };
            let (guard, result) = self
                .not_empty
                .wait_timeout(queue, remaining)
                .expect("channel mutex poisoned");
            queue = guard;
            if result.timed_out() && queue.is_empty() {
                return Err(RecvTimeoutError::Timeout);
            }
        }
    }

    /// Takes an item if one is immediately available, without blocking.
    ///
    /// # Errors
    /// Returns [`TryRecvError::Empty`] if nothing was queued at the moment
    /// of the call.
    pub fn try_recv(&self) -> Result<T, TryRecvError> {
        let mut queue = self.inner.lock().expect("channel mutex poisoned");
        match queue.pop() {
            Some(item) => {
                bell().ring();
                Ok(item)
            }
            None => Err(TryRecvError::Empty),
        }
    }

    /// Current number of queued items. Exposed for tests and diagnostics;
    /// not part of the select/readiness contract (which only distinguishes
    /// empty from non-empty).
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().expect("channel mutex poisoned").len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Send> SelectSource for Channel<T> {
    fn is_ready(&self) -> bool {
        !self.inner.lock().expect("channel mutex poisoned").is_empty()
    }
}
