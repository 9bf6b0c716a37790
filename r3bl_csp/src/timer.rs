// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! One-shot and periodic delayed callbacks, and monotonic sleep. See
//! [`sleep`] and [`Timer`].

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Blocks the calling thread for `duration`. A thin, documented wrapper
/// around [`std::thread::sleep`] so call sites read the same whether they're
/// sleeping or waiting on a [`Timer`].
pub fn sleep(duration: Duration) {
    thread::sleep(duration);
}

/// A delayed callback, fired once after `delay` and then, if `interval` and
/// `repetitions` say so, again every `interval`.
///
/// `repetitions == 0` means unbounded: the timer keeps firing on `interval`
/// until [`Timer`] is dropped. A bounded timer (`repetitions > 0`) disarms
/// itself after its last fire and its background thread exits on its own —
/// there is nothing left to cancel, which is why [`Timer`] has no explicit
/// `destroy`/`cancel` method that would be meaningful to call on it after
/// that point. Dropping a still-armed `Timer` cancels it.
#[allow(missing_debug_implementations)]
pub struct Timer {
    cancel: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Timer {
    /// Schedules `callback` to first run after `delay`, then every
    /// `interval` (if given), up to `repetitions` times (`0` = unbounded).
    ///
    /// # Panics
    /// Panics if `repetitions > 0` but `interval` is `None` and more than
    /// one repetition was requested — a repeating timer needs an interval to
    /// repeat on.
    pub fn new<F>(delay: Duration, interval: Option<Duration>, repetitions: u32, mut callback: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        assert!(
            repetitions <= 1 || interval.is_some(),
            "a timer with more than one repetition needs an interval"
        );

        let cancel = Arc::new(AtomicBool::new(false));
        let worker_cancel = Arc::clone(&cancel);

        let handle = thread::spawn(move || {
            thread::sleep(delay);
            let mut fired = 0u32;
            loop {
                if worker_cancel.load(Ordering::SeqCst) {
                    return;
                }
                callback();
                fired += 1;
                if repetitions != 0 && fired >= repetitions {
                    return;
                }
                match interval {
                    Some(interval) => thread::sleep(interval),
                    None => return,
                }
            }
        });

        Self {
            cancel,
            handle: Some(handle),
        }
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        self.cancel.store(true, Ordering::SeqCst);
        if let Some(handle) = self.handle.take() {
            // Don't block shutdown on a timer thread that might be asleep
            // for a long interval; it will observe `cancel` and exit on its
            // next wake. Detaching here is the safe-Rust analogue of the
            // spec's "cancels and releases" — there is no portable way to
            // force a sleeping thread to wake early.
            drop(handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Timer;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    #[test]
    fn bounded_timer_fires_exactly_the_requested_number_of_times() {
        let counter = Arc::new(AtomicU32::new(0));
        let worker_counter = Arc::clone(&counter);
        let _timer = Timer::new(
            Duration::from_millis(50),
            Some(Duration::from_millis(100)),
            3,
            move || {
                worker_counter.fetch_add(1, Ordering::SeqCst);
            },
        );
        std::thread::sleep(Duration::from_millis(400));
        assert_eq!(counter.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn dropping_an_unbounded_timer_stops_further_fires() {
        let counter = Arc::new(AtomicU32::new(0));
        let worker_counter = Arc::clone(&counter);
        let timer = Timer::new(
            Duration::from_millis(20),
            Some(Duration::from_millis(20)),
            0,
            move || {
                worker_counter.fetch_add(1, Ordering::SeqCst);
            },
        );
        std::thread::sleep(Duration::from_millis(100));
        drop(timer);
        let seen_at_drop = counter.load(Ordering::SeqCst);
        std::thread::sleep(Duration::from_millis(150));
        // The in-flight sleep may let one more fire through after drop; the
        // invariant that matters is that it stops growing without bound.
        assert!(counter.load(Ordering::SeqCst) <= seen_at_drop + 1);
    }
}
