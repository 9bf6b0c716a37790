// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Background task supervisor. See [`Supervisor`].

use std::collections::HashMap;
use std::sync::Arc;
use std::thread::{self, JoinHandle, ThreadId};

use crate::channel::Channel;
use crate::config::RuntimeConfig;
use crate::context::Context;
use crate::error::SupervisorError;
use crate::readiness::SelectSource;
use crate::select::{select_with_context, Selected};

/// A task handed to the supervisor to run on its own OS thread.
type Task = Box<dyn FnOnce() + Send + 'static>;

/// Owns the lifecycle of every task spawned through it: starts each one on
/// its own OS thread, joins it when it finishes, and tears all of them down
/// on [`close`](Self::close).
///
/// The registry that tracks live tasks lives as a plain local `HashMap`
/// inside the service thread's own loop, not as shared state behind a lock
/// on this struct — it is only ever touched by that one thread, so (per the
/// spec this implements) no external synchronization is needed for it.
#[allow(missing_debug_implementations)]
pub struct Supervisor {
    start: Arc<Channel<Task>>,
    close_ctx: Arc<Context>,
    service_thread: Option<JoinHandle<()>>,
}

impl Supervisor {
    /// Allocates the service channels and close-context, and starts the
    /// background service thread.
    ///
    /// # Errors
    /// Returns [`SupervisorError::ThreadSpawnFailed`] if the OS refuses to
    /// start the service thread. Per the spec, this is fatal: the
    /// [`crate::runtime`] façade that calls this aborts the process on it,
    /// since a runtime with no service thread can't do anything useful.
    pub fn init(config: RuntimeConfig) -> Result<Self, SupervisorError> {
        let start = Arc::new(Channel::new(config.start_capacity));
        let stop = Arc::new(Channel::new(config.stop_capacity));
        let close_ctx = Arc::new(Context::new());

        let service_thread = {
            let start = Arc::clone(&start);
            let stop = Arc::clone(&stop);
            let close_ctx = Arc::clone(&close_ctx);
            thread::Builder::new()
                .name("r3bl_csp-supervisor".to_owned())
                .spawn(move || service_loop(&start, &stop, &close_ctx))
                .map_err(SupervisorError::ThreadSpawnFailed)?
        };

        Ok(Self {
            start,
            close_ctx,
            service_thread: Some(service_thread),
        })
    }

    /// Starts `task` on its own OS thread, tracked by this supervisor.
    ///
    /// If the start channel is at capacity, the oldest pending start
    /// request is dropped (per the channel's drop-oldest policy) rather
    /// than this call blocking — preserving the supervisor service loop's
    /// liveness at the cost of a lost spawn under sustained overload.
    pub fn spawn<F>(&self, task: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.start.send(Box::new(task));
    }

    /// Raises the close-context, waits for the service thread to terminate
    /// every still-running task and tear itself down, then returns.
    pub fn close(mut self) {
        self.close_ctx.raise();
        if let Some(handle) = self.service_thread.take() {
            let _ = handle.join();
        }
    }
}

fn service_loop(start: &Arc<Channel<Task>>, stop: &Arc<Channel<ThreadId>>, close_ctx: &Arc<Context>) {
    let mut live: HashMap<ThreadId, JoinHandle<()>> = HashMap::new();
    let channels: [&dyn SelectSource; 2] = [&**start, &**stop];

    loop {
        match select_with_context(&[close_ctx.as_ref()], &channels) {
            Selected::Context(_) => {
                tracing::debug!(live = live.len(), "supervisor closing");
                // Safe Rust has no way to force another thread to stop
                // mid-execution (no `pthread_cancel` equivalent). Detaching
                // instead of joining is the closest honest analogue to the
                // spec's "forcibly terminate" here: the supervisor stops
                // tracking and waiting on these threads, which may continue
                // running to completion on their own — an accepted,
                // documented resource leak from the supervisor's point of
                // view, exactly as the spec's own design notes call out.
                for (_, handle) in live.drain() {
                    drop(handle);
                }
                return;
            }
            Selected::Channel(0) => {
                let task = start.recv();
                let stop = Arc::clone(stop);
                let handle = thread::spawn(move || {
                    task();
                    let id = thread::current().id();
                    stop.send(id);
                });
                live.insert(handle.thread().id(), handle);
            }
            Selected::Channel(1) => {
                let id = stop.recv();
                if let Some(handle) = live.remove(&id) {
                    let _ = handle.join();
                }
            }
            Selected::Channel(_) => unreachable!("only two channels are registered"),
        }
    }
}
