// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_csp
//!
//! A small CSP-style concurrency toolkit: bounded, drop-oldest [`Channel`]s,
//! a readiness-multiplexing [`select`], cancellation [`Context`]s that can
//! be toggled immediately or after a delay, one-shot and periodic [`Timer`]s,
//! and a background supervisor (not exported — see [`init`], [`spawn`], and
//! [`close`]) that owns the lifecycle of every task spawned through it.
//!
//! Most applications only need the process-wide façade:
//!
//! ```no_run
//! use std::time::Duration;
//!
//! r3bl_csp::init();
//!
//! let c = r3bl_csp::Channel::new(1);
//! r3bl_csp::spawn(move || {
//!     let value: u32 = c.recv();
//!     println!("got {value}");
//! });
//!
//! r3bl_csp::close();
//! ```
//!
//! Lower-level pieces (standalone [`Channel`]s, [`Context`]s, [`select`])
//! are usable on their own without ever touching the supervisor façade.

mod channel;
mod config;
mod context;
mod datetime;
mod error;
mod log;
mod queue;
mod readiness;
mod runtime;
mod select;
mod supervisor;
mod timer;

pub use channel::Channel;
pub use config::RuntimeConfig;
pub use context::{Context, ContextFlag};
pub use datetime::{
    local_datetime_parts, now_unix_micros, now_unix_millis, now_unix_nanos, now_unix_secs,
    LocalDateTimeParts,
};
pub use error::{RecvTimeoutError, SupervisorError, TryRecvError};
pub use log::init_logging;
pub use readiness::SelectSource;
pub use runtime::{close, init, init_with_config, spawn};
pub use select::{select, select_default, select_default_with_context, select_with_context, Selected};
pub use timer::{sleep, Timer};
