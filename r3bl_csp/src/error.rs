// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Error taxonomy for the concurrency runtime.
//!
//! The original C implementation this crate's design is based on returns a
//! single flat `sgReturnType` enum (`OK`, `NOTHING`, `TIMEOUT`, `QUEUE_FULL`,
//! `ERR_NULLPTR`, `ERR_ALLOC`, `ERR_PTHREAD`, `ERR_INVALID`) from every
//! function, because C has no way to encode "this operation can only fail
//! this way" in its types. Rust can, so each fallible operation here gets its
//! own narrow error enum instead of one enum shared by everything. The
//! `NULLPTR` and `ALLOC` cases disappear entirely: ownership makes a missing
//! argument unrepresentable, and the global allocator aborts rather than
//! returning an error on the paths this crate exercises.

/// Returned by [`crate::supervisor::Supervisor::init`] and surfaced (as a
/// fatal process exit) by the [`crate::runtime`] façade when the underlying
/// OS cannot start the service thread.
#[derive(Debug, thiserror::Error)]
pub enum SupervisorError {
    /// `std::thread::Builder::spawn` failed, almost always because the OS
    /// refused to allocate a new thread.
    #[error("failed to start supervisor service thread: {0}")]
    ThreadSpawnFailed(std::io::Error),
}

/// Returned by [`crate::channel::Channel::recv_timeout`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RecvTimeoutError {
    /// The deadline elapsed before any item became available. State is left
    /// unchanged: no item was consumed and no readiness token was spent.
    #[error("timed out waiting for an item")]
    Timeout,
}

/// Returned by [`crate::channel::Channel::try_recv`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TryRecvError {
    /// The channel had nothing queued at the moment of the call.
    #[error("no item is currently available")]
    Empty,
}
