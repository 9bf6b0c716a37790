// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! End-to-end scenarios, lettered to match the spec this crate implements.
//!
//! Scenarios that touch the process-wide runtime (`init`/`spawn`/`close`)
//! are `#[serial]` since they share a single global singleton.

use pretty_assertions::assert_eq;
use r3bl_csp::{Channel, Context, ContextFlag, Selected, Timer};
use serial_test::serial;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Scenario A (echo) and scenario D (context cancel) both exercise the
/// process-wide runtime singleton, which only goes through
/// Uninitialized -> Running -> Closed once per process — so they share a
/// single `init`/`close` bracket instead of each calling it independently.
#[test]
#[serial]
fn scenario_a_echo_and_d_context_cancel() {
    r3bl_csp::init();

    // --- Scenario A: a supervised task echoes one item from `C` to `D`. ---
    let c = Arc::new(Channel::<u32>::new(1));
    let d = Arc::new(Channel::<u32>::new(1));

    let recv_side = Arc::clone(&c);
    let send_side = Arc::clone(&d);
    r3bl_csp::spawn(move || {
        let value = recv_side.recv();
        send_side.send(value);
    });

    c.send(0x1122_3344);
    let echoed = d.recv_timeout(Duration::from_secs(1)).expect("echo task should respond");
    assert_eq!(echoed, 0x1122_3344);

    // --- Scenario D: a supervised task selects on a context and exits
    // once it is raised; close joins it promptly. ---
    let cancel = Arc::new(Context::new());
    let exited = Arc::new(std::sync::atomic::AtomicBool::new(false));

    let worker_cancel = Arc::clone(&cancel);
    let worker_exited = Arc::clone(&exited);
    r3bl_csp::spawn(move || loop {
        if worker_cancel.flag() == ContextFlag::Raised {
            worker_exited.store(true, Ordering::SeqCst);
            return;
        }
        std::thread::sleep(Duration::from_millis(5));
    });

    let start = std::time::Instant::now();
    cancel.raise();
    while !exited.load(Ordering::SeqCst) && start.elapsed() < Duration::from_millis(200) {
        std::thread::sleep(Duration::from_millis(1));
    }
    assert!(exited.load(Ordering::SeqCst));

    r3bl_csp::close();
}

/// Scenario B: sending more than capacity drops the oldest items.
#[test]
fn scenario_b_drop_oldest() {
    let ch: Channel<u8> = Channel::new(3);
    for byte in [0x01, 0x02, 0x03, 0x04, 0x05] {
        ch.send(byte);
    }
    assert_eq!(ch.recv(), 0x03);
    assert_eq!(ch.recv(), 0x04);
    assert_eq!(ch.recv(), 0x05);
    assert_eq!(ch.try_recv(), Err(r3bl_csp::TryRecvError::Empty));
}

/// Scenario C: a timed receive without a sender times out after at least
/// the requested duration; with a sender that beats the deadline, it
/// succeeds with the sent value.
#[test]
fn scenario_c_timed_receive() {
    let no_sender: Channel<u32> = Channel::new(1);
    let start = std::time::Instant::now();
    let result = no_sender.recv_timeout(Duration::from_millis(200));
    assert_eq!(result, Err(r3bl_csp::RecvTimeoutError::Timeout));
    assert!(start.elapsed() >= Duration::from_millis(200));

    let with_sender = Arc::new(Channel::<u32>::new(1));
    let sender = Arc::clone(&with_sender);
    std::thread::spawn(move || {
        std::thread::sleep(Duration::from_millis(100));
        sender.send(42);
    });
    assert_eq!(with_sender.recv_timeout(Duration::from_secs(1)), Ok(42));
}

/// Scenario E: `select_with_context` blocks until a delayed raise fires,
/// and returns the context, not the still-empty channel.
#[test]
fn scenario_e_select_with_context() {
    let x = Arc::new(Context::new());
    let c: Channel<u8> = Channel::new(1);

    x.raise_after(Duration::from_millis(100));

    let channels: Vec<&dyn r3bl_csp::SelectSource> = vec![&c];
    let selected = r3bl_csp::select_with_context(&[&x], &channels);
    assert_eq!(selected, Selected::Context(0));
}

/// Scenario F: a timer with 3 repetitions fires exactly 3 times and
/// self-releases.
#[test]
fn scenario_f_timer() {
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
