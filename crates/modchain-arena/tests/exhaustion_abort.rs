//! `alloc` on a full arena terminates the process instead of unwinding.
//!
//! The test re-runs its own binary with `MODCHAIN_EXHAUST_CHILD` set; the
//! child exhausts an arena and is expected to die by abort.

use std::env;
use std::process::Command;

use modchain_arena::{ArenaConfig, NodeAllocator, NodeArena};

const CHILD_ENV: &str = "MODCHAIN_EXHAUST_CHILD";
const TEST_NAME: &str = "alloc_on_full_arena_aborts";

/// Exit code the test harness uses when a test panics.
const PANIC_EXIT_CODE: i32 = 101;

fn exhaust() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
    let mut arena = NodeArena::<u32>::new(ArenaConfig::with_capacity(1)).unwrap();
    let _ = arena.alloc(1);
    let _ = arena.alloc(2);
}

#[test]
fn alloc_on_full_arena_aborts() {
    if env::var_os(CHILD_ENV).is_some() {
        exhaust();
        // Reaching here means alloc returned on a full arena.
        std::process::exit(0);
    }

    let output = Command::new(env::current_exe().unwrap())
        .args([TEST_NAME, "--exact", "--nocapture", "--test-threads=1"])
        .env(CHILD_ENV, "1")
        .output()
        .unwrap();

    let status = output.status;
    assert!(!status.success(), "child survived exhaustion: {status}");
    assert_ne!(status.code(), Some(PANIC_EXIT_CODE), "child panicked: {status}");

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        // SIGABRT
        assert_eq!(status.signal(), Some(6), "unexpected termination: {status}");
    }

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("node allocation failed; aborting"),
        "missing fatal log line in child stderr:\n{stderr}"
    );
    assert!(stderr.contains("all 1 slots in use"));
}
