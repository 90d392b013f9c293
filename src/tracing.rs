//! Tracing initialization for applications and tests embedding sigparse.
//!
//! The library itself only emits events; nothing is printed unless a
//! subscriber is installed, either by the host application or via [`init`].

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Install a compact stderr subscriber filtered by `RUST_LOG`.
///
/// Under a test harness the test writer is used and the default level drops to
/// `DEBUG` so rejected signatures show up in failing test output. Safe to call
/// multiple times; only the first call has an effect.
pub fn init() {
    INIT.call_once(|| {
        let is_test = running_under_test_harness();
        let filter = EnvFilter::from_default_env().add_directive(default_level(is_test).into());

        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_target(true)
            .compact();

        if is_test {
            // A previous test may already own the global default
            let _ = builder.with_test_writer().try_init();
        } else if let Err(e) = builder.with_writer(std::io::stderr).try_init() {
            eprintln!("Failed to initialize tracing: {}", e);
        }
    });
}

fn running_under_test_harness() -> bool {
    std::env::var_os("NEXTEST").is_some() || std::env::var_os("CARGO_TARGET_TMPDIR").is_some()
}

const fn default_level(is_test: bool) -> Level {
    if is_test { Level::DEBUG } else { Level::INFO }
}
