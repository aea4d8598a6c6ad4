//! Test helpers shared by the `salbp` integration tests.

pub mod builders;
pub mod fixtures;

use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

static INIT: Once = Once::new();

/// Install a captured tracing subscriber once per test binary.
///
/// Output only shows up for failing tests (or with `-- --nocapture`).
/// Defaults to `salbp=debug`; override with e.g. `RUST_LOG=salbp=trace`
/// to see every marshaled task.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("warn,salbp=debug"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .init();
    });
}
