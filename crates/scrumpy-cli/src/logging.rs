//! Tracing setup for the CLI.
//!
//! Logs go to stderr so stdout stays machine-readable. The filter comes from
//! `SCRUMPY_LOG` (e.g. `SCRUMPY_LOG=scrumpy_core=debug`), defaulting to `warn`.

use tracing_subscriber::{fmt, EnvFilter};

const LOG_ENV: &str = "SCRUMPY_LOG";

pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    // A subscriber may already be installed when embedded; keep it.
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
