//! Diagnostic logging.
//!
//! Events go to stderr so they never mix with passwords on stdout. The level is
//! taken from `STRONGPASS_LOG` (an `EnvFilter` directive) and defaults to
//! `warn`.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub const ENV_VAR: &str = "STRONGPASS_LOG";

pub fn init() {
    let filter = EnvFilter::try_from_env(ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}
