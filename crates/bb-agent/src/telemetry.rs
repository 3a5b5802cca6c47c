//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

pub const LOG_ENV: &str = "BITSAT_LOG";
pub const DEFAULT_FILTER: &str = "bitsat_bot=info,bb_agent=info,bb_router=warn,bb_reply=warn,bb_core=warn";

/// Install the global subscriber. Per-crate levels come from `BITSAT_LOG`,
/// e.g. `BITSAT_LOG=bb_router=debug,bb_agent=info`. Safe to call repeatedly.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(filter)
            .init();
    });
}
