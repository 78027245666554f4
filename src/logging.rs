//! Tracing setup for the fintrack binary
//!
//! Diagnostics go to stderr so report output on stdout stays clean.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding filter directives (e.g. `fintrack=debug`)
pub const LOG_ENV: &str = "FINTRACK_LOG";

const DEFAULT_DIRECTIVE: &str = "fintrack=warn";
const VERBOSE_DIRECTIVE: &str = "fintrack=debug";

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber
///
/// `FINTRACK_LOG` wins when set and valid; otherwise warnings only, or debug
/// output when `verbose` is set. Later calls are no-ops.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
            EnvFilter::new(if verbose {
                VERBOSE_DIRECTIVE
            } else {
                DEFAULT_DIRECTIVE
            })
        });

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_twice_does_not_panic() {
        init_tracing(false);
        init_tracing(true);
    }
}
