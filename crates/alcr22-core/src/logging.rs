//! Tracing initialization for the alcr22 binaries.
//!
//! The library only emits events; installing a subscriber is left to the
//! binary (or embedding application).

use std::sync::Once;

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "ALCR22_LOG";

/// Filter used when `ALCR22_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "alcr22=info,alcr22_core=info";

static INIT: Once = Once::new();

/// Install a fmt subscriber filtered by `ALCR22_LOG`.
///
/// Format: `ALCR22_LOG=alcr22_core=debug`. Safe to call more than once;
/// only the first call has an effect. If the host already installed a
/// global subscriber, that one stays and the conflict goes to stderr.
pub fn init_tracing() {
    INIT.call_once(|| {
        if let Err(e) = try_install() {
            eprintln!("alcr22: tracing subscriber not installed: {e}");
        }
    });
}

/// Install the subscriber as the global default, failing if one is set.
pub fn try_install() -> Result<(), TryInitError> {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(filter)
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_install_is_reported_not_panicked() {
        init_tracing();
        init_tracing();
        // The global default is now taken, so a direct install must fail.
        assert!(try_install().is_err());
    }
}
