use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::{Error, Result};

/// Filter used when `RUST_LOG` is unset.
///
/// Transitions are logged at debug level under the `repo_status` target, so
/// verbose mode shows every event a tracker resolves.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "warn" }
}

/// Install a stderr subscriber for status diagnostics.
///
/// `RUST_LOG` takes precedence over [`default_directive`]. Output goes to
/// stderr so command output on stdout stays machine-readable.
pub fn init(verbose: bool) -> Result<()> {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .compact();

    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive(verbose)))
        .map_err(|e| Error::Logging {
            message: e.to_string(),
        })?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| Error::Logging {
            message: e.to_string(),
        })
}
