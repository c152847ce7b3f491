//! Tracing initialization for the command-line tools.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Filter used when `--verbose` is not given. Keeps signing payloads out of the log.
pub const QUIET_FILTER: &str = "warn";

/// Filter used with `--verbose`; enables this crate's debug events, which carry payloads and tokens.
pub const VERBOSE_FILTER: &str = "dps_tools=debug,sas_token=debug,format_cert=debug,warn";

/// Pick the default filter for a verbosity flag.
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        VERBOSE_FILTER
    } else {
        QUIET_FILTER
    }
}

/// Initialize tracing with the given default filter.
///
/// The filter can be overridden by the `RUST_LOG` environment variable.
/// Events go to standard error so standard output carries only tool output.
///
/// # Example
///
/// ```rust,no_run
/// use dps_tools::{default_filter, init_tracing};
///
/// init_tracing(default_filter(false));
/// ```
pub fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_by_default() {
        assert_eq!(default_filter(false), "warn");
    }

    #[test]
    fn verbose_enables_only_own_debug() {
        let filter = default_filter(true);
        assert!(filter.starts_with("dps_tools=debug,"));
        assert!(filter.ends_with(",warn"));
        assert!(!filter.split(',').any(|directive| directive == "debug"));
        assert!(EnvFilter::try_new(filter).is_ok());
    }
}
