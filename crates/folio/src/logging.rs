//! Logging for folio.
//!
//! A project whose document is missing or malformed simply drops out of the
//! listing, so the log is the only place an operator sees why. What folio
//! emits, by level:
//!
//! - `warn`: a known project failed to load (fields `slug`, `path`, `error`),
//!   or the publisher found an asset directory for a slug not in the list.
//! - `info`: the asset publish summary (copied, unchanged, skipped counts).
//! - `debug`: each loaded project, featured/other tallies, lookups of unknown
//!   slugs, and every copied or skipped asset file.
//!
//! Everything goes to stderr. Stdout carries only command output, so
//! `folio projects -f json | jq` keeps working at any verbosity.

use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// How much of the pipeline's logging to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Errors only; missing projects go unreported.
    Quiet,
    /// Load failures and the publish summary.
    #[default]
    Normal,
    /// Per-project and per-asset detail.
    Verbose,
    /// Trace-level output from folio.
    Trace,
}

impl Verbosity {
    /// Map the CLI's `-q` and repeated `-v` flags. `-q` wins.
    #[must_use]
    pub fn from_flags(quiet: bool, verbose: u8) -> Self {
        match (quiet, verbose) {
            (true, _) => Self::Quiet,
            (false, 0) => Self::Normal,
            (false, 1) => Self::Verbose,
            (false, _) => Self::Trace,
        }
    }

    /// Convert verbosity to tracing level filter.
    #[must_use]
    pub fn to_level_filter(&self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::INFO,
            Self::Verbose => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    /// Filter directive used when `RUST_LOG` is unset.
    #[must_use]
    pub fn default_filter(&self) -> String {
        format!("folio={}", self.to_level_filter())
    }
}

/// Install the stderr subscriber.
///
/// Call once at startup; later calls are no-ops. `RUST_LOG` replaces the
/// verbosity-derived filter entirely, e.g. `RUST_LOG=folio::assets=debug`
/// to trace only the publisher.
///
/// # Examples
///
/// ```no_run
/// use folio::{init_logging, logging::Verbosity};
///
/// init_logging(Verbosity::from_flags(false, 1));
/// ```
pub fn init_logging(verbosity: Verbosity) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.default_filter()));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_file(false)
            .with_line_number(false),
    );

    let _ = subscriber.try_init();
}

/// Initialize logging for tests.
#[cfg(test)]
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("warn")
        .with_test_writer()
        .try_init();
}
