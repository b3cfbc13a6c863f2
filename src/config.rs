//! Process-level settings taken from the environment. CLI flags override these.

use std::env;
use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

pub const ROSTER_ENV: &str = "RINGSIDE_ROSTER";
pub const LOG_ENV: &str = "RINGSIDE_LOG";

pub const DEFAULT_LOG_FILTER: &str = "warn";
pub const VERBOSE_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Roster file; the built-in card is used when unset.
    pub roster_path: Option<PathBuf>,
    /// `EnvFilter` directives, e.g. `ringside::fight=debug`.
    pub log_filter: Option<String>,
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build settings from any key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        Self {
            roster_path: non_blank(ROSTER_ENV).map(PathBuf::from),
            log_filter: non_blank(LOG_ENV),
        }
    }

    /// Explicit filter wins; otherwise `info` when verbose so round commentary shows.
    pub fn log_directives(&self, verbose: bool) -> &str {
        match self.log_filter.as_deref() {
            Some(directives) => directives,
            None if verbose => VERBOSE_LOG_FILTER,
            None => DEFAULT_LOG_FILTER,
        }
    }

    /// Unparseable directives fall back to the quiet default.
    pub fn env_filter(&self, verbose: bool) -> EnvFilter {
        EnvFilter::try_new(self.log_directives(verbose))
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
    }
}

/// Install the stderr fmt subscriber. Safe to call more than once.
pub fn init_tracing(settings: &Settings, verbose: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(settings.env_filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .ok();
}
