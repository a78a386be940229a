//! Logging setup
//!
//! Diagnostics go to stderr through `tracing`. `RUST_LOG` wins over the
//! `-v`/`-q` flags when set.

use tracing::Level;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    Debug,
    Trace,
}

impl Verbosity {
    pub fn from_flags(verbose: u8, quiet: bool) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            2 => Self::Debug,
            _ => Self::Trace,
        }
    }

    fn to_level(self) -> Option<Level> {
        match self {
            Self::Quiet => None,
            Self::Normal => Some(Level::WARN),
            Self::Verbose => Some(Level::INFO),
            Self::Debug => Some(Level::DEBUG),
            Self::Trace => Some(Level::TRACE),
        }
    }

    fn to_filter(self) -> String {
        match self.to_level() {
            Some(level) => format!("combine_tests={level}"),
            None => "off".to_string(),
        }
    }
}

/// Install the global subscriber. Safe to call more than once.
pub fn init(verbosity: Verbosity) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity.to_filter()));

    let _ = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(verbosity >= Verbosity::Debug)
        .with_line_number(verbosity >= Verbosity::Debug)
        .without_time()
        .compact()
        .try_init();
}
