//! Tracing subscriber setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default verbosity when `RUST_LOG` is not set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Warnings and errors only
    #[default]
    Quiet,
    Debug,
    Trace,
}

impl LogLevel {
    /// Pick a level from debug/verbose switches; verbose wins.
    pub fn from_flags(debug: bool, verbose: bool) -> Self {
        if verbose {
            Self::Trace
        } else if debug {
            Self::Debug
        } else {
            Self::Quiet
        }
    }

    fn filter(self) -> &'static str {
        match self {
            Self::Quiet => "warn",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

/// Install a stderr subscriber. `RUST_LOG` takes precedence over `level`.
///
/// Returns `false` if a global subscriber was already set.
pub fn init_tracing(level: LogLevel) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.filter()));

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_writer(std::io::stderr),
        )
        .try_init()
        .is_ok();

    if installed && level != LogLevel::Quiet {
        tracing::info!(level = level.filter(), "Debug logging enabled");
    }
    installed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_flags() {
        assert_eq!(LogLevel::from_flags(false, false), LogLevel::Quiet);
        assert_eq!(LogLevel::from_flags(true, false), LogLevel::Debug);
        assert_eq!(LogLevel::from_flags(true, true), LogLevel::Trace);
        assert_eq!(LogLevel::from_flags(false, true), LogLevel::Trace);
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init_tracing(LogLevel::Quiet);
        assert!(!init_tracing(LogLevel::Debug));
    }
}
