//! # roster-logging
//!
//! Global `tracing` subscriber for the roster binaries. Output goes to
//! stderr in either compact or JSON lines; `RUST_LOG` takes precedence
//! over the configured level.

#![deny(unsafe_code)]

pub use roster_settings::LogFormat;
use tracing_subscriber::EnvFilter;

/// Build the event filter: `RUST_LOG` if set and valid, else `level`.
pub fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Initialize the global tracing subscriber.
///
/// Call once at startup. Later calls leave the first subscriber in place.
pub fn init_subscriber(level: &str, format: LogFormat) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(level))
        .with_target(true)
        .with_writer(std::io::stderr);

    // set_global_default is a no-op if already set
    let _ = match format {
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_is_harmless() {
        init_subscriber("debug", LogFormat::Json);
        init_subscriber("info", LogFormat::Compact);
        tracing::info!(component = "logging", "subscriber installed");
    }

    #[test]
    fn filter_accepts_directives() {
        let filter = env_filter("roster_server=debug,info");
        assert!(!filter.to_string().is_empty());
    }
}
