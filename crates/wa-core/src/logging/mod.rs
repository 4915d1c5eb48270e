//! Structured logging for wa-core.
//!
//! The engine emits `tracing` events and never installs a subscriber; the
//! binary does that once at startup through [`init_logging`].
//!
//! - stdout is reserved for the report payload
//! - stderr receives all log output, human-readable or JSONL
//! - every CLI event carries the `run_id` of its invocation

pub mod config;
pub mod events;

pub use config::{LogConfig, LogFormat, LogLevel};
pub use events::{event_names, Stage};

use std::io::IsTerminal;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Build the filter for a config. `RUST_LOG` directives win when present.
pub fn build_filter(config: &LogConfig) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::from(config.level).into())
        .from_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.to_string()))
}

/// Initialize the logging subsystem.
///
/// Must be called at most once, before any logging occurs. A second call
/// (or a subscriber installed elsewhere) is ignored.
pub fn init_logging(config: &LogConfig) {
    let filter = build_filter(config);

    let result = match config.format {
        LogFormat::Human => {
            let layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_ansi(std::io::stderr().is_terminal());
            if config.timestamps {
                tracing_subscriber::registry()
                    .with(filter)
                    .with(layer)
                    .try_init()
            } else {
                tracing_subscriber::registry()
                    .with(filter)
                    .with(layer.without_time())
                    .try_init()
            }
        }
        LogFormat::Jsonl => {
            let layer = fmt::layer()
                .json()
                .flatten_event(true)
                .with_current_span(true)
                .with_writer(std::io::stderr);
            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .try_init()
        }
    };

    if let Err(err) = result {
        eprintln!("wa-core: logging already initialized: {}", err);
    }
}

/// Generate a unique run ID for this invocation.
pub fn generate_run_id() -> String {
    let uuid = uuid::Uuid::new_v4().simple().to_string();
    format!("run-{}", &uuid[..12])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_ids_are_short_and_unique() {
        let a = generate_run_id();
        let b = generate_run_id();
        assert_eq!(a.len(), "run-".len() + 12);
        assert!(a.starts_with("run-"));
        assert_ne!(a, b);
    }

    #[test]
    fn filter_builds_for_every_level() {
        for level in [LogLevel::Trace, LogLevel::Info, LogLevel::Off] {
            let config = LogConfig::default().with_level(level);
            let _ = build_filter(&config);
        }
    }
}
