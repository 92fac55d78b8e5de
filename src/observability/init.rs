//! Tracing initialization and subscriber setup.
//!
//! Configures the `tracing-subscriber` pipeline: an `EnvFilter` resolved
//! from `RUST_LOG` or the configured trace level, writing plain-text events
//! to a log file outside the triage directory (the triage directory is user
//! data; nothing of ours lands in it).

use crate::Config;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber with file output.
///
/// # Trace Level Resolution
///
/// 1. `RUST_LOG` environment variable, if set
/// 2. `config.trace_level`, if set
/// 3. Default: `"info"`
///
/// # File Location
///
/// Events are appended to `pictriage/pictriage.log` under the system temp
/// directory.
///
/// # Initialization Behavior
///
/// - Creates the log directory if it doesn't exist
/// - Silently does nothing if the directory or file cannot be created
///   (observability is optional)
/// - Idempotent: safe to call multiple times, only the first call takes
///   effect
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let log_dir = std::env::temp_dir().join("pictriage");
    if std::fs::create_dir_all(&log_dir).is_err() {
        return;
    }

    let Ok(file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("pictriage.log"))
    else {
        return;
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
}
