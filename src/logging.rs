//! Logging configuration for alltz
//!
//! Structured logging setup. The interactive dashboard owns stdout, so log
//! output goes to a file under the config directory, and only when the
//! `ALLTZ_LOG` environment variable enables it. Subcommands log to stderr.

use std::fs::OpenOptions;
use std::path::PathBuf;

use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry,
};

/// Environment variable holding the log filter (e.g. `alltz=debug`)
pub const LOG_ENV_VAR: &str = "ALLTZ_LOG";

/// Initialize logging for the interactive dashboard.
///
/// When `ALLTZ_LOG` is unset this is a no-op: the terminal belongs to the
/// UI and there is nowhere sensible to write. When set, its value is used
/// as the filter and events are appended to `alltz.log` next to the
/// config file.
pub fn init_tui_logging(log_dir: Option<PathBuf>) {
    let Ok(filter) = std::env::var(LOG_ENV_VAR) else {
        return;
    };

    let Some(dir) = log_dir else {
        return;
    };

    if std::fs::create_dir_all(&dir).is_err() {
        return;
    }

    let Ok(file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("alltz.log"))
    else {
        return;
    };

    let env_filter = EnvFilter::try_new(&filter).unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = fmt::layer()
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .with_target(true);

    Registry::default().with(env_filter).with(file_layer).init();

    tracing::info!(filter = %filter, "Logging system initialized");
}

/// Initialize logging for non-interactive subcommands.
///
/// Goes to stderr so it never mixes with the command's stdout output.
/// Defaults to warnings only; `ALLTZ_LOG` raises or lowers the filter.
pub fn init_cli_logging() {
    let filter = std::env::var(LOG_ENV_VAR).unwrap_or_else(|_| "alltz=warn".to_string());
    let env_filter = EnvFilter::try_new(&filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    // A second init (e.g. in tests) is not an error worth surfacing.
    let _ = Registry::default()
        .with(env_filter)
        .with(stderr_layer)
        .try_init();
}
