//! Session logging.
//!
//! The wizard owns the terminal, so interactive sessions log to
//! `<state>/logs/pitchdeck-<timestamp>.log`. Subcommands log to stderr.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;

/// Keeps the log writer alive; drop it last so buffered lines are flushed
pub struct LoggingHandle {
    _guard: Option<WorkerGuard>,
    /// Set when the session logs to a file
    pub log_file_path: Option<PathBuf>,
}

/// Where a session's log lines go
#[derive(Debug, Clone, PartialEq, Eq)]
enum LogSink {
    File { dir: PathBuf, file_name: String },
    Stderr,
}

impl LogSink {
    fn for_session(config: &Config, tui_mode: bool, started: DateTime<Utc>) -> Self {
        if tui_mode && config.logging.to_file {
            LogSink::File {
                dir: config.logs_path(),
                file_name: format!("pitchdeck-{}.log", started.format("%Y%m%dT%H%M%SZ")),
            }
        } else {
            LogSink::Stderr
        }
    }
}

/// `RUST_LOG` wins over `--debug`, which wins over the configured level
fn filter_directive(configured: &str, debug: bool, rust_log: Option<String>) -> String {
    match rust_log {
        Some(directive) if !directive.is_empty() => directive,
        _ if debug => "debug".to_string(),
        _ => configured.to_string(),
    }
}

/// Install the global subscriber for this process.
///
/// Call once, before anything logs. The returned handle must outlive every
/// `tracing` call.
pub fn init_logging(config: &Config, tui_mode: bool, debug: bool) -> Result<LoggingHandle> {
    let directive = filter_directive(
        &config.logging.level,
        debug,
        std::env::var("RUST_LOG").ok(),
    );
    let filter = EnvFilter::try_new(&directive)
        .with_context(|| format!("Invalid log filter '{}'", directive))?;
    let layer = tracing_subscriber::fmt::layer().with_target(false);

    match LogSink::for_session(config, tui_mode, Utc::now()) {
        LogSink::File { dir, file_name } => {
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
            let appender = tracing_appender::rolling::never(&dir, &file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);

            tracing_subscriber::registry()
                .with(filter)
                .with(layer.with_ansi(false).with_writer(writer))
                .try_init()
                .context("Failed to install log subscriber")?;

            Ok(LoggingHandle {
                _guard: Some(guard),
                log_file_path: Some(dir.join(file_name)),
            })
        }
        LogSink::Stderr => {
            tracing_subscriber::registry()
                .with(filter)
                .with(layer.with_writer(std::io::stderr))
                .try_init()
                .context("Failed to install log subscriber")?;

            Ok(LoggingHandle {
                _guard: None,
                log_file_path: None,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn test_config(temp_dir: &TempDir) -> Config {
        let mut config = Config::default();
        config.paths.state = temp_dir.path().to_string_lossy().to_string();
        config
    }

    fn started() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).unwrap()
    }

    #[test]
    fn test_tui_session_logs_to_timestamped_file() {
        let temp_dir = TempDir::new().unwrap();
        let config = test_config(&temp_dir);

        assert_eq!(
            LogSink::for_session(&config, true, started()),
            LogSink::File {
                dir: temp_dir.path().join("logs"),
                file_name: "pitchdeck-20260314T092653Z.log".to_string(),
            }
        );
    }

    #[test]
    fn test_cli_logs_to_stderr() {
        let temp_dir = TempDir::new().unwrap();
        let config = test_config(&temp_dir);
        assert_eq!(
            LogSink::for_session(&config, false, started()),
            LogSink::Stderr
        );
    }

    #[test]
    fn test_tui_with_file_logging_disabled() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = test_config(&temp_dir);
        config.logging.to_file = false;
        assert_eq!(
            LogSink::for_session(&config, true, started()),
            LogSink::Stderr
        );
    }

    #[test]
    fn test_filter_precedence() {
        assert_eq!(filter_directive("warn", false, None), "warn");
        assert_eq!(filter_directive("warn", true, None), "debug");
        assert_eq!(
            filter_directive("warn", true, Some("pitchdeck=trace".to_string())),
            "pitchdeck=trace"
        );
        assert_eq!(filter_directive("info", false, Some(String::new())), "info");
    }
}
