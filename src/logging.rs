//! Logging Setup
//!
//! Tracing initialization: env-filtered stderr output always, plus a
//! non-blocking daily file layer under the crabflow home when debug mode is
//! on. `CRABFLOW_LOG` overrides the configured level.

use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};
use std::{fs, io};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Logging configuration builder
#[derive(Debug, Clone)]
pub struct LogConfig {
    level: String,
    debug_mode: bool,
    log_dir: Option<PathBuf>,
}

impl LogConfig {
    pub fn new() -> Self {
        Self {
            level: "info".to_string(),
            debug_mode: false,
            log_dir: None,
        }
    }

    /// Base level used when `CRABFLOW_LOG` is not set
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    /// Debug mode lowers the base level and adds the file layer
    pub fn with_debug_mode(mut self, debug: bool) -> Self {
        self.debug_mode = debug;
        self
    }

    /// Override the log file directory (default: `<home>/logs`)
    pub fn with_log_dir(mut self, dir: PathBuf) -> Self {
        self.log_dir = Some(dir);
        self
    }

    fn resolved_log_dir(&self) -> PathBuf {
        self.log_dir.clone().unwrap_or_else(crate::config::logs_dir)
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Install the global tracing subscriber. Returns the file writer's guard
/// when debug mode is on; hold it for the lifetime of the process.
pub fn init_logging(config: LogConfig) -> Result<Option<WorkerGuard>> {
    let base_level = if config.debug_mode { "debug" } else { config.level.as_str() };
    let filter =
        EnvFilter::try_from_env("CRABFLOW_LOG").unwrap_or_else(|_| EnvFilter::new(base_level));

    let stderr_layer = fmt::layer().with_writer(io::stderr);

    let (file_layer, guard) = if config.debug_mode {
        let dir = config.resolved_log_dir();
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create log directory: {dir:?}"))?;
        let appender = tracing_appender::rolling::daily(&dir, "crabflow.log");
        let (writer, guard) = tracing_appender::non_blocking(appender);
        (Some(fmt::layer().with_writer(writer).with_ansi(false)), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(guard)
}

/// Remove log files in the default log directory older than `days`.
/// Returns how many files were removed.
pub fn cleanup_old_logs(days: u64) -> Result<usize> {
    cleanup_logs_in(&crate::config::logs_dir(), days)
}

fn cleanup_logs_in(dir: &Path, days: u64) -> Result<usize> {
    if !dir.exists() {
        return Ok(0);
    }
    let cutoff = SystemTime::now() - Duration::from_secs(days * 24 * 60 * 60);
    let mut removed = 0;

    for entry in fs::read_dir(dir).with_context(|| format!("Failed to read log directory: {dir:?}"))? {
        let entry = entry?;
        let path = entry.path();
        if path.extension().is_none_or(|ext| ext != "log") {
            continue;
        }
        let modified = entry.metadata().and_then(|m| m.modified());
        if let Ok(modified) = modified
            && modified < cutoff
            && fs::remove_file(&path).is_ok()
        {
            removed += 1;
        }
    }
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_log_config_builder() {
        let config = LogConfig::new()
            .with_level("warn")
            .with_debug_mode(true)
            .with_log_dir(PathBuf::from("/tmp/crabflow-logs"));
        assert_eq!(config.level, "warn");
        assert!(config.debug_mode);
        assert_eq!(config.resolved_log_dir(), PathBuf::from("/tmp/crabflow-logs"));
    }

    #[test]
    fn test_cleanup_skips_missing_dir() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("never-created");
        assert_eq!(cleanup_logs_in(&missing, 7).unwrap(), 0);
    }

    #[test]
    fn test_cleanup_only_touches_stale_log_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("old.log"), "line").unwrap();
        fs::write(dir.path().join("notes.txt"), "keep").unwrap();

        // Nothing is older than a week.
        assert_eq!(cleanup_logs_in(dir.path(), 7).unwrap(), 0);

        // With a zero-day horizon the .log file is stale, the .txt is not a log.
        assert_eq!(cleanup_logs_in(dir.path(), 0).unwrap(), 1);
        assert!(!dir.path().join("old.log").exists());
        assert!(dir.path().join("notes.txt").exists());
    }
}
