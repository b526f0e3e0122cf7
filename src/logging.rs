use std::path::PathBuf;

use directories::ProjectDirs;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer,
};

use crate::{
    config::CountdownConfig,
    result::{CountdownError, Result},
};

/// Configuration for the logging system
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingConfig {
    /// Log level for console output
    pub console_level: Level,
    /// Log level for file output
    pub file_level: Level,
    /// Directory where log files should be written
    pub log_dir: Option<PathBuf>,
    /// Whether to enable JSON formatted logs for structured output
    pub json_format: bool,
    /// Mirror logs to stderr; only useful when the TUI isn't running
    pub console: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            console_level: Level::INFO,
            file_level: Level::DEBUG,
            log_dir: Some(Self::default_log_dir()),
            json_format: false,
            console: false,
        }
    }
}

impl LoggingConfig {
    /// Get the OS-appropriate default log directory
    pub fn default_log_dir() -> PathBuf {
        if let Some(proj_dirs) = ProjectDirs::from("", "", "countdown") {
            // On Linux: ~/.cache/countdown
            // On macOS: ~/Library/Caches/countdown
            proj_dirs.cache_dir().to_path_buf()
        } else {
            PathBuf::from("countdown-logs")
        }
    }

    /// Create logging configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(level) = lookup("COUNTDOWN_LOG_LEVEL").and_then(|l| l.parse::<Level>().ok()) {
            config.console_level = level;
            config.file_level = level;
        }

        if let Some(log_dir) = lookup("COUNTDOWN_LOG_DIR") {
            config.log_dir = Some(PathBuf::from(log_dir));
        }

        if lookup("COUNTDOWN_NO_FILE_LOGS").is_some() {
            config.log_dir = None;
        }

        if lookup("COUNTDOWN_JSON_LOGS").is_some() {
            config.json_format = true;
        }

        if lookup("COUNTDOWN_CONSOLE_LOGS").is_some() {
            config.console = true;
        }

        config
    }

    /// Applies the `log_level` key of the configuration file. "Off"
    /// disables file logging entirely.
    pub fn with_app_config(mut self, app_config: &CountdownConfig) -> Self {
        if let Some(log_level) = &app_config.log_level {
            if log_level.eq_ignore_ascii_case("off") {
                self.log_dir = None;
            } else if let Ok(level) = log_level.parse::<Level>() {
                self.console_level = level;
                self.file_level = level;
            }
        }

        self
    }
}

/// Initialize the logging system with the given configuration. The
/// returned guard must be held until shutdown to flush the file writer.
pub fn init_logging(config: LoggingConfig) -> Result<Option<WorkerGuard>> {
    let mut layers = vec![];
    let mut guard = None;

    if let Some(log_dir) = &config.log_dir {
        std::fs::create_dir_all(log_dir).map_err(|e| {
            CountdownError::GeneralError(format!("failed to create log directory: {e}").into())
        })?;

        let file_appender = tracing_appender::rolling::daily(log_dir, "countdown.log");
        let (non_blocking, file_guard) = tracing_appender::non_blocking(file_appender);
        guard = Some(file_guard);

        let filter = EnvFilter::builder()
            .with_default_directive(config.file_level.into())
            .from_env_lossy();

        let file_layer = if config.json_format {
            fmt::layer().json().with_writer(non_blocking).with_filter(filter).boxed()
        } else {
            fmt::layer().with_writer(non_blocking).with_filter(filter).boxed()
        };

        layers.push(file_layer);
    }

    if config.console {
        let console_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_file(false)
            .with_line_number(false)
            .with_filter(
                EnvFilter::builder()
                    .with_default_directive(config.console_level.into())
                    .from_env_lossy(),
            )
            .boxed();

        layers.push(console_layer);
    }

    tracing_subscriber::registry()
        .with(layers)
        .try_init()
        .map_err(|e| CountdownError::GeneralError(format!("failed to initialize logging: {e}").into()))?;

    Ok(guard)
}
