//! Configuration for the terminal client.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use strictly_tictactoe::ListOrder;
use tracing::{Subscriber, debug, error, info, instrument};

/// Config file read when `--config` is not given, if it exists.
pub const DEFAULT_CONFIG_PATH: &str = "strictly_timeline.toml";

/// Settings loaded from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TimelineConfig {
    /// Initial order of the move list.
    #[serde(default)]
    list_order: ListOrder,

    /// File receiving logs while the terminal UI owns the screen.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("strictly_timeline.log")
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            list_order: ListOrder::default(),
            log_file: default_log_file(),
        }
    }
}

impl TimelineConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(list_order = %config.list_order, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `explicit` if given, else the default file if present, else defaults.
    ///
    /// # Errors
    ///
    /// Fails if an explicitly named file is missing, or any file read fails to parse.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::from_file(DEFAULT_CONFIG_PATH),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Runs [`load`](Self::load) with `subscriber` receiving its events.
    ///
    /// The global subscriber depends on the loaded config, so loading is
    /// logged through a scoped one. Failures are logged before returning.
    pub fn load_logged<S>(explicit: Option<&Path>, subscriber: S) -> Result<Self, ConfigError>
    where
        S: Subscriber + Send + Sync + 'static,
    {
        tracing::subscriber::with_default(subscriber, || {
            Self::load(explicit).inspect_err(|e| error!(error = %e, "Failed to load config"))
        })
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write config");
        file
    }

    #[test]
    fn test_full_config() {
        let file = write_config("list_order = \"descending\"\nlog_file = \"game.log\"\n");
        let config = TimelineConfig::from_file(file.path()).expect("valid config");
        assert_eq!(*config.list_order(), ListOrder::Descending);
        assert_eq!(config.log_file(), &PathBuf::from("game.log"));
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let file = write_config("");
        let config = TimelineConfig::from_file(file.path()).expect("valid config");
        assert_eq!(config, TimelineConfig::default());
        assert_eq!(*config.list_order(), ListOrder::Ascending);
    }

    #[test]
    fn test_unknown_order_is_rejected() {
        let file = write_config("list_order = \"sideways\"\n");
        let err = TimelineConfig::from_file(file.path()).expect_err("invalid order");
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let missing = dir.path().join("absent.toml");
        let err = TimelineConfig::load(Some(&missing)).expect_err("missing file");
        assert!(err.message.contains("Failed to read config file"));
        assert!(err.to_string().starts_with("Config error:"));
    }

    #[derive(Clone, Default)]
    struct Captured(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().expect("log buffer").extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn capturing_subscriber(level: &'static str, sink: Captured) -> impl Subscriber + Send + Sync {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new(level))
            .with_writer(move || sink.clone())
            .with_ansi(false)
            .finish()
    }

    fn captured_text(sink: &Captured) -> String {
        String::from_utf8(sink.0.lock().expect("log buffer").clone()).expect("utf-8 logs")
    }

    #[test]
    fn test_load_failure_is_logged() {
        let dir = tempfile::tempdir().expect("temp dir");
        let missing = dir.path().join("absent.toml");
        let sink = Captured::default();

        let subscriber = capturing_subscriber("warn", sink.clone());
        let result = TimelineConfig::load_logged(Some(&missing), subscriber);

        assert!(result.is_err());
        let logs = captured_text(&sink);
        assert!(logs.contains("Failed to load config"), "logs: {logs}");
        assert!(logs.contains("Failed to read config file"), "logs: {logs}");
    }

    #[test]
    fn test_successful_load_is_logged() {
        let file = write_config("list_order = \"descending\"\n");
        let sink = Captured::default();

        let subscriber = capturing_subscriber("info", sink.clone());
        let config =
            TimelineConfig::load_logged(Some(file.path()), subscriber).expect("valid config");

        assert_eq!(*config.list_order(), ListOrder::Descending);
        assert!(captured_text(&sink).contains("Config loaded successfully"));
    }
}
