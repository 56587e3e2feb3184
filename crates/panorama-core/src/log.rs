//! Optional file logger with one rotated backup.
//!
//! Lines go to `~/.config/panorama/logs/panorama.log` once [`init`] has
//! been called with logging enabled. Until then every `log_*!` macro is a
//! no-op, which keeps library code usable without any setup.

use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};

use serde::{Deserialize, Serialize};

static LOGGER: OnceLock<Mutex<Logger>> = OnceLock::new();

const LOG_FILE_NAME: &str = "panorama.log";

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Whether file logging is enabled. Defaults to `false`.
    pub enabled: bool,
    /// Minimum log level: "debug", "info", "warn", or "error".
    pub level: String,
    /// Maximum log file size in megabytes before rotation.
    pub max_file_mb: u64,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".into(),
            max_file_mb: 10,
        }
    }
}

/// Log severity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    /// Parses a level name; anything unrecognised means `Info`.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Self::Debug,
            "warn" | "warning" => Self::Warn,
            "error" => Self::Error,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        })
    }
}

struct Logger {
    file: File,
    path: PathBuf,
    min_level: Level,
    max_bytes: u64,
    written: u64,
}

/// Initialises the global logger. Call once at process startup.
///
/// Returns the log file path, or `None` when logging is disabled or the
/// file could not be opened.
pub fn init(config: &LogConfig) -> Option<PathBuf> {
    if !config.enabled {
        return None;
    }
    let dir = crate::config::config_dir()?.join("logs");
    let logger = Logger::open(&dir, config).ok()?;
    let path = logger.path.clone();
    LOGGER.set(Mutex::new(logger)).ok()?;
    Some(path)
}

/// Writes a log line if the level is at or above the configured minimum.
pub fn write(level: Level, args: fmt::Arguments<'_>) {
    let Some(mutex) = LOGGER.get() else {
        return;
    };
    let Ok(mut logger) = mutex.lock() else {
        return;
    };
    logger.write(level, args);
}

impl Logger {
    fn open(dir: &Path, config: &LogConfig) -> io::Result<Self> {
        fs::create_dir_all(dir)?;
        let path = dir.join(LOG_FILE_NAME);
        let file = open_append(&path)?;
        let written = file.metadata().map(|m| m.len()).unwrap_or(0);
        Ok(Self {
            file,
            path,
            min_level: Level::parse(&config.level),
            max_bytes: config.max_file_mb.saturating_mul(1024 * 1024),
            written,
        })
    }

    fn write(&mut self, level: Level, args: fmt::Arguments<'_>) {
        if level < self.min_level {
            return;
        }
        let line = format!("{} [{level}] {args}\n", timestamp());
        if self.file.write_all(line.as_bytes()).is_err() {
            return;
        }
        self.written += line.len() as u64;
        if self.max_bytes > 0 && self.written >= self.max_bytes {
            self.rotate();
        }
    }

    /// Moves the current file to `<name>.1` and starts a fresh one.
    fn rotate(&mut self) {
        let backup = self.path.with_extension("log.1");
        let _ = fs::rename(&self.path, &backup);
        if let Ok(f) = open_append(&self.path) {
            self.file = f;
        }
        self.written = 0;
    }
}

fn open_append(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

/// UTC wall-clock time as `HH:MM:SS`.
fn timestamp() -> String {
    let secs = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    format!("{:02}:{:02}:{:02}", secs / 3600 % 24, secs / 60 % 60, secs % 60)
}

/// Logs at DEBUG level.
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Debug, format_args!($($arg)*)) };
}

/// Logs at INFO level.
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Info, format_args!($($arg)*)) };
}

/// Logs at WARN level.
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Warn, format_args!($($arg)*)) };
}

/// Logs at ERROR level.
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Error, format_args!($($arg)*)) };
}
