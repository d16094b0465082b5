//! `log::Log` sink that appends to `debug.log`

use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Mutex;

use chrono::Local;
use log::{Level, LevelFilter, Log, Metadata, Record};

use crate::domain::platform::Platform;

/// Log file name
pub const LOG_FILE_NAME: &str = "debug.log";

/// Rotate once the file grows past this many bytes
pub const MAX_LOG_SIZE: u64 = 1024 * 1024;

const APP_DIR_NAME: &str = "ccnotify";
const ROTATED_SUFFIX: &str = ".old";

/// Platform log directory
pub fn log_dir(platform: Platform) -> PathBuf {
    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    let base = match platform {
        Platform::Mac => home.join("Library").join("Logs"),
        Platform::Windows => dirs::config_dir().unwrap_or_else(|| home.join("AppData").join("Roaming")),
        Platform::LinuxLike => dirs::state_dir().unwrap_or_else(|| home.join(".local").join("state")),
    };
    base.join(APP_DIR_NAME)
}

/// Full path of the log file for the running platform
pub fn log_path() -> PathBuf {
    log_dir(Platform::detect()).join(LOG_FILE_NAME)
}

/// Appends formatted records to a file, rotating it when it gets large
pub struct FileLogger {
    path: PathBuf,
    level: LevelFilter,
    write_lock: Mutex<()>,
}

impl FileLogger {
    pub fn new(path: impl Into<PathBuf>, level: LevelFilter) -> Self {
        Self {
            path: path.into(),
            level,
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn format_line(level: Level, args: &fmt::Arguments<'_>) -> String {
        format!(
            "[{}] [{}] {}\n",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            level,
            args
        )
    }

    fn rotate_if_needed(&self) {
        let Ok(meta) = fs::metadata(&self.path) else {
            return;
        };
        if meta.len() <= MAX_LOG_SIZE {
            return;
        }

        let mut rotated = self.path.as_os_str().to_owned();
        rotated.push(ROTATED_SUFFIX);
        let rotated = PathBuf::from(rotated);
        let _ = fs::remove_file(&rotated);
        let _ = fs::rename(&self.path, &rotated);
    }

    fn append(&self, line: &str) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        self.rotate_if_needed();

        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())
    }
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level && metadata.target().starts_with(module_path_root())
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = Self::format_line(record.level(), record.args());
        let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());
        // Logging must never break a hook run
        let _ = self.append(&line);
    }

    fn flush(&self) {}
}

fn module_path_root() -> &'static str {
    env!("CARGO_CRATE_NAME")
}

/// Level from `RUST_LOG` (a bare level name), defaulting to debug
fn level_from_env() -> LevelFilter {
    std::env::var("RUST_LOG")
        .ok()
        .and_then(|v| LevelFilter::from_str(v.trim()).ok())
        .unwrap_or(LevelFilter::Debug)
}

/// Install the file logger as the global `log` sink.
///
/// # Returns
/// The log file path
pub fn init_logging(platform: Platform) -> PathBuf {
    let level = level_from_env();
    let logger = FileLogger::new(log_dir(platform).join(LOG_FILE_NAME), level);
    let path = logger.path().to_path_buf();

    if log::set_boxed_logger(Box::new(logger)).is_ok() {
        log::set_max_level(level);
    }
    path
}
