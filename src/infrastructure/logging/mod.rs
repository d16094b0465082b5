//! File logging for hook runs
//!
//! Hook invocations have no terminal, so every `log` record from this crate
//! lands in a rotating file under the platform log directory.

mod file_logger;

pub use file_logger::{init_logging, log_dir, log_path, FileLogger, LOG_FILE_NAME, MAX_LOG_SIZE};
