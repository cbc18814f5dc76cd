//! Logging Infrastructure
//!
//! Console logging by default; daily rolling files when a log directory is given.

use std::path::Path;

/// Initialize the logger
pub fn init_logger() {
    init_logger_with_file(None, None);
}

/// Initialize the logger with optional file output
///
/// Falls back to console output when `log_dir` does not exist. Calling this
/// twice in one process is harmless: the second registration is ignored.
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) {
    let level = log_level.unwrap_or("info");

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level.parse().unwrap_or(tracing::Level::INFO))
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        if log_path.is_dir()
            && let Some(dir_str) = log_path.to_str()
        {
            let file_appender = tracing_appender::rolling::daily(dir_str, "plate-engine");
            let _ = subscriber.with_writer(file_appender).try_init();
            return;
        }
        eprintln!("log directory {} not found, logging to console", dir);
    }

    let _ = subscriber.try_init();
}
