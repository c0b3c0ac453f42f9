use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Name of the log file written inside the log directory.
pub const LOG_FILE_NAME: &str = "mazeweave.log";

/// Send `tracing` output to `<log_dir>/mazeweave.log`.
///
/// The level filter is read from `RUST_LOG` and defaults to `info`.
/// Logs are flushed when the returned guard is dropped, so keep it alive for the
/// lifetime of the program.
pub fn init_file_logging(log_dir: &Path) -> WorkerGuard {
    let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();
    guard
}
