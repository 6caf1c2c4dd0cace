//! Tracing setup.
//!
//! Log lines go to an append-only file when one is configured, otherwise to
//! stderr. Stdout is never used because the stdio transport owns it.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "mal_mcp=info,rmcp=warn,tower_http=info";

/// Open `path` for appending, creating it and its parent directory if needed.
pub fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Where log lines go, and why the configured file was not used if it wasn't.
pub struct LogTarget {
    pub writer: BoxMakeWriter,
    pub to_file: bool,
    pub error: Option<io::Error>,
}

/// Pick the log writer: the file when it opens, stderr otherwise.
pub fn log_writer(log_file: Option<&Path>) -> LogTarget {
    match log_file.map(open_log_file) {
        Some(Ok(file)) => LogTarget {
            writer: BoxMakeWriter::new(Mutex::new(file)),
            to_file: true,
            error: None,
        },
        Some(Err(e)) => LogTarget {
            writer: BoxMakeWriter::new(io::stderr),
            to_file: false,
            error: Some(e),
        },
        None => LogTarget {
            writer: BoxMakeWriter::new(io::stderr),
            to_file: false,
            error: None,
        },
    }
}

/// Initialize the global tracing subscriber.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_tracing(log_file: Option<&Path>) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());
    let target = log_writer(log_file);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(!target.to_file)
                .with_writer(target.writer),
        )
        .try_init();

    if let (Some(path), Some(e)) = (log_file, target.error) {
        tracing::warn!(
            "Could not open log file {}: {}; logging to stderr",
            path.display(),
            e
        );
    }
}
