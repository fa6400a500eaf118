///! Logging initialisation
///!
///! Installs a tracing subscriber with an ANSI stderr layer and a
///! non-blocking daily-rolling file layer. Diagnostics go to stderr and the
///! log file only; stdout is reserved for the rendered feed/report text.

use std::path::Path;

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Keeps the non-blocking file writer alive; dropping it flushes any
/// buffered log lines.
pub struct LoggerGuard(WorkerGuard);

pub fn init_logging(log_dir: impl AsRef<Path>, prefix: &str, level: &str) -> LoggerGuard {
    let level = match level {
        "trace" | "debug" | "info" | "warn" | "error" => level,
        _ => "info",
    };

    // RUST_LOG refines the configured default in both layers.
    let filter_for = |level: &str| {
        EnvFilter::builder()
            .with_default_directive(level.parse().expect("known log level must parse"))
            .parse_lossy(std::env::var("RUST_LOG").unwrap_or_default())
    };

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(prefix)
        .filename_suffix("log")
        .build(log_dir.as_ref())
        .expect("Failed to create file appender");
    let (non_blocking, guard) = NonBlocking::new(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_filter(filter_for(level));
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_filter(filter_for(level));

    tracing_subscriber::registry()
        .with(file_layer)
        .with(stderr_layer)
        .init();

    LoggerGuard(guard)
}
