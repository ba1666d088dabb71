use std::env;
use tracing::info;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Pretty stdout layer plus a non-blocking plain-text file layer. The
/// returned guard flushes the file writer on drop, so it must be held for
/// the lifetime of the process.
pub fn init_logger() -> impl Drop {
    let filter =
        EnvFilter::new(env::var("MW_TRACING_LEVEL").unwrap_or_else(|_| "info".to_string()));
    let log_file =
        env::var("MW_LOG_FILE").unwrap_or_else(|_| "./logs/media-watcher.log".to_string());

    let (file_writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never("./", log_file));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stdout)
                .pretty()
                .with_file(false)
                .without_time()
                .with_ansi(true),
        )
        .with(fmt::layer().with_writer(file_writer).with_ansi(false))
        .with(filter)
        .init();

    info!("Tracing is configured for stdout and file logging.");

    guard
}
