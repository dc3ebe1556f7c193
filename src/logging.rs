use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const LOG_FILE_PREFIX: &str = "code-xray.log";
const DEFAULT_FILTER: &str = "code_xray=info";

/// Keeps the non-blocking writer flushing until the session ends.
pub struct LoggingGuard {
    _guard: WorkerGuard,
}

/// Logs go to a daily file only; the terminal belongs to the viewer.
pub fn init() -> Option<LoggingGuard> {
    let log_dir = code_xray::kernel::services::adapters::ensure_log_dir()
        .or_else(|_| -> std::io::Result<PathBuf> {
            let dir = std::env::temp_dir().join("code-xray").join("logs");
            std::fs::create_dir_all(&dir)?;
            Ok(dir)
        })
        .ok()?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_target(true)
            .with_file(true)
            .with_line_number(true),
    );

    if subscriber.try_init().is_err() {
        return None;
    }

    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        tracing::error!(panic = %panic_info, "panic");
        previous(panic_info);
    }));

    tracing::info!(log_dir = %log_dir.display(), "tracing initialized");

    Some(LoggingGuard { _guard: guard })
}
