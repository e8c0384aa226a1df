use std::io;
use std::path::Path;
use tracing::warn;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Opens a daily rolling log file in `log_dir`, or returns the reason it could not.
pub fn file_appender(log_dir: &Path) -> Result<RollingFileAppender, String> {
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("rss-triage")
        .filename_suffix("log")
        .build(log_dir)
        .map_err(|e| format!("{}: {}", log_dir.display(), e))
}

/// Sets up stderr logging, plus a debug-level file log when `log_dir` is given.
///
/// Stdout is reserved for the JSON report. A log directory that cannot be opened only
/// costs the file layer.
pub fn configure_logging(log_dir: Option<&Path>) {
    let stderr_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,llm_request=info,web_request=warn"));

    let stderr_log = fmt::layer()
        .with_writer(io::stderr)
        .with_filter(stderr_filter);

    let (appender, appender_error) = match log_dir.map(file_appender) {
        Some(Ok(appender)) => (Some(appender), None),
        Some(Err(e)) => (None, Some(e)),
        None => (None, None),
    };

    // File log keeps full LLM traffic for debugging bad responses
    let file_log = appender.map(|appender| {
        fmt::layer()
            .with_ansi(false)
            .with_writer(appender)
            .with_filter(EnvFilter::new("info,llm_request=debug,web_request=debug"))
    });

    tracing_subscriber::Registry::default()
        .with(stderr_log)
        .with(file_log)
        .init();

    if let Some(e) = appender_error {
        warn!("File logging disabled, cannot open log directory {}", e);
    }
}
