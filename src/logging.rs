//! Tracing setup: coloured stderr plus a JSON rolling log file.

use std::ffi::OsStr;
use std::path::Path;

use tracing::level_filters::LevelFilter;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// Installs the global subscriber.
///
/// stderr is filtered by `RUST_LOG` (default `warn`, keeping the interactive
/// output readable); the daily-rolling JSON file by `RUST_LOG_JSON` (default
/// `debug`). Keep the returned guard alive until exit so the file is flushed.
pub fn init_tracing(log_file_path: &Path) -> WorkerGuard {
    let log_dir = log_file_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("logs"));
    let log_file_name = log_file_path
        .file_name()
        .unwrap_or(OsStr::new("bikeshare_stats.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(env_filter("RUST_LOG", LevelFilter::WARN));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(env_filter("RUST_LOG_JSON", LevelFilter::DEBUG));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    guard
}

/// Filter from the directives in `var`, falling back to `default` for targets
/// the variable does not mention. Unparseable directives are skipped.
fn env_filter(var: &str, default: LevelFilter) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(default.into())
        .with_env_var(var)
        .from_env_lossy()
}
