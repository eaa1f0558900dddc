use crate::config::Config;
use crate::constants::files;
use crate::error::AppError;
use std::io::stdout;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Sets up logging to stdout and to a daily rolling log file.
///
/// The log file is `config.log_file_path` when set, otherwise the default
/// location under the config directory. The log directory is created if it
/// doesn't exist. `RUST_LOG` directives are honoured on top of the crate
/// level, which is `info` or `debug` with `debug` set.
///
/// Returns the path to the log file and the guard that must be kept alive
/// for the duration of the program to ensure proper log flushing.
pub async fn setup_logging(debug: bool, config: &Config) -> Result<(String, WorkerGuard), AppError> {
    let (log_dir, log_file_name) = log_location(config.log_file_path.as_deref());

    if !Path::new(&log_dir).exists() {
        tokio::fs::create_dir_all(&log_dir).await.map_err(|e| {
            AppError::log_setup_error(format!("Failed to create log directory: {e}"))
        })?;
    }

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, &log_file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(
            fmt::Layer::new()
                .with_writer(stdout)
                .with_ansi(true)
                .with_filter(crate_filter(debug)?),
        )
        .with(
            fmt::Layer::new()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_filter(crate_filter(debug)?),
        )
        .try_init()
        .map_err(|e| AppError::log_setup_error(format!("Failed to install subscriber: {e}")))?;

    let log_file_path = format!("{log_dir}/{log_file_name}");
    Ok((log_file_path, guard))
}

/// Splits the configured log path into directory and file name, falling
/// back to the default location.
fn log_location(custom_path: Option<&str>) -> (String, String) {
    match custom_path {
        Some(custom_path) => {
            let path = Path::new(custom_path);
            let parent = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let file_name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or(files::LOG_FILE);
            (parent.to_string_lossy().to_string(), file_name.to_string())
        }
        None => (Config::get_log_dir_path(), files::LOG_FILE.to_string()),
    }
}

fn crate_filter(debug: bool) -> Result<EnvFilter, AppError> {
    let level = if debug { "debug" } else { "info" };
    let directive: Directive = format!("{}={level}", env!("CARGO_CRATE_NAME"))
        .parse()
        .map_err(|e| AppError::log_setup_error(format!("Invalid log directive: {e}")))?;
    Ok(EnvFilter::from_default_env().add_directive(directive))
}
