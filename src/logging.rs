use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "linecore=info";
const LOG_FILE_PREFIX: &str = "linecore.log";

/// Keeps the background log writer alive; dropping it flushes pending lines.
pub struct LoggingGuard {
    _guard: WorkerGuard,
    log_dir: PathBuf,
}

impl LoggingGuard {
    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }
}

/// `logs/` beside the settings file, or under the temp dir when the config
/// directory is unknown or read-only.
fn resolve_log_dir() -> Option<PathBuf> {
    let beside_settings = linecore::services::settings::get_settings_path()
        .and_then(|path| path.parent().map(|dir| dir.join("logs")));
    let fallback = std::env::temp_dir().join("linecore").join("logs");

    beside_settings
        .into_iter()
        .chain(Some(fallback))
        .find(|dir| std::fs::create_dir_all(dir).is_ok())
}

/// `RUST_LOG` wins over the settings directive, which wins over the default.
fn build_filter(directive: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directive.unwrap_or(DEFAULT_FILTER)))
}

/// Installs the global subscriber writing to a daily rolling file. `None`
/// when no log directory is usable or a subscriber is already installed.
pub fn init(directive: Option<&str>) -> Option<LoggingGuard> {
    let log_dir = resolve_log_dir()?;
    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::daily(&log_dir, LOG_FILE_PREFIX));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(build_filter(directive))
        .with(file_layer)
        .try_init()
        .ok()?;

    std::panic::set_hook(Box::new(|info| {
        tracing::error!(panic = %info, "panic");
    }));
    tracing::debug!(log_dir = %log_dir.display(), "logging to file");

    Some(LoggingGuard {
        _guard: guard,
        log_dir,
    })
}
