use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Env var naming the log file path.
pub const LOG_ENV_VAR: &str = "MMVI_LOG";

/// Initialize tracing with file output.
///
/// Logging is disabled unless `MMVI_LOG` is set to a file path, so an
/// embedding application keeps control of its own output by default.
///
/// Log files are created with unique names to prevent conflicts when
/// multiple processes log to the same path: `{path}.{timestamp}.{pid}`.
/// Returns the file actually written to, or `None` if logging stays off
/// (not configured, file not creatable, or a subscriber already installed).
pub fn init_tracing() -> Option<String> {
    let log_path = std::env::var(LOG_ENV_VAR).ok()?;

    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let unique_path = format!("{}.{}.{}", log_path, timestamp, pid);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!("Warning: Failed to create log file: {}", unique_path);
        return None;
    };

    let file_layer = fmt::layer()
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .ok()?;

    Some(unique_path)
}
