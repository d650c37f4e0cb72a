use std::path::{Path, PathBuf};

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the log file base path.
pub const LOG_ENV: &str = "KOFU_LOG";

/// Log base path: the CLI flag wins over `KOFU_LOG`.
pub fn log_base(cli: Option<&Path>) -> Option<PathBuf> {
    cli.map(Path::to_path_buf)
        .or_else(|| std::env::var_os(LOG_ENV).map(PathBuf::from))
        .filter(|path| !path.as_os_str().is_empty())
}

/// `{base}.{timestamp}.{pid}`, so concurrent readers never share a file.
pub fn unique_log_path(base: &Path, timestamp: u64, pid: u32) -> PathBuf {
    let mut name = base.as_os_str().to_os_string();
    name.push(format!(".{}.{}", timestamp, pid));
    PathBuf::from(name)
}

/// Installs a file subscriber when a log path is configured.
///
/// Stdout belongs to the TUI, so nothing is logged by default. Returns the
/// file actually written to.
pub fn init_tracing(cli: Option<&Path>) -> Option<PathBuf> {
    let base = log_base(cli)?;
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let path = unique_log_path(&base, timestamp, std::process::id());

    let file = match std::fs::File::create(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("Warning: failed to create log file {}: {}", path.display(), err);
            return None;
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();

    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_path_appends_timestamp_and_pid() {
        let path = unique_log_path(Path::new("/tmp/kofu.log"), 1700000000, 42);
        assert_eq!(path, PathBuf::from("/tmp/kofu.log.1700000000.42"));
    }

    #[test]
    fn cli_path_wins() {
        let path = log_base(Some(Path::new("/tmp/cli.log")));
        assert_eq!(path, Some(PathBuf::from("/tmp/cli.log")));
    }
}
