//! Logging Infrastructure
//!
//! Plain fmt output to stdout, or to a daily-rolled file when a log
//! directory is configured.

use std::path::Path;
use tracing_subscriber::EnvFilter;

use crate::core::Config;

/// Initialize the logger from the session configuration
///
/// Returns `false` when a global subscriber was already installed.
pub fn init_logger(config: &Config) -> bool {
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref())
}

/// Initialize the logger with optional file output
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) -> bool {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        if log_path.is_dir() {
            let file_appender = tracing_appender::rolling::daily(log_path, "fonda");
            return subscriber
                .with_writer(file_appender)
                .with_ansi(false)
                .try_init()
                .is_ok();
        }
        eprintln!("Log directory {dir} does not exist, logging to stdout");
    }

    subscriber.try_init().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_init_is_harmless() {
        let config = Config::default();
        let _ = init_logger(&config);
        // The second call can never install a subscriber
        assert!(!init_logger(&config));
    }
}
