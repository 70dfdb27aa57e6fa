use std::path::PathBuf;
use std::time::Duration;

/// Session configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | FONDA_DB_PATH | (unset) | redb file; unset keeps everything in memory |
/// | LOG_LEVEL | info | tracing level |
/// | LOG_DIR | (unset) | daily-rolled log files go here when set |
/// | NOTICE_DURATION_MS | 3000 | how long notices stay on screen |
/// | SUGGESTION_LIMIT | 10 | max autocomplete candidates |
/// | SEED_CATALOG | false | fill an empty catalog with the default dishes (`1`/`true`/`yes`/`on`) |
///
/// # Example
///
/// ```ignore
/// FONDA_DB_PATH=/var/lib/fonda/fonda.redb LOG_LEVEL=debug my-frontend
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Durable store location
    pub db_path: Option<PathBuf>,
    pub log_level: String,
    pub log_dir: Option<String>,
    pub notice_duration_ms: u64,
    /// Upper bound on `MenuBuilder::suggest` results
    pub suggestion_limit: usize,
    pub seed_catalog: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: None,
            log_level: "info".into(),
            log_dir: None,
            notice_duration_ms: 3000,
            suggestion_limit: 10,
            seed_catalog: false,
        }
    }
}

impl Config {
    /// Load configuration from the environment, falling back to defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            db_path: std::env::var("FONDA_DB_PATH")
                .ok()
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            log_level: std::env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.trim().is_empty()),
            notice_duration_ms: std::env::var("NOTICE_DURATION_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.notice_duration_ms),
            suggestion_limit: std::env::var("SUGGESTION_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.suggestion_limit),
            seed_catalog: std::env::var("SEED_CATALOG")
                .ok()
                .map(|v| parse_flag("SEED_CATALOG", &v, defaults.seed_catalog))
                .unwrap_or(defaults.seed_catalog),
        }
    }

    /// Default configuration backed by the given database file
    ///
    /// Mostly for tests.
    pub fn with_db_path(path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: Some(path.into()),
            ..Self::default()
        }
    }

    pub fn notice_duration(&self) -> Duration {
        Duration::from_millis(self.notice_duration_ms)
    }
}

/// Read an on/off environment value. Unknown values keep `default`.
fn parse_flag(name: &str, value: &str, default: bool) -> bool {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" | "" => false,
        other => {
            tracing::warn!(variable = name, value = other, default, "Unrecognized flag value, using default");
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.db_path.is_none());
        assert_eq!(config.log_level, "info");
        assert_eq!(config.notice_duration(), Duration::from_millis(3000));
        assert_eq!(config.suggestion_limit, 10);
        assert!(!config.seed_catalog);
    }

    #[test]
    fn test_with_db_path() {
        let config = Config::with_db_path("/tmp/fonda.redb");
        assert_eq!(config.db_path, Some(PathBuf::from("/tmp/fonda.redb")));
        assert_eq!(config.suggestion_limit, 10);
    }

    #[test]
    fn test_parse_flag() {
        for value in ["1", "true", "TRUE", " yes ", "on"] {
            assert!(parse_flag("SEED_CATALOG", value, false), "{value}");
        }
        for value in ["0", "false", "No", "off", ""] {
            assert!(!parse_flag("SEED_CATALOG", value, true), "{value}");
        }
        assert!(!parse_flag("SEED_CATALOG", "maybe", false));
        assert!(parse_flag("SEED_CATALOG", "maybe", true));
    }
}
