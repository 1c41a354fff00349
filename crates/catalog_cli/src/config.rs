//! Command-line and environment configuration.

use catalog_core::default_log_level;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "catalog")]
#[command(version, about = "Interactive in-memory book catalog")]
pub struct CliConfig {
    /// Log level (trace|debug|info|warn|error)
    #[arg(long, env = "CATALOG_LOG_LEVEL", default_value_t = default_log_level().to_string())]
    pub log_level: String,

    /// Absolute directory for rolling log files; logging is off when unset
    #[arg(long, env = "CATALOG_LOG_DIR")]
    pub log_dir: Option<String>,

    /// Treat this year as "now" instead of reading the system clock
    #[arg(
        long,
        env = "CATALOG_CURRENT_YEAR",
        value_parser = clap::value_parser!(i32).range(0..)
    )]
    pub current_year: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::CliConfig;
    use clap::Parser;

    #[test]
    fn defaults_leave_logging_off_and_use_system_clock() {
        let config = CliConfig::try_parse_from(["catalog"]).expect("defaults parse");
        assert_eq!(config.log_dir, None);
        assert_eq!(config.current_year, None);
        assert!(!config.log_level.is_empty());
    }

    #[test]
    fn flags_override_defaults() {
        let config = CliConfig::try_parse_from([
            "catalog",
            "--log-level",
            "warn",
            "--log-dir",
            "/tmp/catalog-logs",
            "--current-year",
            "2024",
        ])
        .expect("flags parse");
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_dir.as_deref(), Some("/tmp/catalog-logs"));
        assert_eq!(config.current_year, Some(2024));
    }

    #[test]
    fn negative_current_year_is_rejected() {
        assert!(CliConfig::try_parse_from(["catalog", "--current-year", "-1"]).is_err());
    }
}
