use std::{env, time::Duration};

use crate::cloudwatch::AwsConfig;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to SQLite database file (default: "bugwatch.db")
    pub sqlite_path: String,
    /// Region and optional endpoint for the CloudWatch client
    pub aws: AwsConfig,
    /// Log alarm requests instead of sending them (default: false)
    pub cloudwatch_dry_run: bool,
    /// Per-request timeout in seconds (default: 10)
    pub request_timeout_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `SQLITE_PATH` - SQLite database path (default: "bugwatch.db")
    /// - `AWS_REGION` - CloudWatch region (default: "us-east-1")
    /// - `AWS_ENDPOINT_URL` - Custom endpoint, e.g. LocalStack (optional)
    /// - `CLOUDWATCH_DRY_RUN` - Skip AWS calls when "true" or "1" (default: false)
    /// - `REQUEST_TIMEOUT_SECONDS` - Request timeout (default: 10)
    pub fn from_env() -> Self {
        Self {
            sqlite_path: env::var("SQLITE_PATH").unwrap_or_else(|_| "bugwatch.db".to_string()),
            aws: AwsConfig::default(),
            cloudwatch_dry_run: env::var("CLOUDWATCH_DRY_RUN")
                .ok()
                .map(|v| parse_flag(&v))
                .unwrap_or(false),
            request_timeout_seconds: env::var("REQUEST_TIMEOUT_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        }
    }

    /// Get the request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_timeout_conversion() {
        let config = Config {
            sqlite_path: "test.db".to_string(),
            aws: AwsConfig {
                endpoint_url: None,
                region: "us-east-1".to_string(),
            },
            cloudwatch_dry_run: true,
            request_timeout_seconds: 30,
        };

        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("true"));
        assert!(parse_flag(" TRUE "));
        assert!(parse_flag("1"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag("0"));
        assert!(!parse_flag(""));
    }

    #[test]
    fn test_default_values() {
        // Clear environment variables to test defaults
        env::remove_var("SQLITE_PATH");
        env::remove_var("AWS_REGION");
        env::remove_var("AWS_ENDPOINT_URL");
        env::remove_var("CLOUDWATCH_DRY_RUN");
        env::remove_var("REQUEST_TIMEOUT_SECONDS");

        let config = Config::from_env();

        assert_eq!(config.sqlite_path, "bugwatch.db");
        assert_eq!(config.aws.region, "us-east-1");
        assert_eq!(config.aws.endpoint_url, None);
        assert!(!config.cloudwatch_dry_run);
        assert_eq!(config.request_timeout_seconds, 10);
    }
}
