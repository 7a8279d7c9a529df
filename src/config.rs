//! App Configuration
//!
//! Values baked in at build time (`trunk build` reads the environment).

use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:8080";
pub const DEFAULT_RETRY_SECS: u64 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Backend base address, no trailing slash
    pub api_url: String,
    /// Fixed delay between initial-load attempts
    pub retry_interval: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}

impl AppConfig {
    /// Read `PROCEDURE_API_URL` and `PROCEDURE_RETRY_SECS`
    pub fn from_env() -> Self {
        Self::from_values(option_env!("PROCEDURE_API_URL"), option_env!("PROCEDURE_RETRY_SECS"))
    }

    fn from_values(api_url: Option<&str>, retry_secs: Option<&str>) -> Self {
        let api_url = api_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_string();
        let retry_secs = retry_secs
            .and_then(|secs| secs.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_RETRY_SECS);
        Self {
            api_url,
            retry_interval: Duration::from_secs(retry_secs),
        }
    }

    /// `{api_url}/todos`
    pub fn todos_url(&self) -> String {
        format!("{}/todos", self.api_url)
    }

    /// `{api_url}/todos/{id}`
    pub fn todo_url(&self, id: u32) -> String {
        format!("{}/todos/{}", self.api_url, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.api_url, "http://localhost:8080");
        assert_eq!(config.retry_interval, Duration::from_secs(5));
        assert_eq!(config.todos_url(), "http://localhost:8080/todos");
        assert_eq!(config.todo_url(3), "http://localhost:8080/todos/3");
    }

    #[test]
    fn test_overrides_are_normalized() {
        let config = AppConfig::from_values(Some(" https://api.example.com/ "), Some("10"));
        assert_eq!(config.api_url, "https://api.example.com");
        assert_eq!(config.retry_interval, Duration::from_secs(10));
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = AppConfig::from_values(Some(""), Some("soon"));
        assert_eq!(config, AppConfig::default());
        let config = AppConfig::from_values(None, Some("0"));
        assert_eq!(config.retry_interval, Duration::from_secs(DEFAULT_RETRY_SECS));
    }
}
