use std::{net::SocketAddr, time::Duration};

use anyhow::Context;
use tracing::level_filters::LevelFilter;

pub const DEFAULT_DB_URI: &str = "file://./quotes.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_uri: String,
    /// Shared secret expected verbatim in the `Authorization` header of writes.
    pub authorization_key: Option<String>,
    pub log_level: LevelFilter,
    pub log_format: LogFormat,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key/value source.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let listen_addr: SocketAddr = lookup("LISTEN_ADDR")
            .unwrap_or_else(|| "0.0.0.0:8080".to_string())
            .parse()
            .context("Invalid LISTEN_ADDR")?;
        let db_uri = lookup("DB_URI")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DB_URI.into());
        let authorization_key = lookup("AUTHORIZATION_KEY").filter(|v| !v.is_empty());
        let log_level = parse_log_level(lookup("LOG_LVL").as_deref().unwrap_or_default());
        let log_format = match lookup("LOG_FORMAT") {
            Some(v) if v.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Text,
        };
        let cors_allow = lookup("CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = lookup("REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|| "30000".into())
            .parse()
            .unwrap_or(30000);
        Ok(Self {
            listen_addr,
            db_uri,
            authorization_key,
            log_level,
            log_format,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
        })
    }
}

/// Maps the `LOG_LVL` names onto tracing levels; anything unknown is INFO.
pub fn parse_log_level(level: &str) -> LevelFilter {
    match level.trim().to_ascii_uppercase().as_str() {
        "DEBUG" => LevelFilter::DEBUG,
        "INFO" => LevelFilter::INFO,
        "WARN" => LevelFilter::WARN,
        "ERROR" => LevelFilter::ERROR,
        "OFF" => LevelFilter::OFF,
        _ => LevelFilter::INFO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.listen_addr, "0.0.0.0:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(config.db_uri, DEFAULT_DB_URI);
        assert_eq!(config.authorization_key, None);
        assert_eq!(config.log_level, LevelFilter::INFO);
        assert_eq!(config.log_format, LogFormat::Text);
        assert_eq!(config.cors_allow, vec!["*".to_string()]);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn reads_all_values() {
        let config = config_from(&[
            ("LISTEN_ADDR", "127.0.0.1:9000"),
            ("DB_URI", "mongodb://db:27017"),
            ("AUTHORIZATION_KEY", "s3cret"),
            ("LOG_LVL", "DEBUG"),
            ("LOG_FORMAT", "JSON"),
            ("CORS_ALLOW_ORIGINS", "https://a.example, https://b.example,"),
            ("REQUEST_TIMEOUT_MS", "1500"),
        ])
        .unwrap();
        assert_eq!(config.listen_addr, "127.0.0.1:9000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.db_uri, "mongodb://db:27017");
        assert_eq!(config.authorization_key.as_deref(), Some("s3cret"));
        assert_eq!(config.log_level, LevelFilter::DEBUG);
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(
            config.cors_allow,
            vec!["https://a.example".to_string(), "https://b.example".to_string()]
        );
        assert_eq!(config.request_timeout, Duration::from_millis(1500));
    }

    #[test]
    fn empty_authorization_key_counts_as_unset() {
        let config = config_from(&[("AUTHORIZATION_KEY", "")]).unwrap();
        assert_eq!(config.authorization_key, None);
    }

    #[test]
    fn invalid_listen_addr_is_an_error() {
        assert!(config_from(&[("LISTEN_ADDR", "not-an-addr")]).is_err());
    }

    #[test]
    fn log_levels() {
        assert_eq!(parse_log_level("WARN"), LevelFilter::WARN);
        assert_eq!(parse_log_level("error"), LevelFilter::ERROR);
        assert_eq!(parse_log_level("OFF"), LevelFilter::OFF);
        assert_eq!(parse_log_level("verbose"), LevelFilter::INFO);
        assert_eq!(parse_log_level(""), LevelFilter::INFO);
    }
}
