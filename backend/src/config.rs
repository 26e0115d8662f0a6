//! Runtime settings, read once from the environment at startup.
//!
//! | variable               | default       |
//! |------------------------|---------------|
//! | `CRM_HOST`             | `127.0.0.1`   |
//! | `CRM_PORT`             | `8080`        |
//! | `CRM_DATABASE_PATH`    | `crm.sqlite`  |
//! | `CRM_SEED_SAMPLE_DATA` | `true`        |
//! | `CRM_OPEN_BROWSER`     | `false`       |
//! | `CRM_JSON_LIMIT`       | `1048576`     |
//! | `CRM_ALLOWED_ORIGINS`  | (none)        |
//!
//! `CRM_ALLOWED_ORIGINS` is a comma-separated list of origins allowed to call
//! the API from another host, or `*` for any. Unset means same-origin only.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be {expected}, got '{value}'")]
    Invalid {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_path: PathBuf,
    /// Insert the sample accounts and requests when the database has no accounts.
    pub seed_sample_data: bool,
    pub open_browser: bool,
    /// Maximum accepted JSON body, in bytes.
    pub json_limit: usize,
    /// Cross-origin callers; empty keeps the API same-origin.
    pub allowed_origins: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            database_path: PathBuf::from("crm.sqlite"),
            seed_sample_data: true,
            open_browser: false,
            json_limit: 1024 * 1024,
            allowed_origins: Vec::new(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from an arbitrary variable source; unset variables keep their default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        if let Some(host) = lookup("CRM_HOST") {
            config.host = host;
        }
        if let Some(port) = lookup("CRM_PORT") {
            config.port = port.trim().parse().map_err(|_| ConfigError::Invalid {
                name: "CRM_PORT",
                expected: "a port number",
                value: port.clone(),
            })?;
        }
        if let Some(path) = lookup("CRM_DATABASE_PATH") {
            config.database_path = PathBuf::from(path);
        }
        if let Some(flag) = lookup("CRM_SEED_SAMPLE_DATA") {
            config.seed_sample_data = parse_flag("CRM_SEED_SAMPLE_DATA", &flag)?;
        }
        if let Some(flag) = lookup("CRM_OPEN_BROWSER") {
            config.open_browser = parse_flag("CRM_OPEN_BROWSER", &flag)?;
        }
        if let Some(limit) = lookup("CRM_JSON_LIMIT") {
            config.json_limit = limit.trim().parse().map_err(|_| ConfigError::Invalid {
                name: "CRM_JSON_LIMIT",
                expected: "a byte count",
                value: limit.clone(),
            })?;
        }
        if let Some(origins) = lookup("CRM_ALLOWED_ORIGINS") {
            config.allowed_origins = origins
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(str::to_string)
                .collect();
        }

        Ok(config)
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn parse_flag(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid {
            name,
            expected: "true or false",
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn defaults_when_nothing_set() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("CRM_HOST", "0.0.0.0"),
            ("CRM_PORT", "7006"),
            ("CRM_DATABASE_PATH", "/var/lib/crm/crm.sqlite"),
            ("CRM_SEED_SAMPLE_DATA", "false"),
            ("CRM_OPEN_BROWSER", "yes"),
        ]))
        .unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 7006);
        assert_eq!(config.database_path, PathBuf::from("/var/lib/crm/crm.sqlite"));
        assert!(!config.seed_sample_data);
        assert!(config.open_browser);
    }

    #[test]
    fn allowed_origins_are_split_and_trimmed() {
        let config = Config::from_lookup(lookup(&[(
            "CRM_ALLOWED_ORIGINS",
            "https://crm.example.com, http://localhost:5173,,",
        )]))
        .unwrap();
        assert_eq!(
            config.allowed_origins,
            vec!["https://crm.example.com".to_string(), "http://localhost:5173".to_string()]
        );
    }

    #[test]
    fn rejects_bad_port() {
        let err = Config::from_lookup(lookup(&[("CRM_PORT", "eighty")])).unwrap_err();
        assert_eq!(err.to_string(), "CRM_PORT must be a port number, got 'eighty'");
    }

    #[test]
    fn rejects_bad_flag() {
        assert!(Config::from_lookup(lookup(&[("CRM_SEED_SAMPLE_DATA", "maybe")])).is_err());
    }
}
