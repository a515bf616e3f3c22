//! Runtime settings read from the process environment.

use std::str::FromStr;

use thiserror::Error;

pub const ADDR_VAR: &str = "LDS_ADDR";
pub const LOG_FORMAT_VAR: &str = "LDS_LOG_FORMAT";

const DEFAULT_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("LDS_LOG_FORMAT must be \"pretty\" or \"json\", got {0:?}")]
    InvalidLogFormat(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::InvalidLogFormat(s.to_owned())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Address handed to `TcpListener::bind`
    pub addr: String,
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ADDR.to_owned(),
            log_format: LogFormat::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Blank values count
    /// as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let addr = get(ADDR_VAR)
            .map(|raw| normalize_addr(raw.trim()))
            .unwrap_or_else(|| DEFAULT_ADDR.to_owned());
        let log_format = get(LOG_FORMAT_VAR)
            .map(|raw| raw.parse::<LogFormat>())
            .transpose()?
            .unwrap_or_default();

        Ok(Self { addr, log_format })
    }
}

/// A bare `:port` means every interface.
fn normalize_addr(raw: &str) -> String {
    if raw.starts_with(':') {
        format!("0.0.0.0{raw}")
    } else {
        raw.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.addr, "0.0.0.0:8080");
    }

    #[test]
    fn bare_port_binds_all_interfaces() {
        let cfg = Config::from_lookup(lookup(&[(ADDR_VAR, ":9090")])).unwrap();
        assert_eq!(cfg.addr, "0.0.0.0:9090");

        let cfg = Config::from_lookup(lookup(&[(ADDR_VAR, "127.0.0.1:7000")])).unwrap();
        assert_eq!(cfg.addr, "127.0.0.1:7000");
    }

    #[test]
    fn blank_addr_falls_back() {
        let cfg = Config::from_lookup(lookup(&[(ADDR_VAR, "  ")])).unwrap();
        assert_eq!(cfg.addr, "0.0.0.0:8080");
    }

    #[test]
    fn log_format_parsing() {
        let cfg = Config::from_lookup(lookup(&[(LOG_FORMAT_VAR, "JSON")])).unwrap();
        assert_eq!(cfg.log_format, LogFormat::Json);

        let err = Config::from_lookup(lookup(&[(LOG_FORMAT_VAR, "xml")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLogFormat(v) if v == "xml"));
    }
}
