//! Runtime configuration loaded from the environment.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const MODEL_PATH_VAR: &str = "RISK_MODEL_PATH";
pub const BIND_ADDR_VAR: &str = "RISK_BIND_ADDR";

const DEFAULT_MODEL_PATH: &str = "risk_model.msgpack";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var}={value:?} is not a valid socket address: {source}")]
    BindAddr {
        var: &'static str,
        value: String,
        source: std::net::AddrParseError,
    },
}

/// Snapshot of the settings the service starts with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceConfig {
    pub model_path: PathBuf,
    pub bind_addr: SocketAddr,
}

impl ServiceConfig {
    /// Create a configuration snapshot from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let env_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let model_path = PathBuf::from(env_or(MODEL_PATH_VAR, DEFAULT_MODEL_PATH));
        let bind_value = env_or(BIND_ADDR_VAR, DEFAULT_BIND_ADDR);
        let bind_addr = bind_value
            .parse::<SocketAddr>()
            .map_err(|source| ConfigError::BindAddr {
                var: BIND_ADDR_VAR,
                value: bind_value.clone(),
                source,
            })?;

        Ok(Self {
            model_path,
            bind_addr,
        })
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
    fn defaults_apply_when_unset() {
        let cfg = ServiceConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg.model_path, PathBuf::from("risk_model.msgpack"));
        assert_eq!(cfg.bind_addr, "127.0.0.1:5000".parse().unwrap());
    }

    #[test]
    fn overrides_are_read() {
        let cfg = ServiceConfig::from_lookup(lookup(&[
            (MODEL_PATH_VAR, "/srv/models/risk.msgpack"),
            (BIND_ADDR_VAR, "0.0.0.0:8080"),
        ]))
        .unwrap();
        assert_eq!(cfg.model_path, PathBuf::from("/srv/models/risk.msgpack"));
        assert_eq!(cfg.bind_addr.port(), 8080);
    }

    #[test]
    fn bad_bind_addr_is_reported() {
        let err = ServiceConfig::from_lookup(lookup(&[(BIND_ADDR_VAR, "localhost")])).unwrap_err();
        assert!(err.to_string().contains("RISK_BIND_ADDR"));
    }
}
