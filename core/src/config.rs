//! Runtime configuration, read from environment variables.
//!
//! `FOLIO_CONTENT`, `FOLIO_ASSETS`, `FOLIO_DOWNLOADS`, `FOLIO_LOG`,
//! `WEB3FORMS_ACCESS_KEY` and `WEB3FORMS_URL`. Command-line flags override
//! these in the binary.

use crate::contact::{web3forms::DEFAULT_ENDPOINT, FormRelay, MockRelay, Web3FormsRelay};
use crate::content::{Content, ContentError};
use crate::terminal::SystemEffects;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;
use tracing::{warn, Level};

#[derive(Debug, Clone)]
pub struct Config {
    /// Content file replacing the built-in sample
    pub content_path: Option<PathBuf>,
    pub asset_dir: PathBuf,
    pub download_dir: PathBuf,
    pub log_level: Level,
    pub relay: RelayConfig,
}

#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub endpoint: String,
    pub access_key: Option<String>,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
}

impl Config {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary lookup (tests pass a map)
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let log_level = match get("FOLIO_LOG") {
            Some(value) => parse_level(&value).ok_or(ConfigError::Invalid {
                key: "FOLIO_LOG",
                value,
            })?,
            None => Level::WARN,
        };

        let download_dir = get("FOLIO_DOWNLOADS")
            .map(PathBuf::from)
            .or_else(|| get("HOME").map(|home| PathBuf::from(home).join("Downloads")))
            .unwrap_or_else(|| PathBuf::from("."));

        Ok(Self {
            content_path: get("FOLIO_CONTENT").map(PathBuf::from),
            asset_dir: get("FOLIO_ASSETS")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("assets")),
            download_dir,
            log_level,
            relay: RelayConfig {
                endpoint: get("WEB3FORMS_URL").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
                access_key: get("WEB3FORMS_ACCESS_KEY"),
            },
        })
    }

    /// Load the configured content file, or the built-in sample
    pub fn load_content(&self) -> Result<Content, ContentError> {
        match &self.content_path {
            Some(path) => Content::load(path),
            None => Content::builtin(),
        }
    }

    pub fn effects(&self) -> SystemEffects {
        SystemEffects::new(self.asset_dir.clone(), self.download_dir.clone())
    }

    /// Web3Forms relay if a key is configured, else a relay that always fails
    pub fn relay(&self) -> Arc<dyn FormRelay> {
        match &self.relay.access_key {
            Some(key) => Arc::new(Web3FormsRelay::new(self.relay.endpoint.clone(), key.clone())),
            None => {
                warn!("WEB3FORMS_ACCESS_KEY not set; the contact form will not send");
                Arc::new(MockRelay::unconfigured())
            }
        }
    }
}

pub fn parse_level(value: &str) -> Option<Level> {
    Level::from_str(value.trim()).ok()
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
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[("HOME", "/home/sam")])).unwrap();
        assert_eq!(config.content_path, None);
        assert_eq!(config.asset_dir, PathBuf::from("assets"));
        assert_eq!(config.download_dir, PathBuf::from("/home/sam/Downloads"));
        assert_eq!(config.log_level, Level::WARN);
        assert_eq!(config.relay.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.relay.access_key, None);
    }

    #[test]
    fn test_no_home_downloads_to_cwd() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.download_dir, PathBuf::from("."));
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("FOLIO_CONTENT", "/etc/folio.json"),
            ("FOLIO_ASSETS", "/srv/assets"),
            ("FOLIO_DOWNLOADS", "/tmp/dl"),
            ("FOLIO_LOG", "debug"),
            ("WEB3FORMS_ACCESS_KEY", "abc"),
            ("WEB3FORMS_URL", "http://localhost:9/submit"),
        ]))
        .unwrap();
        assert_eq!(config.content_path, Some(PathBuf::from("/etc/folio.json")));
        assert_eq!(config.asset_dir, PathBuf::from("/srv/assets"));
        assert_eq!(config.download_dir, PathBuf::from("/tmp/dl"));
        assert_eq!(config.log_level, Level::DEBUG);
        assert_eq!(config.relay.access_key.as_deref(), Some("abc"));
        assert_eq!(config.relay.endpoint, "http://localhost:9/submit");
    }

    #[test]
    fn test_blank_values_are_ignored() {
        let config = Config::from_lookup(lookup(&[("WEB3FORMS_ACCESS_KEY", "  "), ("FOLIO_LOG", "")])).unwrap();
        assert_eq!(config.relay.access_key, None);
        assert_eq!(config.log_level, Level::WARN);
    }

    #[test]
    fn test_bad_log_level() {
        let err = Config::from_lookup(lookup(&[("FOLIO_LOG", "loud")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "FOLIO_LOG", .. }));
    }

    #[test]
    fn test_load_builtin_content_by_default() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert!(config.load_content().is_ok());
    }
}
