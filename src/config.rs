use axum_extra::extract::cookie::Key;
use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::QuoteError;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://quotes.db";
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8000";

/// Minimum master key length accepted by `Key::try_from`.
pub const MIN_COOKIE_SECRET_LEN: usize = 64;

/// Runtime configuration.
///
/// Sources, lowest precedence first:
/// - built-in defaults
/// - `DATABASE_URL`
/// - `QUOTEWALL_*` variables (`QUOTEWALL_LISTEN_ADDR`, `QUOTEWALL_LOGLEVEL`,
///   `QUOTEWALL_COOKIE_SECRET`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub loglevel: String,
    #[serde(default)]
    pub cookie_secret: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            loglevel: "info".to_string(),
            cookie_secret: None,
        }
    }
}

impl Config {
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Env::raw().only(&["DATABASE_URL"]))
            .merge(Env::prefixed("QUOTEWALL_"))
    }

    pub fn load() -> Result<Self, QuoteError> {
        Self::from_figment(Self::figment())
    }

    pub fn from_figment(figment: Figment) -> Result<Self, QuoteError> {
        let cfg: Config = figment.extract()?;
        if let Some(secret) = cfg.cookie_secret.as_deref()
            && secret.len() < MIN_COOKIE_SECRET_LEN
        {
            return Err(QuoteError::InvalidConfig(format!(
                "cookie_secret must be at least {MIN_COOKIE_SECRET_LEN} bytes"
            )));
        }
        Ok(cfg)
    }

    /// Key for the flash cookie jar. Without a configured secret a random key
    /// is generated, so flashes do not survive a restart.
    pub fn cookie_key(&self) -> Result<Key, QuoteError> {
        match self.cookie_secret.as_deref() {
            Some(secret) => Key::try_from(secret.as_bytes()).map_err(|e| {
                QuoteError::InvalidConfig(format!(
                    "cookie_secret must be at least {MIN_COOKIE_SECRET_LEN} bytes: {e}"
                ))
            }),
            None => {
                warn!("QUOTEWALL_COOKIE_SECRET not set; using an ephemeral cookie key");
                Ok(Key::generate())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_sqlite() {
        let cfg = Config::from_figment(Figment::from(Serialized::defaults(Config::default())))
            .expect("defaults are valid");
        assert_eq!(cfg.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(cfg.listen_addr, DEFAULT_LISTEN_ADDR);
        assert_eq!(cfg.loglevel, "info");
        assert!(cfg.cookie_secret.is_none());
    }

    #[test]
    fn overrides_merge_over_defaults() {
        let figment = Figment::from(Serialized::defaults(Config::default()))
            .merge(("database_url", "sqlite::memory:"))
            .merge(("loglevel", "debug"));
        let cfg = Config::from_figment(figment).expect("valid config");
        assert_eq!(cfg.database_url, "sqlite::memory:");
        assert_eq!(cfg.loglevel, "debug");
        assert_eq!(cfg.listen_addr, DEFAULT_LISTEN_ADDR);
    }

    #[test]
    fn rejects_short_cookie_secret() {
        let short = "k".repeat(MIN_COOKIE_SECRET_LEN - 1);
        let figment = Figment::from(Serialized::defaults(Config::default()))
            .merge(("cookie_secret", short.clone()));
        let err = Config::from_figment(figment).unwrap_err();
        assert!(matches!(err, QuoteError::InvalidConfig(_)));

        let cfg = Config {
            cookie_secret: Some(short),
            ..Config::default()
        };
        assert!(matches!(
            cfg.cookie_key().unwrap_err(),
            QuoteError::InvalidConfig(_)
        ));
    }

    #[test]
    fn long_cookie_secret_yields_a_stable_key() {
        let cfg = Config {
            cookie_secret: Some("x".repeat(MIN_COOKIE_SECRET_LEN)),
            ..Config::default()
        };
        let first = cfg.cookie_key().expect("key from secret");
        let second = cfg.cookie_key().expect("key from secret");
        assert_eq!(first.master(), second.master());
    }

    #[test]
    fn missing_cookie_secret_generates_a_key() {
        let cfg = Config::default();
        assert!(cfg.cookie_key().is_ok());
    }
}
