use std::time::Duration;

use crate::error::ConfigError;

/// Host configuration for a storefront session, loaded from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    /// Catalog host; products are fetched from `{catalog_url}/products`.
    pub catalog_url: String,
    pub request_timeout: Duration,
    /// Capacity of the view-model mailbox.
    pub mailbox_size: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            catalog_url: "https://dummyjson.com".to_string(),
            request_timeout: Duration::from_secs(30),
            mailbox_size: 32,
        }
    }
}

impl StoreConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                      | Default                 |
    /// |------------------------------|-------------------------|
    /// | `STORE_CATALOG_URL`          | `https://dummyjson.com` |
    /// | `STORE_REQUEST_TIMEOUT_SECS` | `30`                    |
    /// | `STORE_MAILBOX_SIZE`         | `32`                    |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an explicit variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let catalog_url = lookup("STORE_CATALOG_URL").unwrap_or(defaults.catalog_url);

        let request_timeout = match lookup("STORE_REQUEST_TIMEOUT_SECS") {
            Some(value) => Duration::from_secs(parse("STORE_REQUEST_TIMEOUT_SECS", "u64", value)?),
            None => defaults.request_timeout,
        };

        let mailbox_size = match lookup("STORE_MAILBOX_SIZE") {
            Some(value) => parse("STORE_MAILBOX_SIZE", "non-zero usize", value)?,
            None => defaults.mailbox_size,
        };
        if mailbox_size == 0 {
            return Err(ConfigError::Invalid {
                name: "STORE_MAILBOX_SIZE",
                expected: "non-zero usize",
                value: "0".to_string(),
            });
        }

        Ok(Self {
            catalog_url,
            request_timeout,
            mailbox_size,
        })
    }
}

fn parse<T: std::str::FromStr>(name: &'static str, expected: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { name, expected, value })
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
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = StoreConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, StoreConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = StoreConfig::from_lookup(lookup(&[
            ("STORE_CATALOG_URL", "http://localhost:9000"),
            ("STORE_REQUEST_TIMEOUT_SECS", " 5 "),
            ("STORE_MAILBOX_SIZE", "4"),
        ]))
        .unwrap();
        assert_eq!(config.catalog_url, "http://localhost:9000");
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(config.mailbox_size, 4);
    }

    #[test]
    fn test_invalid_values() {
        let err = StoreConfig::from_lookup(lookup(&[("STORE_REQUEST_TIMEOUT_SECS", "soon")])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "STORE_REQUEST_TIMEOUT_SECS must be a valid u64, got \"soon\""
        );

        let err = StoreConfig::from_lookup(lookup(&[("STORE_MAILBOX_SIZE", "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "STORE_MAILBOX_SIZE", .. }));
    }
}
