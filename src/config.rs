//! Environment configuration.
//!
//! | Variable       | Default | Meaning                                          |
//! |----------------|---------|--------------------------------------------------|
//! | `PORT`         | `4000`  | HTTP listen port                                 |
//! | `ACTOR_BUFFER` | `32`    | Request channel capacity of each actor           |
//! | `CATALOG_SEED` | unset   | JSON file with `productos` and `restaurantes`    |

use std::{env, fmt::Display, path::PathBuf, str::FromStr};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid {key} value {value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub port: u16,
    pub actor_buffer: usize,
    pub catalog_seed: Option<PathBuf>,
}

impl Config {
    /// Reads the process environment. A variable that is set but does not
    /// parse is an error rather than a silent default.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let actor_buffer: usize = try_load(&lookup, "ACTOR_BUFFER", "32")?;
        if actor_buffer == 0 {
            return Err(ConfigError::Invalid {
                key: "ACTOR_BUFFER",
                value: "0".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        let catalog_seed = lookup("CATALOG_SEED")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);
        if catalog_seed.is_none() {
            info!("CATALOG_SEED not set, starting with an empty catalog");
        }
        Ok(Self {
            port: try_load(&lookup, "PORT", "4000")?,
            actor_buffer,
            catalog_seed,
        })
    }
}

fn try_load<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: &str,
) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    let value = lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });
    value.trim().parse().map_err(|e: T::Err| {
        warn!("Invalid {key} value: {e}");
        ConfigError::Invalid {
            key,
            value,
            reason: e.to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.port, 4000);
        assert_eq!(config.actor_buffer, 32);
        assert_eq!(config.catalog_seed, None);
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("PORT", "8080"),
            ("ACTOR_BUFFER", "4"),
            ("CATALOG_SEED", "data/catalog.json"),
        ])
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.actor_buffer, 4);
        assert_eq!(config.catalog_seed, Some(PathBuf::from("data/catalog.json")));
    }

    #[test]
    fn test_invalid_values_fail() {
        assert!(matches!(
            load(&[("PORT", "http")]),
            Err(ConfigError::Invalid { key: "PORT", .. })
        ));
        assert!(matches!(
            load(&[("ACTOR_BUFFER", "0")]),
            Err(ConfigError::Invalid { key: "ACTOR_BUFFER", .. })
        ));
    }
}
