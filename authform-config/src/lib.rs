//! Layered configuration for authform.
//!
//! Values are merged into one key space from, in load order, a `.env` file,
//! `AUTHFORM_*` environment variables and JSON/TOML/env files. Later loads win.
//! Environment-sourced values are always strings, so typed reads go through
//! [`ConfigManager::get_parsed`], which accepts either a native JSON value or a
//! string that parses with `FromStr`.

pub mod config_service;
pub mod env;
pub mod error;
pub mod loader;
pub mod validation;

pub use config_service::{ConfigService, ConfigServiceBuilder};
pub use env::EnvLoader;
pub use error::{ConfigError, Result};
pub use loader::{ConfigLoader, FileFormat};
pub use validation::{ConfigValidator, Validate};

use authform_log::debug;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt::Display;
use std::path::Path;
use std::str::FromStr;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Default environment prefix (`AUTHFORM_PHONE_DIGITS`, ...).
pub const DEFAULT_ENV_PREFIX: &str = "AUTHFORM";

/// Shared key/value configuration store.
#[derive(Clone)]
pub struct ConfigManager {
    config: Arc<RwLock<HashMap<String, Value>>>,
    env_prefix: Option<String>,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config: Arc::new(RwLock::new(HashMap::new())),
            env_prefix: None,
        }
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            config: Arc::new(RwLock::new(HashMap::new())),
            env_prefix: Some(prefix.into()),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Value>> {
        self.config.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Value>> {
        self.config.write().unwrap_or_else(|e| e.into_inner())
    }

    /// Merge prefixed environment variables.
    pub fn load_env(&self) -> Result<()> {
        let vars = EnvLoader::new(self.env_prefix.clone()).load();
        debug!(target: "authform::config", "loaded {} environment values", vars.len());

        let mut config = self.write();
        for (key, value) in vars {
            config.insert(key, Value::String(value));
        }
        Ok(())
    }

    /// Populate the process environment from a `.env` file, then merge it.
    ///
    /// Without a path a missing `.env` in the working directory is not an error.
    pub fn load_dotenv(&self, path: Option<&Path>) -> Result<()> {
        match path {
            Some(path) => {
                dotenvy::from_path(path)?;
            }
            None => {
                dotenvy::dotenv().ok();
            }
        }
        self.load_env()
    }

    /// Merge the top-level keys of a configuration file.
    pub fn load_file(&self, path: impl AsRef<Path>, format: FileFormat) -> Result<()> {
        let data = ConfigLoader::new(format).load_file(path.as_ref())?;
        debug!(target: "authform::config", "loaded config file {}", path.as_ref().display());
        self.merge_value(data);
        Ok(())
    }

    /// Merge the top-level keys of an in-memory document.
    pub fn load_str(&self, content: &str, format: FileFormat) -> Result<()> {
        let data = ConfigLoader::new(format).parse(content)?;
        self.merge_value(data);
        Ok(())
    }

    fn merge_value(&self, data: Value) {
        if let Value::Object(map) = data {
            let mut config = self.write();
            for (key, value) in map {
                config.insert(key.to_lowercase(), value);
            }
        }
    }

    pub fn set<T: serde::Serialize>(&self, key: &str, value: T) -> Result<()> {
        let value =
            serde_json::to_value(value).map_err(|e| ConfigError::SerializationError(e.to_string()))?;
        self.write().insert(key.to_string(), value);
        Ok(())
    }

    /// Deserialize a value exactly as stored.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<T> {
        let value = self
            .read()
            .get(key)
            .cloned()
            .ok_or_else(|| ConfigError::KeyNotFound(key.to_string()))?;

        serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            reason: e.to_string(),
        })
    }

    /// Typed read that also accepts string-encoded values (`"9"` for a number).
    pub fn get_parsed<T>(&self, key: &str) -> Result<T>
    where
        T: DeserializeOwned + FromStr,
        T::Err: Display,
    {
        let value = self
            .read()
            .get(key)
            .cloned()
            .ok_or_else(|| ConfigError::KeyNotFound(key.to_string()))?;

        match value {
            Value::String(raw) => raw.trim().parse().map_err(|e: T::Err| {
                ConfigError::InvalidValue {
                    key: key.to_string(),
                    reason: e.to_string(),
                }
            }),
            other => serde_json::from_value(other).map_err(|e| ConfigError::InvalidValue {
                key: key.to_string(),
                reason: e.to_string(),
            }),
        }
    }

    /// Like [`get_parsed`](Self::get_parsed) but a missing key yields `default`.
    /// A present but malformed value is still an error.
    pub fn get_parsed_or<T>(&self, key: &str, default: T) -> Result<T>
    where
        T: DeserializeOwned + FromStr,
        T::Err: Display,
    {
        match self.get_parsed(key) {
            Err(ConfigError::KeyNotFound(_)) => Ok(default),
            other => other,
        }
    }

    pub fn has(&self, key: &str) -> bool {
        self.read().contains_key(key)
    }

}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
