// Builder that assembles a ConfigManager from its sources

use crate::{ConfigManager, DEFAULT_ENV_PREFIX, FileFormat, Result};
use std::path::PathBuf;

/// Read-only handle over a fully loaded [`ConfigManager`].
#[derive(Clone, Default)]
pub struct ConfigService {
    manager: ConfigManager,
}

impl ConfigService {
    pub fn from_manager(manager: ConfigManager) -> Self {
        Self { manager }
    }

    pub fn builder() -> ConfigServiceBuilder {
        ConfigServiceBuilder::new()
    }

    pub fn manager(&self) -> &ConfigManager {
        &self.manager
    }
}

/// Collects sources, then loads them in a fixed order:
/// `.env` file, environment variables, files in the order added.
pub struct ConfigServiceBuilder {
    prefix: String,
    load_env: bool,
    load_dotenv: bool,
    dotenv_path: Option<PathBuf>,
    config_files: Vec<(PathBuf, FileFormat)>,
}

impl ConfigServiceBuilder {
    pub fn new() -> Self {
        Self {
            prefix: DEFAULT_ENV_PREFIX.to_string(),
            load_env: false,
            load_dotenv: false,
            dotenv_path: None,
            config_files: Vec::new(),
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn load_env(mut self) -> Self {
        self.load_env = true;
        self
    }

    pub fn load_dotenv(mut self, path: Option<PathBuf>) -> Self {
        self.load_dotenv = true;
        self.dotenv_path = path;
        self
    }

    pub fn add_file(mut self, path: impl Into<PathBuf>, format: FileFormat) -> Self {
        self.config_files.push((path.into(), format));
        self
    }

    pub fn build(self) -> Result<ConfigService> {
        let manager = ConfigManager::with_prefix(self.prefix);

        if self.load_dotenv {
            manager.load_dotenv(self.dotenv_path.as_deref())?;
        } else if self.load_env {
            manager.load_env()?;
        }

        for (path, format) in self.config_files {
            manager.load_file(&path, format)?;
        }

        Ok(ConfigService::from_manager(manager))
    }
}

impl Default for ConfigServiceBuilder {
    fn default() -> Self {
        Self::new()
    }
}
