//! # lumen-config
//!
//! Layered configuration loading for Lumen using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`LUMEN_*` prefix, `__` as separator)
//! 2. Project-level `.lumen/config.toml`
//! 3. User-level `~/.config/lumen/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `LUMEN_INDEX__MAX_FILE_BYTES` -> `index.max_file_bytes`,
//! `LUMEN_GENERAL__PRETTY` -> `general.pretty`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use lumen_config::LumenConfig;
//!
//! let config = LumenConfig::load_with_dotenv().expect("config");
//! let vocabulary = config.index.vocabulary();
//! ```

mod error;
mod general;
mod index;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use index::IndexConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Directory holding project-local state; never indexed.
pub const PROJECT_DIR: &str = ".lumen";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LumenConfig {
    #[serde(default)]
    pub index: IndexConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl LumenConfig {
    /// Load and validate configuration from TOML files and the environment.
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] when a source cannot be parsed and
    /// [`ConfigError::InvalidValue`] when validation fails.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(PROJECT_DIR).join("config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("LUMEN_").split("__"))
    }

    /// Check every section.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.index.validate()
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("lumen").join("config.toml"))
    }
}
