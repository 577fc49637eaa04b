//! # picto-config
//!
//! Layered configuration loading for Picto using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`PICTO_*` prefix, `__` as separator)
//! 2. Project-level `.picto/config.toml`
//! 3. User-level `~/.config/picto/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `PICTO_DATABASE__PATH` -> `database.path`,
//! `PICTO_DIAGRAM__OUTPUT` -> `diagram.output`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use picto_config::PictoConfig;
//!
//! let config = PictoConfig::load_with_dotenv().expect("config");
//! println!("diagram goes to {}", config.diagram.output);
//! ```

mod database;
mod diagram;
mod error;

pub use database::DatabaseConfig;
pub use diagram::{DiagramConfig, RANKDIRS};
pub use error::ConfigError;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Project-local config file, relative to the working directory.
pub const LOCAL_CONFIG_PATH: &str = ".picto/config.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PictoConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub diagram: DiagramConfig,
}

impl PictoConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source cannot be parsed or a value
    /// has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
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
    /// Public so tests and the binary can merge extra providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(LOCAL_CONFIG_PATH);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("PICTO_").split("__"))
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("picto").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = PictoConfig::default();
        assert_eq!(config.database.path, "picto.db");
        assert_eq!(config.diagram.output, "diagram.png");
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config: PictoConfig = PictoConfig::figment().extract()?;
            assert_eq!(config.diagram.graphviz, "dot");
            assert_eq!(config.diagram.rankdir, "LR");
            Ok(())
        });
    }
}
