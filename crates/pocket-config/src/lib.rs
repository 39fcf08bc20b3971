//! # pocket-config
//!
//! Layered configuration loading for Insight Pocket using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`POCKET_*` prefix, `__` as separator)
//! 2. Project-level `.pocket/config.toml`
//! 3. User-level `~/.config/pocket/config.toml`
//! 4. Built-in defaults
//!
//! `POCKET_API__BASE_URL` maps to `api.base_url`, `POCKET_EXPORT__DEADLINE_MS`
//! to `export.deadline_ms`, and so on.
//!
//! ```no_run
//! use pocket_config::PocketConfig;
//!
//! let config = PocketConfig::load_with_dotenv().expect("config");
//! if !config.api.is_configured() {
//!     eprintln!("set POCKET_API__BASE_URL");
//! }
//! ```

mod api;
mod chat;
mod error;
mod export;
mod general;
mod storage;

pub use api::ApiConfig;
pub use chat::ChatConfig;
pub use error::ConfigError;
pub use export::ExportConfig;
pub use general::GeneralConfig;
pub use storage::StorageConfig;

use std::path::PathBuf;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

/// Project-local config file, relative to the working directory.
pub const PROJECT_CONFIG_PATH: &str = ".pocket/config.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PocketConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl PocketConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// Does not read `.env`; use [`Self::load_with_dotenv`] for that.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.export.validate()?;
        Ok(config)
    }

    /// Load `.env` from the working directory (if any), then [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the provider chain. Public so tests can layer extra providers.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(PROJECT_CONFIG_PATH);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("POCKET_").split("__"))
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("pocket").join("config.toml"))
    }
}
