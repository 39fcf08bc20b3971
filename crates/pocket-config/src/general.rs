//! General application configuration.

use serde::{Deserialize, Serialize};

/// Default row limit for list commands.
const fn default_limit() -> u32 {
    20
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    #[serde(default = "default_limit")]
    pub default_limit: u32,

    /// Default ranking category code for `pocket ranking` commands.
    #[serde(default)]
    pub default_category: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            default_category: String::new(),
        }
    }
}
