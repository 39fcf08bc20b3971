//! Local key/value storage configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_dir() -> String {
    ".pocket/storage".to_string()
}

fn default_cart_key() -> String {
    "insight-pocket-cart-v1".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Directory holding one `<key>.json` file per storage key.
    #[serde(default = "default_dir")]
    pub dir: String,

    /// Key the insight cart is persisted under.
    #[serde(default = "default_cart_key")]
    pub cart_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            cart_key: default_cart_key(),
        }
    }
}

impl StorageConfig {
    pub fn dir_path(&self) -> PathBuf {
        PathBuf::from(&self.dir)
    }
}
