//! Chat assistant configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    "https://boradora.store".to_string()
}

/// Report generation runs an LLM; give it longer than a data fetch.
const fn default_timeout_secs() -> u64 {
    120
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChatConfig {
    /// Chat host serving `/api/chat` and `/api/report/custom`.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Directory custom reports are saved into.
    #[serde(default)]
    pub report_dir: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            report_dir: String::new(),
        }
    }
}

impl ChatConfig {
    pub fn base(&self) -> &str {
        self.base_url.trim().trim_end_matches('/')
    }

    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Report directory, defaulting to the working directory.
    pub fn report_dir(&self) -> &str {
        if self.report_dir.is_empty() { "." } else { &self.report_dir }
    }
}
