//! Workbook export configuration.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Minimum time the progress indicator is shown before building starts.
const fn default_warmup_ms() -> u64 {
    3_000
}

/// Deadline for building every sheet, counted after the warm-up.
const fn default_deadline_ms() -> u64 {
    15_000
}

fn default_output_dir() -> String {
    ".".to_string()
}

fn default_file_prefix() -> String {
    "LANEIGE_Insights".to_string()
}

const fn default_ranking_row_limit() -> usize {
    30
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExportConfig {
    #[serde(default = "default_warmup_ms")]
    pub warmup_ms: u64,

    #[serde(default = "default_deadline_ms")]
    pub deadline_ms: u64,

    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// File name prefix; the stamp `_<yyMMdd_HHmmss>.xlsx` is appended.
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,

    /// Maximum rows written for a live ranking table.
    #[serde(default = "default_ranking_row_limit")]
    pub ranking_row_limit: usize,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            warmup_ms: default_warmup_ms(),
            deadline_ms: default_deadline_ms(),
            output_dir: default_output_dir(),
            file_prefix: default_file_prefix(),
            ranking_row_limit: default_ranking_row_limit(),
        }
    }
}

impl ExportConfig {
    pub const fn warmup(&self) -> Duration {
        Duration::from_millis(self.warmup_ms)
    }

    pub const fn deadline(&self) -> Duration {
        Duration::from_millis(self.deadline_ms)
    }

    pub fn output_dir_path(&self) -> PathBuf {
        PathBuf::from(&self.output_dir)
    }

    /// Reject settings that can never produce a workbook.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.deadline_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "export.deadline_ms",
                reason: "must be greater than zero".into(),
            });
        }
        if self.file_prefix.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "export.file_prefix",
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }
}
