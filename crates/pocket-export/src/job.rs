//! The export job: warm-up, deadline-bounded build, write, clear.
//!
//! States move `Idle → Generating → Done | TimedOut`. A build that fails
//! or overruns the deadline leaves the cart untouched. `acknowledge` returns
//! a finished job to `Idle`.

use std::path::{Path, PathBuf};

use chrono::Local;
use pocket_api::DataSource;
use pocket_config::ExportConfig;
use pocket_core::InsightRecord;
use pocket_core::timestamp::file_stamp;
use pocket_store::{InsightStore, KeyValueStorage};

use crate::cell::Rows;
use crate::error::ExportError;
use crate::sheet::SheetBuilder;
use crate::workbook::{SUMMARY_SHEET, card_sheet_name, summary_rows, to_xlsx};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportState {
    Idle,
    Generating,
    /// The workbook was written here and the cart cleared.
    Done(PathBuf),
    /// The build failed or overran the deadline.
    TimedOut(String),
}

pub struct ExportJob {
    config: ExportConfig,
    state: ExportState,
}

impl ExportJob {
    #[must_use]
    pub const fn new(config: ExportConfig) -> Self {
        Self {
            config,
            state: ExportState::Idle,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &ExportState {
        &self.state
    }

    /// Dismiss a finished job.
    pub fn acknowledge(&mut self) {
        if matches!(self.state, ExportState::Done(_) | ExportState::TimedOut(_)) {
            tracing::debug!(state = ?self.state, "export acknowledged");
            self.state = ExportState::Idle;
        }
    }

    /// Export the records in `selected_ids` (store order) to a new workbook.
    ///
    /// On success the cart is cleared and the file path returned.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::NothingSelected`] when no record matches, with
    /// the job left `Idle`. Any other error leaves the job `TimedOut` and
    /// the cart unchanged.
    pub async fn run<K, S>(
        &mut self,
        store: &mut InsightStore<K>,
        selected_ids: &[String],
        source: &S,
    ) -> Result<PathBuf, ExportError>
    where
        K: KeyValueStorage,
        S: DataSource,
    {
        let records = store.select(selected_ids);
        if records.is_empty() {
            return Err(ExportError::NothingSelected);
        }

        self.state = ExportState::Generating;
        tracing::debug!(count = records.len(), "export generating");
        tokio::time::sleep(self.config.warmup()).await;

        let deadline = self.config.deadline();
        let outcome = match tokio::time::timeout(deadline, self.generate(&records, source)).await {
            Ok(result) => result,
            Err(_) => Err(ExportError::TimedOut(deadline)),
        };

        match outcome {
            Ok(path) => {
                store.clear();
                tracing::info!(path = %path.display(), "export written");
                self.state = ExportState::Done(path.clone());
                Ok(path)
            }
            Err(e) => {
                tracing::warn!(error = %e, "export failed");
                self.state = ExportState::TimedOut(e.to_string());
                Err(e)
            }
        }
    }

    async fn generate<S: DataSource>(
        &self,
        records: &[InsightRecord],
        source: &S,
    ) -> Result<PathBuf, ExportError> {
        let now = Local::now();
        let builder =
            SheetBuilder::new(source, self.config.ranking_row_limit).with_generated_at(now);

        let mut sheets: Vec<(String, Rows)> = Vec::with_capacity(records.len() + 1);
        sheets.push((SUMMARY_SHEET.to_string(), summary_rows(records, &now)));
        for (index, record) in records.iter().enumerate() {
            sheets.push((card_sheet_name(index), builder.build(record).await?));
        }
        let bytes = to_xlsx(&sheets)?;

        let path = self
            .config
            .output_dir_path()
            .join(file_name(&self.config.file_prefix, &file_stamp(&now)));
        write_file(&path, &bytes)?;
        Ok(path)
    }
}

/// `<prefix>_<yyMMdd_HHmmss>.xlsx`
#[must_use]
pub fn file_name(prefix: &str, stamp: &str) -> String {
    format!("{prefix}_{stamp}.xlsx")
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<(), ExportError> {
    let io = |source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(io)?;
    }
    std::fs::write(path, bytes).map_err(io)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_uses_prefix_and_stamp() {
        assert_eq!(
            file_name("LANEIGE_Insights", "250105_150405"),
            "LANEIGE_Insights_250105_150405.xlsx"
        );
    }

    #[test]
    fn acknowledge_only_resets_finished_jobs() {
        let mut job = ExportJob::new(ExportConfig::default());
        job.acknowledge();
        assert_eq!(job.state(), &ExportState::Idle);

        job.state = ExportState::TimedOut("export timed out after 15s".into());
        job.acknowledge();
        assert_eq!(job.state(), &ExportState::Idle);

        job.state = ExportState::Done(PathBuf::from("x.xlsx"));
        job.acknowledge();
        assert_eq!(job.state(), &ExportState::Idle);
    }
}
