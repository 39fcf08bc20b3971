use std::path::{Path, PathBuf};

use anyhow::Context;
use pocket_api::reports::DAILY_REPORT_FILE_NAME;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ReportArgs;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

#[derive(Debug, Serialize)]
struct ReportResponse {
    path: PathBuf,
    bytes: usize,
}

/// Handle `pocket report`: save today's daily report.
pub async fn run(args: &ReportArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let dir = args
        .out
        .as_deref()
        .unwrap_or_else(|| ctx.config.chat.report_dir());

    let progress = Progress::spinner("Downloading daily report");
    let bytes = match ctx.backend.client()?.download_daily_report().await {
        Ok(bytes) => bytes,
        Err(error) => {
            progress.finish_err("Download failed");
            return Err(error).context("failed to download the daily report");
        }
    };
    let path = save(Path::new(dir), &bytes)?;
    progress.finish_ok("Report saved");

    output(
        &ReportResponse {
            path,
            bytes: bytes.len(),
        },
        flags.format,
    )
}

fn save(dir: &Path, bytes: &[u8]) -> anyhow::Result<PathBuf> {
    std::fs::create_dir_all(dir).with_context(|| format!("cannot create {}", dir.display()))?;
    let path = dir.join(DAILY_REPORT_FILE_NAME);
    std::fs::write(&path, bytes).with_context(|| format!("cannot write {}", path.display()))?;
    Ok(path)
}
