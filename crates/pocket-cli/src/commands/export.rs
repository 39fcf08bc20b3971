use std::path::PathBuf;

use anyhow::{Context, bail};
use pocket_export::{ExportError, ExportJob};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ExportArgs;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

#[derive(Debug, Serialize)]
struct ExportResponse {
    path: PathBuf,
    cards: usize,
    cart_cleared: bool,
}

/// Handle `pocket export`.
pub async fn run(
    args: &ExportArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.config
        .export
        .validate()
        .context("invalid [export] configuration")?;

    let ids: Vec<String> = if args.all {
        ctx.store.records().iter().map(|r| r.id.clone()).collect()
    } else {
        args.ids.clone()
    };
    let cards = ctx.store.select(&ids).len();

    let mut job = ExportJob::new(ctx.config.export.clone());
    let progress = Progress::spinner(&format!("Generating workbook for {cards} insight(s)"));
    match job.run(&mut ctx.store, &ids, &ctx.backend).await {
        Ok(path) => {
            progress.finish_ok("Workbook ready");
            output(
                &ExportResponse {
                    path,
                    cards,
                    cart_cleared: true,
                },
                flags.format,
            )
        }
        Err(ExportError::NothingSelected) => {
            progress.finish_clear();
            bail!("none of the given ids are in the cart; see `pocket cart list`")
        }
        Err(error) => {
            progress.finish_err("Export failed");
            Err(error).context("export failed, the cart was left unchanged")
        }
    }
}
