use anyhow::{Context, bail};
use pocket_chat::Message;
use pocket_core::InsightRecord;
use pocket_store::{InsightStore, KeyValueStorage};
use serde::Serialize;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::cli::root_commands::ChatArgs;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

#[derive(Debug, Serialize)]
struct ChatResponse {
    answer: String,
    attached: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    report: Option<String>,
}

/// Handle `pocket chat`.
pub async fn run(args: &ChatArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let attachments = resolve_attachments(&ctx.store, &args.attach)?;
    if args.report && attachments.is_empty() {
        bail!("--report needs at least one --attach id");
    }

    let mut conversation = ctx.conversation();
    let progress = Progress::spinner("Waiting for the assistant");
    let reply: Message = conversation
        .send(&ctx.chat, &ctx.backend, &args.message, &attachments)
        .await
        .cloned()
        .context("nothing to send: pass a message or --attach ids")?;
    progress.finish_clear();

    let mut report = None;
    if args.report && reply.can_generate_report() {
        let progress = Progress::spinner("Generating report");
        let index = conversation
            .latest_reportable()
            .context("no reply carries attached data")?;
        let path = conversation.generate_report(&ctx.chat, index).await;
        match path {
            Ok(path) => {
                progress.finish_ok("Report saved");
                report = Some(path.display().to_string());
            }
            Err(error) => {
                progress.finish_err("Report failed");
                return Err(error).context("report generation failed");
            }
        }
    }

    match flags.format {
        OutputFormat::Table => {
            println!("{}", reply.display_text());
            if let Some(path) = report {
                println!("\n리포트 저장: {path}");
            }
            Ok(())
        }
        _ => output(
            &ChatResponse {
                answer: reply.display_text(),
                attached: reply.attached,
                report,
            },
            flags.format,
        ),
    }
}

/// Collected records for `ids`, in the order given.
fn resolve_attachments<K: KeyValueStorage>(
    store: &InsightStore<K>,
    ids: &[String],
) -> anyhow::Result<Vec<InsightRecord>> {
    ids.iter()
        .map(|id| {
            store
                .get(id)
                .cloned()
                .with_context(|| format!("no insight with id '{id}' in the cart"))
        })
        .collect()
}
