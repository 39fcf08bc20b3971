use anyhow::Context;
use pocket_chat::briefing::attach;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::cli::root_commands::ContextArgs;
use crate::context::AppContext;
use crate::output::{output, output_lines};

/// Handle `pocket context <id>`: the block the assistant would receive.
pub async fn run(args: &ContextArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let record = ctx
        .store
        .get(&args.id)
        .with_context(|| format!("no insight with id '{}' in the cart", args.id))?;
    let block = attach(record, &ctx.backend)
        .await
        .with_context(|| format!("failed to build context for '{}'", record.title))?;

    match flags.format {
        OutputFormat::Table => {
            let mut lines = Vec::with_capacity(block.lines.len() + 1);
            lines.push(format!("[{}]", block.title));
            lines.extend(block.lines);
            output_lines(&lines, flags.format)
        }
        _ => output(&block, flags.format),
    }
}
