use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::output;

/// Handle `pocket today`. The banner is optional: a failed fetch is logged
/// and nothing is printed.
pub async fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let insight = match ctx.backend.client() {
        Ok(client) => client.today_insight().await,
        Err(error) => Err(error),
    };
    let insight = match insight {
        Ok(insight) => insight,
        Err(error) => {
            tracing::warn!(error = %error, "today's insight unavailable");
            return Ok(());
        }
    };

    match flags.format {
        OutputFormat::Table => {
            if let Some(date) = &insight.date {
                println!("[{date}]");
            }
            println!("{}", insight.insight);
            Ok(())
        }
        _ => output(&insight, flags.format),
    }
}
