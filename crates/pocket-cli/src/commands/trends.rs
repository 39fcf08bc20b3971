use anyhow::bail;
use pocket_api::RankTrendView;
use pocket_core::payloads::RankChartPoint;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::TrendsArgs;
use crate::commands::shared::parse;
use crate::context::AppContext;
use crate::output::output;

/// Handle `pocket trends <product>`.
pub async fn run(args: &TrendsArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let range = parse::range(Some(args.range.as_str()))?;
    let mut view = RankTrendView::new();
    view.load(&ctx.backend, args.product, range).await;

    if let Some(error) = view.error() {
        bail!("rank history for product {} unavailable: {error}", args.product);
    }
    let points: Vec<RankChartPoint> = view
        .trends()
        .map(pocket_api::rankings::RankTrends::to_chart_points)
        .unwrap_or_default();
    output(&points, flags.format)
}
