use pocket_api::DataSource;
use pocket_api::names::ranking_product_name;
use pocket_api::rankings::CurrentRanking;
use pocket_core::format::signed;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::RankingArgs;
use crate::commands::shared::limit::{effective_limit, truncate_to};
use crate::commands::shared::parse;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize, PartialEq, Eq)]
struct RankingLine {
    rank: Option<u32>,
    brand: String,
    product: String,
    change: String,
    laneige: bool,
}

/// Handle `pocket ranking`.
pub async fn run(args: &RankingArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let category = parse::category(args.category.as_deref(), &ctx.config.general.default_category)?;
    let ranking = ctx.backend.current_ranking(category).await?;
    tracing::debug!(category = %category, snapshot = %ranking.snapshot_time, "ranking loaded");

    let mut lines = ranking_lines(&ranking);
    truncate_to(
        &mut lines,
        effective_limit(None, flags.limit, ctx.config.general.default_limit),
    );
    output(&lines, flags.format)
}

fn change_label(change: Option<i64>) -> String {
    match change {
        None | Some(0) => "-".to_string(),
        Some(change) => signed(change),
    }
}

fn ranking_lines(ranking: &CurrentRanking) -> Vec<RankingLine> {
    ranking
        .to_rows()
        .iter()
        .map(|row| RankingLine {
            rank: row.rank,
            brand: row.brand().unwrap_or("-").to_string(),
            product: row
                .product_name
                .as_deref()
                .map_or_else(|| "-".to_string(), ranking_product_name),
            change: change_label(row.rank_change),
            laneige: row.is_laneige.unwrap_or(false),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pocket_api::rankings::RankingItem;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn lines_show_brand_and_signed_change() {
        let ranking = CurrentRanking {
            category_id: 2,
            snapshot_time: "2025-02-01T09:00:00".into(),
            items: vec![
                RankingItem {
                    rank: 1,
                    product_name: "LANEIGE Lip Sleeping Mask - Berry".into(),
                    is_laneige: true,
                    prev_rank: Some(3),
                    rank_change: 2,
                },
                RankingItem {
                    rank: 2,
                    product_name: "Aquaphor Lip Repair".into(),
                    is_laneige: false,
                    prev_rank: Some(2),
                    rank_change: 0,
                },
            ],
        };
        assert_eq!(
            ranking_lines(&ranking),
            vec![
                RankingLine {
                    rank: Some(1),
                    brand: "LANEIGE".into(),
                    product: "LANEIGE Lip Sleeping Mask".into(),
                    change: "+2".into(),
                    laneige: true,
                },
                RankingLine {
                    rank: Some(2),
                    brand: "Aquaphor".into(),
                    product: "Aquaphor Lip Repair".into(),
                    change: "-".into(),
                    laneige: false,
                },
            ]
        );
    }
}
