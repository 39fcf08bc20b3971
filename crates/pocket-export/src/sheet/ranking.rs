//! Ranking cards: the live Amazon ranking table and the rank-trend chart.

use pocket_api::DataSource;
use pocket_core::InsightRecord;
use pocket_core::payloads::{RankChartPoint, RankingRow};

use super::snapshot;
use crate::cell::{Cell, Rows, delta, prev_rank};
use crate::error::ExportError;
use crate::row;

const DEFAULT_CHART_TITLE: &str = "LANEIGE 제품 순위 변동 추이";

/// Re-fetches the category's current ranking when the meta names one,
/// otherwise renders the stored rows.
pub async fn current_table<S: DataSource>(
    source: &S,
    record: &InsightRecord,
    limit: usize,
    generated: &str,
) -> Result<Rows, ExportError> {
    let category = record.meta.as_ref().and_then(|m| m.category());
    let (items, snapshot_time) = match category {
        Some(code) => {
            let ranking = source.current_ranking(code).await?;
            (ranking.to_rows(), Some(ranking.snapshot_time))
        }
        None => (snapshot::<Vec<RankingRow>>(record)?, None),
    };

    let mut rows = vec![
        row!["실시간 아마존 현재 순위"],
        row!["카테고리", category.map_or("-", |c| c.label())],
        row!["스냅샷 시각", Cell::or_dash(snapshot_time)],
        row!["생성 시각", generated],
        row![],
        row!["순위", "브랜드", "제품명", "이전 순위", "변동"],
    ];
    rows.extend(items.iter().take(limit).map(|r| {
        row![
            Cell::or_dash(r.rank),
            Cell::or_dash(r.brand()),
            Cell::or_dash(r.product_name.as_deref()),
            prev_rank(r.prev_rank),
            delta(r.rank_change),
        ]
    }));
    Ok(rows)
}

pub fn trend_chart(record: &InsightRecord, generated: &str) -> Result<Rows, ExportError> {
    let points: Vec<RankChartPoint> = snapshot(record)?;
    let title = if record.title.is_empty() {
        DEFAULT_CHART_TITLE
    } else {
        record.title.as_str()
    };
    if points.is_empty() {
        return Ok(vec![row![title], row![], row!["데이터 없음"]]);
    }

    let period = record
        .meta
        .as_ref()
        .and_then(|m| m.period)
        .map(|p| p.label());
    let mut rows = vec![
        row![title],
        row!["기간", Cell::or_dash(period)],
        row!["생성 시각", generated],
        row![],
        row!["날짜", "전체 카테고리", "전체 순위", "선택 카테고리", "카테고리 순위"],
    ];
    rows.extend(points.into_iter().map(|p| {
        row![
            Cell::or_dash(p.date),
            Cell::or_dash(p.overall_category),
            Cell::or_dash(p.overall_rank),
            Cell::or_dash(p.category_category),
            Cell::or_dash(p.category_rank),
        ]
    }));
    Ok(rows)
}
