//! Dashboard cards: KPI stats, best seller, rising product, sales chart,
//! top-5 tables.

use pocket_api::DataSource;
use pocket_core::InsightRecord;
use pocket_core::kind::CardKind;
use pocket_core::payloads::{ProductDetailRow, StatSnapshot, Top5Row};
use pocket_core::widgets::{
    TITLE_MONTHLY_SALES, TITLE_PRODUCT_DETAIL, TITLE_STAT_REVENUE, TITLE_STAT_SALES, TITLE_TOP5,
};
use serde_json::{Map, Value};

use super::snapshot;
use crate::cell::{Cell, Rows, delta};
use crate::error::ExportError;
use crate::row;

pub fn stat(record: &InsightRecord) -> Result<Rows, ExportError> {
    let stat: StatSnapshot = snapshot(record)?;
    let title = if record.kind() == CardKind::StatRevenue {
        TITLE_STAT_REVENUE
    } else {
        TITLE_STAT_SALES
    };
    Ok(vec![
        row![title],
        row!["값", Cell::or_dash(stat.value)],
        row!["변화", Cell::or_dash(stat.change)],
        row!["추세", Cell::or_dash(stat.trend.map(|t| t.as_str()))],
    ])
}

pub async fn product_of_month<S: DataSource>(
    source: &S,
    record: &InsightRecord,
) -> Result<Rows, ExportError> {
    let month = record
        .meta
        .as_ref()
        .and_then(|m| m.month.clone())
        .unwrap_or_default();
    let item = source.top1_bestseller(&month).await?.item;
    Ok(vec![
        row!["지난 달 매출 1위"],
        row!["제품명", item.product_name],
        row!["평점", item.rating],
        row!["리뷰 수", item.review_count],
        row!["순위 변동", delta(item.rank_change)],
    ])
}

pub async fn rising_product<S: DataSource>(source: &S) -> Result<Rows, ExportError> {
    let item = source.rising_product().await?.item;
    Ok(vec![
        row!["급상승한 제품"],
        row!["제품명", item.product_name],
        row!["평점", item.rating],
        row!["리뷰 수", item.review_count],
        row!["성장률", item.growth_rate],
    ])
}

/// Columns follow the keys of the first point, in stored order.
pub fn monthly_sales(record: &InsightRecord) -> Result<Rows, ExportError> {
    let points: Vec<Map<String, Value>> = snapshot(record)?;
    let Some(first) = points.first() else {
        return Ok(vec![row![TITLE_MONTHLY_SALES], row![], row!["데이터 없음"]]);
    };
    let headers: Vec<String> = first.keys().cloned().collect();
    let mut rows = vec![
        row![TITLE_MONTHLY_SALES],
        row![],
        headers.iter().map(Cell::from).collect(),
    ];
    rows.extend(points.iter().map(|point| {
        headers
            .iter()
            .map(|h| point.get(h).map_or(Cell::Empty, Cell::from_json))
            .collect()
    }));
    Ok(rows)
}

pub fn top5(record: &InsightRecord) -> Result<Rows, ExportError> {
    let items: Vec<Top5Row> = snapshot(record)?;
    let mut rows = vec![
        row![TITLE_TOP5],
        row![],
        row!["순위", "제품명", "판매량", "평점", "리뷰 수"],
    ];
    rows.extend(items.into_iter().map(|r| {
        row![
            Cell::or_dash(r.rank),
            Cell::or_dash(r.name),
            Cell::or_dash(r.sales),
            Cell::or_dash(r.rating),
            Cell::or_dash(r.reviews),
        ]
    }));
    Ok(rows)
}

pub fn product_detail(record: &InsightRecord) -> Result<Rows, ExportError> {
    let items: Vec<ProductDetailRow> = snapshot(record)?;
    let mut rows = vec![
        row![TITLE_PRODUCT_DETAIL],
        row![],
        row!["순위", "제품명", "지난 달 판매량", "지난달 순위", "순위 변동"],
    ];
    rows.extend(items.into_iter().map(|r| {
        row![
            Cell::or_dash(r.rank),
            Cell::or_dash(r.name),
            Cell::or_dash(r.sales),
            Cell::or_dash(r.prev_rank),
            delta(r.rank_change),
        ]
    }));
    Ok(rows)
}
