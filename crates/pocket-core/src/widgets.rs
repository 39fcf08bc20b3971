//! Canonical registrations for every dashboard widget.
//!
//! Each constructor fixes the widget's `uniqueKey`, record type, page, title,
//! and `meta.kind`, plus whatever parameters a later re-fetch needs. Live
//! widgets store `data: null`; snapshot widgets store what they rendered.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::enums::{CategoryCode, Page, Period};
use crate::kind::CardKind;
use crate::payloads::{
    FeedbackSnapshot, KeywordInsightRow, KeywordRankRow, ProductDetailRow, RankChartPoint,
    RatingShare, ReputationSnapshot, SalesPoint, SentimentSnapshot, StatSnapshot, Top5Row,
};
use crate::record::{InsightMeta, NewInsight};

pub const TITLE_STAT_SALES: &str = "지난 달 총 판매량";
pub const TITLE_STAT_REVENUE: &str = "지난 달 매출액";
pub const TITLE_PRODUCT_OF_MONTH: &str = "이달의 제품";
pub const TITLE_RISING_PRODUCT: &str = "급상승한 제품";
pub const TITLE_MONTHLY_SALES: &str = "지난 달 판매 추이";
pub const TITLE_TOP5: &str = "지난 달 베스트 셀러 TOP 5";
pub const TITLE_PRODUCT_DETAIL: &str = "지난 달 베스트 셀러 TOP 5 상세 정보";
pub const TITLE_REVIEW_FEEDBACK: &str = "고객들이 말합니다 (리뷰 요약)";
pub const TITLE_REVIEW_SENTIMENT: &str = "감정 분석 분포";
pub const TITLE_REVIEW_RATING_INDEX: &str = "평점 지수";
pub const TITLE_REVIEW_RATING_DISTRIBUTION: &str = "평점 분포";
pub const TITLE_REVIEW_AI_INSIGHTS: &str = "AI 키워드 분석 및 비즈니스 인사이트";
pub const TITLE_KEYWORD_DISTRIBUTION: &str = "카테고리별 키워드 분포";
pub const TITLE_KEYWORD_RANKINGS: &str = "키워드 순위";

/// Serialize a snapshot payload. Derived `Serialize` on the payload structs
/// cannot fail, so an error here degrades to `null`.
fn snapshot<T: Serialize>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or_default()
}

fn base(kind: &CardKind, unique_key: impl Into<String>, title: impl Into<String>) -> NewInsight {
    let page = kind.page().unwrap_or(Page::Dashboard);
    NewInsight::new(unique_key, kind.record_type(), page, title)
}

fn simple(kind: &CardKind, title: &str, data: Value) -> NewInsight {
    base(kind, kind.as_str(), title)
        .with_data(data)
        .with_meta(InsightMeta::kind(kind.as_str()))
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

#[must_use]
pub fn stat_sales(stat: &StatSnapshot) -> NewInsight {
    simple(&CardKind::StatSales, TITLE_STAT_SALES, snapshot(stat))
}

#[must_use]
pub fn stat_revenue(stat: &StatSnapshot) -> NewInsight {
    simple(&CardKind::StatRevenue, TITLE_STAT_REVENUE, snapshot(stat))
}

/// Best seller of `month` (`YYYY-MM`), re-fetched on export.
#[must_use]
pub fn product_of_month(month: &str) -> NewInsight {
    let kind = CardKind::ProductOfMonth;
    base(&kind, kind.as_str(), TITLE_PRODUCT_OF_MONTH).with_meta(InsightMeta {
        month: Some(month.to_string()),
        ..InsightMeta::kind(kind.as_str())
    })
}

#[must_use]
pub fn rising_product() -> NewInsight {
    simple(&CardKind::RisingProduct, TITLE_RISING_PRODUCT, Value::Null)
}

#[must_use]
pub fn monthly_sales_chart(points: &[SalesPoint]) -> NewInsight {
    simple(&CardKind::MonthlySalesChart, TITLE_MONTHLY_SALES, snapshot(&points))
}

#[must_use]
pub fn top5_table(rows: &[Top5Row], month: &str) -> NewInsight {
    let kind = CardKind::Top5Table;
    base(&kind, kind.as_str(), TITLE_TOP5)
        .with_data(snapshot(&rows))
        .with_meta(InsightMeta {
            month: Some(month.to_string()),
            ..InsightMeta::kind(kind.as_str())
        })
}

#[must_use]
pub fn product_detail_table(rows: &[ProductDetailRow], month: &str) -> NewInsight {
    let kind = CardKind::ProductDetailTable;
    base(&kind, kind.as_str(), TITLE_PRODUCT_DETAIL)
        .with_data(snapshot(&rows))
        .with_meta(InsightMeta {
            month: Some(month.to_string()),
            ..InsightMeta::kind(kind.as_str())
        })
}

// ---------------------------------------------------------------------------
// Ranking
// ---------------------------------------------------------------------------

/// Current Amazon ranking for one category, re-fetched on export.
#[must_use]
pub fn ranking_table(category: CategoryCode) -> NewInsight {
    let kind = CardKind::RankingTable;
    base(
        &kind,
        format!("ranking-table-{}", category.as_str()),
        format!("아마존 {} 베스트셀러 순위", category.label()),
    )
    .with_meta(InsightMeta {
        category_code: Some(category),
        category_id: Some(category.id()),
        ..InsightMeta::kind(kind.as_str())
    })
}

/// Rank-trend chart for one product over one period. The chart is a snapshot;
/// the meta lets the chat assistant re-fetch the history.
#[must_use]
pub fn rank_trend_chart(
    product_id: u64,
    product_name: &str,
    period: Period,
    points: &[RankChartPoint],
) -> NewInsight {
    let kind = CardKind::RankTrendChart;
    base(
        &kind,
        format!("ranking-chart-{product_id}-{period}"),
        format!("{} {product_name} 순위 추이", period.label()),
    )
    .with_data(snapshot(&points))
    .with_meta(InsightMeta {
        product_id: Some(product_id),
        range: Some(period.range()),
        period: Some(period),
        product_name: Some(product_name.to_string()),
        ..InsightMeta::kind(kind.as_str())
    })
}

// ---------------------------------------------------------------------------
// Review analysis
// ---------------------------------------------------------------------------

fn review(kind: &CardKind, product_id: u64, title: &str, data: Value) -> NewInsight {
    base(kind, format!("{}-{product_id}", kind.as_str()), title)
        .with_data(data)
        .with_meta(InsightMeta {
            product_id: Some(product_id),
            ..InsightMeta::kind(kind.as_str())
        })
}

#[must_use]
pub fn review_feedback(product_id: u64, snapshot_data: &FeedbackSnapshot) -> NewInsight {
    review(&CardKind::ReviewFeedback, product_id, TITLE_REVIEW_FEEDBACK, snapshot(snapshot_data))
}

#[must_use]
pub fn review_sentiment(product_id: u64, snapshot_data: &SentimentSnapshot) -> NewInsight {
    review(&CardKind::ReviewSentiment, product_id, TITLE_REVIEW_SENTIMENT, snapshot(snapshot_data))
}

#[must_use]
pub fn review_rating_index(product_id: u64, snapshot_data: &ReputationSnapshot) -> NewInsight {
    review(
        &CardKind::ReviewRatingIndex,
        product_id,
        TITLE_REVIEW_RATING_INDEX,
        snapshot(snapshot_data),
    )
}

#[must_use]
pub fn review_rating_distribution(product_id: u64, shares: &[RatingShare]) -> NewInsight {
    review(
        &CardKind::ReviewRatingDistribution,
        product_id,
        TITLE_REVIEW_RATING_DISTRIBUTION,
        snapshot(&shares),
    )
}

#[must_use]
pub fn review_keyword_insights(product_id: u64, rows: &[KeywordInsightRow]) -> NewInsight {
    review(
        &CardKind::ReviewKeywordInsights,
        product_id,
        TITLE_REVIEW_AI_INSIGHTS,
        snapshot(&rows),
    )
}

// ---------------------------------------------------------------------------
// Keywords
// ---------------------------------------------------------------------------

/// Mention counts per keyword category, in display order.
#[must_use]
pub fn keyword_category_distribution(counts: &[(String, u64)]) -> NewInsight {
    let map: Map<String, Value> = counts
        .iter()
        .map(|(category, count)| (category.clone(), Value::from(*count)))
        .collect();
    simple(
        &CardKind::KeywordCategoryDistribution,
        TITLE_KEYWORD_DISTRIBUTION,
        Value::Object(map),
    )
}

#[must_use]
pub fn keyword_rankings(rows: &[KeywordRankRow]) -> NewInsight {
    simple(&CardKind::KeywordRankings, TITLE_KEYWORD_RANKINGS, snapshot(&rows))
}
