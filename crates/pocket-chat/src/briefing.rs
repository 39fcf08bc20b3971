//! Context lines for insights attached to a chat message.
//!
//! Dashboard tables, ranking tables, rank histories and review cards are
//! re-fetched so the assistant sees current numbers. Everything else is the
//! stored snapshot flattened by [`normalize_to_lines`]. Records missing the
//! meta needed for a re-fetch yield `error: ...` lines instead of failing.

use std::sync::OnceLock;

use chrono::Local;
use pocket_api::chat::AttachedDataBlock;
use pocket_api::dashboard::{RisingProduct, Top1Bestseller, Top5Bestsellers};
use pocket_api::names::{context_product_name, ranking_product_name};
use pocket_api::rankings::{CurrentRanking, RankTrends};
use pocket_api::reviews::ReviewAnalysis;
use pocket_api::{ApiError, DataSource};
use pocket_core::enums::Page;
use pocket_core::format::{signed, thousands};
use pocket_core::timestamp::year_month;
use pocket_core::{CardKind, InsightMeta, InsightRecord, normalize_to_lines};
use regex::Regex;

/// Title the assistant sees for `record`.
///
/// Rank-history charts collapse to one generic title. Ranking tables drop
/// the category label so every category reads as the same table.
#[must_use]
pub fn ai_title(record: &InsightRecord) -> String {
    if record.page == Page::Ranking {
        if record.title.contains("순위 추이") {
            return "제품 순위 변동 추이".to_string();
        }
        if record.title.contains("베스트셀러 순위") {
            return category_label_re()
                .replace(&record.title, "아마존 ")
                .trim()
                .to_string();
        }
    }
    record.title.clone()
}

fn category_label_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"아마존\s+(전체|립 케어|스킨 케어|립 메이크업|페이스 파우더)\s+")
            .expect("category label pattern is valid")
    })
}

/// The attached block for `record`: its AI title plus context lines.
///
/// # Errors
///
/// Returns the [`ApiError`] of a failed re-fetch.
pub async fn attach<S: DataSource>(
    record: &InsightRecord,
    source: &S,
) -> Result<AttachedDataBlock, ApiError> {
    Ok(AttachedDataBlock {
        title: ai_title(record),
        lines: context_lines(record, source).await?,
    })
}

/// Context lines for one record.
///
/// # Errors
///
/// Returns the [`ApiError`] of a failed re-fetch.
pub async fn context_lines<S: DataSource>(
    record: &InsightRecord,
    source: &S,
) -> Result<Vec<String>, ApiError> {
    let kind = record.kind();
    tracing::debug!(key = %record.unique_key, %kind, "building chat context");
    match kind {
        CardKind::ProductOfMonth => Ok(top1_lines(
            &source.top1_bestseller(&month_of(record)).await?,
        )),
        CardKind::RisingProduct => Ok(rising_lines(&source.rising_product().await?)),
        CardKind::Top5Table | CardKind::ProductDetailTable => Ok(top5_lines(
            &source.top5_bestsellers(&month_of(record)).await?,
        )),
        CardKind::RankingTable => {
            match record.meta.as_ref().and_then(InsightMeta::category) {
                Some(category) => Ok(ranking_lines(
                    category.as_str(),
                    &source.current_ranking(category).await?,
                )),
                None => Ok(normalize_to_lines(&record.data)),
            }
        }
        CardKind::RankTrendChart => rank_history(record, source).await,
        CardKind::ReviewFeedback
        | CardKind::ReviewSentiment
        | CardKind::ReviewRatingIndex
        | CardKind::ReviewRatingDistribution
        | CardKind::ReviewKeywordInsights => {
            let Some(product_id) = record.product_id() else {
                return Ok(vec![format!(
                    "error: productId missing in meta for {}",
                    record.unique_key
                )]);
            };
            let analysis = source.review_analysis(product_id).await?;
            Ok(review_lines(&kind, &analysis))
        }
        _ => Ok(normalize_to_lines(&record.data)),
    }
}

fn month_of(record: &InsightRecord) -> String {
    record
        .meta
        .as_ref()
        .and_then(|m| m.month.clone())
        .unwrap_or_else(|| year_month(&Local::now()))
}

async fn rank_history<S: DataSource>(
    record: &InsightRecord,
    source: &S,
) -> Result<Vec<String>, ApiError> {
    let meta = record.meta.as_ref();
    let product_id = meta.and_then(|m| m.product_id);
    let range = meta.and_then(|m| m.range);
    let (Some(product_id), Some(range)) = (product_id, range) else {
        tracing::warn!(key = %record.unique_key, "rank chart meta missing");
        return Ok(vec![
            "error: meta missing".to_string(),
            format!("productId: {}", or_undefined(product_id)),
            format!("range: {}", or_undefined(range)),
        ]);
    };

    let trends = source.rank_trends(product_id, range).await?;

    // The history endpoint carries no name; the catalog has name and style.
    let fallback = meta
        .and_then(|m| m.product_name.clone())
        .unwrap_or_else(|| format!("제품 {product_id}"));
    let (name, style) = match source.laneige_products().await {
        Ok(products) => products.find(product_id).map_or((fallback, None), |p| {
            (p.display_name(), p.style.clone())
        }),
        Err(e) => {
            tracing::warn!(product_id, error = %e, "product catalog unavailable");
            (fallback, None)
        }
    };
    Ok(rank_history_lines(&name, style.as_deref(), &trends))
}

fn or_undefined<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "undefined".to_string(), |v| v.to_string())
}

// ---------------------------------------------------------------------------
// Line mappers
// ---------------------------------------------------------------------------

#[must_use]
pub fn top1_lines(top1: &Top1Bestseller) -> Vec<String> {
    let item = &top1.item;
    vec![
        format!("month: {}", top1.month),
        format!("product_name: {}", item.product_name),
        format!("rank: {}", item.rank),
        format!("last_month_sales: {}", or_undefined(item.last_month_sales)),
        format!("rating: {}", item.rating),
        format!("review_count: {}", item.review_count),
    ]
}

#[must_use]
pub fn rising_lines(rising: &RisingProduct) -> Vec<String> {
    let item = &rising.item;
    vec![
        format!("product_name: {}", item.product_name),
        format!("rating: {}", item.rating),
        format!("review_count: {}", item.review_count),
        format!("growth_rate: {}", item.growth_rate),
    ]
}

/// `month`, `snapshot_time`, then one line per best seller.
#[must_use]
pub fn top5_lines(top5: &Top5Bestsellers) -> Vec<String> {
    let mut lines = vec![
        format!("month: {}", top5.month),
        format!("snapshot_time: {}", top5.snapshot_time),
    ];
    lines.extend(top5.items.iter().map(|item| {
        format!(
            "rank {}: {} | sales {} | rating {} | reviews {} | rank_change {}",
            item.rank,
            context_product_name(&item.product_name),
            item.last_month_sales,
            item.rating,
            item.review_count,
            signed(item.rank_change),
        )
    }));
    lines
}

/// `category`, `snapshot_time`, then one line per ranked product.
#[must_use]
pub fn ranking_lines(category_key: &str, ranking: &CurrentRanking) -> Vec<String> {
    let mut lines = vec![
        format!("category: {category_key}"),
        format!("snapshot_time: {}", ranking.snapshot_time),
    ];
    lines.extend(ranking.items.iter().map(|item| {
        format!(
            "rank {}: {} | is_laneige {} | rank_change {}",
            item.rank,
            ranking_product_name(&item.product_name),
            item.is_laneige,
            signed(item.rank_change),
        )
    }));
    lines
}

#[must_use]
pub fn rank_history_lines(
    product_name: &str,
    style: Option<&str>,
    trends: &RankTrends,
) -> Vec<String> {
    let mut lines = vec![format!("product_name: {product_name}")];
    if let Some(style) = style.filter(|s| !s.is_empty()) {
        lines.push(format!("style: {style}"));
    }
    lines.push(format!("range: {}", trends.range));

    for item in &trends.items {
        let mut parts = Vec::with_capacity(2);
        if let Some(rank) = item.rank1 {
            parts.push(format!(
                "overall {rank} ({})",
                or_undefined(item.rank1_category.as_deref())
            ));
        }
        if let Some(rank) = item.rank2 {
            parts.push(format!(
                "category {rank} ({})",
                or_undefined(item.rank2_category.as_deref())
            ));
        }
        if parts.is_empty() {
            lines.push(format!("{}: rank 없음", item.bucket));
        } else {
            lines.push(format!("{}: {}", item.bucket, parts.join(", ")));
        }
    }
    lines
}

/// Lines for one review card. Non-review kinds yield a single label line.
#[must_use]
pub fn review_lines(kind: &CardKind, analysis: &ReviewAnalysis) -> Vec<String> {
    let reputation = &analysis.reputation;
    match kind {
        CardKind::ReviewFeedback => vec![
            format!("총 리뷰 수: {}개", thousands(reputation.review_count)),
            format!("평균 평점: {:.1}", reputation.rating),
            format!("고객 피드백: \"{}\"", analysis.customers_say.current_text),
        ],
        CardKind::ReviewSentiment => vec![
            format!("긍정 반응: {}%", analysis.sentiment.positive_pct),
            format!("부정 반응: {}%", analysis.sentiment.negative_pct),
        ],
        CardKind::ReviewRatingIndex => vec![
            format!("신뢰도 점수: {}", reputation.score),
            format!("평균 평점: {:.1}", reputation.rating),
            format!("총 리뷰: {}개", thousands(reputation.review_count)),
        ],
        CardKind::ReviewRatingDistribution => analysis
            .rating_distribution
            .iter()
            .map(|r| format!("{}점: {}%", r.star, r.pct))
            .collect(),
        CardKind::ReviewKeywordInsights => analysis
            .keyword_insights
            .iter()
            .map(|k| {
                format!(
                    "{} (언급 {}건, 점수 {}/100): {}",
                    k.aspect_name, k.mention_total, k.score, k.summary
                )
            })
            .collect(),
        other => vec![format!("리뷰 분석 데이터: {other}")],
    }
}
