//! Card kinds: the discriminator that selects sheet and chat-context rules.
//!
//! A record's kind string comes from `meta.kind` when present, else from its
//! `uniqueKey`. Keys that embed parameters (`ranking-chart-<pid>-<period>`,
//! `review-sentiment-distribution-<pid>`) resolve through prefix matching
//! after exact matches fail.

use std::fmt;

use crate::enums::{Page, RecordType};

/// Closed set of known card kinds, plus the raw string of anything else.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CardKind {
    StatSales,
    StatRevenue,
    ProductOfMonth,
    RisingProduct,
    MonthlySalesChart,
    Top5Table,
    ProductDetailTable,
    RankingTable,
    RankTrendChart,
    ReviewFeedback,
    ReviewSentiment,
    ReviewRatingIndex,
    ReviewRatingDistribution,
    ReviewKeywordInsights,
    KeywordCategoryDistribution,
    KeywordRankings,
    Unknown(String),
}

/// Prefix rules, checked in order after exact matches.
const PREFIXES: &[(&str, CardKind)] = &[
    ("ranking-table-", CardKind::RankingTable),
    ("amazon-ranking-table-", CardKind::RankingTable),
    ("ranking-chart-", CardKind::RankTrendChart),
    ("review-customer-feedback-", CardKind::ReviewFeedback),
    ("review-sentiment-distribution-", CardKind::ReviewSentiment),
    ("review-rating-index-", CardKind::ReviewRatingIndex),
    ("review-rating-distribution-", CardKind::ReviewRatingDistribution),
    ("review-ai-insights-", CardKind::ReviewKeywordInsights),
];

impl CardKind {
    /// Every known kind, in catalog order.
    pub const KNOWN: [Self; 16] = [
        Self::StatSales,
        Self::StatRevenue,
        Self::ProductOfMonth,
        Self::RisingProduct,
        Self::MonthlySalesChart,
        Self::Top5Table,
        Self::ProductDetailTable,
        Self::RankingTable,
        Self::RankTrendChart,
        Self::ReviewFeedback,
        Self::ReviewSentiment,
        Self::ReviewRatingIndex,
        Self::ReviewRatingDistribution,
        Self::ReviewKeywordInsights,
        Self::KeywordCategoryDistribution,
        Self::KeywordRankings,
    ];

    /// Resolve a raw kind string. Never fails: unmatched input becomes `Unknown`.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if let Some(kind) = Self::KNOWN.iter().find(|k| k.as_str() == raw) {
            return kind.clone();
        }
        PREFIXES
            .iter()
            .find(|(prefix, _)| raw.starts_with(prefix))
            .map_or_else(|| Self::Unknown(raw.to_string()), |(_, kind)| kind.clone())
    }

    /// Canonical kind string, written to `meta.kind`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::StatSales => "dashboard-stat-sales",
            Self::StatRevenue => "dashboard-stat-revenue",
            Self::ProductOfMonth => "dashboard-product-of-month",
            Self::RisingProduct => "dashboard-rising-product",
            Self::MonthlySalesChart => "dashboard-chart-monthly-sales",
            Self::Top5Table => "dashboard-table-top5",
            Self::ProductDetailTable => "dashboard-table-product-detail",
            Self::RankingTable => "ranking-table-current",
            Self::RankTrendChart => "ranking-chart-trend",
            Self::ReviewFeedback => "review-customer-feedback",
            Self::ReviewSentiment => "review-sentiment-distribution",
            Self::ReviewRatingIndex => "review-rating-index",
            Self::ReviewRatingDistribution => "review-rating-distribution",
            Self::ReviewKeywordInsights => "review-ai-insights",
            Self::KeywordCategoryDistribution => "keyword-category-distribution",
            Self::KeywordRankings => "keyword-rankings-table",
            Self::Unknown(raw) => raw,
        }
    }

    #[must_use]
    pub const fn is_review(&self) -> bool {
        matches!(
            self,
            Self::ReviewFeedback
                | Self::ReviewSentiment
                | Self::ReviewRatingIndex
                | Self::ReviewRatingDistribution
                | Self::ReviewKeywordInsights
        )
    }

    /// Record type the widget registers this kind with.
    #[must_use]
    pub const fn record_type(&self) -> RecordType {
        match self {
            Self::StatSales
            | Self::StatRevenue
            | Self::ProductOfMonth
            | Self::RisingProduct
            | Self::ReviewRatingIndex => RecordType::Stat,
            Self::MonthlySalesChart
            | Self::RankTrendChart
            | Self::ReviewSentiment
            | Self::ReviewRatingDistribution
            | Self::KeywordCategoryDistribution => RecordType::Chart,
            Self::ReviewFeedback | Self::ReviewKeywordInsights => RecordType::Insight,
            Self::Top5Table
            | Self::ProductDetailTable
            | Self::RankingTable
            | Self::KeywordRankings
            | Self::Unknown(_) => RecordType::Table,
        }
    }

    /// Dashboard view that hosts the widget.
    #[must_use]
    pub const fn page(&self) -> Option<Page> {
        match self {
            Self::StatSales
            | Self::StatRevenue
            | Self::ProductOfMonth
            | Self::RisingProduct
            | Self::MonthlySalesChart
            | Self::Top5Table
            | Self::ProductDetailTable => Some(Page::Dashboard),
            Self::RankingTable | Self::RankTrendChart => Some(Page::Ranking),
            Self::ReviewFeedback
            | Self::ReviewSentiment
            | Self::ReviewRatingIndex
            | Self::ReviewRatingDistribution
            | Self::ReviewKeywordInsights => Some(Page::Review),
            Self::KeywordCategoryDistribution | Self::KeywordRankings => Some(Page::Keywords),
            Self::Unknown(_) => None,
        }
    }
}

impl fmt::Display for CardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
