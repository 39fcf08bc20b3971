//! Snapshot payload shapes stored in `InsightRecord::data`.
//!
//! Widgets snapshot what they render at add time. Every field is optional:
//! a missing field renders as `-` in exports rather than failing the card.
//! A payload of the wrong JSON shape (object where rows are expected, string
//! where a number is expected) is still a decode error.

use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::enums::Trend;

/// Decode a record payload, treating `null` as the type's default.
///
/// # Errors
///
/// Returns the serde error when `data` is present but not shaped like `T`.
pub fn from_data<T: DeserializeOwned + Default>(data: &Value) -> serde_json::Result<T> {
    if data.is_null() {
        return Ok(T::default());
    }
    T::deserialize(data)
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

/// KPI stat card: `{ value: "21,400개", change: "+12.5%", trend: "up" }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StatSnapshot {
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub change: Option<String>,
    #[serde(default)]
    pub trend: Option<Trend>,
}

/// One row of the monthly sales chart.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SalesPoint {
    pub date: String,
    pub sales: f64,
}

/// Row of the best-seller top-5 table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Top5Row {
    #[serde(default)]
    pub rank: Option<u32>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub sales: Option<u64>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub reviews: Option<u64>,
}

/// Row of the top-5 detail table (previous rank and change).
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetailRow {
    #[serde(default)]
    pub rank: Option<u32>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub sales: Option<u64>,
    #[serde(default)]
    pub prev_rank: Option<u32>,
    #[serde(default, alias = "rank_change")]
    pub rank_change: Option<i64>,
}

// ---------------------------------------------------------------------------
// Ranking
// ---------------------------------------------------------------------------

/// Row of the current Amazon bestseller ranking.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RankingRow {
    #[serde(default)]
    pub rank: Option<u32>,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub is_laneige: Option<bool>,
    #[serde(default)]
    pub prev_rank: Option<u32>,
    #[serde(default)]
    pub rank_change: Option<i64>,
}

impl RankingRow {
    /// Brand column: the first word of the product name.
    #[must_use]
    pub fn brand(&self) -> Option<&str> {
        self.product_name
            .as_deref()
            .and_then(|name| name.split(' ').next())
            .filter(|brand| !brand.is_empty())
    }
}

/// One bucket of the rank-trend chart.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RankChartPoint {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub overall_rank: Option<u32>,
    #[serde(default)]
    pub overall_category: Option<String>,
    #[serde(default)]
    pub category_rank: Option<u32>,
    #[serde(default)]
    pub category_category: Option<String>,
}

// ---------------------------------------------------------------------------
// Review analysis
// ---------------------------------------------------------------------------

/// "고객들이 말합니다" card.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct FeedbackSnapshot {
    #[serde(default)]
    pub positive_pct: Option<f64>,
    #[serde(default)]
    pub customers_say: Option<String>,
    #[serde(default, alias = "count")]
    pub review_count: Option<u64>,
    #[serde(default)]
    pub rating: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SentimentSnapshot {
    #[serde(default)]
    pub positive_pct: Option<f64>,
    #[serde(default)]
    pub negative_pct: Option<f64>,
}

/// Reputation ("평점 지수") card.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ReputationSnapshot {
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub review_count: Option<u64>,
}

/// Share of reviews at one star level.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct RatingShare {
    pub star: u8,
    #[serde(default)]
    pub pct: Option<f64>,
}

/// AI keyword insight for one review aspect.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct KeywordInsightRow {
    #[serde(default)]
    pub aspect_name: Option<String>,
    #[serde(default)]
    pub mention_total: Option<u64>,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub mention_positive: Option<u64>,
    #[serde(default)]
    pub mention_negative: Option<u64>,
}

// ---------------------------------------------------------------------------
// Keywords
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct KeywordRankRow {
    #[serde(default)]
    pub rank: Option<u32>,
    #[serde(default)]
    pub keyword: Option<String>,
    #[serde(default)]
    pub mentions: Option<u64>,
    #[serde(default)]
    pub trend: Option<String>,
    /// Change rate in percent.
    #[serde(default)]
    pub change: Option<f64>,
    #[serde(default)]
    pub sentiment: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn null_payload_decodes_to_default() {
        let rows: Vec<Top5Row> = from_data(&Value::Null).unwrap();
        assert!(rows.is_empty());
        let stat: StatSnapshot = from_data(&Value::Null).unwrap();
        assert_eq!(stat, StatSnapshot::default());
    }

    #[test]
    fn wrong_shape_is_an_error() {
        assert!(from_data::<Vec<Top5Row>>(&json!({"rank": 1})).is_err());
        assert!(from_data::<StatSnapshot>(&json!({"trend": "sideways"})).is_err());
    }

    #[test]
    fn product_detail_accepts_both_change_spellings() {
        let rows: Vec<ProductDetailRow> = from_data(&json!([
            {"rank": 1, "name": "Lip Sleeping Mask", "sales": 1200, "prevRank": 2, "rankChange": 1},
            {"rank": 2, "name": "Water Bank", "rank_change": -1}
        ]))
        .unwrap();
        assert_eq!(rows[0].rank_change, Some(1));
        assert_eq!(rows[0].prev_rank, Some(2));
        assert_eq!(rows[1].rank_change, Some(-1));
        assert_eq!(rows[1].sales, None);
    }

    #[test]
    fn feedback_accepts_widget_count_field() {
        let fb: FeedbackSnapshot = from_data(&json!({"count": 1520, "rating": 4.6})).unwrap();
        assert_eq!(fb.review_count, Some(1520));
        assert_eq!(fb.positive_pct, None);
    }

    #[test]
    fn ranking_brand_is_first_word() {
        let row = RankingRow {
            product_name: Some("LANEIGE Lip Sleeping Mask".into()),
            ..RankingRow::default()
        };
        assert_eq!(row.brand(), Some("LANEIGE"));
        assert_eq!(RankingRow::default().brand(), None);
    }
}
