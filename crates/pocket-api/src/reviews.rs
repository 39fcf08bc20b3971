//! Per-product review analysis. This endpoint returns its object at top
//! level, without the `result` envelope.

use pocket_core::payloads::{
    FeedbackSnapshot, KeywordInsightRow, RatingShare, ReputationSnapshot, SentimentSnapshot,
};
use serde::{Deserialize, Serialize};

use crate::{ApiClient, error::ApiError, http::parse_body};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomersSay {
    pub review_count: u64,
    pub current_text: String,
    #[serde(default)]
    pub highlight: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reputation {
    pub score: f64,
    pub rating: f64,
    pub review_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    pub positive_pct: f64,
    pub negative_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingDistItem {
    pub star: u8,
    pub pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordInsight {
    pub aspect_name: String,
    pub mention_total: u64,
    pub score: f64,
    pub summary: String,
    #[serde(default)]
    pub mention_positive: u64,
    #[serde(default)]
    pub mention_negative: u64,
}

/// `GET /api/laneige/products/{id}/review-analysis` body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewAnalysis {
    pub product_id: u64,
    pub snapshot_time: String,
    pub customers_say: CustomersSay,
    pub reputation: Reputation,
    pub sentiment: Sentiment,
    pub rating_distribution: Vec<RatingDistItem>,
    pub keyword_insights: Vec<KeywordInsight>,
}

impl ReviewAnalysis {
    #[must_use]
    pub fn feedback(&self) -> FeedbackSnapshot {
        FeedbackSnapshot {
            positive_pct: Some(self.sentiment.positive_pct),
            customers_say: Some(self.customers_say.current_text.clone()),
            review_count: Some(self.reputation.review_count),
            rating: Some(self.reputation.rating),
        }
    }

    #[must_use]
    pub const fn sentiment(&self) -> SentimentSnapshot {
        SentimentSnapshot {
            positive_pct: Some(self.sentiment.positive_pct),
            negative_pct: Some(self.sentiment.negative_pct),
        }
    }

    #[must_use]
    pub const fn reputation(&self) -> ReputationSnapshot {
        ReputationSnapshot {
            score: Some(self.reputation.score),
            rating: Some(self.reputation.rating),
            review_count: Some(self.reputation.review_count),
        }
    }

    #[must_use]
    pub fn rating_shares(&self) -> Vec<RatingShare> {
        self.rating_distribution
            .iter()
            .map(|r| RatingShare {
                star: r.star,
                pct: Some(r.pct),
            })
            .collect()
    }

    #[must_use]
    pub fn keyword_rows(&self) -> Vec<KeywordInsightRow> {
        self.keyword_insights
            .iter()
            .map(|k| KeywordInsightRow {
                aspect_name: Some(k.aspect_name.clone()),
                mention_total: Some(k.mention_total),
                score: Some(k.score),
                summary: Some(k.summary.clone()),
                mention_positive: Some(k.mention_positive),
                mention_negative: Some(k.mention_negative),
            })
            .collect()
    }
}

impl ApiClient {
    /// Review analysis for one product.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the backend returns a
    /// non-success status, or the body does not match the schema.
    pub async fn review_analysis(&self, product_id: u64) -> Result<ReviewAnalysis, ApiError> {
        let path = format!("/api/laneige/products/{product_id}/review-analysis");
        let body = self.get_text("review-analysis", &path).await?;
        parse_body("review-analysis", &body)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    pub(crate) const REVIEW_FIXTURE: &str = r#"{
        "product_id": 11,
        "snapshot_time": "2025-02-01T09:00:00",
        "customers_say": {
            "review_count": 35210,
            "current_text": "Customers love the hydration and scent.",
            "highlight": "hydration",
            "updated_at": "2025-02-01"
        },
        "reputation": {"score": 87, "rating": 4.68, "review_count": 35210},
        "sentiment": {"positive_pct": 82, "negative_pct": 9},
        "rating_distribution": [
            {"star": 5, "pct": 71},
            {"star": 4, "pct": 15},
            {"star": 1, "pct": 4}
        ],
        "keyword_insights": [
            {
                "aspect_name": "Hydration",
                "mention_total": 812,
                "score": 91,
                "summary": "Lasting moisture overnight.",
                "mention_positive": 760,
                "mention_negative": 52
            }
        ]
    }"#;

    #[test]
    fn parse_review_analysis_without_envelope() {
        let data: ReviewAnalysis = parse_body("t", REVIEW_FIXTURE).unwrap();
        assert_eq!(data.product_id, 11);
        assert_eq!(data.rating_distribution.len(), 3);
        assert_eq!(data.keyword_insights[0].mention_total, 812);
    }

    #[test]
    fn maps_widget_snapshots() {
        let data: ReviewAnalysis = parse_body("t", REVIEW_FIXTURE).unwrap();
        assert_eq!(data.sentiment().positive_pct, Some(82.0));
        assert_eq!(data.reputation().review_count, Some(35_210));
        assert_eq!(
            data.feedback().customers_say.as_deref(),
            Some("Customers love the hydration and scent.")
        );
        assert_eq!(data.rating_shares()[0].star, 5);
        assert_eq!(data.keyword_rows()[0].aspect_name.as_deref(), Some("Hydration"));
    }

    #[test]
    fn enveloped_body_is_rejected() {
        let body = format!(r#"{{"result": {REVIEW_FIXTURE}}}"#);
        assert!(parse_body::<ReviewAnalysis>("review-analysis", &body).is_err());
    }
}
