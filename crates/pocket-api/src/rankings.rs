//! Ranking endpoints: current Amazon bestseller ranking, the LANEIGE product
//! list, and per-product rank trends.

use pocket_core::enums::{CategoryCode, RankRange};
use pocket_core::payloads::{RankChartPoint, RankingRow};
use serde::{Deserialize, Serialize};

use crate::names::normalize_product_name;
use crate::{ApiClient, error::ApiError, http::parse_envelope};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingItem {
    pub rank: u32,
    pub product_name: String,
    pub is_laneige: bool,
    #[serde(default)]
    pub prev_rank: Option<u32>,
    pub rank_change: i64,
}

/// `GET /api/rankings/current` result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentRanking {
    pub category_id: u8,
    pub snapshot_time: String,
    pub items: Vec<RankingItem>,
}

impl CurrentRanking {
    #[must_use]
    pub fn to_rows(&self) -> Vec<RankingRow> {
        self.items
            .iter()
            .map(|item| RankingRow {
                rank: Some(item.rank),
                product_name: Some(item.product_name.clone()),
                is_laneige: Some(item.is_laneige),
                prev_rank: item.prev_rank,
                rank_change: Some(item.rank_change),
            })
            .collect()
    }
}

/// A tracked LANEIGE product with its two current category ranks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaneigeProduct {
    pub product_id: u64,
    #[serde(default)]
    pub image_url: Option<String>,
    pub product_name: String,
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub rank_1: Option<u32>,
    #[serde(default)]
    pub rank_2: Option<u32>,
    #[serde(default)]
    pub rank_1_category: Option<String>,
    #[serde(default)]
    pub rank_2_category: Option<String>,
}

impl LaneigeProduct {
    #[must_use]
    pub fn display_name(&self) -> String {
        normalize_product_name(&self.product_name)
    }
}

/// `GET /api/laneige/products` result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaneigeProducts {
    pub snapshot_time: String,
    pub items: Vec<LaneigeProduct>,
}

impl LaneigeProducts {
    #[must_use]
    pub fn find(&self, product_id: u64) -> Option<&LaneigeProduct> {
        self.items.iter().find(|p| p.product_id == product_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankTrendItem {
    /// Bucket label (day, week start, or month).
    pub bucket: String,
    #[serde(default)]
    pub rank1: Option<u32>,
    #[serde(default)]
    pub rank1_category: Option<String>,
    #[serde(default)]
    pub rank2: Option<u32>,
    #[serde(default)]
    pub rank2_category: Option<String>,
}

/// `GET /api/laneige/products/{id}/rank-trends` result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankTrends {
    pub product_id: u64,
    pub range: RankRange,
    pub items: Vec<RankTrendItem>,
}

impl RankTrends {
    /// Chart points: `rank1` is the overall category, `rank2` the narrower one.
    #[must_use]
    pub fn to_chart_points(&self) -> Vec<RankChartPoint> {
        self.items
            .iter()
            .map(|item| RankChartPoint {
                date: Some(item.bucket.clone()),
                overall_rank: item.rank1,
                overall_category: item.rank1_category.clone(),
                category_rank: item.rank2,
                category_category: item.rank2_category.clone(),
            })
            .collect()
    }
}

impl ApiClient {
    /// Current Amazon bestseller ranking for `category`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the backend returns a
    /// non-success status, or the body does not match the schema.
    pub async fn current_ranking(
        &self,
        category: CategoryCode,
    ) -> Result<CurrentRanking, ApiError> {
        let path = format!("/api/rankings/current?category={}", category.id());
        let body = self.get_text("rankings/current", &path).await?;
        parse_envelope("rankings/current", &body)
    }

    /// Tracked LANEIGE products.
    ///
    /// # Errors
    ///
    /// See [`Self::current_ranking`].
    pub async fn laneige_products(&self) -> Result<LaneigeProducts, ApiError> {
        let body = self.get_text("laneige/products", "/api/laneige/products").await?;
        parse_envelope("laneige/products", &body)
    }

    /// Rank history of one product over `range`.
    ///
    /// # Errors
    ///
    /// See [`Self::current_ranking`].
    pub async fn rank_trends(
        &self,
        product_id: u64,
        range: RankRange,
    ) -> Result<RankTrends, ApiError> {
        let path = format!(
            "/api/laneige/products/{product_id}/rank-trends?range={}",
            range.as_str()
        );
        let body = self.get_text("rank-trends", &path).await?;
        parse_envelope("rank-trends", &body)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const RANKING_FIXTURE: &str = r#"{
        "result": {
            "category_id": 2,
            "snapshot_time": "2025-02-01T09:00:00",
            "items": [
                {"rank": 1, "product_name": "LANEIGE Lip Sleeping Mask", "is_laneige": true, "prev_rank": 1, "rank_change": 0},
                {"rank": 2, "product_name": "Aquaphor Lip Repair", "is_laneige": false, "prev_rank": null, "rank_change": 3}
            ]
        }
    }"#;

    const PRODUCTS_FIXTURE: &str = r#"{
        "result": {
            "snapshot_time": "2025-02-01T09:00:00",
            "items": [
                {
                    "product_id": 11,
                    "image_url": "https://m.media-amazon.com/images/I/61.jpg",
                    "product_name": "LANEIGE Lip Sleeping Mask: Berry",
                    "style": "Berry",
                    "rank_1": 12,
                    "rank_2": 1,
                    "rank_1_category": "Beauty & Personal Care",
                    "rank_2_category": "Lip Balms"
                }
            ]
        }
    }"#;

    const TRENDS_FIXTURE: &str = r#"{
        "result": {
            "product_id": 11,
            "range": "WEEK",
            "items": [
                {"bucket": "2025-01-27", "rank1": 12, "rank1_category": "Beauty & Personal Care", "rank2": 1, "rank2_category": "Lip Balms"},
                {"bucket": "2025-01-28", "rank1": null, "rank1_category": null, "rank2": null, "rank2_category": null}
            ]
        }
    }"#;

    #[test]
    fn parse_current_ranking() {
        let data: CurrentRanking = parse_envelope("t", RANKING_FIXTURE).unwrap();
        assert_eq!(data.category_id, 2);
        let rows = data.to_rows();
        assert_eq!(rows[1].prev_rank, None);
        assert_eq!(rows[1].rank_change, Some(3));
        assert_eq!(rows[0].is_laneige, Some(true));
    }

    #[test]
    fn parse_products_and_find() {
        let data: LaneigeProducts = parse_envelope("t", PRODUCTS_FIXTURE).unwrap();
        let product = data.find(11).unwrap();
        assert_eq!(product.display_name(), "Lip Sleeping Mask");
        assert_eq!(product.rank_2, Some(1));
        assert!(data.find(99).is_none());
    }

    #[test]
    fn trends_map_to_chart_points() {
        let data: RankTrends = parse_envelope("t", TRENDS_FIXTURE).unwrap();
        assert_eq!(data.range, RankRange::Week);
        let points = data.to_chart_points();
        assert_eq!(
            points[0],
            RankChartPoint {
                date: Some("2025-01-27".into()),
                overall_rank: Some(12),
                overall_category: Some("Beauty & Personal Care".into()),
                category_rank: Some(1),
                category_category: Some("Lip Balms".into()),
            }
        );
        assert_eq!(points[1].overall_rank, None);
    }

    #[test]
    fn unknown_range_is_a_parse_error() {
        let body = r#"{"result":{"product_id":1,"range":"DECADE","items":[]}}"#;
        assert!(parse_envelope::<RankTrends>("rank-trends", body).is_err());
    }
}
