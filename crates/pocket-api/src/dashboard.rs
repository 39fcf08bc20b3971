//! Dashboard endpoints: monthly best sellers and the rising product.

use pocket_core::payloads::{ProductDetailRow, Top5Row};
use serde::{Deserialize, Serialize};

use crate::names::normalize_product_name;
use crate::{ApiClient, error::ApiError, http::parse_envelope};

/// One best seller as returned by the top-5 endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestSellerItem {
    pub rank: u32,
    pub product_id: u64,
    #[serde(default)]
    pub image_url: Option<String>,
    pub product_name: String,
    pub last_month_sales: u64,
    pub rating: f64,
    pub review_count: u64,
    #[serde(default)]
    pub prev_month_rank: Option<u32>,
    pub rank_change: i64,
}

/// `GET /api/dashboard/bestsellers/top5` result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Top5Bestsellers {
    pub month: String,
    pub snapshot_time: String,
    pub items: Vec<BestSellerItem>,
}

impl Top5Bestsellers {
    /// Rows of the top-5 table widget.
    #[must_use]
    pub fn to_top5_rows(&self) -> Vec<Top5Row> {
        self.items
            .iter()
            .map(|item| Top5Row {
                rank: Some(item.rank),
                name: Some(normalize_product_name(&item.product_name)),
                sales: Some(item.last_month_sales),
                rating: Some(item.rating),
                reviews: Some(item.review_count),
            })
            .collect()
    }

    /// Rows of the top-5 detail widget.
    #[must_use]
    pub fn to_product_detail_rows(&self) -> Vec<ProductDetailRow> {
        self.items
            .iter()
            .map(|item| ProductDetailRow {
                rank: Some(item.rank),
                name: Some(normalize_product_name(&item.product_name)),
                sales: Some(item.last_month_sales),
                prev_rank: item.prev_month_rank,
                rank_change: Some(item.rank_change),
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Top1Item {
    pub rank: u32,
    pub product_id: u64,
    #[serde(default)]
    pub image_url: Option<String>,
    pub product_name: String,
    #[serde(default)]
    pub last_month_sales: Option<u64>,
    pub rating: f64,
    pub review_count: u64,
    #[serde(default)]
    pub rank_change: Option<i64>,
}

/// `GET /api/dashboard/bestsellers/top1` result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Top1Bestseller {
    pub month: String,
    #[serde(default)]
    pub snapshot_time: Option<String>,
    pub item: Top1Item,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RisingItem {
    #[serde(default)]
    pub image_url: Option<String>,
    pub product_name: String,
    pub rating: f64,
    pub review_count: u64,
    pub rank_change: i64,
    /// Growth label as the backend formats it, e.g. `"+38%"`.
    pub growth_rate: String,
}

/// `GET /api/dashboard/rising` result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RisingProduct {
    #[serde(default)]
    pub snapshot_time: Option<String>,
    pub item: RisingItem,
}

impl ApiClient {
    /// Best-seller top 5 for `month` (`YYYY-MM`).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the backend returns a
    /// non-success status, or the body does not match the schema.
    pub async fn top5_bestsellers(&self, month: &str) -> Result<Top5Bestsellers, ApiError> {
        let path = format!(
            "/api/dashboard/bestsellers/top5?month={}",
            urlencoding::encode(month)
        );
        let body = self.get_text("bestsellers/top5", &path).await?;
        parse_envelope("bestsellers/top5", &body)
    }

    /// Best seller of `month`.
    ///
    /// # Errors
    ///
    /// See [`Self::top5_bestsellers`].
    pub async fn top1_bestseller(&self, month: &str) -> Result<Top1Bestseller, ApiError> {
        let path = format!(
            "/api/dashboard/bestsellers/top1?month={}",
            urlencoding::encode(month)
        );
        let body = self.get_text("bestsellers/top1", &path).await?;
        parse_envelope("bestsellers/top1", &body)
    }

    /// Current fastest-rising product.
    ///
    /// # Errors
    ///
    /// See [`Self::top5_bestsellers`].
    pub async fn rising_product(&self) -> Result<RisingProduct, ApiError> {
        let body = self.get_text("dashboard/rising", "/api/dashboard/rising").await?;
        parse_envelope("dashboard/rising", &body)
    }
}
