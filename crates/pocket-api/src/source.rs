//! The read-side seam between live widgets and the backend.
//!
//! Export and chat re-fetch live insights through [`DataSource`] rather than
//! through [`ApiClient`] directly, so tests can substitute a fake that
//! answers from fixtures or never answers at all.

use pocket_core::enums::{CategoryCode, RankRange};

use crate::{
    ApiClient,
    dashboard::{RisingProduct, Top1Bestseller, Top5Bestsellers},
    error::ApiError,
    rankings::{CurrentRanking, LaneigeProducts, RankTrends},
    reviews::ReviewAnalysis,
};

/// Backend reads needed to rebuild live insights.
#[allow(async_fn_in_trait)]
pub trait DataSource {
    async fn top5_bestsellers(&self, month: &str) -> Result<Top5Bestsellers, ApiError>;

    async fn top1_bestseller(&self, month: &str) -> Result<Top1Bestseller, ApiError>;

    async fn rising_product(&self) -> Result<RisingProduct, ApiError>;

    async fn current_ranking(&self, category: CategoryCode) -> Result<CurrentRanking, ApiError>;

    async fn laneige_products(&self) -> Result<LaneigeProducts, ApiError>;

    async fn rank_trends(&self, product_id: u64, range: RankRange) -> Result<RankTrends, ApiError>;

    async fn review_analysis(&self, product_id: u64) -> Result<ReviewAnalysis, ApiError>;
}

impl DataSource for ApiClient {
    async fn top5_bestsellers(&self, month: &str) -> Result<Top5Bestsellers, ApiError> {
        Self::top5_bestsellers(self, month).await
    }

    async fn top1_bestseller(&self, month: &str) -> Result<Top1Bestseller, ApiError> {
        Self::top1_bestseller(self, month).await
    }

    async fn rising_product(&self) -> Result<RisingProduct, ApiError> {
        Self::rising_product(self).await
    }

    async fn current_ranking(&self, category: CategoryCode) -> Result<CurrentRanking, ApiError> {
        Self::current_ranking(self, category).await
    }

    async fn laneige_products(&self) -> Result<LaneigeProducts, ApiError> {
        Self::laneige_products(self).await
    }

    async fn rank_trends(&self, product_id: u64, range: RankRange) -> Result<RankTrends, ApiError> {
        Self::rank_trends(self, product_id, range).await
    }

    async fn review_analysis(&self, product_id: u64) -> Result<ReviewAnalysis, ApiError> {
        Self::review_analysis(self, product_id).await
    }
}
