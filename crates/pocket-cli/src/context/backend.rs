//! The backend as the CLI sees it: a client when `[api]` is configured,
//! otherwise a source whose every fetch fails with the configuration hint.
//! Snapshot-only exports and cart commands still work without a backend.

use pocket_api::dashboard::{RisingProduct, Top1Bestseller, Top5Bestsellers};
use pocket_api::rankings::{CurrentRanking, LaneigeProducts, RankTrends};
use pocket_api::reviews::ReviewAnalysis;
use pocket_api::{ApiClient, ApiError, DataSource};
use pocket_config::ApiConfig;
use pocket_core::enums::{CategoryCode, RankRange};

pub struct Backend {
    client: Option<ApiClient>,
}

impl Backend {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = if config.is_configured() {
            Some(ApiClient::new(config)?)
        } else {
            None
        };
        Ok(Self { client })
    }

    pub fn client(&self) -> Result<&ApiClient, ApiError> {
        self.client
            .as_ref()
            .ok_or_else(|| ApiConfig::not_configured().into())
    }
}

impl DataSource for Backend {
    async fn top5_bestsellers(&self, month: &str) -> Result<Top5Bestsellers, ApiError> {
        self.client()?.top5_bestsellers(month).await
    }

    async fn top1_bestseller(&self, month: &str) -> Result<Top1Bestseller, ApiError> {
        self.client()?.top1_bestseller(month).await
    }

    async fn rising_product(&self) -> Result<RisingProduct, ApiError> {
        self.client()?.rising_product().await
    }

    async fn current_ranking(&self, category: CategoryCode) -> Result<CurrentRanking, ApiError> {
        self.client()?.current_ranking(category).await
    }

    async fn laneige_products(&self) -> Result<LaneigeProducts, ApiError> {
        self.client()?.laneige_products().await
    }

    async fn rank_trends(&self, product_id: u64, range: RankRange) -> Result<RankTrends, ApiError> {
        self.client()?.rank_trends(product_id, range).await
    }

    async fn review_analysis(&self, product_id: u64) -> Result<ReviewAnalysis, ApiError> {
        self.client()?.review_analysis(product_id).await
    }
}
