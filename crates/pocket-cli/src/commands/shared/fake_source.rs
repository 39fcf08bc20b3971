//! Backend stand-in answering the rank-trend endpoints from fixtures.

use pocket_api::dashboard::{RisingProduct, Top1Bestseller, Top5Bestsellers};
use pocket_api::rankings::{
    CurrentRanking, LaneigeProduct, LaneigeProducts, RankTrendItem, RankTrends,
};
use pocket_api::reviews::ReviewAnalysis;
use pocket_api::{ApiError, DataSource};
use pocket_core::enums::{CategoryCode, RankRange};

fn unavailable<T>(endpoint: &str) -> Result<T, ApiError> {
    Err(ApiError::Api {
        status: 503,
        message: format!("{endpoint} unavailable"),
    })
}

pub struct FakeSource;

impl DataSource for FakeSource {
    async fn top5_bestsellers(&self, _month: &str) -> Result<Top5Bestsellers, ApiError> {
        unavailable("top5")
    }

    async fn top1_bestseller(&self, _month: &str) -> Result<Top1Bestseller, ApiError> {
        unavailable("top1")
    }

    async fn rising_product(&self) -> Result<RisingProduct, ApiError> {
        unavailable("rising")
    }

    async fn current_ranking(&self, _category: CategoryCode) -> Result<CurrentRanking, ApiError> {
        unavailable("ranking")
    }

    async fn laneige_products(&self) -> Result<LaneigeProducts, ApiError> {
        Ok(LaneigeProducts {
            snapshot_time: "2025-02-01T09:00:00".into(),
            items: vec![LaneigeProduct {
                product_id: 11,
                image_url: None,
                product_name: "LANEIGE Lip Sleeping Mask".into(),
                style: Some("Berry".into()),
                rank_1: Some(12),
                rank_2: Some(1),
                rank_1_category: Some("Beauty & Personal Care".into()),
                rank_2_category: Some("Lip Balms".into()),
            }],
        })
    }

    async fn rank_trends(&self, product_id: u64, range: RankRange) -> Result<RankTrends, ApiError> {
        Ok(RankTrends {
            product_id,
            range,
            items: vec![RankTrendItem {
                bucket: "2025-01-27".into(),
                rank1: Some(12),
                rank1_category: Some("Beauty & Personal Care".into()),
                rank2: Some(1),
                rank2_category: Some("Lip Balms".into()),
            }],
        })
    }

    async fn review_analysis(&self, _product_id: u64) -> Result<ReviewAnalysis, ApiError> {
        unavailable("review")
    }
}
