//! End-to-end export: selection, deadline, workbook content, cart clearing.

use std::path::Path;
use std::time::{Duration, Instant};

use calamine::{Data, Reader, open_workbook_auto};
use pocket_api::ApiError;
use pocket_api::dashboard::{RisingProduct, Top1Bestseller, Top5Bestsellers};
use pocket_api::rankings::{CurrentRanking, LaneigeProducts, RankTrends};
use pocket_api::reviews::ReviewAnalysis;
use pocket_api::DataSource;
use pocket_config::ExportConfig;
use pocket_core::enums::{CategoryCode, Page, RankRange, RecordType};
use pocket_core::payloads::StatSnapshot;
use pocket_core::{NewInsight, widgets};
use pocket_export::{ExportError, ExportJob, ExportState};
use pocket_store::{InsightStore, MemoryStorage};
use pretty_assertions::assert_eq;

/// Backend that answers nothing: every live fetch hangs forever.
struct StalledSource;

impl DataSource for StalledSource {
    async fn top5_bestsellers(&self, _month: &str) -> Result<Top5Bestsellers, ApiError> {
        std::future::pending().await
    }

    async fn top1_bestseller(&self, _month: &str) -> Result<Top1Bestseller, ApiError> {
        std::future::pending().await
    }

    async fn rising_product(&self) -> Result<RisingProduct, ApiError> {
        std::future::pending().await
    }

    async fn current_ranking(&self, _category: CategoryCode) -> Result<CurrentRanking, ApiError> {
        std::future::pending().await
    }

    async fn laneige_products(&self) -> Result<LaneigeProducts, ApiError> {
        std::future::pending().await
    }

    async fn rank_trends(&self, _id: u64, _range: RankRange) -> Result<RankTrends, ApiError> {
        std::future::pending().await
    }

    async fn review_analysis(&self, _id: u64) -> Result<ReviewAnalysis, ApiError> {
        std::future::pending().await
    }
}

fn config(dir: &Path, deadline_ms: u64) -> ExportConfig {
    ExportConfig {
        warmup_ms: 0,
        deadline_ms,
        output_dir: dir.display().to_string(),
        ..ExportConfig::default()
    }
}

fn stat_sales() -> NewInsight {
    widgets::stat_sales(&StatSnapshot {
        value: Some("21,400개".into()),
        change: Some("+12.5%".into()),
        trend: None,
    })
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.clone(),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        _ => String::new(),
    }
}

#[tokio::test]
async fn snapshot_export_writes_workbook_and_clears_cart() {
    let tmp = tempfile::tempdir().unwrap();
    let mut store = InsightStore::open(MemoryStorage::new(), "cart");
    let stat_id = store.add(stat_sales());
    let unknown_id = store.add(NewInsight::new(
        "review-product-selection",
        RecordType::Insight,
        Page::Review,
        "제품 선택",
    ));
    assert!(store.is_present("dashboard-stat-sales"));

    let mut job = ExportJob::new(config(tmp.path(), 5_000));
    let path = job
        .run(&mut store, &[unknown_id, stat_id], &StalledSource)
        .await
        .unwrap();

    assert_eq!(job.state(), &ExportState::Done(path.clone()));
    assert!(store.is_empty());

    let name = path.file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("LANEIGE_Insights_"));
    assert!(name.ends_with(".xlsx"));

    let mut workbook = open_workbook_auto(&path).unwrap();
    assert_eq!(
        workbook.sheet_names(),
        vec!["Summary".to_string(), "Card_1".to_string(), "Card_2".to_string()]
    );

    let summary = workbook.worksheet_range("Summary").unwrap();
    assert_eq!(summary.get_value((2, 1)), Some(&Data::Float(2.0)));
    // Store order, not selection order.
    assert_eq!(
        summary.get_value((5, 2)).map(cell_text).as_deref(),
        Some("지난 달 총 판매량")
    );

    let stat: Vec<Vec<String>> = workbook
        .worksheet_range("Card_1")
        .unwrap()
        .rows()
        .map(|row| row.iter().map(cell_text).collect())
        .collect();
    assert!(stat.contains(&vec!["값".to_string(), "21,400개".to_string()]));

    let unknown = workbook.worksheet_range("Card_2").unwrap();
    assert_eq!(unknown.height(), 2);
    assert_eq!(
        unknown.get_value((1, 0)).map(cell_text).as_deref(),
        Some("지원하지 않는 카드")
    );
}

#[tokio::test]
async fn stalled_refetch_times_out_and_keeps_cart() {
    let tmp = tempfile::tempdir().unwrap();
    let mut store = InsightStore::open(MemoryStorage::new(), "cart");
    let ranking_id = store.add(widgets::ranking_table(CategoryCode::LipCare));
    store.add(stat_sales());
    let before = store.records().to_vec();

    let mut job = ExportJob::new(config(tmp.path(), 100));
    let started = Instant::now();
    let err = job
        .run(&mut store, &[ranking_id], &StalledSource)
        .await
        .unwrap_err();

    assert!(matches!(err, ExportError::TimedOut(d) if d == Duration::from_millis(100)));
    assert!(started.elapsed() >= Duration::from_millis(100));
    assert!(matches!(job.state(), ExportState::TimedOut(_)));
    assert_eq!(store.records(), before.as_slice());
    assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 0);

    job.acknowledge();
    assert_eq!(job.state(), &ExportState::Idle);
}

#[tokio::test]
async fn empty_selection_is_rejected_while_idle() {
    let tmp = tempfile::tempdir().unwrap();
    let mut store = InsightStore::open(MemoryStorage::new(), "cart");
    store.add(stat_sales());

    let mut job = ExportJob::new(config(tmp.path(), 1_000));
    let err = job.run(&mut store, &[], &StalledSource).await.unwrap_err();
    assert!(matches!(err, ExportError::NothingSelected));
    assert_eq!(job.state(), &ExportState::Idle);

    let err = job
        .run(&mut store, &["ins-gone-0000".to_string()], &StalledSource)
        .await
        .unwrap_err();
    assert!(matches!(err, ExportError::NothingSelected));
    assert_eq!(store.len(), 1);
}
