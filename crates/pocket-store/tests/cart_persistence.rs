//! Cart persistence through real files: reopen, corrupt content, removal.

use pocket_config::StorageConfig;
use pocket_core::enums::{CategoryCode, Period};
use pocket_core::payloads::{RankChartPoint, StatSnapshot};
use pocket_core::widgets;
use pocket_store::{FileStorage, InsightStore, KeyValueStorage, StorageError};
use pretty_assertions::assert_eq;
use rstest::rstest;

const KEY: &str = "insight-pocket-cart-v1";

fn config(dir: &std::path::Path) -> StorageConfig {
    StorageConfig {
        dir: dir.join("storage").display().to_string(),
        cart_key: KEY.to_string(),
    }
}

#[test]
fn reopened_cart_keeps_identity_and_millisecond_timestamps() {
    let tmp = tempfile::tempdir().unwrap();
    let config = config(tmp.path());

    let original = {
        let mut store = InsightStore::open_configured(&config).unwrap();
        store.add(widgets::stat_sales(&StatSnapshot {
            value: Some("21,400개".into()),
            change: Some("+12.5%".into()),
            trend: None,
        }));
        store.add(widgets::ranking_table(CategoryCode::LipCare));
        store.add(widgets::rank_trend_chart(
            11,
            "Lip Sleeping Mask",
            Period::Monthly,
            &[RankChartPoint::default()],
        ));
        store.records().to_vec()
    };

    let reopened = InsightStore::open_configured(&config).unwrap();
    assert_eq!(reopened.len(), 3);
    for (before, after) in original.iter().zip(reopened.records()) {
        assert_eq!(after.id, before.id);
        assert_eq!(after.unique_key, before.unique_key);
        assert_eq!(after.title, before.title);
        assert_eq!(
            after.timestamp.timestamp_millis(),
            before.timestamp.timestamp_millis()
        );
        assert_eq!(after.meta, before.meta);
    }
}

#[rstest]
#[case("this is not json")]
#[case("{\"records\": []}")]
#[case("[{\"id\": 7}]")]
fn corrupt_cart_rehydrates_empty(#[case] content: &str) {
    let tmp = tempfile::tempdir().unwrap();
    let config = config(tmp.path());
    let mut storage = FileStorage::new(config.dir_path()).unwrap();
    storage.set(KEY, content).unwrap();

    let store = InsightStore::open_configured(&config).unwrap();
    assert!(store.is_empty());
}

#[test]
fn removal_by_unique_key_survives_reopen() {
    let tmp = tempfile::tempdir().unwrap();
    let config = config(tmp.path());

    let mut store = InsightStore::open_configured(&config).unwrap();
    store.add(widgets::ranking_table(CategoryCode::LipCare));
    store.add(widgets::ranking_table(CategoryCode::SkinCare));
    store.remove_by_unique_key("ranking-table-lip_care");
    drop(store);

    let reopened = InsightStore::open_configured(&config).unwrap();
    assert!(!reopened.is_present("ranking-table-lip_care"));
    assert!(reopened.is_present("ranking-table-skin_care"));
}

#[rstest]
#[case("pocket/cart")]
#[case("../cart")]
#[case("")]
fn unusable_cart_key_fails_at_open(#[case] cart_key: &str) {
    let tmp = tempfile::tempdir().unwrap();
    let config = StorageConfig {
        cart_key: cart_key.to_string(),
        ..config(tmp.path())
    };

    let result = InsightStore::open_configured(&config);
    assert!(matches!(result, Err(StorageError::InvalidKey(key)) if key == cart_key));
}
