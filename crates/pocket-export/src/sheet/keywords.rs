//! Keyword-analysis cards.

use pocket_core::InsightRecord;
use pocket_core::payloads::KeywordRankRow;
use pocket_core::widgets::{TITLE_KEYWORD_DISTRIBUTION, TITLE_KEYWORD_RANKINGS};
use serde_json::{Map, Value};

use super::snapshot;
use crate::cell::{Cell, Rows, percent};
use crate::error::ExportError;
use crate::row;

/// One row per category, in stored order.
pub fn category_distribution(record: &InsightRecord) -> Result<Rows, ExportError> {
    let counts: Map<String, Value> = snapshot(record)?;
    let mut rows = vec![
        row![TITLE_KEYWORD_DISTRIBUTION],
        row![],
        row!["카테고리", "언급 수"],
    ];
    rows.extend(
        counts
            .iter()
            .map(|(category, count)| row![category, Cell::from_json(count)]),
    );
    Ok(rows)
}

pub fn rankings(record: &InsightRecord) -> Result<Rows, ExportError> {
    let items: Vec<KeywordRankRow> = snapshot(record)?;
    let mut rows = vec![
        row![TITLE_KEYWORD_RANKINGS],
        row![],
        row!["순위", "키워드", "언급 수", "트렌드", "변화율", "감정", "카테고리"],
    ];
    rows.extend(items.into_iter().map(|k| {
        row![
            Cell::or_dash(k.rank),
            Cell::or_dash(k.keyword),
            Cell::or_dash(k.mentions),
            Cell::or_dash(k.trend),
            percent(k.change),
            Cell::or_dash(k.sentiment),
            Cell::or_dash(k.category),
        ]
    }));
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use pocket_core::payloads::KeywordRankRow;
    use pocket_core::widgets;
    use pretty_assertions::assert_eq;

    use super::super::tests::{FixtureSource, build, record, texts};

    #[test]
    fn distribution_keeps_category_order() {
        let new = widgets::keyword_category_distribution(&[
            ("보습".into(), 1204),
            ("향".into(), 860),
            ("가격".into(), 312),
        ]);
        let rows = texts(&build(&FixtureSource::default(), &record(new)).unwrap());
        assert_eq!(
            rows,
            vec![
                vec!["카테고리별 키워드 분포"],
                vec![],
                vec!["카테고리", "언급 수"],
                vec!["보습", "1204"],
                vec!["향", "860"],
                vec!["가격", "312"],
            ]
        );
    }

    #[test]
    fn rankings_render_change_as_percent() {
        let new = widgets::keyword_rankings(&[KeywordRankRow {
            rank: Some(1),
            keyword: Some("hydrating".into()),
            mentions: Some(812),
            trend: Some("up".into()),
            change: Some(12.5),
            sentiment: Some("positive".into()),
            category: Some("보습".into()),
        }]);
        let rows = texts(&build(&FixtureSource::default(), &record(new)).unwrap());
        assert_eq!(
            rows[3],
            vec!["1", "hydrating", "812", "up", "12.5%", "positive", "보습"]
        );
    }

    #[test]
    fn distribution_array_payload_is_rejected() {
        let mut new = widgets::keyword_category_distribution(&[]);
        new.data = serde_json::json!([1, 2]);
        assert!(build(&FixtureSource::default(), &record(new)).is_err());
    }
}
