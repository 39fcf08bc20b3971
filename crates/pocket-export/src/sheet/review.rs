//! Review-analysis cards. Each re-fetches the product's analysis when the
//! meta carries a product id and falls back to the stored snapshot otherwise.

use pocket_api::DataSource;
use pocket_api::reviews::ReviewAnalysis;
use pocket_core::InsightRecord;
use pocket_core::payloads::{
    FeedbackSnapshot, KeywordInsightRow, RatingShare, ReputationSnapshot, SentimentSnapshot,
};
use serde::de::DeserializeOwned;

use super::snapshot;
use crate::cell::{Cell, Rows, percent, thousands};
use crate::error::ExportError;
use crate::row;

async fn load<S, T, F>(source: &S, record: &InsightRecord, live: F) -> Result<T, ExportError>
where
    S: DataSource,
    T: DeserializeOwned + Default,
    F: FnOnce(&ReviewAnalysis) -> T,
{
    match record.product_id() {
        Some(product_id) => Ok(live(&source.review_analysis(product_id).await?)),
        None => snapshot(record),
    }
}

fn header(record: &InsightRecord) -> Rows {
    vec![row![record.title.as_str()], row![]]
}

pub async fn feedback<S: DataSource>(
    source: &S,
    record: &InsightRecord,
) -> Result<Rows, ExportError> {
    let data: FeedbackSnapshot = load(source, record, ReviewAnalysis::feedback).await?;
    let mut rows = header(record);
    rows.extend([
        row!["긍정 반응 비율", percent(data.positive_pct)],
        row![],
        row!["고객 리뷰 요약"],
        row![Cell::or_dash(data.customers_say)],
    ]);
    Ok(rows)
}

pub async fn sentiment<S: DataSource>(
    source: &S,
    record: &InsightRecord,
) -> Result<Rows, ExportError> {
    let data: SentimentSnapshot = load(source, record, ReviewAnalysis::sentiment).await?;
    let mut rows = header(record);
    rows.extend([
        row!["구분", "비율(%)"],
        row!["긍정", Cell::or_dash(data.positive_pct)],
        row!["부정", Cell::or_dash(data.negative_pct)],
    ]);
    Ok(rows)
}

pub async fn rating_index<S: DataSource>(
    source: &S,
    record: &InsightRecord,
) -> Result<Rows, ExportError> {
    let data: ReputationSnapshot = load(source, record, ReviewAnalysis::reputation).await?;
    let mut rows = header(record);
    rows.extend([
        row!["신뢰도 점수", Cell::or_dash(data.score)],
        row!["평점", Cell::or_dash(data.rating)],
        row!["리뷰 개수", Cell::or_dash(data.review_count.map(thousands))],
    ]);
    Ok(rows)
}

pub async fn rating_distribution<S: DataSource>(
    source: &S,
    record: &InsightRecord,
) -> Result<Rows, ExportError> {
    let shares: Vec<RatingShare> = load(source, record, ReviewAnalysis::rating_shares).await?;
    let mut rows = header(record);
    rows.push(row!["별점", "비율(%)"]);
    rows.extend(
        shares
            .into_iter()
            .map(|s| row![format!("{}점", s.star), Cell::or_dash(s.pct)]),
    );
    Ok(rows)
}

pub async fn keyword_insights<S: DataSource>(
    source: &S,
    record: &InsightRecord,
) -> Result<Rows, ExportError> {
    let insights: Vec<KeywordInsightRow> =
        load(source, record, ReviewAnalysis::keyword_rows).await?;
    let mut rows = header(record);
    rows.push(row!["키워드", "언급 수", "점수", "AI 해석"]);
    rows.extend(insights.into_iter().map(|k| {
        row![
            Cell::or_dash(k.aspect_name),
            Cell::or_dash(k.mention_total),
            Cell::or_dash(k.score),
            Cell::or_dash(k.summary),
        ]
    }));
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use pocket_core::payloads::{FeedbackSnapshot, ReputationSnapshot, SentimentSnapshot};
    use pocket_core::widgets;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::super::tests::{FixtureSource, build, record, texts};

    fn review_source() -> FixtureSource {
        FixtureSource {
            review: Some(json!({
                "product_id": 11,
                "snapshot_time": "2025-02-01T09:00:00",
                "customers_say": {"review_count": 35210, "current_text": "Customers love the scent."},
                "reputation": {"score": 87, "rating": 4.68, "review_count": 35210},
                "sentiment": {"positive_pct": 82, "negative_pct": 9},
                "rating_distribution": [{"star": 5, "pct": 71}, {"star": 1, "pct": 4}],
                "keyword_insights": [
                    {"aspect_name": "Hydration", "mention_total": 812, "score": 91, "summary": "Lasting moisture."}
                ]
            })),
            ..FixtureSource::default()
        }
    }

    #[test]
    fn feedback_uses_live_analysis() {
        let new = widgets::review_feedback(11, &FeedbackSnapshot::default());
        let rows = texts(&build(&review_source(), &record(new)).unwrap());
        assert_eq!(
            rows,
            vec![
                vec!["고객들이 말합니다 (리뷰 요약)"],
                vec![],
                vec!["긍정 반응 비율", "82%"],
                vec![],
                vec!["고객 리뷰 요약"],
                vec!["Customers love the scent."],
            ]
        );
    }

    #[test]
    fn rating_index_formats_review_count() {
        let new = widgets::review_rating_index(11, &ReputationSnapshot::default());
        let rows = texts(&build(&review_source(), &record(new)).unwrap());
        assert_eq!(rows[2], vec!["신뢰도 점수", "87"]);
        assert_eq!(rows[3], vec!["평점", "4.68"]);
        assert_eq!(rows[4], vec!["리뷰 개수", "35,210"]);
    }

    #[test]
    fn distribution_and_keywords() {
        let distribution = record(widgets::review_rating_distribution(11, &[]));
        let rows = texts(&build(&review_source(), &distribution).unwrap());
        assert_eq!(rows[2], vec!["별점", "비율(%)"]);
        assert_eq!(rows[3], vec!["5점", "71"]);

        let keywords = record(widgets::review_keyword_insights(11, &[]));
        let rows = texts(&build(&review_source(), &keywords).unwrap());
        assert_eq!(rows[3], vec!["Hydration", "812", "91", "Lasting moisture."]);
    }

    #[test]
    fn without_product_id_the_snapshot_is_used() {
        let mut new = widgets::review_sentiment(11, &SentimentSnapshot::default());
        new.meta = None;
        new.data = json!({"positive_pct": 70.5});
        let rows = texts(&build(&FixtureSource::default(), &record(new)).unwrap());
        assert_eq!(rows[3], vec!["긍정", "70.5"]);
        assert_eq!(rows[4], vec!["부정", "-"]);
    }

    #[test]
    fn failed_review_fetch_aborts() {
        let new = widgets::review_sentiment(11, &SentimentSnapshot::default());
        assert!(build(&FixtureSource::default(), &record(new)).is_err());
    }
}
