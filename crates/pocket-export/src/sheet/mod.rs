//! Per-card sheet content.
//!
//! [`SheetBuilder::build`] dispatches on the record's [`CardKind`]. Live
//! kinds re-fetch through the [`DataSource`] using the record's meta;
//! snapshot kinds render the stored `data`. Unknown kinds produce a two-row
//! placeholder rather than an error. A failed re-fetch is returned as-is so
//! the export job can abort.

mod dashboard;
mod keywords;
mod ranking;
mod review;

use chrono::{DateTime, Local};
use pocket_api::DataSource;
use pocket_core::payloads::from_data;
use pocket_core::timestamp::korean_datetime;
use pocket_core::{CardKind, InsightRecord};
use serde::de::DeserializeOwned;

use crate::cell::Rows;
use crate::error::ExportError;
use crate::row;

pub const UNSUPPORTED_CARD: &str = "지원하지 않는 카드";

/// Builds sheet rows for one record at a time.
pub struct SheetBuilder<'a, S> {
    source: &'a S,
    ranking_row_limit: usize,
    generated_at: DateTime<Local>,
}

impl<'a, S: DataSource> SheetBuilder<'a, S> {
    #[must_use]
    pub fn new(source: &'a S, ranking_row_limit: usize) -> Self {
        Self {
            source,
            ranking_row_limit,
            generated_at: Local::now(),
        }
    }

    /// Fix the "생성 시각" shown on ranking sheets.
    #[must_use]
    pub const fn with_generated_at(mut self, generated_at: DateTime<Local>) -> Self {
        self.generated_at = generated_at;
        self
    }

    /// Sheet rows for `record`.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Api`] if a live re-fetch fails and
    /// [`ExportError::Payload`] if snapshot data has the wrong shape.
    pub async fn build(&self, record: &InsightRecord) -> Result<Rows, ExportError> {
        let kind = record.kind();
        tracing::debug!(kind = %kind, id = %record.id, "building sheet");
        match kind {
            CardKind::StatSales | CardKind::StatRevenue => dashboard::stat(record),
            CardKind::ProductOfMonth => dashboard::product_of_month(self.source, record).await,
            CardKind::RisingProduct => dashboard::rising_product(self.source).await,
            CardKind::MonthlySalesChart => dashboard::monthly_sales(record),
            CardKind::Top5Table => dashboard::top5(record),
            CardKind::ProductDetailTable => dashboard::product_detail(record),
            CardKind::RankingTable => {
                ranking::current_table(
                    self.source,
                    record,
                    self.ranking_row_limit,
                    &self.generated(),
                )
                .await
            }
            CardKind::RankTrendChart => ranking::trend_chart(record, &self.generated()),
            CardKind::ReviewFeedback => review::feedback(self.source, record).await,
            CardKind::ReviewSentiment => review::sentiment(self.source, record).await,
            CardKind::ReviewRatingIndex => review::rating_index(self.source, record).await,
            CardKind::ReviewRatingDistribution => {
                review::rating_distribution(self.source, record).await
            }
            CardKind::ReviewKeywordInsights => review::keyword_insights(self.source, record).await,
            CardKind::KeywordCategoryDistribution => keywords::category_distribution(record),
            CardKind::KeywordRankings => keywords::rankings(record),
            CardKind::Unknown(raw) => Ok(unsupported(record, &raw)),
        }
    }

    fn generated(&self) -> String {
        korean_datetime(&self.generated_at)
    }
}

fn unsupported(record: &InsightRecord, kind: &str) -> Rows {
    vec![row![record.title.as_str()], row![UNSUPPORTED_CARD, kind]]
}

/// Decode `record.data` as `T`, `null` giving the default.
fn snapshot<T: DeserializeOwned + Default>(record: &InsightRecord) -> Result<T, ExportError> {
    from_data(&record.data).map_err(|e| ExportError::payload(record.kind_key(), e))
}
