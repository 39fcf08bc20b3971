//! Today's insight banner and the daily report download.

use serde::{Deserialize, Serialize};

use crate::{ApiClient, error::ApiError, http::parse_envelope};

/// File name the daily report is saved under.
pub const DAILY_REPORT_FILE_NAME: &str = "laneige_daily_report.md";

/// `GET /api/reports/today/insight` result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodayInsight {
    #[serde(default)]
    pub date: Option<String>,
    pub insight: String,
}

impl ApiClient {
    /// One-paragraph insight for the dashboard banner.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status, or schema failure. Callers
    /// showing a banner usually log this at `warn` and move on.
    pub async fn today_insight(&self) -> Result<TodayInsight, ApiError> {
        let body = self
            .get_text("reports/today/insight", "/api/reports/today/insight")
            .await?;
        parse_envelope("reports/today/insight", &body)
    }

    /// Raw bytes of today's Markdown report.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport or status failure.
    pub async fn download_daily_report(&self) -> Result<Vec<u8>, ApiError> {
        let url = self.url("/api/reports/daily/today/download");
        tracing::debug!(%url, "GET daily report");
        let resp = crate::http::check_response(self.http.get(&url).send().await?, None).await?;
        Ok(resp.bytes().await?.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_today_insight() {
        let data: TodayInsight = parse_envelope(
            "t",
            r#"{"result":{"date":"2025-02-01","insight":"립 케어 카테고리에서 1위를 유지했어요."}}"#,
        )
        .unwrap();
        assert_eq!(data.date.as_deref(), Some("2025-02-01"));
        assert!(data.insight.contains("1위"));
    }

    #[test]
    fn date_is_optional() {
        let data: TodayInsight = parse_envelope("t", r#"{"result":{"insight":"ok"}}"#).unwrap();
        assert!(data.date.is_none());
    }
}
