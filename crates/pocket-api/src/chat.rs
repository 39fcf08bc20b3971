//! Chat assistant host: conversational answers and custom Markdown reports.

use pocket_config::ChatConfig;
use serde::{Deserialize, Serialize};

use crate::{
    error::ApiError,
    http::{check_response, parse_body},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// Context lines for one attached insight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachedDataBlock {
    pub title: String,
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessageForApi {
    pub role: ChatRole,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attached_data: Option<Vec<AttachedDataBlock>>,
}

/// Request body for both `/api/chat` and `/api/report/custom`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatPayload {
    pub messages: Vec<ChatMessageForApi>,
}

#[derive(Debug, Deserialize)]
struct ChatAnswer {
    answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateReportResponse {
    pub report_id: String,
    pub body_md: String,
    #[serde(default)]
    pub title: Option<String>,
}

/// HTTP client for the chat host.
pub struct ChatClient {
    http: reqwest::Client,
    base_url: String,
}

impl ChatClient {
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the underlying client fails to build.
    pub fn new(config: &ChatConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("pocket/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout())
            .build()?;
        Ok(Self {
            http,
            base_url: config.base().to_string(),
        })
    }

    async fn post(
        &self,
        endpoint: &'static str,
        path: &str,
        fallback: &str,
        payload: &ChatPayload,
    ) -> Result<String, ApiError> {
        let url = format!("{}{path}", self.base_url);
        tracing::debug!(endpoint, %url, messages = payload.messages.len(), "POST");
        let resp = self.http.post(&url).json(payload).send().await?;
        let resp = check_response(resp, Some(fallback)).await?;
        Ok(resp.text().await?)
    }

    /// Send the conversation and return the assistant's answer.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Api`] carrying the response body (or
    /// `"Chat API Error"`) on a non-success status.
    pub async fn ask(&self, payload: &ChatPayload) -> Result<String, ApiError> {
        let body = self.post("chat", "/api/chat", "Chat API Error", payload).await?;
        parse_body::<ChatAnswer>("chat", &body).map(|a| a.answer)
    }

    /// Generate a Markdown report from the conversation.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Api`] carrying the response body (or
    /// `"Report API Error"`) on a non-success status.
    pub async fn generate_report(
        &self,
        payload: &ChatPayload,
    ) -> Result<GenerateReportResponse, ApiError> {
        let body = self
            .post("report/custom", "/api/report/custom", "Report API Error", payload)
            .await?;
        parse_body("report/custom", &body)
    }
}
