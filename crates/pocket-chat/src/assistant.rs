//! The seam between a conversation and the chat host.

use pocket_api::ApiError;
use pocket_api::ChatClient;
use pocket_api::chat::{ChatPayload, GenerateReportResponse};

/// Chat host operations a [`Conversation`](crate::Conversation) needs.
#[allow(async_fn_in_trait)]
pub trait Assistant {
    async fn ask(&self, payload: &ChatPayload) -> Result<String, ApiError>;

    async fn generate_report(
        &self,
        payload: &ChatPayload,
    ) -> Result<GenerateReportResponse, ApiError>;
}

impl Assistant for ChatClient {
    async fn ask(&self, payload: &ChatPayload) -> Result<String, ApiError> {
        Self::ask(self, payload).await
    }

    async fn generate_report(
        &self,
        payload: &ChatPayload,
    ) -> Result<GenerateReportResponse, ApiError> {
        Self::generate_report(self, payload).await
    }
}
