//! Conversation state for the chat assistant.
//!
//! Each send posts the full prior history plus the new user message, with
//! the attached insights' context blocks on that message only. Failures are
//! reported inside the conversation as assistant messages.

use std::path::PathBuf;

use pocket_api::DataSource;
use pocket_api::chat::{AttachedDataBlock, ChatMessageForApi, ChatPayload, ChatRole};
use pocket_core::InsightRecord;

use crate::assistant::Assistant;
use crate::briefing::attach;
use crate::error::ChatError;
use crate::report::save_report;

pub const GREETING: &str = "안녕하세요! LANEIGE 데이터 분석 AI 어시스턴트입니다, 질문해 주세요!";

/// Prompt used when only data is attached.
pub const DEFAULT_PROMPT: &str = "선택한 데이터를 분석해주세요";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub role: ChatRole,
    pub content: String,
    /// Titles of the insights attached to this exchange.
    pub attached: Vec<String>,
    /// Set on replies to messages that carried data; the report endpoint
    /// receives exactly the payload that produced the reply.
    pub report_payload: Option<ChatPayload>,
}

impl Message {
    fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            attached: Vec::new(),
            report_payload: None,
        }
    }

    #[must_use]
    pub const fn can_generate_report(&self) -> bool {
        self.report_payload.is_some()
    }

    /// Content as shown to the user: Markdown emphasis markers removed.
    #[must_use]
    pub fn display_text(&self) -> String {
        strip_asterisks(&self.content)
    }

    fn for_api(&self) -> ChatMessageForApi {
        ChatMessageForApi {
            role: self.role,
            content: self.content.clone(),
            attached_data: None,
        }
    }
}

#[must_use]
pub fn strip_asterisks(text: &str) -> String {
    text.replace('*', "")
}

pub struct Conversation {
    messages: Vec<Message>,
    report_dir: PathBuf,
}

impl Conversation {
    /// A conversation opened by the assistant's greeting. Reports are saved
    /// into `report_dir`.
    #[must_use]
    pub fn new(report_dir: impl Into<PathBuf>) -> Self {
        Self {
            messages: vec![Message::new(ChatRole::Assistant, GREETING)],
            report_dir: report_dir.into(),
        }
    }

    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Index of the most recent message a report can be generated from.
    #[must_use]
    pub fn latest_reportable(&self) -> Option<usize> {
        self.messages.iter().rposition(Message::can_generate_report)
    }

    /// Send `text` with `attachments` and append the assistant's reply.
    ///
    /// Returns `None` without sending when both are empty. A failed context
    /// fetch or chat call appends an apology instead of the reply.
    pub async fn send<A, S>(
        &mut self,
        assistant: &A,
        source: &S,
        text: &str,
        attachments: &[InsightRecord],
    ) -> Option<&Message>
    where
        A: Assistant,
        S: DataSource,
    {
        if text.trim().is_empty() && attachments.is_empty() {
            return None;
        }
        let content = if text.trim().is_empty() {
            DEFAULT_PROMPT
        } else {
            text
        };
        let titles: Vec<String> = attachments.iter().map(|r| r.title.clone()).collect();

        let history: Vec<ChatMessageForApi> = self.messages.iter().map(Message::for_api).collect();
        self.messages.push(Message {
            attached: titles.clone(),
            ..Message::new(ChatRole::User, content)
        });

        let reply = match self
            .exchange(assistant, source, history, content, attachments)
            .await
        {
            Ok((answer, payload)) => Message {
                attached: titles,
                report_payload: payload,
                ..Message::new(ChatRole::Assistant, answer)
            },
            Err(e) => {
                tracing::warn!(error = %e, "chat request failed");
                Message::new(
                    ChatRole::Assistant,
                    format!("에러가 발생했어요: {}", e.user_message()),
                )
            }
        };
        self.messages.push(reply);
        self.messages.last()
    }

    async fn exchange<A, S>(
        &self,
        assistant: &A,
        source: &S,
        mut history: Vec<ChatMessageForApi>,
        content: &str,
        attachments: &[InsightRecord],
    ) -> Result<(String, Option<ChatPayload>), ChatError>
    where
        A: Assistant,
        S: DataSource,
    {
        let mut blocks: Vec<AttachedDataBlock> = Vec::with_capacity(attachments.len());
        for record in attachments {
            blocks.push(attach(record, source).await?);
        }
        let has_data = !blocks.is_empty();

        history.push(ChatMessageForApi {
            role: ChatRole::User,
            content: content.to_string(),
            attached_data: has_data.then_some(blocks),
        });
        let payload = ChatPayload { messages: history };
        tracing::debug!(messages = payload.messages.len(), has_data, "sending chat");

        let answer = assistant.ask(&payload).await?;
        Ok((answer, has_data.then_some(payload)))
    }

    /// Generate a report from the message at `index` and save it.
    ///
    /// # Errors
    ///
    /// Returns [`ChatError::NoReport`] if that message carries no report
    /// payload. API and write failures are also appended to the conversation
    /// as `리포트 생성 중 에러: ...`.
    pub async fn generate_report<A: Assistant>(
        &mut self,
        assistant: &A,
        index: usize,
    ) -> Result<PathBuf, ChatError> {
        let payload = self
            .messages
            .get(index)
            .and_then(|m| m.report_payload.as_ref())
            .ok_or(ChatError::NoReport)?;

        let result = match assistant.generate_report(payload).await {
            Ok(report) => save_report(&self.report_dir, &report),
            Err(e) => Err(e.into()),
        };
        if let Err(e) = &result {
            tracing::warn!(error = %e, "report generation failed");
            self.messages.push(Message::new(
                ChatRole::Assistant,
                format!("리포트 생성 중 에러: {}", e.user_message()),
            ));
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use pocket_api::ApiError;
    use pocket_api::chat::GenerateReportResponse;
    use pocket_core::payloads::{FeedbackSnapshot, StatSnapshot};
    use pocket_core::widgets;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::briefing::tests::{Fixtures, record, review_fixture};

    #[derive(Default)]
    struct Scripted {
        fail: bool,
        seen: RefCell<Vec<ChatPayload>>,
    }

    impl Assistant for Scripted {
        async fn ask(&self, payload: &ChatPayload) -> Result<String, ApiError> {
            self.seen.borrow_mut().push(payload.clone());
            if self.fail {
                return Err(ApiError::Api {
                    status: 500,
                    message: "Chat API Error".into(),
                });
            }
            Ok("**매출**이 늘었어요".into())
        }

        async fn generate_report(
            &self,
            _payload: &ChatPayload,
        ) -> Result<GenerateReportResponse, ApiError> {
            Err(ApiError::Api {
                status: 502,
                message: "Report API Error".into(),
            })
        }
    }

    #[tokio::test]
    async fn empty_send_is_ignored() {
        let mut chat = Conversation::new(".");
        let assistant = Scripted::default();
        assert!(chat.send(&assistant, &Fixtures::default(), "  ", &[]).await.is_none());
        assert_eq!(chat.messages().len(), 1);
        assert!(assistant.seen.borrow().is_empty());
    }

    #[tokio::test]
    async fn plain_question_carries_history_without_attachments() {
        let mut chat = Conversation::new(".");
        let assistant = Scripted::default();
        let reply = chat
            .send(&assistant, &Fixtures::default(), "매출 트렌드는?", &[])
            .await
            .unwrap();
        assert_eq!(reply.display_text(), "매출이 늘었어요");
        assert!(!reply.can_generate_report());

        let seen = assistant.seen.borrow();
        let value = serde_json::to_value(&seen[0]).unwrap();
        assert_eq!(
            value,
            json!({"messages": [
                {"role": "assistant", "content": GREETING},
                {"role": "user", "content": "매출 트렌드는?"}
            ]})
        );
    }

    #[tokio::test]
    async fn attachments_produce_blocks_and_report_payload() {
        let mut chat = Conversation::new(".");
        let assistant = Scripted::default();
        let source = Fixtures {
            review: Some(review_fixture()),
            ..Fixtures::default()
        };
        let stat = record(widgets::stat_sales(&StatSnapshot {
            value: Some("21,400개".into()),
            ..StatSnapshot::default()
        }));
        let sentiment = record(widgets::review_sentiment(11, &Default::default()));

        let reply = chat
            .send(&assistant, &source, "", &[stat, sentiment])
            .await
            .unwrap()
            .clone();

        let sent = assistant.seen.borrow()[0].clone();
        let user = sent.messages.last().unwrap();
        assert_eq!(user.content, DEFAULT_PROMPT);
        let blocks = user.attached_data.clone().unwrap();
        assert_eq!(blocks[0].title, "지난 달 총 판매량");
        assert_eq!(blocks[0].lines, vec!["value: 21,400개", "change: null", "trend: null"]);
        assert_eq!(blocks[1].lines, vec!["긍정 반응: 82%", "부정 반응: 9.5%"]);

        assert_eq!(reply.report_payload, Some(sent));
        assert_eq!(reply.attached, vec!["지난 달 총 판매량", "감정 분석 분포"]);
        assert_eq!(chat.latest_reportable(), Some(2));
    }

    #[tokio::test]
    async fn failed_context_fetch_appends_apology() {
        let mut chat = Conversation::new(".");
        let assistant = Scripted::default();
        let feedback = record(widgets::review_feedback(11, &FeedbackSnapshot::default()));

        let reply = chat
            .send(&assistant, &Fixtures::default(), "요약해줘", &[feedback])
            .await
            .unwrap();
        assert_eq!(reply.content, "에러가 발생했어요: review unavailable");
        assert!(assistant.seen.borrow().is_empty());
        assert_eq!(chat.messages().len(), 3);
    }

    #[tokio::test]
    async fn failed_chat_call_appends_apology() {
        let mut chat = Conversation::new(".");
        let assistant = Scripted {
            fail: true,
            ..Scripted::default()
        };
        let reply = chat
            .send(&assistant, &Fixtures::default(), "안녕", &[])
            .await
            .unwrap();
        assert_eq!(reply.content, "에러가 발생했어요: Chat API Error");
    }

    #[tokio::test]
    async fn report_failure_is_reported_in_conversation() {
        let mut chat = Conversation::new(".");
        let assistant = Scripted::default();
        assert!(matches!(
            chat.generate_report(&assistant, 0).await,
            Err(ChatError::NoReport)
        ));
        assert_eq!(chat.messages().len(), 1);

        let stat = record(widgets::stat_sales(&StatSnapshot::default()));
        chat.send(&assistant, &Fixtures::default(), "분석", &[stat]).await;
        let index = chat.latest_reportable().unwrap();
        assert!(chat.generate_report(&assistant, index).await.is_err());
        assert_eq!(
            chat.messages().last().unwrap().content,
            "리포트 생성 중 에러: Report API Error"
        );
    }
}
