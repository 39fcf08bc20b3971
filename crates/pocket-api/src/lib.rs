//! # pocket-api
//!
//! HTTP clients for the analytics backend and the chat assistant host.
//!
//! Every backend endpoint has one strict response schema. The backend wraps
//! results in `{ "result": ... }` except for review analysis, which returns
//! the object at top level. A body that does not match is a typed
//! [`ApiError::Parse`], never a silently empty value.
//!
//! - `dashboard`: best-seller top 5, best seller of the month, rising product
//! - `rankings`: current Amazon ranking, LANEIGE product list, rank trends
//! - `reviews`: per-product review analysis
//! - `reports`: today's insight banner and the daily report download
//! - `chat`: chat answers and custom Markdown reports
//! - `source`: the [`DataSource`] seam live exports and chat context fetch through
//! - `latest`: last-requested-wins gating for superseded fetches
//! - `names`: product-name cleanup for widget display, chat context, and rankings

pub mod chat;
pub mod dashboard;
pub mod latest;
pub mod names;
pub mod rankings;
pub mod reports;
pub mod reviews;
pub mod source;

mod error;
mod http;

pub use chat::ChatClient;
pub use error::ApiError;
pub use latest::{RankTrendView, SelectionGate, Ticket};
pub use source::DataSource;

use pocket_config::ApiConfig;

/// HTTP client for the dashboard backend.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client from the `[api]` config section.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotConfigured`] without a base URL, or
    /// [`ApiError::Http`] if the underlying client fails to build.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let config = config.require()?;
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout())
            .build()?;
        Ok(Self {
            http,
            base_url: config.base().to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// GET `path`, check the status, and return the body text.
    async fn get_text(&self, endpoint: &'static str, path: &str) -> Result<String, ApiError> {
        let url = self.url(path);
        tracing::debug!(endpoint, %url, "GET");
        let resp = http::check_response(self.http.get(&url).send().await?, None).await?;
        Ok(resp.text().await?)
    }
}
