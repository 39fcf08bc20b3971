use anyhow::Context;
use pocket_api::ChatClient;
use pocket_chat::Conversation;
use pocket_config::PocketConfig;
use pocket_store::{FileStorage, InsightStore};

use super::Backend;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: PocketConfig,
    pub store: InsightStore<FileStorage>,
    pub backend: Backend,
    pub chat: ChatClient,
}

impl AppContext {
    pub fn init(config: PocketConfig) -> anyhow::Result<Self> {
        let store = InsightStore::open_configured(&config.storage).with_context(|| {
            format!("failed to open insight storage at {}", config.storage.dir)
        })?;
        let backend = Backend::new(&config.api).context("failed to build backend client")?;
        let chat = ChatClient::new(&config.chat).context("failed to build chat client")?;
        tracing::debug!(records = store.len(), "cart loaded");

        Ok(Self {
            config,
            store,
            backend,
            chat,
        })
    }

    /// A fresh conversation saving reports into `chat.report_dir`.
    #[must_use]
    pub fn conversation(&self) -> Conversation {
        Conversation::new(self.config.chat.report_dir())
    }
}
