//! # pocket-chat
//!
//! The chat assistant over collected insights.
//!
//! - [`briefing`]: per-card context lines and AI titles for attached data
//! - [`Conversation`]: message history, sends, and report generation
//! - [`report`]: report file naming and saving

pub mod assistant;
pub mod briefing;
pub mod conversation;
pub mod error;
pub mod report;

pub use assistant::Assistant;
pub use conversation::{Conversation, Message};
pub use error::ChatError;
