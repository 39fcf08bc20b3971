//! # pocket-core
//!
//! Core types, ID generation, and error types for Insight Pocket.
//!
//! This crate provides the foundational types shared across all pocket crates:
//! - The insight record collected from dashboard widgets, plus its metadata
//! - Closed tag enums (record type, page, category, rank range, period)
//! - Card kinds: the discriminator for sheet and chat-context rules
//! - Typed widget payloads snapshotted into a record's `data`
//! - The widget registration catalog (canonical payload per widget)
//! - The context normalizer that flattens payloads into chat lines
//! - Timestamp serde helpers and cross-cutting error types

pub mod context;
pub mod enums;
pub mod errors;
pub mod format;
pub mod ids;
pub mod kind;
pub mod payloads;
pub mod record;
pub mod timestamp;
pub mod widgets;

pub use context::normalize_to_lines;
pub use errors::CoreError;
pub use kind::CardKind;
pub use record::{InsightMeta, InsightRecord, NewInsight};
