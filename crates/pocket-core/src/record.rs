use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::enums::{CategoryCode, Page, Period, RankRange, RecordType};
use crate::kind::CardKind;
use crate::timestamp;

/// Parameters sufficient to re-fetch a record's live value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InsightMeta {
    /// Card kind discriminator. Falls back to the record's `uniqueKey` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// `YYYY-MM` month for month-scoped dashboard cards.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<RankRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_code: Option<CategoryCode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<u8>,
}

impl InsightMeta {
    /// Meta carrying only a kind.
    #[must_use]
    pub fn kind(kind: impl Into<String>) -> Self {
        Self {
            kind: Some(kind.into()),
            ..Self::default()
        }
    }

    /// Resolve the ranking category from either the code or the numeric id.
    #[must_use]
    pub fn category(&self) -> Option<CategoryCode> {
        self.category_code
            .or_else(|| self.category_id.and_then(CategoryCode::from_id))
    }
}

/// One collected insight. Created by a widget "add", never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InsightRecord {
    pub id: String,
    pub unique_key: String,
    #[serde(rename = "type")]
    pub record_type: RecordType,
    pub title: String,
    pub page: Page,
    /// Snapshot payload, or `null` for a live reference re-fetched via `meta`.
    #[serde(default)]
    pub data: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<InsightMeta>,
    #[serde(with = "timestamp::iso_millis")]
    #[schemars(with = "String")]
    pub timestamp: DateTime<Utc>,
}

impl InsightRecord {
    /// Stamp a widget payload with its identity and creation time.
    #[must_use]
    pub fn from_new(new: NewInsight, id: String, timestamp: DateTime<Utc>) -> Self {
        Self {
            id,
            unique_key: new.unique_key,
            record_type: new.record_type,
            title: new.title,
            page: new.page,
            data: new.data,
            meta: new.meta,
            timestamp,
        }
    }

    /// Raw kind string: `meta.kind` if present, else `uniqueKey`.
    #[must_use]
    pub fn kind_key(&self) -> &str {
        self.meta
            .as_ref()
            .and_then(|m| m.kind.as_deref())
            .unwrap_or(&self.unique_key)
    }

    #[must_use]
    pub fn kind(&self) -> CardKind {
        CardKind::parse(self.kind_key())
    }

    #[must_use]
    pub fn product_id(&self) -> Option<u64> {
        self.meta.as_ref().and_then(|m| m.product_id)
    }
}

/// A record before insertion: everything except `id` and `timestamp`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewInsight {
    pub unique_key: String,
    #[serde(rename = "type")]
    pub record_type: RecordType,
    pub title: String,
    pub page: Page,
    #[serde(default)]
    pub data: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<InsightMeta>,
}

impl NewInsight {
    #[must_use]
    pub fn new(
        unique_key: impl Into<String>,
        record_type: RecordType,
        page: Page,
        title: impl Into<String>,
    ) -> Self {
        Self {
            unique_key: unique_key.into(),
            record_type,
            title: title.into(),
            page,
            data: Value::Null,
            meta: None,
        }
    }

    #[must_use]
    pub fn with_data(mut self, data: Value) -> Self {
        self.data = data;
        self
    }

    #[must_use]
    pub fn with_meta(mut self, meta: InsightMeta) -> Self {
        self.meta = Some(meta);
        self
    }
}
