//! The insight cart.
//!
//! `InsightStore` owns the ordered record sequence. Every mutation ends in
//! [`InsightStore::flush`], which writes the whole sequence under the cart
//! key. Storage failures never surface to callers: they are logged and the
//! in-memory sequence stays authoritative.

use pocket_config::StorageConfig;
use pocket_core::ids::new_insight_id;
use pocket_core::timestamp::now_millis;
use pocket_core::{InsightRecord, NewInsight};

use crate::error::StorageError;
use crate::persistence;
use crate::storage::{FileStorage, KeyValueStorage};

/// Outcome of [`InsightStore::toggle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Toggle {
    /// The insight was not present and was added under this id.
    Added(String),
    /// Every record with the insight's unique key was removed.
    Removed(usize),
}

pub struct InsightStore<S: KeyValueStorage> {
    storage: S,
    key: String,
    records: Vec<InsightRecord>,
}

impl InsightStore<FileStorage> {
    /// Open the cart described by the `[storage]` config section.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the storage directory cannot be
    /// created, and [`StorageError::InvalidKey`] if `cart_key` cannot name a
    /// file. Unreadable cart content is not an error.
    pub fn open_configured(config: &StorageConfig) -> Result<Self, StorageError> {
        let storage = FileStorage::new(config.dir_path())?;
        storage.path_for(&config.cart_key)?;
        Ok(Self::open(storage, &config.cart_key))
    }
}

impl<S: KeyValueStorage> InsightStore<S> {
    /// Rehydrate the cart from `storage`. Missing, unreadable, or invalid
    /// content yields an empty cart.
    pub fn open(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let records = match storage.get(&key) {
            Ok(Some(raw)) => persistence::decode(&raw).unwrap_or_else(|e| {
                tracing::warn!(%key, error = %e, "discarding unreadable cart");
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(%key, error = %e, "cart storage unavailable, starting empty");
                Vec::new()
            }
        };
        tracing::debug!(%key, count = records.len(), "opened insight cart");
        Self {
            storage,
            key,
            records,
        }
    }

    /// Append an insight with a fresh id and timestamp. Returns the id.
    pub fn add(&mut self, new: NewInsight) -> String {
        let id = new_insight_id();
        let record = InsightRecord::from_new(new, id.clone(), now_millis());
        tracing::debug!(%id, unique_key = %record.unique_key, "add insight");
        self.records.push(record);
        self.flush();
        id
    }

    /// Remove the record with `id`. Returns whether one was removed.
    pub fn remove_by_id(&mut self, id: &str) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        let removed = self.records.len() != before;
        if removed {
            self.flush();
        }
        removed
    }

    /// Remove every record with `unique_key`. Returns how many were removed.
    pub fn remove_by_unique_key(&mut self, unique_key: &str) -> usize {
        let before = self.records.len();
        self.records.retain(|r| r.unique_key != unique_key);
        let removed = before - self.records.len();
        if removed > 0 {
            self.flush();
        }
        removed
    }

    #[must_use]
    pub fn is_present(&self, unique_key: &str) -> bool {
        self.records.iter().any(|r| r.unique_key == unique_key)
    }

    pub fn clear(&mut self) {
        self.records.clear();
        self.flush();
    }

    /// Widget add/remove affordance: remove by unique key when present,
    /// otherwise add.
    pub fn toggle(&mut self, new: NewInsight) -> Toggle {
        if self.is_present(&new.unique_key) {
            Toggle::Removed(self.remove_by_unique_key(&new.unique_key))
        } else {
            Toggle::Added(self.add(new))
        }
    }

    #[must_use]
    pub fn records(&self) -> &[InsightRecord] {
        &self.records
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&InsightRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Records whose id is in `ids`, in store order.
    #[must_use]
    pub fn select<I: AsRef<str>>(&self, ids: &[I]) -> Vec<InsightRecord> {
        self.records
            .iter()
            .filter(|r| ids.iter().any(|id| id.as_ref() == r.id))
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Write the full sequence to storage.
    pub fn flush(&mut self) {
        let result =
            persistence::encode(&self.records).and_then(|raw| self.storage.set(&self.key, &raw));
        if let Err(e) = result {
            tracing::warn!(key = %self.key, error = %e, "failed to persist insight cart");
        }
    }
}
