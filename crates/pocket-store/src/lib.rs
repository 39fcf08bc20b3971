//! # pocket-store
//!
//! The Insight Pocket cart: an ordered sequence of collected insights,
//! persisted as one JSON array under one storage key after every mutation.
//!
//! - [`InsightStore`]: add, remove, toggle, select, clear
//! - [`KeyValueStorage`]: the storage seam, with [`FileStorage`] and
//!   [`MemoryStorage`] backends
//! - [`persistence`]: the pure encode/decode codec

pub mod error;
pub mod persistence;
pub mod storage;
pub mod store;

pub use error::StorageError;
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
pub use store::{InsightStore, Toggle};
