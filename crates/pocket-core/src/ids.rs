//! Prefixed ID generation for insight records.
//!
//! IDs look like `ins-3fa2b8c1-0007`: a fixed prefix, four random bytes in
//! lowercase hex, and a per-process sequence number. The sequence makes IDs
//! unique within a process even if the random source repeats.

use std::sync::atomic::{AtomicU64, Ordering};

/// Prefix for insight record IDs.
pub const PREFIX_INSIGHT: &str = "ins";

static SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Generate a fresh insight record ID.
#[must_use]
pub fn new_insight_id() -> String {
    let seq = SEQUENCE.fetch_add(1, Ordering::Relaxed);
    let mut bytes = [0u8; 4];
    if getrandom::fill(&mut bytes).is_err() {
        // The sequence alone still keeps IDs distinct within the process.
        bytes = chrono::Utc::now()
            .timestamp_subsec_nanos()
            .to_be_bytes();
    }
    format!("{PREFIX_INSIGHT}-{}-{seq:04x}", hex(&bytes))
}

fn hex(bytes: &[u8]) -> String {
    use std::fmt::Write;
    bytes.iter().fold(String::with_capacity(bytes.len() * 2), |mut out, b| {
        let _ = write!(out, "{b:02x}");
        out
    })
}
