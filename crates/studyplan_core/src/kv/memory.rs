//! Process-local key-value store.

use super::{KeyValueStore, KvError, KvResult};
use std::collections::HashMap;

/// In-memory store with an optional total byte quota.
///
/// The quota counts key and value bytes across all entries, the same way
/// browser local storage rejects writes past its limit.
#[derive(Debug, Clone, Default)]
pub struct MemoryKvStore {
    entries: HashMap<String, String>,
    quota_bytes: Option<usize>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            entries: HashMap::new(),
            quota_bytes: Some(quota_bytes),
        }
    }

    /// Seeds a raw value without quota checks.
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    fn used_bytes_excluding(&self, key: &str) -> usize {
        self.entries
            .iter()
            .filter(|(existing, _)| existing.as_str() != key)
            .map(|(existing, value)| existing.len() + value.len())
            .sum()
    }
}

impl KeyValueStore for MemoryKvStore {
    fn get(&self, key: &str) -> KvResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> KvResult<()> {
        if let Some(limit_bytes) = self.quota_bytes {
            let required_bytes = self.used_bytes_excluding(key) + key.len() + value.len();
            if required_bytes > limit_bytes {
                return Err(KvError::QuotaExceeded {
                    limit_bytes,
                    required_bytes,
                });
            }
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
