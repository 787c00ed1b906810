//! In-memory key-value store.
//!
//! This is the reference implementation of `KeyValueStore`. It uses a
//! HashMap protected by an RwLock and lives entirely in the process.
//!
//! Use this store for:
//! - Testing the session, storage, and import/export layers
//! - Embedding spaceplan in hosts that bring their own persistence later
//! - Simulating quota-exceeded failures via `with_quota`

use std::sync::Arc;

use async_trait::async_trait;
use hashbrown::HashMap;
use parking_lot::RwLock;

use super::KeyValueStore;
use crate::{Error, Result};

/// In-memory keyed string storage.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<MemoryInner>,
}

#[derive(Default)]
struct MemoryInner {
    entries: RwLock<HashMap<String, String>>,
    /// Total payload bytes allowed across all values; `None` is unlimited.
    quota_bytes: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that rejects writes once total stored bytes would exceed the
    /// quota, mirroring browser local-storage limits.
    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            inner: Arc::new(MemoryInner {
                entries: RwLock::new(HashMap::new()),
                quota_bytes: Some(quota_bytes),
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.entries.read().is_empty()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.inner.entries.read().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.inner.entries.write();
        if let Some(quota) = self.inner.quota_bytes {
            let used: usize = entries
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| k.len() + v.len())
                .sum();
            if used + key.len() + value.len() > quota {
                return Err(Error::Storage(format!(
                    "quota exceeded writing `{key}` ({} bytes over {quota})",
                    used + key.len() + value.len()
                )));
            }
        }
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.inner.entries.write().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_and_get() {
        let store = MemoryStore::new();
        store.set("k", "v").await.unwrap();
        assert_eq!(store.get("k").await.unwrap(), Some("v".to_string()));
        assert_eq!(store.get("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_remove_is_idempotent() {
        let store = MemoryStore::new();
        store.set("k", "v").await.unwrap();
        store.remove("k").await.unwrap();
        store.remove("k").await.unwrap();
        assert_eq!(store.get("k").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_quota_rejects_oversized_write() {
        let store = MemoryStore::with_quota(8);
        store.set("a", "1234").await.unwrap();
        let err = store.set("b", "56789").await.unwrap_err();
        assert!(matches!(err, Error::Storage(_)));
        // Existing data survives the failed write
        assert_eq!(store.get("a").await.unwrap(), Some("1234".to_string()));
    }

    #[tokio::test]
    async fn test_quota_counts_replacement_not_double() {
        let store = MemoryStore::with_quota(10);
        store.set("k", "12345").await.unwrap();
        // Replacing a key only counts its new size
        store.set("k", "123456789").await.unwrap();
    }
}
