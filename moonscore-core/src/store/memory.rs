//! In-process score store.

use std::collections::BTreeMap;

use super::{ScoreKey, ScoreStore, ScoreStoreError};

/// Score store held in memory for the lifetime of one process.
#[derive(Debug, Default, Clone)]
pub struct MemoryScoreStore {
    entries: BTreeMap<ScoreKey, String>,
}

impl MemoryScoreStore {
    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over stored keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &ScoreKey> {
        self.entries.keys()
    }
}

impl ScoreStore for MemoryScoreStore {
    fn put(&mut self, key: &ScoreKey, payload: &str) -> Result<(), ScoreStoreError> {
        self.entries.insert(key.clone(), payload.to_owned());
        Ok(())
    }

    fn get(&self, key: &ScoreKey) -> Result<Option<String>, ScoreStoreError> {
        Ok(self.entries.get(key).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CityId;

    #[test]
    fn missing_key_reads_as_none() {
        let store = MemoryScoreStore::default();
        let key = ScoreKey::for_city(&CityId::new("nowhere"));
        assert!(store.get(&key).expect("memory reads never fail").is_none());
    }

    #[test]
    fn writes_overwrite_rather_than_merge() {
        let mut store = MemoryScoreStore::default();
        let key = ScoreKey::for_city(&CityId::new("A"));
        store.put(&key, "first").expect("first write");
        store.put(&key, "second").expect("second write");
        assert_eq!(store.len(), 1);
        assert_eq!(
            store.get(&key).expect("read back").as_deref(),
            Some("second")
        );
    }
}
