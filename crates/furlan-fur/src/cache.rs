// Concurrent word frequency cache

use dashmap::DashMap;

use crate::error::Error;

/// Entries kept before the cache is emptied and starts over.
pub const DEFAULT_LIMIT: usize = 100_000;

/// Memoizes frequency lookups across suggestion calls.
///
/// Shared between engines as `Arc<FrequencyCache>`. Inserts are
/// insert-if-absent, so two threads racing on the same word agree on the
/// stored value. The cache holds at most `limit` words: a miss that would
/// go past it clears every entry first.
#[derive(Debug)]
pub struct FrequencyCache {
    map: DashMap<String, u32>,
    limit: usize,
}

impl Default for FrequencyCache {
    fn default() -> Self {
        Self::with_limit(DEFAULT_LIMIT)
    }
}

impl FrequencyCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Preallocate room for `capacity` words, with the default limit.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            map: DashMap::with_capacity(capacity),
            limit: DEFAULT_LIMIT.max(capacity),
        }
    }

    /// Hold at most `limit` words (at least one).
    pub fn with_limit(limit: usize) -> Self {
        Self {
            map: DashMap::new(),
            limit: limit.max(1),
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Cached frequency of `word`, calling `load` on a miss. Failed loads
    /// are not cached.
    pub fn get_or_load<F>(&self, word: &str, load: F) -> Result<u32, Error>
    where
        F: FnOnce(&str) -> Result<u32, Error>,
    {
        if let Some(hit) = self.map.get(word) {
            return Ok(*hit);
        }
        let value = load(word)?;
        if self.map.len() >= self.limit {
            log::debug!("frequency cache full ({} words), clearing", self.map.len());
            self.map.clear();
        }
        Ok(*self.map.entry(word.to_string()).or_insert_with(|| value))
    }

    pub fn get(&self, word: &str) -> Option<u32> {
        self.map.get(word).map(|v| *v)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn clear(&self) {
        self.map.clear();
    }
}
