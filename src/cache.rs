//! Process-lifetime memoization for fetched documents.
//!
//! The contract is "key -> in-flight-or-completed value": concurrent requests
//! for the same key share one underlying load, and a key is initialized at
//! most once, so interleaved loads and background prefetches are always safe.
//! There is no invalidation; upstream files are refreshed out-of-band.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;

use tokio::sync::{Mutex, OnceCell};

pub struct AsyncCache<K, V> {
    entries: Mutex<HashMap<K, Arc<OnceCell<V>>>>,
}

impl<K, V> AsyncCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    pub fn new() -> Self {
        AsyncCache {
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Return the cached value for `key`, running `load` to produce it if no
    /// other caller has already done (or is currently doing) so.
    pub async fn get_or_load<F, Fut>(&self, key: K, load: F) -> V
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = V>,
    {
        let cell = {
            let mut entries = self.entries.lock().await;
            entries.entry(key).or_default().clone()
        };
        cell.get_or_init(load).await.clone()
    }

    /// Whether `key` has a completed value. Pending loads do not count.
    pub async fn contains(&self, key: &K) -> bool {
        let entries = self.entries.lock().await;
        entries.get(key).map(|c| c.get().is_some()).unwrap_or(false)
    }
}

impl<K, V> Default for AsyncCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}
