// atelier-suggestions/src/cache.rs

use crate::types::{SuggestionDomain, SuggestionItem};
use dashmap::DashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::debug;

/// Default time-to-live for cached suggestion lists
pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

/// Compose the cache key for a domain/query pair
///
/// Queries are compared case-insensitively, so the key lowers the query.
pub fn cache_key(domain: SuggestionDomain, query: &str) -> String {
    format!("{}:{}", domain.as_str(), query.to_lowercase())
}

/// Cached suggestion list with its expiry
#[derive(Debug, Clone)]
struct CacheEntry {
    items: Vec<SuggestionItem>,
    expires_at: Instant,
}

impl CacheEntry {
    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// Keyed TTL store for computed suggestion lists
///
/// Expiry is checked on read; expired entries are left in place until the
/// next `set` overwrites them or `purge_expired` drops them. There is no
/// capacity bound: the key space is small (domain x typed queries) and
/// entries age out within the TTL window.
pub struct SuggestionCache {
    entries: Arc<DashMap<String, CacheEntry>>,
    ttl: Duration,
}

impl SuggestionCache {
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_TTL)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            entries: Arc::new(DashMap::new()),
            ttl,
        }
    }

    /// Return the cached list if the entry is still live
    pub fn get(&self, key: &str) -> Option<Vec<SuggestionItem>> {
        let entry = self.entries.get(key)?;
        if entry.is_expired() {
            debug!(key = %key, "cache entry expired");
            return None;
        }
        Some(entry.items.clone())
    }

    /// Store a list under `key`, overwriting any previous entry
    pub fn set(&self, key: String, items: Vec<SuggestionItem>) {
        let entry = CacheEntry {
            items,
            expires_at: Instant::now() + self.ttl,
        };
        self.entries.insert(key, entry);
    }

    /// Unconditionally drop all entries
    pub fn clear(&self) {
        self.entries.clear();
        debug!("suggestion cache cleared");
    }

    /// Drop entries that have aged out; never called implicitly
    pub fn purge_expired(&self) {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired());

        debug!(
            purged = before - self.entries.len(),
            remaining = self.entries.len(),
            "purged expired cache entries"
        );
    }

    /// (total, expired) entry counts
    pub fn stats(&self) -> (usize, usize) {
        let total = self.entries.len();
        let expired = self
            .entries
            .iter()
            .filter(|entry| entry.value().is_expired())
            .count();

        (total, expired)
    }
}

impl Default for SuggestionCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Dimension;

    fn item(text: &str) -> SuggestionItem {
        SuggestionItem::new(Dimension::Tag, text, text)
    }

    #[test]
    fn test_get_within_ttl() {
        let cache = SuggestionCache::new();
        cache.set("creations:bracelet".to_string(), vec![item("bijoux")]);

        let hit = cache.get("creations:bracelet").unwrap();
        assert_eq!(hit.len(), 1);
        assert_eq!(hit[0].text, "bijoux");
        assert!(cache.get("creations:collier").is_none());
    }

    #[test]
    fn test_expired_entry_is_a_miss() {
        let cache = SuggestionCache::with_ttl(Duration::from_millis(10));
        cache.set("creations:bracelet".to_string(), vec![item("bijoux")]);

        std::thread::sleep(Duration::from_millis(20));
        assert!(cache.get("creations:bracelet").is_none());

        // Still present until purged
        assert_eq!(cache.stats(), (1, 1));
        cache.purge_expired();
        assert_eq!(cache.stats(), (0, 0));
    }

    #[test]
    fn test_set_overwrites() {
        let cache = SuggestionCache::new();
        cache.set("creations:bois".to_string(), vec![item("chêne")]);
        cache.set("creations:bois".to_string(), vec![item("noyer"), item("hêtre")]);

        assert_eq!(cache.get("creations:bois").unwrap().len(), 2);
    }

    #[test]
    fn test_clear_empties_all_keys() {
        let cache = SuggestionCache::new();
        cache.set("creations:a1".to_string(), vec![item("x")]);
        cache.set("creators:a1".to_string(), vec![item("y")]);

        cache.clear();
        assert_eq!(cache.stats(), (0, 0));
    }

    #[test]
    fn test_cache_key_lowers_query() {
        assert_eq!(
            cache_key(SuggestionDomain::Creations, "Bracelet"),
            "creations:bracelet"
        );
        assert_eq!(cache_key(SuggestionDomain::Cities, "Paris"), "cities:paris");
    }
}
