use std::num::NonZeroUsize;

use lru::LruCache;
use tower_lsp_server::ls_types::Hover;

pub(crate) const HOVER_CACHE_CAPACITY: NonZeroUsize = match NonZeroUsize::new(100) {
    Some(capacity) => capacity,
    None => panic!("hover cache capacity must be non-zero"),
};

/// Identifies a hover request against a specific document revision.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct HoverKey {
    pub uri: String,
    pub version: i32,
    pub line: u32,
    pub character: u32,
}

/// Bounded hover cache that evicts the oldest entry when full.
///
/// Lookups use `peek`, so eviction follows insertion order rather than use.
#[derive(Debug)]
pub(crate) struct HoverCache {
    entries: LruCache<HoverKey, Hover>,
}

impl Default for HoverCache {
    fn default() -> Self {
        Self::with_capacity(HOVER_CACHE_CAPACITY)
    }
}

impl HoverCache {
    pub(crate) fn with_capacity(capacity: NonZeroUsize) -> Self {
        Self {
            entries: LruCache::new(capacity),
        }
    }

    pub(crate) fn get(&self, key: &HoverKey) -> Option<&Hover> {
        self.entries.peek(key)
    }

    pub(crate) fn insert(&mut self, key: HoverKey, hover: Hover) {
        self.entries.put(key, hover);
    }

    /// Drop every entry for `uri`, whatever its version.
    pub(crate) fn invalidate_document(&mut self, uri: &str) {
        let stale: Vec<HoverKey> = self
            .entries
            .iter()
            .filter(|(key, _)| key.uri == uri)
            .map(|(key, _)| key.clone())
            .collect();

        for key in &stale {
            self.entries.pop(key);
        }
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use tower_lsp_server::ls_types::HoverContents;
    use tower_lsp_server::ls_types::MarkedString;

    use super::*;

    fn key(uri: &str, line: u32) -> HoverKey {
        HoverKey {
            uri: uri.to_string(),
            version: 1,
            line,
            character: 0,
        }
    }

    fn hover(text: &str) -> Hover {
        Hover {
            contents: HoverContents::Scalar(MarkedString::String(text.to_string())),
            range: None,
        }
    }

    fn capacity(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn test_get_after_insert() {
        let mut cache = HoverCache::default();
        cache.insert(key("a", 0), hover("x"));
        assert_eq!(cache.get(&key("a", 0)), Some(&hover("x")));
        assert_eq!(cache.get(&key("a", 1)), None);
    }

    #[test]
    fn test_version_is_part_of_key() {
        let mut cache = HoverCache::default();
        cache.insert(key("a", 0), hover("x"));
        let newer = HoverKey {
            version: 2,
            ..key("a", 0)
        };
        assert_eq!(cache.get(&newer), None);
    }

    #[test]
    fn test_evicts_oldest_first() {
        let mut cache = HoverCache::with_capacity(capacity(2));
        cache.insert(key("a", 0), hover("0"));
        cache.insert(key("a", 1), hover("1"));
        cache.insert(key("a", 2), hover("2"));

        assert_eq!(cache.len(), 2);
        assert!(cache.get(&key("a", 0)).is_none());
        assert!(cache.get(&key("a", 1)).is_some());
        assert!(cache.get(&key("a", 2)).is_some());
    }

    #[test]
    fn test_lookup_does_not_refresh_entry() {
        let mut cache = HoverCache::with_capacity(capacity(2));
        cache.insert(key("a", 0), hover("0"));
        cache.insert(key("a", 1), hover("1"));
        assert!(cache.get(&key("a", 0)).is_some());
        cache.insert(key("a", 2), hover("2"));

        assert!(cache.get(&key("a", 0)).is_none());
    }

    #[test]
    fn test_default_capacity() {
        let mut cache = HoverCache::default();
        for line in 0..150 {
            cache.insert(key("a", line), hover("x"));
        }
        assert_eq!(cache.len(), HOVER_CACHE_CAPACITY.get());
        assert!(cache.get(&key("a", 49)).is_none());
        assert!(cache.get(&key("a", 50)).is_some());
    }

    #[test]
    fn test_reinsert_replaces_entry() {
        let mut cache = HoverCache::with_capacity(capacity(2));
        cache.insert(key("a", 0), hover("0"));
        cache.insert(key("a", 0), hover("new"));
        cache.insert(key("a", 1), hover("1"));
        assert_eq!(cache.get(&key("a", 0)), Some(&hover("new")));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_invalidate_document() {
        let mut cache = HoverCache::default();
        cache.insert(key("a", 0), hover("x"));
        cache.insert(key("a", 3), hover("x"));
        cache.insert(key("b", 0), hover("y"));
        cache.invalidate_document("a");

        assert!(cache.get(&key("a", 0)).is_none());
        assert!(cache.get(&key("a", 3)).is_none());
        assert!(cache.get(&key("b", 0)).is_some());
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut cache = HoverCache::default();
        cache.insert(key("a", 0), hover("x"));
        cache.clear();
        assert_eq!(cache.len(), 0);
    }
}
