use std::collections::HashSet;

/// Sources that finished loading successfully at least once.
///
/// Append-only: there is one source per thumbnail, so the set is bounded by
/// the strip size and never evicts.
#[derive(Debug, Clone, Default)]
pub struct ImageLoadCache {
    loaded: HashSet<String>,
}

impl ImageLoadCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has(&self, source: &str) -> bool {
        self.loaded.contains(source)
    }

    /// Records a known-good source. Recording twice is a no-op.
    pub fn record(&mut self, source: &str) {
        if !self.loaded.contains(source) {
            self.loaded.insert(source.to_string());
        }
    }

    pub fn len(&self) -> usize {
        self.loaded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loaded.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::ImageLoadCache;

    #[test]
    fn record_is_idempotent() {
        let mut cache = ImageLoadCache::new();
        cache.record("a.jpg");
        cache.record("a.jpg");
        assert!(cache.has("a.jpg"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn unknown_source_is_not_cached() {
        let cache = ImageLoadCache::new();
        assert!(!cache.has("b.jpg"));
        assert!(cache.is_empty());
    }
}
