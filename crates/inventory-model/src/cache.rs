//! In-memory record cache.

use std::collections::HashMap;

use tracing::debug;

use crate::ids::RecordId;
use crate::shape::Record;

/// Last-fetched records of one resource, keyed by [`Record::cache_key`].
///
/// Records without a key are not cached.
#[derive(Debug, Clone)]
pub struct RecordCache<T> {
    entries: HashMap<RecordId, T>,
}

impl<T> Default for RecordCache<T> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<T: Record> RecordCache<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &RecordId) -> Option<&T> {
        self.entries.get(id)
    }

    pub fn contains(&self, id: &RecordId) -> bool {
        self.entries.contains_key(id)
    }

    /// Insert or overwrite a record. Returns `false` when it has no key.
    pub fn insert(&mut self, record: T) -> bool {
        match record.cache_key() {
            Some(key) => {
                self.entries.insert(key, record);
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: &RecordId) -> Option<T> {
        self.entries.remove(id)
    }

    /// Replace the whole cache with a freshly listed set.
    pub fn replace_all(&mut self, records: &[T]) {
        self.entries.clear();
        for record in records {
            self.insert(record.clone());
        }
        debug!(kind = T::KIND, entries = self.entries.len(), "cache replaced");
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Cached records, ordered by key.
    pub fn records(&self) -> Vec<&T> {
        let mut keys: Vec<&RecordId> = self.entries.keys().collect();
        keys.sort();
        keys.into_iter().filter_map(|k| self.entries.get(k)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::Product;
    use crate::supplier::Supplier;
    use serde_json::json;

    fn product(value: serde_json::Value) -> Product {
        Product::from_value(&value).unwrap()
    }

    #[test]
    fn test_replace_all_drops_stale_entries() {
        let mut cache = RecordCache::new();
        cache.insert(product(json!({"id": "old", "sku": "Z"})));

        cache.replace_all(&[
            product(json!({"id": "p1", "sku": "A1"})),
            product(json!({"id": "p2", "sku": "B2"})),
        ]);

        assert_eq!(cache.len(), 2);
        assert!(!cache.contains(&RecordId::new("old")));
        assert_eq!(cache.get(&RecordId::new("p2")).unwrap().sku, "B2");
    }

    #[test]
    fn test_keyless_records_are_skipped() {
        let mut cache = RecordCache::new();
        assert!(!cache.insert(product(json!({"name": "No id"}))));
        assert!(cache.is_empty());
    }

    #[test]
    fn test_same_id_overwrites() {
        let mut cache = RecordCache::new();
        cache.insert(product(json!({"id": 7, "name": "Before"})));
        cache.insert(product(json!({"id": "7", "name": "After"})));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(&RecordId::new("7")).unwrap().name, "After");
    }

    #[test]
    fn test_suppliers_cached_by_name_without_id() {
        let mut cache = RecordCache::new();
        cache.insert(Supplier::from_value(&json!({"name": "Acme"})).unwrap());
        assert!(cache.contains(&RecordId::new("Acme")));
        assert!(cache.remove(&RecordId::new("Acme")).is_some());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_records_are_ordered() {
        let mut cache = RecordCache::new();
        cache.replace_all(&[product(json!({"id": "b"})), product(json!({"id": "a"}))]);
        let ids: Vec<_> = cache.records().iter().map(|p| p.record_id()).collect();
        assert_eq!(ids, vec![Some(RecordId::new("a")), Some(RecordId::new("b"))]);
    }
}
