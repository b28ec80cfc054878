use crate::model::booking::Booking;
use anyhow::Result;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Identity of a loaded source file: its path plus a fingerprint of the
/// bytes (size, mtime, hash — whatever the ingestion layer uses). A
/// re-exported file gets a new fingerprint and therefore a cache miss.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceId {
    pub path: String,
    pub fingerprint: u64,
}

impl SourceId {
    pub fn new(path: impl Into<String>, fingerprint: u64) -> Self {
        Self {
            path: path.into(),
            fingerprint,
        }
    }
}

/// Memoized booking loads with an explicit lifecycle. The cache is a
/// value the caller owns, not process-global state: whoever holds it
/// decides when entries appear and when they are invalidated.
#[derive(Debug, Default)]
pub struct DatasetCache {
    entries: HashMap<SourceId, Vec<Booking>>,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &SourceId) -> Option<&[Booking]> {
        self.entries.get(id).map(Vec::as_slice)
    }

    /// Return the cached bookings for `id`, running `load` only on a
    /// miss. A failed load caches nothing.
    pub fn get_or_load<F>(&mut self, id: SourceId, load: F) -> Result<&[Booking]>
    where
        F: FnOnce() -> Result<Vec<Booking>>,
    {
        match self.entries.entry(id) {
            Entry::Occupied(e) => Ok(e.into_mut().as_slice()),
            Entry::Vacant(v) => Ok(v.insert(load()?).as_slice()),
        }
    }

    pub fn insert(&mut self, id: SourceId, bookings: Vec<Booking>) {
        self.entries.insert(id, bookings);
    }

    /// Drop one exact (path, fingerprint) entry.
    pub fn invalidate(&mut self, id: &SourceId) -> bool {
        self.entries.remove(id).is_some()
    }

    /// Drop every cached generation of a path, whatever its fingerprint.
    pub fn invalidate_path(&mut self, path: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|id, _| id.path != path);
        before - self.entries.len()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::booking::Source;
    use anyhow::anyhow;
    use chrono::NaiveDate;

    fn sample() -> Vec<Booking> {
        let date = NaiveDate::from_ymd_opt(2025, 10, 5).unwrap();
        vec![Booking::new(date, 4, Source::Reservation)]
    }

    #[test]
    fn test_get_or_load_runs_loader_once() {
        let mut cache = DatasetCache::new();
        let id = SourceId::new("master.csv", 1);
        let mut calls = 0;

        for _ in 0..3 {
            let bookings = cache
                .get_or_load(id.clone(), || {
                    calls += 1;
                    Ok(sample())
                })
                .unwrap();
            assert_eq!(bookings.len(), 1);
        }
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_failed_load_caches_nothing() {
        let mut cache = DatasetCache::new();
        let id = SourceId::new("master.csv", 1);

        let err = cache.get_or_load(id.clone(), || Err(anyhow!("disk gone")));
        assert!(err.is_err());
        assert!(cache.is_empty());

        // A later load still gets its chance.
        cache.get_or_load(id.clone(), || Ok(sample())).unwrap();
        assert_eq!(cache.len(), 1);
        assert!(cache.get(&id).is_some());
    }

    #[test]
    fn test_new_fingerprint_misses() {
        let mut cache = DatasetCache::new();
        cache.insert(SourceId::new("master.csv", 1), sample());
        assert!(cache.get(&SourceId::new("master.csv", 2)).is_none());
    }

    #[test]
    fn test_invalidate_path_drops_all_generations() {
        let mut cache = DatasetCache::new();
        cache.insert(SourceId::new("master.csv", 1), sample());
        cache.insert(SourceId::new("master.csv", 2), sample());
        cache.insert(SourceId::new("other.csv", 1), sample());

        assert_eq!(cache.invalidate_path("master.csv"), 2);
        assert_eq!(cache.len(), 1);
        assert!(cache.get(&SourceId::new("other.csv", 1)).is_some());

        assert!(cache.invalidate(&SourceId::new("other.csv", 1)));
        assert!(cache.is_empty());
    }
}
