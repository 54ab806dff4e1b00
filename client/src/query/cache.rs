//! # Query Cache
//!
//! Keyed cache for server reads, modelled as a small state machine per key:
//! idle, fetching, resolved with data, or resolved with an error. The cache
//! holds data, the fetch tasks live elsewhere; callers ask [`QueryCache::begin_fetch`]
//! before spawning so concurrent fetches of the same key are deduplicated,
//! and deliver results through [`QueryCache::resolve`].
//!
//! Responses resolve last-wins: a resolve for a key the UI has since moved
//! away from still lands in that key's entry and simply stops being the one
//! rendered. Stale data keeps rendering while a refetch is in flight.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::core::error::AppError;

use super::key::QueryKey;

/// What a view needs to render one query: the latest data if any, whether a
/// fetch is in flight, and the latest error if the last fetch failed.
#[derive(Debug, Clone, Default)]
pub struct QueryState<T> {
    pub data: Option<T>,
    pub is_loading: bool,
    pub error: Option<AppError>,
}

#[derive(Debug, Clone)]
struct Entry<T> {
    data: Option<T>,
    error: Option<AppError>,
    in_flight: bool,
    fetched_at: Option<Instant>,
    /// Fetch epoch, bumped each time a fetch begins. An invalidation records
    /// the epoch it landed in, so a resolve only satisfies invalidations from
    /// before its own fetch started. An invalidation arriving while a fetch
    /// is in flight survives that fetch's resolve.
    epoch: u64,
    stale_since: Option<u64>,
}

impl<T> Entry<T> {
    fn is_stale(&self) -> bool {
        self.stale_since.is_some()
    }
}

impl<T> Default for Entry<T> {
    fn default() -> Self {
        Self {
            data: None,
            error: None,
            in_flight: false,
            fetched_at: None,
            epoch: 0,
            stale_since: None,
        }
    }
}

/// Cache of query entries for one data type.
#[derive(Debug, Clone, Default)]
pub struct QueryCache<T> {
    entries: HashMap<QueryKey, Entry<T>>,
    generation: u64,
}

impl<T: Clone> QueryCache<T> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            generation: 0,
        }
    }

    /// Render-facing snapshot for a key.
    pub fn state(&self, key: &QueryKey) -> QueryState<T> {
        match self.entries.get(key) {
            Some(entry) => QueryState {
                data: entry.data.clone(),
                is_loading: entry.in_flight && entry.data.is_none(),
                error: entry.error.clone(),
            },
            None => QueryState {
                data: None,
                is_loading: false,
                error: None,
            },
        }
    }

    /// Whether any fetch for this key is in flight, including refetches that
    /// still have stale data to show.
    pub fn is_fetching(&self, key: &QueryKey) -> bool {
        self.entries.get(key).map_or(false, |e| e.in_flight)
    }

    /// Mark a fetch as started. Returns false when one is already in flight
    /// for this key, in which case the caller must not spawn another.
    pub fn begin_fetch(&mut self, key: &QueryKey) -> bool {
        let entry = self.entries.entry(key.clone()).or_default();
        if entry.in_flight {
            return false;
        }
        entry.in_flight = true;
        entry.epoch += 1;
        true
    }

    /// Deliver a fetch result. The latest resolve for a key wins outright;
    /// there is no ordering guard beyond that.
    pub fn resolve(&mut self, key: &QueryKey, result: Result<T, AppError>) {
        self.resolve_at(key, result, Instant::now());
    }

    pub fn resolve_at(&mut self, key: &QueryKey, result: Result<T, AppError>, now: Instant) {
        let entry = self.entries.entry(key.clone()).or_default();
        entry.in_flight = false;
        entry.fetched_at = Some(now);
        // Only clear staleness from before this fetch began; an invalidation
        // during the flight means this response is already outdated.
        if entry.stale_since.is_some_and(|since| since < entry.epoch) {
            entry.stale_since = None;
        }
        match result {
            Ok(data) => {
                entry.data = Some(data);
                entry.error = None;
            }
            Err(e) => {
                // Keep prior data so the view does not blank out on a
                // failed refetch.
                entry.error = Some(e);
            }
        }
        self.generation = self.generation.wrapping_add(1);
    }

    /// Mark one key stale so the next [`needs_fetch`](Self::needs_fetch)
    /// reports true.
    pub fn invalidate(&mut self, key: &QueryKey) {
        if let Some(entry) = self.entries.get_mut(key) {
            entry.stale_since = Some(entry.epoch);
        }
    }

    /// Mark every key of an operation stale, regardless of parameters. This
    /// is how mutations invalidate: a created quote affects every cached
    /// search/sort combination of the list.
    pub fn invalidate_operation(&mut self, operation: &str) {
        for (key, entry) in self.entries.iter_mut() {
            if key.operation() == operation {
                entry.stale_since = Some(entry.epoch);
            }
        }
    }

    /// Whether this key should be fetched now: never fetched, explicitly
    /// invalidated, or (when `refetch_interval` is set) older than the
    /// interval. Always false while a fetch is in flight.
    pub fn needs_fetch(&self, key: &QueryKey, refetch_interval: Option<Duration>) -> bool {
        self.needs_fetch_at(key, refetch_interval, Instant::now())
    }

    pub fn needs_fetch_at(
        &self,
        key: &QueryKey,
        refetch_interval: Option<Duration>,
        now: Instant,
    ) -> bool {
        match self.entries.get(key) {
            None => true,
            Some(entry) => {
                if entry.in_flight {
                    return false;
                }
                if entry.is_stale() {
                    return true;
                }
                match (entry.fetched_at, refetch_interval) {
                    (Some(fetched_at), Some(interval)) => {
                        now.duration_since(fetched_at) >= interval
                    }
                    (None, _) => true,
                    (Some(_), None) => false,
                }
            }
        }
    }

    /// Monotonic counter bumped on every resolve; views compare it to decide
    /// whether anything changed.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::SortBy;

    fn key() -> QueryKey {
        QueryKey::quotes("", SortBy::UpdatedAt)
    }

    #[test]
    fn test_unknown_key_needs_fetch_and_is_idle() {
        let cache: QueryCache<Vec<u32>> = QueryCache::new();
        assert!(cache.needs_fetch(&key(), None));
        let state = cache.state(&key());
        assert!(state.data.is_none());
        assert!(!state.is_loading);
        assert!(state.error.is_none());
    }

    #[test]
    fn test_begin_fetch_deduplicates() {
        let mut cache: QueryCache<Vec<u32>> = QueryCache::new();
        assert!(cache.begin_fetch(&key()));
        assert!(!cache.begin_fetch(&key()));
        assert!(!cache.needs_fetch(&key(), None));
        assert!(cache.state(&key()).is_loading);
    }

    #[test]
    fn test_resolve_stores_data_and_clears_loading() {
        let mut cache: QueryCache<Vec<u32>> = QueryCache::new();
        cache.begin_fetch(&key());
        cache.resolve(&key(), Ok(vec![1, 2, 3]));
        let state = cache.state(&key());
        assert_eq!(state.data, Some(vec![1, 2, 3]));
        assert!(!state.is_loading);
        assert!(!cache.needs_fetch(&key(), None));
    }

    #[test]
    fn test_failed_refetch_keeps_prior_data() {
        let mut cache: QueryCache<Vec<u32>> = QueryCache::new();
        cache.begin_fetch(&key());
        cache.resolve(&key(), Ok(vec![1]));
        cache.invalidate(&key());
        cache.begin_fetch(&key());
        cache.resolve(&key(), Err(AppError::Http("boom".to_string())));
        let state = cache.state(&key());
        assert_eq!(state.data, Some(vec![1]));
        assert!(state.error.is_some());
    }

    #[test]
    fn test_last_resolve_wins() {
        let mut cache: QueryCache<Vec<u32>> = QueryCache::new();
        cache.begin_fetch(&key());
        cache.resolve(&key(), Ok(vec![1]));
        cache.begin_fetch(&key());
        cache.resolve(&key(), Ok(vec![2]));
        assert_eq!(cache.state(&key()).data, Some(vec![2]));
    }

    #[test]
    fn test_invalidate_operation_touches_all_params() {
        let mut cache: QueryCache<Vec<u32>> = QueryCache::new();
        let a = QueryKey::quotes("life", SortBy::Votes);
        let b = QueryKey::quotes("", SortBy::CreatedAt);
        for k in [&a, &b] {
            cache.begin_fetch(k);
            cache.resolve(k, Ok(vec![1]));
        }
        cache.invalidate_operation("quotes");
        assert!(cache.needs_fetch(&a, None));
        assert!(cache.needs_fetch(&b, None));
    }

    #[test]
    fn test_invalidation_during_inflight_fetch_survives_resolve() {
        let mut cache: QueryCache<Vec<u32>> = QueryCache::new();
        cache.begin_fetch(&key());
        // A mutation lands while the pre-mutation fetch is still out.
        cache.invalidate_operation("quotes");
        cache.resolve(&key(), Ok(vec![1]));

        // The resolved response predates the mutation, so the key is still
        // due for a refetch.
        assert!(cache.needs_fetch(&key(), None));

        // The follow-up fetch satisfies the invalidation.
        cache.begin_fetch(&key());
        cache.resolve(&key(), Ok(vec![2]));
        assert!(!cache.needs_fetch(&key(), None));
        assert_eq!(cache.state(&key()).data, Some(vec![2]));
    }

    #[test]
    fn test_invalidate_key_during_inflight_fetch_survives_resolve() {
        let mut cache: QueryCache<Vec<u32>> = QueryCache::new();
        cache.begin_fetch(&key());
        cache.invalidate(&key());
        cache.resolve(&key(), Ok(vec![1]));
        assert!(cache.needs_fetch(&key(), None));
    }

    #[test]
    fn test_refetch_interval() {
        let mut cache: QueryCache<Vec<u32>> = QueryCache::new();
        let start = Instant::now();
        cache.begin_fetch(&key());
        cache.resolve_at(&key(), Ok(vec![1]), start);

        let interval = Duration::from_secs(120);
        assert!(!cache.needs_fetch_at(&key(), Some(interval), start + Duration::from_secs(60)));
        assert!(cache.needs_fetch_at(&key(), Some(interval), start + Duration::from_secs(120)));
        // No interval means fresh data never refetches on its own.
        assert!(!cache.needs_fetch_at(&key(), None, start + Duration::from_secs(3600)));
    }

    #[test]
    fn test_generation_bumps_on_resolve() {
        let mut cache: QueryCache<Vec<u32>> = QueryCache::new();
        let before = cache.generation();
        cache.begin_fetch(&key());
        cache.resolve(&key(), Ok(vec![1]));
        assert_ne!(cache.generation(), before);
    }
}
