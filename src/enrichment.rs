use crate::error::AppError;
use std::collections::{HashMap, HashSet};
use std::fmt::Display;
use std::future::Future;
use std::hash::Hash;

/// Collects the distinct foreign-key values from a page of rows.
///
/// Rows where `key` returns `None` (absent reference) are skipped. The
/// result is a set: repeated ids appear exactly once.
pub fn extract_unique_ids<T, K, F>(rows: &[T], key: F) -> HashSet<K>
where
    K: Eq + Hash,
    F: Fn(&T) -> Option<K>,
{
    rows.iter().filter_map(key).collect()
}

/// Screen-lifetime cache of resolved entities keyed by id.
///
/// Rebuilt on navigation; within one screen it guarantees an id is
/// fetched at most once per load cycle.
#[derive(Debug, Clone)]
pub struct EntityCache<K, V> {
    entries: HashMap<K, V>,
}

impl<K: Eq + Hash + Clone, V> EntityCache<K, V> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn get(&self, id: &K) -> Option<&V> {
        self.entries.get(id)
    }

    pub fn insert(&mut self, id: K, value: V) {
        self.entries.insert(id, value);
    }

    #[allow(dead_code)]
    pub fn contains(&self, id: &K) -> bool {
        self.entries.contains_key(id)
    }

    /// Ids from `wanted` not yet resolved.
    pub fn missing_from(&self, wanted: &HashSet<K>) -> Vec<K> {
        wanted
            .iter()
            .filter(|id| !self.entries.contains_key(id))
            .cloned()
            .collect()
    }

    pub fn extend(&mut self, resolved: HashMap<K, V>) {
        self.entries.extend(resolved);
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<K: Eq + Hash + Clone, V> Default for EntityCache<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolves a batch of foreign keys through `fetch_one`, fanned out
/// concurrently, tolerating per-id failures.
///
/// A failed lookup is logged and left out of the result; the remaining
/// ids still resolve. Callers render a fallback for ids absent from the
/// returned map.
pub async fn batch_resolve<K, V, F, Fut>(ids: Vec<K>, fetch_one: F) -> HashMap<K, V>
where
    K: Eq + Hash + Clone + Display + Send + 'static,
    V: Send + 'static,
    F: Fn(K) -> Fut,
    Fut: Future<Output = Result<V, AppError>> + Send + 'static,
{
    use tokio::task::JoinSet;

    let total = ids.len();
    let mut set = JoinSet::new();
    for id in ids {
        let fut = fetch_one(id.clone());
        set.spawn(async move { (id, fut.await) });
    }

    let mut resolved = HashMap::new();
    let mut failed = 0usize;
    while let Some(joined) = set.join_next().await {
        match joined {
            Ok((id, Ok(value))) => {
                resolved.insert(id, value);
            }
            Ok((id, Err(e))) => {
                failed += 1;
                log::warn!("Lookup for id {} failed: {}", id, e);
            }
            Err(e) => {
                failed += 1;
                log::warn!("Lookup task failed: {}", e);
            }
        }
    }

    if failed > 0 {
        log::debug!("{}/{} lookups failed, showing fallbacks", failed, total);
    }
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    struct Row {
        cat_id: Option<i64>,
    }

    #[test]
    fn test_extract_unique_ids_deduplicates() {
        let rows = vec![
            Row { cat_id: Some(3) },
            Row { cat_id: Some(7) },
            Row { cat_id: Some(3) },
            Row { cat_id: None },
        ];
        let ids = extract_unique_ids(&rows, |r| r.cat_id);
        assert_eq!(ids.len(), 2);
        assert!(ids.contains(&3));
        assert!(ids.contains(&7));
    }

    #[test]
    fn test_cache_reports_only_missing_ids() {
        let mut cache: EntityCache<i64, &str> = EntityCache::new();
        cache.insert(3, "Mimi");

        let wanted: HashSet<i64> = [3, 7].into_iter().collect();
        let missing = cache.missing_from(&wanted);
        assert_eq!(missing, vec![7]);
    }

    #[tokio::test]
    async fn test_batch_resolve_fetches_each_id_once() {
        let calls: Arc<Mutex<Vec<i64>>> = Arc::new(Mutex::new(Vec::new()));

        // Two rows sharing a cat id produce a single lookup
        let rows = vec![Row { cat_id: Some(3) }, Row { cat_id: Some(3) }];
        let ids: Vec<i64> = extract_unique_ids(&rows, |r| r.cat_id).into_iter().collect();

        let resolved = batch_resolve(ids, |id| {
            let calls = Arc::clone(&calls);
            async move {
                calls.lock().unwrap().push(id);
                Ok::<_, AppError>(format!("cat-{}", id))
            }
        })
        .await;

        assert_eq!(calls.lock().unwrap().len(), 1);
        assert_eq!(resolved.get(&3).map(String::as_str), Some("cat-3"));
    }

    #[tokio::test]
    async fn test_batch_resolve_tolerates_partial_failure() {
        let resolved = batch_resolve(vec![1i64, 2, 3], |id| async move {
            if id == 2 {
                Err(AppError::Api {
                    status: 500,
                    message: None,
                })
            } else {
                Ok(format!("cat-{}", id))
            }
        })
        .await;

        // The failing id is absent; the other two still resolve
        assert_eq!(resolved.len(), 2);
        assert!(resolved.contains_key(&1));
        assert!(!resolved.contains_key(&2));
        assert!(resolved.contains_key(&3));
    }

    #[tokio::test]
    async fn test_cached_ids_are_not_refetched() {
        let mut cache: EntityCache<i64, String> = EntityCache::new();
        cache.insert(1, "cached".to_string());

        let wanted: HashSet<i64> = [1, 2].into_iter().collect();
        let calls: Arc<Mutex<Vec<i64>>> = Arc::new(Mutex::new(Vec::new()));

        let resolved = batch_resolve(cache.missing_from(&wanted), |id| {
            let calls = Arc::clone(&calls);
            async move {
                calls.lock().unwrap().push(id);
                Ok::<_, AppError>(format!("cat-{}", id))
            }
        })
        .await;
        cache.extend(resolved);

        assert_eq!(*calls.lock().unwrap(), vec![2]);
        assert_eq!(cache.get(&1).map(String::as_str), Some("cached"));
        assert_eq!(cache.get(&2).map(String::as_str), Some("cat-2"));
    }
}
