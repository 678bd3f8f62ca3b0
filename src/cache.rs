// src/cache.rs
//! In-memory entity cache.
//!
//! One bounded LRU per entity kind, keyed by id. Entries are whole `Arc` snapshots, so
//! readers never observe a half-updated entity; concurrent writers resolve last-writer-wins
//! among equally complete snapshots. Placeholder entities (id 0) are never stored.

use std::{num::NonZeroUsize, sync::Arc};

use lru::LruCache;
use once_cell::sync::Lazy;
use parking_lot::Mutex;

use crate::config::consts::CACHE_CAPACITY;
use crate::model::{Band, Disc, Entity, Label, Track};

pub struct EntityCache<E: Entity> {
    inner: Mutex<LruCache<u64, Arc<E>>>,
}

impl<E: Entity> EntityCache<E> {
    pub fn new(capacity: usize) -> Self {
        let cap = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self { inner: Mutex::new(LruCache::new(cap)) }
    }

    pub fn get(&self, id: u64) -> Option<Arc<E>> {
        self.inner.lock().get(&id).cloned()
    }

    pub fn contains(&self, id: u64) -> bool {
        self.inner.lock().contains(&id)
    }

    /// Store `entity` unless the cached copy is more complete; returns whichever
    /// snapshot the cache holds afterwards.
    pub fn offer(&self, entity: E) -> Arc<E> {
        if entity.is_placeholder() {
            return Arc::new(entity);
        }
        let mut inner = self.inner.lock();
        if let Some(existing) = inner.get(&entity.id()) {
            if existing.richness() > entity.richness() {
                return Arc::clone(existing);
            }
        }
        let fresh = Arc::new(entity);
        inner.put(fresh.id(), Arc::clone(&fresh));
        fresh
    }

    /// Unconditional replace.
    pub fn put(&self, entity: E) -> Arc<E> {
        let fresh = Arc::new(entity);
        if !fresh.is_placeholder() {
            self.inner.lock().put(fresh.id(), Arc::clone(&fresh));
        }
        fresh
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.inner.lock().clear();
    }
}

/// One cache per entity kind.
#[derive(Clone)]
pub struct Caches {
    pub labels: Arc<EntityCache<Label>>,
    pub bands: Arc<EntityCache<Band>>,
    pub discs: Arc<EntityCache<Disc>>,
    pub tracks: Arc<EntityCache<Track>>,
}

static GLOBAL: Lazy<Caches> = Lazy::new(|| Caches::new(CACHE_CAPACITY));

impl Caches {
    pub fn new(capacity: usize) -> Self {
        Self {
            labels: Arc::new(EntityCache::new(capacity)),
            bands: Arc::new(EntityCache::new(capacity)),
            discs: Arc::new(EntityCache::new(capacity)),
            tracks: Arc::new(EntityCache::new(capacity)),
        }
    }

    /// Process-wide caches; lives as long as the process.
    pub fn global() -> Caches {
        GLOBAL.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DiscType;
    use std::thread;

    #[test]
    fn offer_keeps_the_richer_snapshot() {
        let cache = EntityCache::<Track>::new(8);
        let mut rich = Track::new(1, "Angel of Death");
        rich.lyrics = s!("...");
        rich.disc_type = DiscType::FullLength;
        cache.offer(rich);

        let kept = cache.offer(Track::new(1, "Angel of Death"));
        assert_eq!(kept.lyrics, "...");

        let mut richer_still = Track::new(1, "Angel of Death");
        richer_still.lyrics = s!("new");
        richer_still.disc_type = DiscType::FullLength;
        assert_eq!(cache.offer(richer_still).lyrics, "new");
    }

    #[test]
    fn placeholders_are_not_cached() {
        let cache = EntityCache::<Band>::new(8);
        cache.offer(Band::various());
        cache.put(Band::various());
        assert!(cache.is_empty());
    }

    #[test]
    fn bounded_lru() {
        let cache = EntityCache::<Band>::new(2);
        cache.put(Band::new(1, "a"));
        cache.put(Band::new(2, "b"));
        cache.get(1);
        cache.put(Band::new(3, "c"));
        assert!(cache.contains(1));
        assert!(!cache.contains(2));
        assert_eq!(cache.len(), 2);
        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn concurrent_offers_do_not_corrupt() {
        let cache = Arc::new(EntityCache::<Band>::new(64));
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let cache = Arc::clone(&cache);
                thread::spawn(move || {
                    for id in 1..=32u64 {
                        cache.offer(Band::new(id, format!("band {id} from {t}")));
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(cache.len(), 32);
        for id in 1..=32u64 {
            assert!(cache.get(id).unwrap().name.starts_with(&format!("band {id} from")));
        }
    }
}
