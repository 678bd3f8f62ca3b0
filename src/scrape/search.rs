// src/scrape/search.rs
//! Advanced search with cache reuse.
//!
//! Per search: build the query URL → fetch result pages → parse rows into skeletal
//! entities → for each hit, reuse the cached entity if the completeness predicate says
//! it already knows enough, else cache and return the skeletal one.

use std::sync::Arc;

use crate::{
    cache::{Caches, EntityCache},
    config::TrackQuery,
    core::Urls,
    error::Result,
    model::{Entity, Track},
    session::Session,
    specs::{self, Parsed},
};

use super::paging;

/// One searchable entity kind: its endpoint, row spec and cache.
pub trait SearchKind {
    type Entity: Entity;
    type Query;

    fn url(urls: &Urls, query: &Self::Query, start: usize, page_size: usize) -> String;

    /// Empty queries are refused by the site; skip the round-trip.
    fn is_empty(query: &Self::Query) -> bool;

    fn limit(query: &Self::Query) -> Option<usize>;

    fn parse_rows(rows: &[Vec<String>]) -> Parsed<Vec<Self::Entity>>;

    fn cache(caches: &Caches) -> &EntityCache<Self::Entity>;

    /// Default completeness predicate for this kind.
    fn has_all_information(entity: &Self::Entity) -> bool;

    /// Extra per-hit loading for fresh hits, see [`SearchService::load_extras`].
    fn load_extras(_session: &Session, _entity: &mut Self::Entity) -> Result<()> {
        Ok(())
    }
}

/// Song search; extras are the lyrics.
pub struct TrackSearch;

impl SearchKind for TrackSearch {
    type Entity = Track;
    type Query = TrackQuery;

    fn url(urls: &Urls, query: &TrackQuery, start: usize, page_size: usize) -> String {
        urls.track_search(query, start, page_size)
    }

    fn is_empty(query: &TrackQuery) -> bool {
        query.is_empty()
    }

    fn limit(query: &TrackQuery) -> Option<usize> {
        query.limit
    }

    fn parse_rows(rows: &[Vec<String>]) -> Parsed<Vec<Track>> {
        specs::search::parse_rows(rows)
    }

    fn cache(caches: &Caches) -> &EntityCache<Track> {
        &caches.tracks
    }

    fn has_all_information(track: &Track) -> bool {
        track.has_all_information()
    }

    fn load_extras(session: &Session, track: &mut Track) -> Result<()> {
        let body = session.fetcher().fetch(&session.urls().lyrics(track.id()))?;
        track.lyrics = specs::search::parse_lyrics(&body);
        Ok(())
    }
}

/// Where a returned hit came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitState {
    /// The cache already held a complete enough instance.
    ReusedFromCache,
    /// Built from the result row (plus extras, if enabled).
    Skeletal,
}

#[derive(Clone, Debug)]
pub struct Hit<E> {
    pub entity: Arc<E>,
    pub state: HitState,
}

pub struct SearchService<'s, K: SearchKind> {
    session: &'s Session,
    complete: fn(&K::Entity) -> bool,
    load_extras: bool,
}

pub type TrackSearchService<'s> = SearchService<'s, TrackSearch>;

impl<'s, K: SearchKind> SearchService<'s, K> {
    pub fn new(session: &'s Session) -> Self {
        Self::with_predicate(session, K::has_all_information)
    }

    /// Use a different completeness predicate for cache reuse.
    pub fn with_predicate(session: &'s Session, complete: fn(&K::Entity) -> bool) -> Self {
        Self { session, complete, load_extras: false }
    }

    /// Also run the kind's extra loading (lyrics for tracks) on fresh hits.
    pub fn load_extras(mut self, on: bool) -> Self {
        self.load_extras = on;
        self
    }

    pub fn search(&self, query: &K::Query) -> Result<Vec<Hit<K::Entity>>> {
        if K::is_empty(query) {
            logw!("Refusing to run an empty search");
            return Ok(Vec::new());
        }
        let rows = self.fetch_rows(query)?;
        let parsed = K::parse_rows(&rows);
        if parsed.skipped > 0 {
            logd!("Search: skipped {} row(s) without an id", parsed.skipped);
        }

        let cache = K::cache(self.session.caches());
        let mut hits = Vec::with_capacity(parsed.items.len());
        for mut fresh in parsed.items {
            if let Some(cached) = cache.get(fresh.id()).filter(|c| (self.complete)(c)) {
                hits.push(Hit { entity: cached, state: HitState::ReusedFromCache });
                continue;
            }
            if self.load_extras {
                if let Err(e) = K::load_extras(self.session, &mut fresh) {
                    logw!("{:?} {}: extras not loaded: {e}", <K::Entity as Entity>::KIND, fresh.id());
                }
            }
            // the predicate rejected whatever was cached, so the fresh row replaces it
            hits.push(Hit { entity: cache.put(fresh), state: HitState::Skeletal });
        }
        logf!("Search returned {} hit(s)", hits.len());
        Ok(hits)
    }

    fn fetch_rows(&self, query: &K::Query) -> Result<Vec<Vec<String>>> {
        let session = self.session;
        paging::fetch_all(session, session.config().search_page_size, K::limit(query), |start, size| {
            K::url(session.urls(), query, start, size)
        })
    }
}
