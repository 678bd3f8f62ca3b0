// src/scrape/related.rs
//! Related-collection loaders: fetch every page of a label listing and hand the rows to
//! the matching row spec.
//!
//! A disabled sort mode means "do not load": the loader returns an empty collection
//! without touching the network. Any other mode selects the server-side ordering, and
//! the row order coming back is kept as is.

use crate::{
    cache::Caches,
    config::RelatedRequest,
    core::urls::LabelListing,
    error::Result,
    model::{CurrentRoster, PastRoster, Releases},
    session::Session,
    specs::{Parsed, releases, roster},
};

use super::paging;

/// One kind of label listing and how its rows become a collection.
pub trait RelatedKind {
    type Output: Default;

    const LISTING: LabelListing;
    const NAME: &'static str;

    fn from_rows(rows: &[Vec<String>]) -> Parsed<Self::Output>;

    fn is_empty(out: &Self::Output) -> bool;

    /// Make the entities found in the collection known to the caches.
    fn remember(_out: &Self::Output, _caches: &Caches) {}
}

pub struct CurrentRosterKind;
pub struct PastRosterKind;
pub struct ReleasesKind;

impl RelatedKind for CurrentRosterKind {
    type Output = CurrentRoster;
    const LISTING: LabelListing = LabelListing::CurrentRoster;
    const NAME: &'static str = "current roster";

    fn from_rows(rows: &[Vec<String>]) -> Parsed<CurrentRoster> {
        roster::parse_current(rows)
    }

    fn is_empty(out: &CurrentRoster) -> bool {
        out.is_empty()
    }

    fn remember(out: &CurrentRoster, caches: &Caches) {
        for band in out {
            caches.bands.offer(band.clone());
        }
    }
}

impl RelatedKind for PastRosterKind {
    type Output = PastRoster;
    const LISTING: LabelListing = LabelListing::PastRoster;
    const NAME: &'static str = "past roster";

    fn from_rows(rows: &[Vec<String>]) -> Parsed<PastRoster> {
        roster::parse_past(rows)
    }

    fn is_empty(out: &PastRoster) -> bool {
        out.is_empty()
    }

    fn remember(out: &PastRoster, caches: &Caches) {
        for band in out.keys() {
            caches.bands.offer(band.clone());
        }
    }
}

impl RelatedKind for ReleasesKind {
    type Output = Releases;
    const LISTING: LabelListing = LabelListing::Releases;
    const NAME: &'static str = "releases";

    fn from_rows(rows: &[Vec<String>]) -> Parsed<Releases> {
        releases::parse(rows)
    }

    fn is_empty(out: &Releases) -> bool {
        out.is_empty()
    }

    fn remember(out: &Releases, caches: &Caches) {
        for disc in out.values().flatten() {
            caches.discs.offer(disc.clone());
        }
    }
}

/// Every row of one listing, page after page, until a short page, the reported total
/// or the request limit.
pub fn fetch_rows(
    session: &Session,
    which: LabelListing,
    req: &RelatedRequest,
) -> Result<Vec<Vec<String>>> {
    if !req.sort.is_enabled() {
        return Ok(Vec::new());
    }
    paging::fetch_all(session, session.config().listing_page_size, req.limit, |start, size| {
        session.urls().label_listing(which, req, start, size)
    })
}

/// Load one related collection of the request's owner.
pub fn load<K: RelatedKind>(session: &Session, req: &RelatedRequest) -> Result<K::Output> {
    if !req.sort.is_enabled() {
        return Ok(K::Output::default());
    }
    let rows = fetch_rows(session, K::LISTING, req)?;
    let parsed = K::from_rows(&rows);
    if parsed.skipped > 0 {
        logd!("Label {}: skipped {} malformed {} row(s)", req.owner_id, parsed.skipped, K::NAME);
    }
    K::remember(&parsed.items, session.caches());
    logd!(
        "Label {}: {} {} row(s), sorted {}",
        req.owner_id,
        rows.len(),
        K::NAME,
        req.sort.label()
    );
    Ok(parsed.items)
}

pub fn current_roster(session: &Session, req: &RelatedRequest) -> Result<CurrentRoster> {
    load::<CurrentRosterKind>(session, req)
}

pub fn past_roster(session: &Session, req: &RelatedRequest) -> Result<PastRoster> {
    load::<PastRosterKind>(session, req)
}

pub fn releases(session: &Session, req: &RelatedRequest) -> Result<Releases> {
    load::<ReleasesKind>(session, req)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{
        config::{ScraperConfig, SortMode},
        core::{OfflineFetcher, Urls},
        model::{Band, Entity},
    };

    const BASE: &str = "http://offline";

    fn session(fetcher: OfflineFetcher, page_size: usize) -> (Session, Arc<OfflineFetcher>) {
        let fetcher = Arc::new(fetcher);
        let mut config = ScraperConfig::offline(BASE);
        config.listing_page_size = page_size;
        (Session::with_fetchers(config, fetcher.clone()), fetcher)
    }

    fn band_row(id: u64, name: &str) -> String {
        format!(r#"["<a href=\"{BASE}/bands/{name}/{id}\">{name}</a>", "Death Metal", "Sweden"]"#)
    }

    fn page(total: usize, rows: &[String]) -> String {
        format!(
            r#"{{"iTotalRecords": {total}, "iTotalDisplayRecords": {total}, "sEcho": 1, "aaData": [{}]}}"#,
            rows.join(",")
        )
    }

    #[test]
    fn disabled_sort_mode_never_fetches() {
        let urls = Urls::new(BASE);
        let req = RelatedRequest::new(3, SortMode::Disabled);
        let listing_url = urls.label_listing(LabelListing::CurrentRoster, &req, 0, 2);
        let (session, fetcher) =
            session(OfflineFetcher::new().with_page(listing_url, page(1, &[band_row(1, "A")])), 2);

        let roster = current_roster(&session, &req).unwrap();
        assert!(roster.is_empty());
        assert!(fetcher.requests().is_empty());
    }

    #[test]
    fn pages_until_total_and_keeps_order() {
        let urls = Urls::new(BASE);
        let req = RelatedRequest::new(3, SortMode::ByGenre);
        let p0 = page(3, &[band_row(9, "Zeta"), band_row(2, "Alpha")]);
        let p1 = page(3, &[band_row(5, "Mid")]);
        let (session, fetcher) = session(
            OfflineFetcher::new()
                .with_page(urls.label_listing(LabelListing::CurrentRoster, &req, 0, 2), p0)
                .with_page(urls.label_listing(LabelListing::CurrentRoster, &req, 2, 2), p1),
            2,
        );

        let roster = current_roster(&session, &req).unwrap();
        let ids: Vec<_> = roster.iter().map(|b| b.id()).collect();
        assert_eq!(ids, vec![9, 2, 5]);
        assert_eq!(fetcher.requests().len(), 2);
        assert!(session.caches().bands.contains(9));
    }

    #[test]
    fn limit_truncates_and_stops_paging() {
        let urls = Urls::new(BASE);
        let mut req = RelatedRequest::new(3, SortMode::ByBand);
        req.limit = Some(1);
        let p0 = page(10, &[band_row(1, "A"), band_row(2, "B")]);
        let (session, fetcher) = session(
            OfflineFetcher::new().with_page(urls.label_listing(LabelListing::CurrentRoster, &req, 0, 2), p0),
            2,
        );

        let roster = current_roster(&session, &req).unwrap();
        assert_eq!(roster.len(), 1);
        assert!(roster.contains(&Band::new(1, "A")));
        assert_eq!(fetcher.requests().len(), 1);
    }

    #[test]
    fn fetch_failure_propagates() {
        let (session, _) = session(OfflineFetcher::new(), 2);
        let req = RelatedRequest::new(3, SortMode::ByBand);
        assert!(releases(&session, &req).is_err());
    }
}
