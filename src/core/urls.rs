// src/core/urls.rs
//! Canonical site URLs, one pure function per endpoint kind.

use crate::config::{RelatedRequest, TrackQuery};
use crate::model::EntityKind;

/// Which related listing of a label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelListing {
    CurrentRoster,
    PastRoster,
    Releases,
}

impl LabelListing {
    fn endpoint(self) -> &'static str {
        match self {
            LabelListing::CurrentRoster => "ajax-bands",
            LabelListing::PastRoster => "ajax-bands-past",
            LabelListing::Releases => "ajax-albums",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Urls {
    base: String,
}

impl Urls {
    pub fn new(base: &str) -> Self {
        Self { base: base.trim_end_matches('/').to_string() }
    }

    /// The site resolves the name segment itself; `_` is enough.
    pub fn label(&self, id: u64) -> String {
        format!("{}/labels/_/{id}", self.base)
    }

    /// One page of a label listing starting at row `start`.
    pub fn label_listing(
        &self,
        which: LabelListing,
        req: &RelatedRequest,
        start: usize,
        page_size: usize,
    ) -> String {
        let col = req.sort.sort_column().unwrap_or(0);
        let mut url = format!(
            "{}/label/{}/nbrPerPage/{page_size}/id/{}?sEcho=1&iDisplayStart={start}&iDisplayLength={page_size}&iSortCol_0={col}&sSortDir_0=asc",
            self.base,
            which.endpoint(),
            req.owner_id,
        );
        if req.include_inactive {
            url.push_str("&showInactive=1");
        }
        url
    }

    pub fn links(&self, kind: EntityKind, id: u64) -> String {
        format!("{}/link/ajax-list/type/{}/id/{id}", self.base, kind.path_segment())
    }

    /// One page of song search results starting at row `start`.
    pub fn track_search(&self, q: &TrackQuery, start: usize, page_size: usize) -> String {
        let enc = |s: &str| urlencoding::encode(s.trim()).into_owned();
        let mut url = format!(
            "{}/search/ajax-advanced/searching/songs/?songTitle={}&bandName={}&releaseTitle={}&lyrics={}&genre={}",
            self.base,
            enc(&q.song_title),
            enc(&q.band_name),
            enc(&q.release_title),
            enc(&q.lyrics),
            enc(&q.genre),
        );
        if q.exact_band_match {
            url.push_str("&exactBandMatch=1");
        }
        for code in q.release_types.iter().filter_map(|t| t.search_code()) {
            url.push_str(&format!("&releaseType[]={code}"));
        }
        url.push_str(&format!("&sEcho=1&iDisplayStart={start}&iDisplayLength={page_size}"));
        url
    }

    pub fn lyrics(&self, track_id: u64) -> String {
        format!("{}/release/ajax-view-lyrics/id/{track_id}", self.base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SortMode;
    use crate::model::DiscType;

    #[test]
    fn label_urls() {
        let u = Urls::new("https://www.metal-archives.com/");
        assert_eq!(u.label(3), "https://www.metal-archives.com/labels/_/3");
        assert_eq!(
            u.links(EntityKind::Label, 3),
            "https://www.metal-archives.com/link/ajax-list/type/label/id/3"
        );
        let req = RelatedRequest { include_inactive: false, ..RelatedRequest::new(3, SortMode::ByGenre) };
        let page = u.label_listing(LabelListing::PastRoster, &req, 500, 500);
        assert!(page.starts_with("https://www.metal-archives.com/label/ajax-bands-past/nbrPerPage/500/id/3?"));
        assert!(page.contains("iDisplayStart=500"));
        assert!(page.contains("iSortCol_0=1"));
        assert!(!page.contains("showInactive"));
    }

    #[test]
    fn search_url_encodes_fields() {
        let u = Urls::new("https://ma");
        let q = TrackQuery::title("Angel of Death").band("Slayer").release_type(DiscType::FullLength);
        let url = u.track_search(&q, 200, 50);
        assert!(url.contains("songTitle=Angel%20of%20Death"));
        assert!(url.contains("bandName=Slayer"));
        assert!(url.contains("&releaseType[]=1"));
        assert!(url.ends_with("iDisplayStart=200&iDisplayLength=50"));
    }
}
