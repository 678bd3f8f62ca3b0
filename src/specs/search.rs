// src/specs/search.rs
//! Row spec for the advanced song search (`/search/ajax-advanced/searching/songs/`)
//! and the lyrics fragment it links to.
//!
//! Rows: `[band, release, release type, genre?, song title, lyrics control]`. The genre
//! column only appears when the search was not narrowed by genre, so the title and the
//! lyrics control are addressed from the end of the row.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::consts::LYRICS_NOT_AVAILABLE;
use crate::core::html::{anchors, html_to_text, strip_tags, to_lower};
use crate::model::{Band, Disc, DiscType, Track};

use super::Parsed;

static LYRICS_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)lyrics(?:Link_|Button|_)(\d+)"#).expect("lyrics id regex"));

/// Track id from the lyrics control cell.
pub fn track_id(cell: &str) -> Option<u64> {
    if let Some(c) = LYRICS_ID.captures(cell) {
        return c[1].parse().ok();
    }
    anchors(cell).iter().find_map(|a| a.id())
}

/// A skeletal track from one result row. `None` when the row has no track id.
pub fn parse_row(row: &[String]) -> Option<Track> {
    if row.len() < 5 {
        return None;
    }
    let n = row.len();
    let mut track = Track::new(track_id(&row[n - 1])?, strip_tags(&row[n - 2]));

    if let Some(a) = anchors(&row[0]).into_iter().next() {
        track.band = Band::new(a.id().unwrap_or(0), a.text());
    } else {
        track.band = Band::new(0, strip_tags(&row[0]));
    }
    if let Some(a) = anchors(&row[1]).into_iter().next() {
        track.disc = Disc::new(a.id().unwrap_or(0), a.text());
    } else {
        track.disc = Disc::new(0, strip_tags(&row[1]));
    }
    if n >= 6 {
        track.genre = strip_tags(&row[3]);
        track.band.genre = track.genre.clone();
    }
    track.disc_type = DiscType::from_name(&strip_tags(&row[2]));
    track.disc.disc_type = track.disc_type;
    track.disc.band = Some(track.band.clone());
    Some(track)
}

pub fn parse_rows(rows: &[Vec<String>]) -> Parsed<Vec<Track>> {
    let mut out = Parsed::<Vec<Track>>::default();
    for row in rows {
        match parse_row(row) {
            Some(track) => out.items.push(track),
            None => out.skipped += 1,
        }
    }
    out
}

/// Lyrics fragment to plain text, one line per verse line. Empty when the site has none.
pub fn parse_lyrics(fragment: &str) -> String {
    let text = html_to_text(fragment, "\n");
    let marker = to_lower(&text);
    if marker.trim_matches(|c: char| c == '(' || c == ')' || c.is_whitespace()) == LYRICS_NOT_AVAILABLE {
        return String::new();
    }
    text
}
