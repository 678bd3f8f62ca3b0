//! # Page specs
//!
//! Pure parsers, one per page or endpoint of the site. Each spec knows *where the data
//! lives in the markup* and turns it into model types. Nothing here fetches, caches or logs.
//!
//! ## Layout
//! - `label`    – the label detail page (name, sidebar definition lists, contact, notes, audit).
//! - `links`    – the links sub-page shared by bands, labels and artists.
//! - `listing`  – the paged JSON envelope wrapping rosters, releases and search results.
//! - `roster`   – current and past roster rows.
//! - `releases` – release rows grouped by band.
//! - `search`   – song search rows and the lyrics fragment.
//!
//! ## Conventions
//! - Scan inside known blocks (`<dl>`, `<table id=...>`, a single JSON cell) instead of
//!   running document-wide regexes.
//! - Required regions fail with `ExtractError`; everything optional yields a default.
//! - Row parsers never fail: malformed rows are counted in [`Parsed::skipped`] so the
//!   caller can decide whether that is worth a log line.
//!
//! ```text
//! scrape::<page> → Fetcher::fetch → specs::<page>::parse → model
//! ```

pub mod label;
pub mod links;
pub mod listing;
pub mod releases;
pub mod roster;
pub mod search;

/// Output of a row parser plus the number of rows it could not make sense of.
#[derive(Clone, Debug, Default)]
pub struct Parsed<T> {
    pub items: T,
    pub skipped: usize,
}
