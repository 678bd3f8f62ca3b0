// src/scrape/paging.rs
//! Paged DataTables listings: label collections and search results share the same loop.

use crate::{error::Result, session::Session, specs::listing};

/// Every row of a paged listing, `page_size` rows per request, until a short page, the
/// reported total or `limit`. `url(start, page_size)` addresses the page starting at row
/// `start`.
pub fn fetch_all(
    session: &Session,
    page_size: usize,
    limit: Option<usize>,
    url: impl Fn(usize, usize) -> String,
) -> Result<Vec<Vec<String>>> {
    let page_size = page_size.max(1);
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut start = 0usize;

    loop {
        let body = session.fetcher().fetch(&url(start, page_size))?;
        let page = listing::parse_page(&body)?;
        let got = page.rows.len();
        let total = page.total();
        rows.extend(page.rows);

        if limit.is_some_and(|l| rows.len() >= l) {
            break;
        }
        if got < page_size || total.is_some_and(|t| rows.len() as u64 >= t) {
            break;
        }
        start += got;
    }
    if let Some(l) = limit {
        rows.truncate(l);
    }
    Ok(rows)
}
