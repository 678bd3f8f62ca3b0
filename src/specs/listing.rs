// src/specs/listing.rs
//! The JSON envelope the site wraps every paged listing in (rosters, releases,
//! search results). Each row is a list of HTML cell fragments.

use serde::Deserialize;

use crate::error::DecodeError;

#[derive(Debug, Deserialize, Default)]
pub struct ListingPage {
    #[serde(rename = "iTotalRecords", default)]
    pub total_records: Option<u64>,
    #[serde(rename = "iTotalDisplayRecords", default)]
    pub total_display_records: Option<u64>,
    #[serde(rename = "aaData", default)]
    pub rows: Vec<Vec<String>>,
}

impl ListingPage {
    /// Total rows the server says the query has, if it said so.
    pub fn total(&self) -> Option<u64> {
        self.total_display_records.or(self.total_records)
    }
}

pub fn parse_page(body: &str) -> Result<ListingPage, DecodeError> {
    // Some endpoints answer with a trailing comma inside aaData; tolerate it.
    match serde_json::from_str(body) {
        Ok(page) => Ok(page),
        Err(first) => {
            let cleaned = strip_trailing_commas(body);
            if cleaned == body {
                return Err(first.into());
            }
            serde_json::from_str(&cleaned).map_err(DecodeError::from)
        }
    }
}

/// Remove `,` directly before `]` or `}` outside string literals.
fn strip_trailing_commas(body: &str) -> String {
    let mut out = String::with_capacity(body.len());
    let mut in_str = false;
    let mut escaped = false;
    let chars: Vec<char> = body.chars().collect();
    for (i, &c) in chars.iter().enumerate() {
        if in_str {
            out.push(c);
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_str = false,
                _ => {}
            }
            continue;
        }
        if c == '"' {
            in_str = true;
        } else if c == ',' {
            let next = chars[i + 1..].iter().find(|ch| !ch.is_whitespace());
            if matches!(next, Some(']') | Some('}')) {
                continue;
            }
        }
        out.push(c);
    }
    out
}
