// src/error.rs
//! Error taxonomy.
//!
//! - [`ExtractError`]: an expected marker or region is not in the markup. Usually means the
//!   site layout changed or the document is not the page we asked for.
//! - [`FetchError`]: transport/HTTP failure from a [`Fetcher`](crate::core::net::Fetcher) or
//!   [`ImageFetcher`](crate::core::net::ImageFetcher).
//! - [`DecodeError`]: a field was found but its content does not decode (obfuscated email,
//!   numeric id, listing envelope).
//!
//! Optional fields downgrade these to an empty value at the orchestrator; mandatory regions
//! propagate them as [`Error`].

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{what}: marker `{marker}` not found")]
pub struct ExtractError {
    pub what: &'static str,
    pub marker: String,
}

impl ExtractError {
    pub fn new(what: &'static str, marker: impl Into<String>) -> Self {
        Self { what, marker: marker.into() }
    }
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP {code} for {url}")]
    Status { url: String, code: u16 },
    #[error("request to {url} failed: {reason}")]
    Transport { url: String, reason: String },
    #[error("could not read body of {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: std::io::Error,
    },
    #[error("image at {url} could not be decoded: {reason}")]
    Image { url: String, reason: String },
    #[error("no document available for {url}")]
    Missing { url: String },
}

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("obfuscated email does not decode to an address: {0:?}")]
    Email(String),
    #[error("not a numeric entity id: {0:?}")]
    Id(String),
    #[error("malformed listing page: {0}")]
    Listing(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Extraction(#[from] ExtractError),
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
