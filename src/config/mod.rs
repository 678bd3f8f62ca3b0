// src/config/mod.rs
pub mod consts;
pub mod options;

use std::{env, str::FromStr, time::Duration};

use consts::*;

pub use options::{LabelOptions, LoadOptions, RelatedRequest, SortMode, TrackQuery};

/// Session-wide settings. `Default` is the live site; `from_env` lets a
/// deployment override each knob without code changes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScraperConfig {
    pub base_url: String,
    pub user_agent: String,
    pub timeout: Duration,
    pub request_pause: Duration,
    pub listing_page_size: usize,
    pub search_page_size: usize,
    pub cache_capacity: usize,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            base_url: s!(BASE_URL),
            user_agent: s!(USER_AGENT),
            timeout: Duration::from_secs(TIMEOUT_SECS),
            request_pause: Duration::from_millis(REQUEST_PAUSE_MS),
            listing_page_size: LISTING_PAGE_SIZE,
            search_page_size: SEARCH_PAGE_SIZE,
            cache_capacity: CACHE_CAPACITY,
        }
    }
}

impl ScraperConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = Self::default();
        if let Some(url) = lookup(ENV_BASE_URL).filter(|v| !v.trim().is_empty()) {
            cfg.base_url = url.trim().trim_end_matches('/').to_string();
        }
        if let Some(ua) = lookup(ENV_USER_AGENT).filter(|v| !v.trim().is_empty()) {
            cfg.user_agent = ua;
        }
        if let Some(secs) = parse_var::<u64>(&lookup, ENV_TIMEOUT_SECS) {
            cfg.timeout = Duration::from_secs(secs);
        }
        if let Some(ms) = parse_var::<u64>(&lookup, ENV_PAUSE_MS) {
            cfg.request_pause = Duration::from_millis(ms);
        }
        if let Some(cap) = parse_var::<usize>(&lookup, ENV_CACHE_CAPACITY).filter(|&c| c > 0) {
            cfg.cache_capacity = cap;
        }
        cfg
    }

    /// Config for offline fixtures: no pause between requests.
    pub fn offline(base_url: &str) -> Self {
        Self { base_url: s!(base_url), request_pause: Duration::ZERO, ..Self::default() }
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(v) => Some(v),
        Err(_) => {
            logw!("{key}={raw:?} is not valid, using default");
            None
        }
    }
}
