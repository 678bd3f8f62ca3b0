// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://www.metal-archives.com";
pub const USER_AGENT: &str = "metallum_scrape/0.2 (+https://github.com/metallum-scrape)";
pub const TIMEOUT_SECS: u64 = 20;
pub const REQUEST_PAUSE_MS: u64 = 250; // be polite

// Listings (roster, releases, search); the site caps search pages at 200
pub const LISTING_PAGE_SIZE: usize = 500;
pub const SEARCH_PAGE_SIZE: usize = 200;

// Cache
pub const CACHE_CAPACITY: usize = 4096;

// Site vocabulary
pub const VARIOUS_ARTISTS: &str = "Various Artists";
pub const LYRICS_NOT_AVAILABLE: &str = "lyrics not available";

// Concurrency
pub const WORKERS: usize = 4;

// Environment overrides
pub const ENV_BASE_URL: &str = "METALLUM_BASE_URL";
pub const ENV_USER_AGENT: &str = "METALLUM_USER_AGENT";
pub const ENV_TIMEOUT_SECS: &str = "METALLUM_TIMEOUT_SECS";
pub const ENV_PAUSE_MS: &str = "METALLUM_PAUSE_MS";
pub const ENV_CACHE_CAPACITY: &str = "METALLUM_CACHE_CAPACITY";
