// src/session.rs
//! What every parser needs from the outside world, bundled once.

use std::sync::Arc;

use crate::cache::Caches;
use crate::config::ScraperConfig;
use crate::core::{Fetcher, HttpClient, ImageFetcher, Urls};

/// Fetch collaborators, URL assembler, entity caches and settings.
///
/// Cheap to clone; clones share the fetchers and caches.
#[derive(Clone)]
pub struct Session {
    fetcher: Arc<dyn Fetcher>,
    images: Arc<dyn ImageFetcher>,
    urls: Urls,
    caches: Caches,
    config: ScraperConfig,
}

impl Session {
    /// Live site over HTTP, sharing the process-wide caches.
    pub fn new(config: ScraperConfig) -> Self {
        let client = Arc::new(HttpClient::new(&config));
        Self {
            fetcher: client.clone(),
            images: client,
            urls: Urls::new(&config.base_url),
            caches: Caches::global(),
            config,
        }
    }

    /// Custom fetchers (offline fixtures, recording proxies) with caches of their own.
    pub fn with_fetchers<F>(config: ScraperConfig, fetcher: Arc<F>) -> Self
    where
        F: Fetcher + ImageFetcher + 'static,
    {
        Self {
            fetcher: fetcher.clone(),
            images: fetcher,
            urls: Urls::new(&config.base_url),
            caches: Caches::new(config.cache_capacity),
            config,
        }
    }

    pub fn with_caches(mut self, caches: Caches) -> Self {
        self.caches = caches;
        self
    }

    pub fn fetcher(&self) -> &dyn Fetcher {
        self.fetcher.as_ref()
    }

    pub fn images(&self) -> &dyn ImageFetcher {
        self.images.as_ref()
    }

    pub fn urls(&self) -> &Urls {
        &self.urls
    }

    pub fn caches(&self) -> &Caches {
        &self.caches
    }

    pub fn config(&self) -> &ScraperConfig {
        &self.config
    }
}
