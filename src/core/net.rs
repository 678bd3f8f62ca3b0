// src/core/net.rs
//! Fetch collaborators. The extraction code only sees the [`Fetcher`] and
//! [`ImageFetcher`] traits; [`HttpClient`] is the production implementation and
//! [`OfflineFetcher`] serves captured pages for tests and replays.

use std::{
    collections::HashMap,
    io::Read,
    sync::Arc,
    thread,
    time::{Duration, Instant},
};

use image::DynamicImage;
use parking_lot::Mutex;

use crate::config::ScraperConfig;
use crate::error::FetchError;

/// Raw document retrieval. Implementations own timeouts, retries and any document caching.
pub trait Fetcher: Send + Sync {
    fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// Image retrieval + decoding. Never returns a partial image.
pub trait ImageFetcher: Send + Sync {
    fn fetch_image(&self, url: &str) -> Result<DynamicImage, FetchError>;
}

impl<T: Fetcher + ?Sized> Fetcher for Arc<T> {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        (**self).fetch(url)
    }
}

impl<T: ImageFetcher + ?Sized> ImageFetcher for Arc<T> {
    fn fetch_image(&self, url: &str) -> Result<DynamicImage, FetchError> {
        (**self).fetch_image(url)
    }
}

/// Blocking HTTP client with a politeness pause between requests.
pub struct HttpClient {
    agent: ureq::Agent,
    user_agent: String,
    pause: Duration,
    last_request: Mutex<Option<Instant>>,
}

impl HttpClient {
    pub fn new(config: &ScraperConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(config.timeout)
            .timeout_read(config.timeout)
            .timeout_write(config.timeout)
            .build();
        Self {
            agent,
            user_agent: config.user_agent.clone(),
            pause: config.request_pause,
            last_request: Mutex::new(None),
        }
    }

    // be polite: at most one request per `pause`, across threads
    fn wait_turn(&self) {
        let mut last = self.last_request.lock();
        if let Some(prev) = *last {
            let since = prev.elapsed();
            if since < self.pause {
                thread::sleep(self.pause - since);
            }
        }
        *last = Some(Instant::now());
    }

    fn get(&self, url: &str) -> Result<ureq::Response, FetchError> {
        self.wait_turn();
        logd!("GET {url}");
        self.agent
            .get(url)
            .set("User-Agent", &self.user_agent)
            .call()
            .map_err(|e| match e {
                ureq::Error::Status(code, _) => FetchError::Status { url: s!(url), code },
                ureq::Error::Transport(t) => {
                    FetchError::Transport { url: s!(url), reason: t.to_string() }
                }
            })
    }
}

impl Fetcher for HttpClient {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        self.get(url)?
            .into_string()
            .map_err(|source| FetchError::Body { url: s!(url), source })
    }
}

impl ImageFetcher for HttpClient {
    fn fetch_image(&self, url: &str) -> Result<DynamicImage, FetchError> {
        let mut bytes = Vec::new();
        self.get(url)?
            .into_reader()
            .read_to_end(&mut bytes)
            .map_err(|source| FetchError::Body { url: s!(url), source })?;
        image::load_from_memory(&bytes)
            .map_err(|e| FetchError::Image { url: s!(url), reason: e.to_string() })
    }
}

/// In-memory fetcher keyed by exact URL. Records every request so callers can
/// assert on round-trips.
#[derive(Default)]
pub struct OfflineFetcher {
    pages: HashMap<String, String>,
    images: HashMap<String, DynamicImage>,
    requests: Mutex<Vec<String>>,
}

impl OfflineFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.pages.insert(url.into(), body.into());
        self
    }

    pub fn with_image(mut self, url: impl Into<String>, img: DynamicImage) -> Self {
        self.images.insert(url.into(), img);
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().clone()
    }

    pub fn request_count(&self, url_prefix: &str) -> usize {
        self.requests.lock().iter().filter(|u| u.starts_with(url_prefix)).count()
    }
}

impl Fetcher for OfflineFetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        self.requests.lock().push(s!(url));
        self.pages.get(url).cloned().ok_or_else(|| FetchError::Missing { url: s!(url) })
    }
}

impl ImageFetcher for OfflineFetcher {
    fn fetch_image(&self, url: &str) -> Result<DynamicImage, FetchError> {
        self.requests.lock().push(s!(url));
        self.images.get(url).cloned().ok_or_else(|| FetchError::Missing { url: s!(url) })
    }
}
