// src/lib.rs
//! Entity extraction for Encyclopaedia Metallum pages.
//!
//! - `specs` reads pages (pure).
//! - `scrape` fetches, orchestrates and feeds the caches.
//! - `model` holds the entities; `cache` the process-wide entity caches.

#[macro_use]
pub mod macros;
#[macro_use]
pub mod logging;

pub mod cache;
pub mod config;
pub mod core;
pub mod error;
pub mod model;
pub mod progress;
pub mod scrape;
pub mod session;
pub mod specs;

#[cfg(feature = "cli")]
pub mod cli;

pub use cache::{Caches, EntityCache};
pub use config::{LabelOptions, LoadOptions, RelatedRequest, ScraperConfig, SortMode, TrackQuery};
pub use error::{DecodeError, Error, ExtractError, FetchError, Result};
pub use model::{Band, Disc, Entity, Label, Link, Track};
pub use scrape::{LabelParser, LinkParser, TrackSearchService};
pub use session::Session;
