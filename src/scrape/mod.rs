// src/scrape/mod.rs
//! Orchestration with I/O: fetch through the session, parse with `specs`, feed the caches.
pub mod batch;
pub mod label;
pub mod links;
pub mod paging;
pub mod related;
pub mod search;

pub use batch::{BatchResult, parse_labels};
pub use label::{FieldOutcome, LabelField, LabelParser, ParseReport};
pub use links::LinkParser;
pub use search::{Hit, HitState, SearchKind, SearchService, TrackSearch, TrackSearchService};
