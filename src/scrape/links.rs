// src/scrape/links.rs
use crate::{
    error::Result,
    model::{EntityKind, Link},
    session::Session,
    specs,
};

/// Loads the external links of one band, label or artist.
pub struct LinkParser<'s> {
    session: &'s Session,
    kind: EntityKind,
    id: u64,
}

impl<'s> LinkParser<'s> {
    pub fn new(session: &'s Session, kind: EntityKind, id: u64) -> Self {
        Self { session, kind, id }
    }

    pub fn parse(&self) -> Result<Vec<Link>> {
        let url = self.session.urls().links(self.kind, self.id);
        let body = self.session.fetcher().fetch(&url)?;
        let links = specs::links::parse(&body);
        logd!("{:?} {}: {} link(s)", self.kind, self.id, links.len());
        Ok(links)
    }
}
