// src/scrape/label.rs
//! Label orchestrator: one label page plus whatever lazy data the options ask for.
//!
//! Flow: fetch the page → `specs::label::parse` (required regions, may fail) → decode the
//! email → logo, links and related collections per [`LabelOptions`] → offer the result
//! to the label cache.
//!
//! Every optional field ends in a [`FieldOutcome`]. Failures there are logged and leave
//! the field empty; only the page itself (fetch or required regions) fails the parse.
//! A seed label that already carries a lazy field keeps it without a refetch, whatever
//! the options say. Only empty fields are subject to the options.

use indexmap::IndexMap;

use crate::{
    config::{LabelOptions, RelatedRequest, SortMode},
    error::Result,
    model::{EntityKind, Entity, Label},
    session::Session,
    specs,
};

use super::links::LinkParser;
use super::related::{self, CurrentRosterKind, PastRosterKind, RelatedKind, ReleasesKind};

/// Optional parts of a label parse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LabelField {
    Email,
    Logo,
    Links,
    CurrentRoster,
    PastRoster,
    Releases,
}

/// How one optional field came out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldOutcome {
    /// Fetched or decoded during this parse.
    Loaded,
    /// Taken over from the seed label.
    Reused,
    /// Option off; field left empty.
    Disabled,
    /// Nothing there on the site.
    Absent,
    /// Tried and failed; field left empty.
    Failed(String),
}

impl FieldOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, FieldOutcome::Failed(_))
    }
}

/// Per-field outcomes of one parse, in the order they were decided.
#[derive(Clone, Debug, Default)]
pub struct ParseReport {
    outcomes: IndexMap<LabelField, FieldOutcome>,
}

impl ParseReport {
    pub fn record(&mut self, field: LabelField, outcome: FieldOutcome) {
        self.outcomes.insert(field, outcome);
    }

    pub fn get(&self, field: LabelField) -> Option<&FieldOutcome> {
        self.outcomes.get(&field)
    }

    pub fn failures(&self) -> impl Iterator<Item = (LabelField, &str)> + '_ {
        self.outcomes.iter().filter_map(|(f, o)| match o {
            FieldOutcome::Failed(reason) => Some((*f, reason.as_str())),
            _ => None,
        })
    }

    /// No optional field failed.
    pub fn is_clean(&self) -> bool {
        self.failures().next().is_none()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&LabelField, &FieldOutcome)> {
        self.outcomes.iter()
    }
}

pub struct LabelParser<'s> {
    session: &'s Session,
    seed: Label,
    options: LabelOptions,
}

impl<'s> LabelParser<'s> {
    pub fn new(session: &'s Session, id: u64, options: LabelOptions) -> Self {
        Self::from_seed(session, Label::with_id(id), options)
    }

    /// Parse on top of an already known label; its lazy fields are reused when enabled.
    pub fn from_seed(session: &'s Session, seed: Label, options: LabelOptions) -> Self {
        Self { session, seed, options }
    }

    pub fn parse(self) -> Result<Label> {
        self.parse_with_report().map(|(label, _)| label)
    }

    pub fn parse_with_report(self) -> Result<(Label, ParseReport)> {
        let url = self.session.urls().label(self.seed.id());
        let doc = self.session.fetcher().fetch(&url)?;
        self.parse_document(&doc)
    }

    /// Parse a label page that is already in hand. Lazy data is still fetched.
    pub fn parse_document(mut self, doc: &str) -> Result<(Label, ParseReport)> {
        let id = self.seed.id();
        let page = specs::label::parse(doc)?;
        let mut report = ParseReport::default();

        let mut label = Label::new(id, page.name);
        label.address = page.address;
        label.country = page.country;
        label.phone_number = page.phone_number;
        label.status = page.status;
        label.specialisation = page.specialisation;
        label.founding_date = page.founding_date;
        label.parent_label = page.parent_label.map(Box::new);
        label.sub_labels = page.sub_labels;
        label.online_shopping = page.online_shopping;
        label.website = page.website;
        label.notes = page.notes;
        label.logo_url = page.logo_url;
        label.audit = page.audit;

        let email = match page.obfuscated_email {
            None => FieldOutcome::Absent,
            Some(raw) => match specs::label::decode_email(&raw) {
                Ok(addr) => {
                    label.email = addr;
                    FieldOutcome::Loaded
                }
                Err(e) => FieldOutcome::Failed(e.to_string()),
            },
        };
        report.record(LabelField::Email, email);

        let logo = self.load_logo(&mut label);
        report.record(LabelField::Logo, logo);

        let links = self.load_links(&mut label);
        report.record(LabelField::Links, links);

        let opts = self.options;
        let seed_current = std::mem::take(&mut self.seed.current_roster);
        let (current, outcome) = self.collection::<CurrentRosterKind>(opts.current_roster, seed_current);
        label.current_roster = current;
        report.record(LabelField::CurrentRoster, outcome);

        let seed_past = std::mem::take(&mut self.seed.past_roster);
        let (past, outcome) = self.collection::<PastRosterKind>(opts.past_roster, seed_past);
        label.past_roster = past;
        report.record(LabelField::PastRoster, outcome);

        let seed_releases = std::mem::take(&mut self.seed.releases);
        let (releases, outcome) = self.collection::<ReleasesKind>(opts.releases, seed_releases);
        label.releases = releases;
        report.record(LabelField::Releases, outcome);

        for (field, reason) in report.failures() {
            loge!("Label {id} ({}): {field:?} left empty: {reason}", label.name);
        }
        logf!("Parsed label {id} ({})", label.name);

        self.session.caches().labels.offer(label.clone());
        Ok((label, report))
    }

    fn load_logo(&mut self, label: &mut Label) -> FieldOutcome {
        if let Some(img) = self.seed.logo.take() {
            label.logo = Some(img);
            return FieldOutcome::Reused;
        }
        if !self.options.load.load_image {
            return FieldOutcome::Disabled;
        }
        let Some(url) = label.logo_url.as_deref() else {
            return FieldOutcome::Absent;
        };
        match self.session.images().fetch_image(url) {
            Ok(img) => {
                label.logo = Some(img);
                FieldOutcome::Loaded
            }
            Err(e) => FieldOutcome::Failed(e.to_string()),
        }
    }

    fn load_links(&mut self, label: &mut Label) -> FieldOutcome {
        if !self.seed.links.is_empty() {
            label.links = std::mem::take(&mut self.seed.links);
            return FieldOutcome::Reused;
        }
        if !self.options.load.load_links {
            return FieldOutcome::Disabled;
        }
        match LinkParser::new(self.session, EntityKind::Label, label.id()).parse() {
            Ok(links) if links.is_empty() => FieldOutcome::Absent,
            Ok(links) => {
                label.links = links;
                FieldOutcome::Loaded
            }
            Err(e) => FieldOutcome::Failed(e.to_string()),
        }
    }

    fn collection<K: RelatedKind>(&self, sort: SortMode, seed: K::Output) -> (K::Output, FieldOutcome) {
        // data the caller already holds wins over the load options
        if !K::is_empty(&seed) {
            return (seed, FieldOutcome::Reused);
        }
        if !sort.is_enabled() {
            return (K::Output::default(), FieldOutcome::Disabled);
        }
        let req = RelatedRequest::new(self.seed.id(), sort);
        match related::load::<K>(self.session, &req) {
            Ok(items) if K::is_empty(&items) => (items, FieldOutcome::Absent),
            Ok(items) => (items, FieldOutcome::Loaded),
            Err(e) => (K::Output::default(), FieldOutcome::Failed(e.to_string())),
        }
    }
}
