// src/model/label.rs
use image::DynamicImage;
use indexmap::{IndexMap, IndexSet};

use super::{Band, Country, Disc, Entity, EntityKind, LabelStatus, Link, entity_identity};

/// Bands currently signed, in server order.
pub type CurrentRoster = IndexSet<Band>;
/// Past bands and how many releases each put out on the label.
pub type PastRoster = IndexMap<Band, u32>;
/// Releases grouped by band. Splits/compilations sit under [`Band::various`].
pub type Releases = IndexMap<Band, Vec<Disc>>;

/// Who touched the entry and when, from the page footer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuditTrail {
    pub added_by: String,
    pub modified_by: String,
    pub added_on: String,
    pub modified_on: String,
}

#[derive(Clone, Debug, Default)]
pub struct Label {
    id: u64,
    pub name: String,

    pub address: String,
    pub country: Country,
    pub phone_number: String,
    pub status: LabelStatus,
    pub specialisation: String,
    pub founding_date: String,
    pub parent_label: Option<Box<Label>>,
    pub sub_labels: Vec<Label>,
    pub online_shopping: bool,

    /// [`Link::none`] when the label lists no website.
    pub website: Link,
    pub email: String,
    pub notes: String,
    pub logo_url: Option<String>,
    pub audit: AuditTrail,

    // lazy
    pub links: Vec<Link>,
    pub current_roster: CurrentRoster,
    pub past_roster: PastRoster,
    pub releases: Releases,
    pub logo: Option<DynamicImage>,
}

entity_identity!(Label);

impl Label {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self { id, name: name.into(), ..Self::default() }
    }

    /// A label known only by id, e.g. the seed for a parse.
    pub fn with_id(id: u64) -> Self {
        Self::new(id, "")
    }

    pub fn release_count(&self) -> usize {
        self.releases.values().map(Vec::len).sum()
    }
}

impl Entity for Label {
    const KIND: EntityKind = EntityKind::Label;

    fn id(&self) -> u64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn richness(&self) -> usize {
        [
            !self.links.is_empty(),
            !self.current_roster.is_empty(),
            !self.past_roster.is_empty(),
            !self.releases.is_empty(),
            self.logo.is_some(),
        ]
        .into_iter()
        .filter(|&b| b)
        .count()
    }
}
