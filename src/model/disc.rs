// src/model/disc.rs
use super::{Band, DiscType, Entity, EntityKind, entity_identity};

/// A release. Skeletal unless built from a release listing or a full release page.
#[derive(Clone, Debug, Default)]
pub struct Disc {
    id: u64,
    pub name: String,
    pub disc_type: DiscType,
    pub year: String,
    pub catalog_id: String,
    pub format: String,
    pub description: String,
    /// Main band; `None` for splits and compilations.
    pub band: Option<Band>,
    /// Participating bands of a split/compilation row.
    pub split_bands: Vec<Band>,
}

entity_identity!(Disc);

impl Disc {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self { id, name: name.into(), ..Self::default() }
    }

    pub fn is_split(&self) -> bool {
        !self.split_bands.is_empty()
    }
}

impl Entity for Disc {
    const KIND: EntityKind = EntityKind::Disc;

    fn id(&self) -> u64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn richness(&self) -> usize {
        usize::from(self.disc_type.is_known()) + usize::from(!self.split_bands.is_empty())
    }
}
