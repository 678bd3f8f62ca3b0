// src/model/track.rs
use super::{Band, Disc, DiscType, Entity, EntityKind, entity_identity};

#[derive(Clone, Debug, Default)]
pub struct Track {
    id: u64,
    pub name: String,
    pub band: Band,
    pub disc: Disc,
    pub genre: String,
    /// Classification of the release the track appears on.
    pub disc_type: DiscType,
    /// Empty until loaded.
    pub lyrics: String,
}

entity_identity!(Track);

impl Track {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self { id, name: name.into(), ..Self::default() }
    }

    /// Whether a cached track carries enough to skip a fresh parse: it has lyrics, or
    /// its release classification is known. Heuristic by nature.
    pub fn has_all_information(&self) -> bool {
        !self.lyrics.is_empty() || self.disc_type.is_known()
    }
}

impl Entity for Track {
    const KIND: EntityKind = EntityKind::Track;

    fn id(&self) -> u64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn richness(&self) -> usize {
        usize::from(!self.lyrics.is_empty()) + usize::from(self.disc_type.is_known())
    }
}
