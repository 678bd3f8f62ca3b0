// src/model/band.rs
use super::{Country, Entity, EntityKind, entity_identity};
use crate::config::consts::VARIOUS_ARTISTS;

#[derive(Clone, Debug, Default)]
pub struct Band {
    id: u64,
    pub name: String,
    pub genre: String,
    pub country: Country,
}

entity_identity!(Band);

impl Band {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self { id, name: name.into(), ..Self::default() }
    }

    /// Aggregate key for split and compilation releases.
    pub fn various() -> Self {
        Self::new(0, VARIOUS_ARTISTS)
    }
}

impl Entity for Band {
    const KIND: EntityKind = EntityKind::Band;

    fn id(&self) -> u64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn identity_is_id_except_placeholders() {
        let mut a = Band::new(72, "Slayer");
        a.genre = s!("Thrash Metal");
        assert_eq!(a, Band::new(72, "renamed"));
        assert_ne!(Band::various(), Band::new(0, "Unknown"));
        assert_eq!(Band::various(), Band::new(0, VARIOUS_ARTISTS));

        let set: HashSet<Band> = [Band::new(1, "x"), Band::new(1, "y"), Band::various()].into();
        assert_eq!(set.len(), 2);
    }
}
