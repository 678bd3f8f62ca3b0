// src/model/mod.rs
//! Domain entities.
//!
//! Every entity has a numeric id fixed at construction and a display name.
//! Identity (`Eq`/`Hash`) is the id alone, except for id `0`: the site uses it for
//! aggregate placeholders ("Various Artists"), so placeholders also compare by name.
//!
//! Core fields are filled by every full parse; lazy fields (related collections,
//! images, lyrics) only when a load option asks for them.

mod band;
mod disc;
mod label;
mod link;
mod track;
mod vocab;

pub use band::Band;
pub use disc::Disc;
pub use label::{AuditTrail, CurrentRoster, Label, PastRoster, Releases};
pub use link::Link;
pub use track::Track;
pub use vocab::{Country, DiscType, LabelStatus, LinkCategory};

/// What kind of page an id belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Band,
    Label,
    Artist,
    Disc,
    Track,
}

impl EntityKind {
    /// Path segment the site uses for this kind in link and detail URLs.
    pub fn path_segment(self) -> &'static str {
        match self {
            EntityKind::Band => "band",
            EntityKind::Label => "label",
            EntityKind::Artist => "artist",
            EntityKind::Disc => "album",
            EntityKind::Track => "song",
        }
    }
}

/// Shared behaviour of cacheable entities.
pub trait Entity: Clone + Send + Sync + 'static {
    const KIND: EntityKind;

    fn id(&self) -> u64;

    fn name(&self) -> &str;

    /// Number of lazy fields currently populated. Only ever grows for one instance;
    /// the cache uses it to keep the most complete copy.
    fn richness(&self) -> usize {
        0
    }

    fn is_placeholder(&self) -> bool {
        self.id() == 0
    }
}

/// `Eq`/`Hash` by id, plus name for id-0 placeholders.
macro_rules! entity_identity {
    ($ty:ty) => {
        impl PartialEq for $ty {
            fn eq(&self, other: &Self) -> bool {
                self.id == other.id && (self.id != 0 || self.name == other.name)
            }
        }

        impl Eq for $ty {}

        impl ::std::hash::Hash for $ty {
            fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                self.id.hash(state);
                if self.id == 0 {
                    self.name.hash(state);
                }
            }
        }
    };
}
pub(crate) use entity_identity;
