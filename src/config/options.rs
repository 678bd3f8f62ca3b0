// src/config/options.rs
use crate::model::DiscType;

/// Server-side ordering of a related listing. `Disabled` means the listing is
/// never fetched; every other mode enables it and picks the sort column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SortMode {
    #[default]
    Disabled,
    ByBand,
    ByGenre,
    ByCountry,
}

impl SortMode {
    pub fn is_enabled(self) -> bool {
        self != SortMode::Disabled
    }

    /// Column index the listing endpoint sorts on.
    pub fn sort_column(self) -> Option<u8> {
        match self {
            SortMode::Disabled => None,
            SortMode::ByBand => Some(0),
            SortMode::ByGenre => Some(1),
            SortMode::ByCountry => Some(2),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortMode::Disabled => "disabled",
            SortMode::ByBand => "band",
            SortMode::ByGenre => "genre",
            SortMode::ByCountry => "country",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "off" | "disabled" => Some(SortMode::Disabled),
            "band" | "name" => Some(SortMode::ByBand),
            "genre" => Some(SortMode::ByGenre),
            "country" => Some(SortMode::ByCountry),
            _ => None,
        }
    }
}

/// Toggles every entity parser carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct LoadOptions {
    pub load_image: bool,
    pub load_links: bool,
}

/// Label parse options: the common toggles plus one sort mode per related collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct LabelOptions {
    pub load: LoadOptions,
    pub current_roster: SortMode,
    pub past_roster: SortMode,
    pub releases: SortMode,
}

impl LabelOptions {
    /// Everything on, sorted by band name.
    pub fn everything() -> Self {
        Self {
            load: LoadOptions { load_image: true, load_links: true },
            current_roster: SortMode::ByBand,
            past_roster: SortMode::ByBand,
            releases: SortMode::ByBand,
        }
    }
}

/// One related-collection request for an owning entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RelatedRequest {
    pub owner_id: u64,
    /// Upper bound on rows; `None` reads every page.
    pub limit: Option<usize>,
    pub include_inactive: bool,
    pub sort: SortMode,
}

impl RelatedRequest {
    pub fn new(owner_id: u64, sort: SortMode) -> Self {
        Self { owner_id, limit: None, include_inactive: true, sort }
    }
}

/// Advanced song search.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct TrackQuery {
    pub song_title: String,
    pub band_name: String,
    pub release_title: String,
    pub lyrics: String,
    pub genre: String,
    pub release_types: Vec<DiscType>,
    pub exact_band_match: bool,
    pub limit: Option<usize>,
}

impl TrackQuery {
    pub fn title(title: impl Into<String>) -> Self {
        Self { song_title: title.into(), ..Self::default() }
    }

    pub fn band(mut self, band: impl Into<String>) -> Self {
        self.band_name = band.into();
        self
    }

    pub fn release(mut self, release: impl Into<String>) -> Self {
        self.release_title = release.into();
        self
    }

    pub fn lyrics(mut self, text: impl Into<String>) -> Self {
        self.lyrics = text.into();
        self
    }

    pub fn genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = genre.into();
        self
    }

    pub fn release_type(mut self, kind: DiscType) -> Self {
        if !self.release_types.contains(&kind) {
            self.release_types.push(kind);
        }
        self
    }

    pub fn exact_band(mut self) -> Self {
        self.exact_band_match = true;
        self
    }

    pub fn limit(mut self, n: usize) -> Self {
        self.limit = Some(n);
        self
    }

    pub fn is_empty(&self) -> bool {
        [&self.song_title, &self.band_name, &self.release_title, &self.lyrics, &self.genre]
            .iter()
            .all(|f| f.trim().is_empty())
            && self.release_types.is_empty()
    }
}
