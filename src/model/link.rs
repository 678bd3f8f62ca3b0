// src/model/link.rs
use super::LinkCategory;

/// Name + URL. An empty name is the "no link" sentinel.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Link {
    pub name: String,
    pub url: String,
    pub category: LinkCategory,
}

impl Link {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self { name: name.into(), url: url.into(), category: LinkCategory::Unknown }
    }

    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_none(&self) -> bool {
        self.name.is_empty()
    }

    pub fn in_category(mut self, category: LinkCategory) -> Self {
        self.category = category;
        self
    }
}
