//! The read-only catalog snapshot.

use crate::ids::AnimeId;
use crate::media::AnimeEntry;

/// The fixed search universe: an immutable, process-scoped snapshot of
/// catalog entries. Constructed once at startup and passed by reference
/// into the query pipeline; nothing mutates it afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Catalog {
    entries: Vec<AnimeEntry>,
}

impl Catalog {
    pub fn new(entries: Vec<AnimeEntry>) -> Self {
        Self { entries }
    }

    /// Entries in catalog iteration order. This order is what the
    /// `Relevance` sort preserves.
    pub fn entries(&self) -> &[AnimeEntry] {
        &self.entries
    }

    pub fn get(&self, id: AnimeId) -> Option<&AnimeEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AnimeEntry> {
        self.entries.iter()
    }
}

impl From<Vec<AnimeEntry>> for Catalog {
    fn from(entries: Vec<AnimeEntry>) -> Self {
        Self::new(entries)
    }
}
