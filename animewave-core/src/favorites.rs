//! The session-scoped favorites set.

use std::collections::BTreeSet;

use animewave_model::AnimeId;

/// Catalog entries the user has marked with the heart control.
///
/// Held only in process memory; favorites do not survive the session and
/// never influence search results.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Favorites {
    ids: BTreeSet<AnimeId>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert the id if absent, remove it if present. Returns whether the
    /// entry is favorited afterwards. Toggling twice restores the set.
    pub fn toggle(&mut self, id: AnimeId) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    pub fn contains(&self, id: AnimeId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = AnimeId> + '_ {
        self.ids.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_inserts_then_removes() {
        let mut favorites = Favorites::new();
        let id = AnimeId::new(5);

        assert!(favorites.toggle(id));
        assert!(favorites.contains(id));
        assert!(!favorites.toggle(id));
        assert!(!favorites.contains(id));
    }

    #[test]
    fn double_toggle_restores_original_set() {
        let mut favorites = Favorites::new();
        favorites.toggle(AnimeId::new(1));
        favorites.toggle(AnimeId::new(2));
        let before = favorites.clone();

        favorites.toggle(AnimeId::new(7));
        favorites.toggle(AnimeId::new(7));

        assert_eq!(favorites, before);
    }
}
