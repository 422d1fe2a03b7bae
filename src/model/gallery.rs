//! Domain state - the fetched feed data and the gallery placeholder machine

use crate::model::entry::GalleryEntry;

/// What the gallery region is currently showing.
///
/// The rendered card set always matches the most recent successful fetch;
/// every other state renders as a placeholder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GalleryState {
    /// Nothing fetched yet; prompt for the fetch key.
    #[default]
    Idle,
    /// A fetch is in flight.
    Loading,
    /// Cards rendered from the last successful fetch.
    Loaded,
    /// The feed returned a valid empty list. Not an error.
    Empty,
    /// The fetch failed; diagnostic detail is in the log, not on screen.
    Error,
}

/// Domain state containing the fetched feed data.
#[derive(Default)]
pub struct DomainState {
    /// Entries from the last successful fetch, in feed order
    pub entries: Vec<GalleryEntry>,
    /// Current gallery placeholder state
    pub gallery: GalleryState,
}

impl DomainState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the previous gallery contents and show the loading placeholder.
    pub fn begin_fetch(&mut self) {
        self.entries.clear();
        self.gallery = GalleryState::Loading;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_fetch_drops_prior_entries() {
        let mut domain = DomainState::new();
        domain.entries.push(GalleryEntry::default());
        domain.gallery = GalleryState::Loaded;

        domain.begin_fetch();

        assert!(domain.entries.is_empty());
        assert_eq!(domain.gallery, GalleryState::Loading);
    }
}
