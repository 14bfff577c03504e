use tracing::debug;

use crate::content::{Artwork, Catalog};
use crate::error::LookupError;

/// Gallery modal, keyed by the selected artwork id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lightbox {
    selected: Option<u32>,
}

impl Lightbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, catalog: &Catalog, id: u32) -> Result<(), LookupError> {
        catalog.require(id)?;
        self.selected = Some(id);
        debug!(id, "lightbox opened");
        Ok(())
    }

    pub fn close(&mut self) {
        if let Some(id) = self.selected.take() {
            debug!(id, "lightbox closed");
        }
    }

    /// Closes when `id` is already shown, opens it otherwise.
    pub fn toggle(&mut self, catalog: &Catalog, id: u32) -> Result<(), LookupError> {
        if self.selected == Some(id) {
            self.close();
            Ok(())
        } else {
            self.open(catalog, id)
        }
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn selected_id(&self) -> Option<u32> {
        self.selected
    }

    pub fn selected<'a>(&self, catalog: &'a Catalog) -> Option<&'a Artwork> {
        self.selected.and_then(|id| catalog.find(id))
    }

    pub fn next(&mut self, catalog: &Catalog) {
        self.step(catalog, 1);
    }

    pub fn previous(&mut self, catalog: &Catalog) {
        self.step(catalog, catalog.len().saturating_sub(1));
    }

    // Moves `offset` places forward in catalog order, wrapping. No-op when closed.
    fn step(&mut self, catalog: &Catalog, offset: usize) {
        let Some(pos) = self.selected.and_then(|id| catalog.position(id)) else {
            return;
        };
        let next = (pos + offset) % catalog.len();
        self.selected = Some(catalog.artworks()[next].id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content;

    #[test]
    fn opens_known_artwork() {
        let catalog = content::catalog();
        let mut lightbox = Lightbox::new();
        assert!(!lightbox.is_open());

        lightbox.open(&catalog, 2).unwrap();
        assert!(lightbox.is_open());
        assert_eq!(lightbox.selected(&catalog).map(|a| a.artist.as_str()), Some("Katsushika Hokusai"));

        lightbox.close();
        assert!(!lightbox.is_open());
        assert!(lightbox.selected(&catalog).is_none());
    }

    #[test]
    fn unknown_artwork_leaves_state_alone() {
        let catalog = content::catalog();
        let mut lightbox = Lightbox::new();
        lightbox.open(&catalog, 1).unwrap();

        assert_eq!(lightbox.open(&catalog, 77), Err(LookupError::UnknownArtwork(77)));
        assert_eq!(lightbox.selected_id(), Some(1));
    }

    #[test]
    fn toggle_flips_same_item() {
        let catalog = content::catalog();
        let mut lightbox = Lightbox::new();

        lightbox.toggle(&catalog, 5).unwrap();
        assert_eq!(lightbox.selected_id(), Some(5));
        lightbox.toggle(&catalog, 6).unwrap();
        assert_eq!(lightbox.selected_id(), Some(6));
        lightbox.toggle(&catalog, 6).unwrap();
        assert!(!lightbox.is_open());
    }

    #[test]
    fn stepping_wraps_through_catalog() {
        let catalog = content::catalog();
        let mut lightbox = Lightbox::new();

        lightbox.next(&catalog);
        assert!(!lightbox.is_open());

        lightbox.open(&catalog, 9).unwrap();
        lightbox.next(&catalog);
        assert_eq!(lightbox.selected_id(), Some(1));
        lightbox.previous(&catalog);
        assert_eq!(lightbox.selected_id(), Some(9));
        lightbox.previous(&catalog);
        assert_eq!(lightbox.selected_id(), Some(8));
    }
}
