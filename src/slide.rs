use std::collections::HashSet;
use std::ops::Index;
use std::sync::Arc;

use crate::error::CarouselError;

/// One hero carousel entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub id: u32,
    pub title: String,
    pub subtitle: String,
    pub image_url: String,
}

impl Slide {
    pub fn new(id: u32, title: &str, subtitle: &str, image_url: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            subtitle: subtitle.to_string(),
            image_url: image_url.to_string(),
        }
    }
}

/// Immutable, non-empty, ordered slide sequence.
///
/// Cloning a deck shares the underlying slides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideDeck {
    slides: Arc<[Slide]>,
}

impl SlideDeck {
    pub fn new(slides: Vec<Slide>) -> Result<Self, CarouselError> {
        if slides.is_empty() {
            return Err(CarouselError::EmptyDeck);
        }

        let mut seen = HashSet::with_capacity(slides.len());
        for slide in &slides {
            if !seen.insert(slide.id) {
                return Err(CarouselError::DuplicateSlideId(slide.id));
            }
        }

        Ok(Self { slides: slides.into() })
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    // Always false; kept for clippy's len_without_is_empty.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Slide> {
        self.slides.iter()
    }

    pub fn as_slice(&self) -> &[Slide] {
        &self.slides
    }
}

impl Index<usize> for SlideDeck {
    type Output = Slide;

    fn index(&self, index: usize) -> &Slide {
        &self.slides[index]
    }
}

impl<'a> IntoIterator for &'a SlideDeck {
    type Item = &'a Slide;
    type IntoIter = std::slice::Iter<'a, Slide>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_deck_is_rejected() {
        assert_eq!(SlideDeck::new(Vec::new()), Err(CarouselError::EmptyDeck));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let slides = vec![
            Slide::new(1, "A", "a", "/a.jpg"),
            Slide::new(2, "B", "b", "/b.jpg"),
            Slide::new(1, "C", "c", "/c.jpg"),
        ];
        assert_eq!(SlideDeck::new(slides), Err(CarouselError::DuplicateSlideId(1)));
    }

    #[test]
    fn deck_keeps_order() {
        let deck = SlideDeck::new(vec![
            Slide::new(7, "A", "a", "/a.jpg"),
            Slide::new(3, "B", "b", "/b.jpg"),
        ])
        .unwrap();

        let ids: Vec<u32> = deck.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![7, 3]);
        assert_eq!(deck[1].title, "B");
        assert!(deck.get(2).is_none());
        assert!(!deck.is_empty());
    }

    #[test]
    fn clones_share_slides() {
        let deck = SlideDeck::new(vec![Slide::new(1, "A", "a", "/a.jpg")]).unwrap();
        let other = deck.clone();
        assert!(std::ptr::eq(deck.as_slice(), other.as_slice()));
    }
}
