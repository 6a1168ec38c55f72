/// Gallery lightbox navigation
///
/// The carousel is either `Closed` (grid only) or `Open(i)` showing item
/// `i`. Navigation wraps around at both ends.
use std::sync::Arc;

use super::data::MediaItem;

/// Keys the lightbox reacts to while open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselKey {
    ArrowLeft,
    ArrowRight,
    Escape,
}

/// Which layer of the lightbox received a click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// The dimmed area around the photo
    Backdrop,
    /// The photo and its caption
    Content,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselState {
    Closed,
    Open(usize),
}

#[derive(Debug, Clone)]
pub struct MediaCarousel {
    items: Arc<[MediaItem]>,
    selected: Option<usize>,
}

impl MediaCarousel {
    /// Create a closed carousel over a fixed sequence
    pub fn new(items: Arc<[MediaItem]>) -> Self {
        Self { items, selected: None }
    }

    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_item(&self) -> Option<&MediaItem> {
        self.selected_index().map(|i| &self.items[i])
    }

    pub fn state(&self) -> CarouselState {
        match self.selected {
            Some(i) => CarouselState::Open(i),
            None => CarouselState::Closed,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state(), CarouselState::Open(_))
    }

    /// Keyboard bindings are only registered while an item is open
    pub fn wants_keyboard(&self) -> bool {
        self.is_open()
    }

    /// Show item `index`.
    ///
    /// # Panics
    /// If `index` is out of range.
    pub fn open(&mut self, index: usize) {
        assert!(
            index < self.items.len(),
            "carousel index {index} out of range for {} items",
            self.items.len()
        );
        self.selected = Some(index);
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    pub fn next(&mut self) {
        if let Some(i) = self.selected {
            self.selected = Some((i + 1) % self.items.len());
        }
    }

    pub fn previous(&mut self) {
        if let Some(i) = self.selected {
            let len = self.items.len();
            self.selected = Some((i + len - 1) % len);
        }
    }

    /// Apply a key press. Returns whether the key was consumed.
    pub fn handle_key(&mut self, key: CarouselKey) -> bool {
        if !self.is_open() {
            return false;
        }
        match key {
            CarouselKey::ArrowRight => self.next(),
            CarouselKey::ArrowLeft => self.previous(),
            CarouselKey::Escape => self.close(),
        }
        true
    }

    /// Apply a click inside the lightbox overlay
    pub fn click(&mut self, target: PointerTarget) {
        match target {
            PointerTarget::Backdrop => self.close(),
            PointerTarget::Content => {}
        }
    }

    /// "Image 3 of 26" while open
    pub fn position_label(&self) -> Option<String> {
        match self.state() {
            CarouselState::Open(i) => Some(format!("Image {} of {}", i + 1, self.items.len())),
            CarouselState::Closed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carousel(len: usize) -> MediaCarousel {
        let items: Vec<MediaItem> = (0..len)
            .map(|i| MediaItem {
                id: format!("item-{i}"),
                image: format!("images/gallery/{i:02}.jpg"),
                title: format!("Project {i}"),
                category: "Residential Services".to_string(),
                description: String::new(),
            })
            .collect();
        MediaCarousel::new(items.into())
    }

    #[test]
    fn test_starts_closed() {
        let c = carousel(3);
        assert_eq!(c.state(), CarouselState::Closed);
        assert!(c.selected_item().is_none());
        assert!(!c.wants_keyboard());
    }

    #[test]
    fn test_next_wraps_to_first() {
        let mut c = carousel(5);
        c.open(4);
        c.next();
        assert_eq!(c.selected_index(), Some(0));
    }

    #[test]
    fn test_previous_wraps_to_last() {
        let mut c = carousel(5);
        c.open(0);
        c.previous();
        assert_eq!(c.selected_index(), Some(4));
    }

    #[test]
    fn test_single_item_navigation_stays_put() {
        let mut c = carousel(1);
        c.open(0);
        c.next();
        c.previous();
        assert_eq!(c.state(), CarouselState::Open(0));
    }

    #[test]
    fn test_arrow_right_twice_from_two() {
        let mut c = carousel(26);
        c.open(2);
        assert!(c.handle_key(CarouselKey::ArrowRight));
        assert!(c.handle_key(CarouselKey::ArrowRight));
        assert_eq!(c.state(), CarouselState::Open(4));
        assert_eq!(c.selected_item().map(|m| m.id.as_str()), Some("item-4"));
    }

    #[test]
    fn test_escape_closes_from_any_index() {
        for i in 0..4 {
            let mut c = carousel(4);
            c.open(i);
            assert!(c.handle_key(CarouselKey::Escape));
            assert_eq!(c.state(), CarouselState::Closed);
            assert!(!c.wants_keyboard());
        }
    }

    #[test]
    fn test_keys_ignored_while_closed() {
        let mut c = carousel(4);
        assert!(!c.handle_key(CarouselKey::ArrowRight));
        assert!(!c.handle_key(CarouselKey::ArrowLeft));
        assert_eq!(c.state(), CarouselState::Closed);
    }

    #[test]
    fn test_navigation_noop_while_closed() {
        let mut c = carousel(4);
        c.next();
        c.previous();
        assert_eq!(c.selected_index(), None);
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut c = carousel(4);
        c.close();
        assert_eq!(c.state(), CarouselState::Closed);
        c.open(1);
        c.close();
        c.close();
        assert_eq!(c.state(), CarouselState::Closed);
    }

    #[test]
    fn test_backdrop_closes_content_does_not() {
        let mut c = carousel(4);
        c.open(3);
        c.click(PointerTarget::Content);
        assert_eq!(c.state(), CarouselState::Open(3));
        c.click(PointerTarget::Backdrop);
        assert_eq!(c.state(), CarouselState::Closed);
    }

    #[test]
    fn test_position_label() {
        let mut c = carousel(26);
        assert!(c.position_label().is_none());
        c.open(25);
        assert_eq!(c.position_label().as_deref(), Some("Image 26 of 26"));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_open_out_of_range_panics() {
        let mut c = carousel(3);
        c.open(3);
    }

    #[test]
    #[should_panic]
    fn test_open_on_empty_panics() {
        let mut c = carousel(0);
        c.open(0);
    }
}
