/// Service page accordion: at most one panel expanded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accordion {
    expanded: Option<usize>,
}

impl Default for Accordion {
    /// First panel open on page entry
    fn default() -> Self {
        Self { expanded: Some(0) }
    }
}

impl Accordion {
    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded == Some(index)
    }

    /// Collapse `index` if it is open, otherwise make it the open panel
    pub fn toggle(&mut self, index: usize) {
        self.expanded = if self.is_expanded(index) { None } else { Some(index) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_panel_open_by_default() {
        assert!(Accordion::default().is_expanded(0));
    }

    #[test]
    fn test_toggle() {
        let mut accordion = Accordion::default();
        accordion.toggle(2);
        assert!(accordion.is_expanded(2));
        assert!(!accordion.is_expanded(0));

        accordion.toggle(2);
        assert!((0..4).all(|i| !accordion.is_expanded(i)));

        accordion.toggle(0);
        assert!(accordion.is_expanded(0));
    }
}
