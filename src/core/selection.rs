//! # Selection Controller
//!
//! Tracks the single expanded card. Expanding one card replaces any other;
//! toggling the expanded card collapses it.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionController {
    expanded: Option<String>,
}

/// Outcome of a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Expanded,
    Collapsed,
}

impl SelectionController {
    pub fn expanded(&self) -> Option<&str> {
        self.expanded.as_deref()
    }

    pub fn is_expanded(&self, card_id: &str) -> bool {
        self.expanded.as_deref() == Some(card_id)
    }

    pub fn toggle(&mut self, card_id: &str) -> Toggle {
        if self.is_expanded(card_id) {
            self.expanded = None;
            Toggle::Collapsed
        } else {
            self.expanded = Some(card_id.to_string());
            Toggle::Expanded
        }
    }

    pub fn close(&mut self) {
        self.expanded = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_restores_empty() {
        let mut selection = SelectionController::default();
        assert_eq!(selection.toggle("a"), Toggle::Expanded);
        assert_eq!(selection.expanded(), Some("a"));
        assert_eq!(selection.toggle("a"), Toggle::Collapsed);
        assert_eq!(selection.expanded(), None);
    }

    #[test]
    fn test_expanding_another_card_replaces() {
        let mut selection = SelectionController::default();
        selection.toggle("a");
        assert_eq!(selection.toggle("b"), Toggle::Expanded);
        assert!(selection.is_expanded("b"));
        assert!(!selection.is_expanded("a"));
    }

    #[test]
    fn test_close_is_unconditional() {
        let mut selection = SelectionController::default();
        selection.close();
        assert_eq!(selection.expanded(), None);
        selection.toggle("a");
        selection.close();
        assert_eq!(selection.expanded(), None);
    }
}
