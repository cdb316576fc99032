//! # Card Stack Navigator
//!
//! The façade over the card registry, layout selector, stack order engine,
//! gesture interpreter and selection controller. It receives serialized UI
//! events and produces a render model: an ordered list of cards with their
//! placement, ready for any presentation layer to draw.
//!
//! ```text
//! Navigator
//! ├── registry: CardRegistry          // caller-owned cards, read-only
//! ├── layout: LayoutSelector          // stack | grid | list
//! ├── selection: SelectionController  // at most one expanded card
//! ├── interpreter: GestureInterpreter // drag → Advance | Retreat | None
//! ├── active_index: usize             // top card in Stack mode
//! ├── is_dragging: bool               // between drag_start and drag_end
//! └── swallow_click_on: Option<String> // card that was swiped away
//! ```
//!
//! Every transition is synchronous. Failures such as an unknown card id or
//! an empty registry degrade to logged no-ops rather than surfaced errors.

use log::debug;
use serde::Serialize;
use std::fmt;

use crate::core::card::{Card, CardRegistry, wrap_index};
use crate::core::gesture::{Command, GestureInterpreter};
use crate::core::layout::{LayoutMode, LayoutSelector};
use crate::core::selection::{SelectionController, Toggle};
use crate::core::stack::{Transform, stack_order};

/// Listener fired whenever a card becomes expanded.
pub type ActivationListener = Box<dyn FnMut(&Card)>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigatorError {
    EmptyRegistry,
    UnknownCardId(String),
}

impl fmt::Display for NavigatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigatorError::EmptyRegistry => write!(f, "no cards to navigate"),
            NavigatorError::UnknownCardId(id) => write!(f, "unknown card id: {id}"),
        }
    }
}

impl std::error::Error for NavigatorError {}

/// What a card click did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    Expanded,
    Collapsed,
    /// Swallowed because it belonged to a drag.
    Suppressed,
    /// Unknown card id or empty registry.
    Ignored,
}

/// One card as the presentation layer should draw it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderEntry<'a> {
    pub card: &'a Card,
    pub stack_position: usize,
    pub transform: Transform,
    /// Front card in Stack mode. Always false in Grid and List.
    pub is_top: bool,
    pub is_expanded: bool,
    /// Only the top card accepts drags.
    pub is_draggable: bool,
}

pub struct Navigator {
    registry: CardRegistry,
    layout: LayoutSelector,
    selection: SelectionController,
    interpreter: GestureInterpreter,
    active_index: usize,
    is_dragging: bool,
    swallow_click_on: Option<String>,
    on_card_activated: Option<ActivationListener>,
}

impl Navigator {
    pub fn new(cards: Vec<Card>, default_layout: LayoutMode) -> Self {
        Self {
            registry: CardRegistry::new(cards),
            layout: LayoutSelector::new(default_layout),
            selection: SelectionController::default(),
            interpreter: GestureInterpreter::default(),
            active_index: 0,
            is_dragging: false,
            swallow_click_on: None,
            on_card_activated: None,
        }
    }

    pub fn with_interpreter(mut self, interpreter: GestureInterpreter) -> Self {
        self.interpreter = interpreter;
        self
    }

    pub fn set_on_card_activated(&mut self, listener: ActivationListener) {
        self.on_card_activated = Some(listener);
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn layout_mode(&self) -> LayoutMode {
        self.layout.mode()
    }

    pub fn expanded_card_id(&self) -> Option<&str> {
        self.selection.expanded()
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    pub fn cards(&self) -> &CardRegistry {
        &self.registry
    }

    pub fn interpreter(&self) -> &GestureInterpreter {
        &self.interpreter
    }

    /// The card currently on top of the stack.
    pub fn top_card(&self) -> Result<&Card, NavigatorError> {
        self.registry
            .at(self.active_index as i64)
            .map_err(|_| NavigatorError::EmptyRegistry)
    }

    pub fn card(&self, card_id: &str) -> Result<&Card, NavigatorError> {
        if self.registry.is_empty() {
            return Err(NavigatorError::EmptyRegistry);
        }
        self.registry
            .get(card_id)
            .ok_or_else(|| NavigatorError::UnknownCardId(card_id.to_string()))
    }

    /// Pagination dots, `true` at the active index. Empty unless in Stack
    /// mode with more than one card.
    pub fn dots(&self) -> Vec<bool> {
        let count = self.registry.count();
        if self.layout.mode() != LayoutMode::Stack || count < 2 {
            return Vec::new();
        }
        (0..count).map(|i| i == self.active_index).collect()
    }

    /// Cards in paint order with their placement. Pure function of current
    /// state; empty when the registry is empty.
    pub fn render_model(&self) -> Vec<RenderEntry<'_>> {
        let mode = self.layout.mode();
        stack_order(self.active_index, self.registry.count(), mode)
            .into_iter()
            .filter_map(|placement| {
                let card = self.registry.at(placement.logical_index as i64).ok()?;
                let is_top = mode == LayoutMode::Stack && placement.stack_position == 0;
                Some(RenderEntry {
                    card,
                    stack_position: placement.stack_position,
                    transform: placement.transform,
                    is_top,
                    is_expanded: self.selection.is_expanded(&card.id),
                    is_draggable: is_top,
                })
            })
            .collect()
    }

    // ------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------

    /// Switch layout. Active index and expansion are preserved.
    pub fn set_layout(&mut self, mode: LayoutMode) {
        self.swallow_click_on = None;
        if self.layout.set_mode(mode) {
            debug!("Layout -> {} (active_index={})", mode, self.active_index);
        }
    }

    pub fn drag_start(&mut self) {
        self.swallow_click_on = None;
        if self.layout.mode() != LayoutMode::Stack || self.registry.is_empty() {
            debug!("Ignoring drag start outside a non-empty stack");
            return;
        }
        self.is_dragging = true;
    }

    /// Finish a drag. Clears `is_dragging` whatever the outcome.
    pub fn drag_end(&mut self, offset_x: f64, velocity_x: f64) -> Command {
        self.is_dragging = false;

        if self.layout.mode() != LayoutMode::Stack || self.registry.is_empty() {
            return Command::None;
        }

        let command = self.interpreter.interpret(offset_x, velocity_x);

        // The click that ends this drag lands on the card that was dragged,
        // which is still the top card until the step below. A short flick
        // that navigates counts as a drag too.
        let navigates = command != Command::None;
        self.swallow_click_on = if navigates || self.interpreter.exceeds_threshold(offset_x) {
            self.top_card().ok().map(|card| card.id.clone())
        } else {
            None
        };

        match command {
            Command::Advance => self.step(1),
            Command::Retreat => self.step(-1),
            Command::None => debug!(
                "Drag snapped back (offset_x={offset_x:.1}, velocity_x={velocity_x:.1})"
            ),
        }
        command
    }

    /// Jump straight to a card, as the pagination dots do. Any integer is
    /// accepted and wrapped.
    pub fn select_active_by_dot(&mut self, index: i64) {
        self.swallow_click_on = None;
        let count = self.registry.count();
        if count == 0 {
            return;
        }
        self.active_index = wrap_index(index, count);
        debug!("Dot jump -> active_index={}", self.active_index);
    }

    /// Next card without a gesture. Stack mode only.
    pub fn advance(&mut self) {
        self.swallow_click_on = None;
        if self.layout.mode() == LayoutMode::Stack {
            self.step(1);
        }
    }

    /// Previous card without a gesture. Stack mode only.
    pub fn retreat(&mut self) {
        self.swallow_click_on = None;
        if self.layout.mode() == LayoutMode::Stack {
            self.step(-1);
        }
    }

    pub fn card_clicked(&mut self, card_id: &str) -> ClickOutcome {
        if self.is_dragging {
            debug!("Click on {card_id} suppressed: drag in progress");
            return ClickOutcome::Suppressed;
        }
        // One-shot: any click disarms, only a click on the dragged card is eaten.
        if self.swallow_click_on.take().is_some_and(|dragged| dragged == card_id) {
            debug!("Click on {card_id} suppressed: ended a swipe");
            return ClickOutcome::Suppressed;
        }

        let card = match self.card(card_id) {
            Ok(card) => card.clone(),
            Err(e) => {
                debug!("Ignoring click: {e}");
                return ClickOutcome::Ignored;
            }
        };

        match self.selection.toggle(card_id) {
            Toggle::Expanded => {
                debug!("Expanded card {card_id}");
                if let Some(listener) = self.on_card_activated.as_mut() {
                    listener(&card);
                }
                ClickOutcome::Expanded
            }
            Toggle::Collapsed => {
                debug!("Collapsed card {card_id}");
                ClickOutcome::Collapsed
            }
        }
    }

    pub fn close(&mut self) {
        self.swallow_click_on = None;
        self.selection.close();
    }

    /// Swap in a new card registry. The active index resets to 0 and the
    /// expansion is dropped if its card is gone.
    pub fn replace_cards(&mut self, cards: Vec<Card>) {
        self.registry = CardRegistry::new(cards);
        self.active_index = 0;
        self.is_dragging = false;
        self.swallow_click_on = None;

        let stale = self
            .selection
            .expanded()
            .is_some_and(|id| !self.registry.contains(id));
        if stale {
            self.selection.close();
        }
        debug!("Replaced cards (count={})", self.registry.count());
    }

    fn step(&mut self, delta: i64) {
        let count = self.registry.count();
        if count == 0 {
            return;
        }
        self.active_index = wrap_index(self.active_index as i64 + delta, count);
        debug!("Stack step {delta:+} -> active_index={}", self.active_index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{abc_cards, numbered_cards};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn top_id(navigator: &Navigator) -> String {
        navigator
            .render_model()
            .iter()
            .find(|entry| entry.is_top)
            .map(|entry| entry.card.id.clone())
            .unwrap()
    }

    #[test]
    fn test_initial_state() {
        let navigator = Navigator::new(abc_cards(), LayoutMode::Stack);
        assert_eq!(navigator.active_index(), 0);
        assert_eq!(navigator.layout_mode(), LayoutMode::Stack);
        assert_eq!(navigator.expanded_card_id(), None);
        assert!(!navigator.is_dragging());
        assert_eq!(top_id(&navigator), "a");
    }

    #[test]
    fn test_drag_sets_and_clears_dragging() {
        let mut navigator = Navigator::new(abc_cards(), LayoutMode::Stack);
        navigator.drag_start();
        assert!(navigator.is_dragging());
        assert_eq!(navigator.drag_end(-5.0, 0.0), Command::None);
        assert!(!navigator.is_dragging());
        assert_eq!(navigator.active_index(), 0);
    }

    #[test]
    fn test_advance_wraps_around() {
        let mut navigator = Navigator::new(numbered_cards(4), LayoutMode::Stack);
        navigator.select_active_by_dot(3);
        assert_eq!(navigator.drag_end(-60.0, 0.0), Command::Advance);
        assert_eq!(navigator.active_index(), 0);
    }

    #[test]
    fn test_retreat_wraps_around() {
        let mut navigator = Navigator::new(numbered_cards(4), LayoutMode::Stack);
        assert_eq!(navigator.drag_end(10.0, 150.0), Command::Retreat);
        assert_eq!(navigator.active_index(), 3);
    }

    #[test]
    fn test_select_by_dot_puts_card_on_top() {
        let mut navigator = Navigator::new(numbered_cards(5), LayoutMode::Stack);
        for index in [-7_i64, -1, 0, 2, 4, 5, 12] {
            navigator.select_active_by_dot(index);
            let expected = format!("card-{}", index.rem_euclid(5));
            assert_eq!(top_id(&navigator), expected);
            let top = navigator.render_model().into_iter().find(|e| e.is_top).unwrap();
            assert_eq!(top.stack_position, 0);
        }
    }

    #[test]
    fn test_exactly_one_top_in_stack_and_none_in_flat_layouts() {
        let mut navigator = Navigator::new(abc_cards(), LayoutMode::Stack);
        assert_eq!(navigator.render_model().iter().filter(|e| e.is_top).count(), 1);
        navigator.set_layout(LayoutMode::Grid);
        assert!(navigator.render_model().iter().all(|e| !e.is_top && !e.is_draggable));
    }

    #[test]
    fn test_layout_switch_preserves_active_and_expansion() {
        let mut navigator = Navigator::new(abc_cards(), LayoutMode::Stack);
        navigator.select_active_by_dot(2);
        navigator.card_clicked("b");
        navigator.set_layout(LayoutMode::Grid);
        navigator.set_layout(LayoutMode::Stack);
        assert_eq!(navigator.active_index(), 2);
        assert_eq!(navigator.expanded_card_id(), Some("b"));
    }

    #[test]
    fn test_drag_ignored_outside_stack() {
        let mut navigator = Navigator::new(abc_cards(), LayoutMode::List);
        navigator.drag_start();
        assert!(!navigator.is_dragging());
        assert_eq!(navigator.drag_end(-100.0, 0.0), Command::None);
        assert_eq!(navigator.active_index(), 0);
    }

    #[test]
    fn test_advance_and_retreat_only_in_stack() {
        let mut navigator = Navigator::new(abc_cards(), LayoutMode::Stack);
        navigator.advance();
        assert_eq!(navigator.active_index(), 1);
        navigator.retreat();
        navigator.retreat();
        assert_eq!(navigator.active_index(), 2);

        navigator.set_layout(LayoutMode::Grid);
        navigator.advance();
        assert_eq!(navigator.active_index(), 2);
    }

    #[test]
    fn test_click_toggles_expansion() {
        let mut navigator = Navigator::new(abc_cards(), LayoutMode::Stack);
        assert_eq!(navigator.card_clicked("a"), ClickOutcome::Expanded);
        assert_eq!(navigator.card_clicked("a"), ClickOutcome::Collapsed);
        assert_eq!(navigator.expanded_card_id(), None);
    }

    #[test]
    fn test_click_unknown_id_is_noop() {
        let mut navigator = Navigator::new(abc_cards(), LayoutMode::Stack);
        navigator.card_clicked("a");
        assert_eq!(navigator.card_clicked("nope"), ClickOutcome::Ignored);
        assert_eq!(navigator.expanded_card_id(), Some("a"));
    }

    #[test]
    fn test_click_while_dragging_is_suppressed() {
        let mut navigator = Navigator::new(abc_cards(), LayoutMode::Stack);
        navigator.drag_start();
        assert_eq!(navigator.card_clicked("a"), ClickOutcome::Suppressed);
        assert_eq!(navigator.expanded_card_id(), None);
    }

    #[test]
    fn test_click_after_swipe_is_suppressed_once() {
        let mut navigator = Navigator::new(abc_cards(), LayoutMode::Stack);
        navigator.drag_start();
        navigator.drag_end(-80.0, 0.0);
        // the release click belongs to the dragged card
        assert_eq!(navigator.card_clicked("a"), ClickOutcome::Suppressed);
        assert_eq!(navigator.card_clicked("a"), ClickOutcome::Expanded);
    }

    #[test]
    fn test_click_on_new_top_after_swipe_counts() {
        let mut navigator = Navigator::new(abc_cards(), LayoutMode::Stack);
        navigator.drag_start();
        navigator.drag_end(-60.0, 0.0);
        assert_eq!(top_id(&navigator), "b");
        assert_eq!(navigator.card_clicked("b"), ClickOutcome::Expanded);
        // disarmed by the click above
        navigator.card_clicked("b");
        assert_eq!(navigator.card_clicked("a"), ClickOutcome::Expanded);
    }

    #[test]
    fn test_click_after_small_drag_counts() {
        let mut navigator = Navigator::new(abc_cards(), LayoutMode::Stack);
        navigator.drag_start();
        navigator.drag_end(-20.0, 0.0);
        assert_eq!(navigator.card_clicked("a"), ClickOutcome::Expanded);
    }

    #[test]
    fn test_click_after_short_flick_is_suppressed() {
        let mut navigator = Navigator::new(abc_cards(), LayoutMode::Stack);
        navigator.drag_start();
        // 12 * 300 = 3600 clears the momentum bar while the offset stays small
        assert_eq!(navigator.drag_end(-12.0, -300.0), Command::Advance);
        assert_eq!(top_id(&navigator), "b");
        assert_eq!(navigator.card_clicked("a"), ClickOutcome::Suppressed);
        assert_eq!(navigator.expanded_card_id(), None);
    }

    #[test]
    fn test_other_transition_disarms_click_suppression() {
        let mut navigator = Navigator::new(abc_cards(), LayoutMode::Stack);
        navigator.drag_end(-80.0, 0.0);
        navigator.select_active_by_dot(0);
        assert_eq!(navigator.card_clicked("a"), ClickOutcome::Expanded);
    }

    #[test]
    fn test_close_clears_expansion() {
        let mut navigator = Navigator::new(abc_cards(), LayoutMode::Stack);
        navigator.card_clicked("c");
        navigator.close();
        assert_eq!(navigator.expanded_card_id(), None);
    }

    #[test]
    fn test_activation_listener_fires_on_expand_only() {
        let activated = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&activated);
        let mut navigator = Navigator::new(abc_cards(), LayoutMode::Stack);
        navigator.set_on_card_activated(Box::new(move |card| {
            sink.borrow_mut().push(card.id.clone())
        }));

        navigator.card_clicked("a");
        navigator.card_clicked("a");
        navigator.card_clicked("b");
        assert_eq!(*activated.borrow(), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_replace_cards_resets_index_and_drops_missing_expansion() {
        let mut navigator = Navigator::new(abc_cards(), LayoutMode::Stack);
        navigator.select_active_by_dot(2);
        navigator.card_clicked("c");
        navigator.replace_cards(numbered_cards(2));
        assert_eq!(navigator.active_index(), 0);
        assert_eq!(navigator.expanded_card_id(), None);
    }

    #[test]
    fn test_replace_cards_keeps_expansion_still_present() {
        let mut navigator = Navigator::new(abc_cards(), LayoutMode::Stack);
        navigator.card_clicked("b");
        let mut cards = abc_cards();
        cards.remove(0);
        navigator.replace_cards(cards);
        assert_eq!(navigator.expanded_card_id(), Some("b"));
    }

    #[test]
    fn test_empty_registry_renders_nothing() {
        let mut navigator = Navigator::new(abc_cards(), LayoutMode::Stack);
        navigator.replace_cards(Vec::new());
        assert!(navigator.render_model().is_empty());
        assert_eq!(navigator.top_card(), Err(NavigatorError::EmptyRegistry));
        navigator.drag_start();
        assert_eq!(navigator.drag_end(-60.0, 0.0), Command::None);
        navigator.select_active_by_dot(3);
        navigator.advance();
        assert_eq!(navigator.card_clicked("a"), ClickOutcome::Ignored);
        assert!(navigator.dots().is_empty());
    }

    #[test]
    fn test_dots_track_active_index() {
        let mut navigator = Navigator::new(abc_cards(), LayoutMode::Stack);
        navigator.select_active_by_dot(1);
        assert_eq!(navigator.dots(), vec![false, true, false]);
        navigator.set_layout(LayoutMode::List);
        assert!(navigator.dots().is_empty());

        let single = Navigator::new(numbered_cards(1), LayoutMode::Stack);
        assert!(single.dots().is_empty());
    }

    #[test]
    fn test_custom_interpreter_thresholds() {
        let mut navigator = Navigator::new(abc_cards(), LayoutMode::Stack)
            .with_interpreter(GestureInterpreter::new(10.0, 100.0));
        assert_eq!(navigator.drag_end(-15.0, 0.0), Command::Advance);
        assert_eq!(navigator.card_clicked("a"), ClickOutcome::Suppressed);
    }

    #[test]
    fn test_card_lookup_errors() {
        let navigator = Navigator::new(abc_cards(), LayoutMode::Stack);
        assert_eq!(
            navigator.card("zzz"),
            Err(NavigatorError::UnknownCardId("zzz".to_string()))
        );
        assert_eq!(navigator.card("b").map(|c| c.id.as_str()), Ok("b"));
        assert_eq!(
            NavigatorError::UnknownCardId("zzz".into()).to_string(),
            "unknown card id: zzz"
        );
    }
}
