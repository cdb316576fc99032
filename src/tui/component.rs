use ratatui::Frame;
use ratatui::layout::Rect;

use crate::tui::event::TuiEvent;

/// Something that draws itself into a region of the page.
///
/// Stateful components are split in two: a persistent `...State` kept in
/// `TuiState`, and a short-lived wrapper built each frame that borrows it
/// together with its props. `render` takes `&mut self` so the wrapper can
/// write back what the next input event needs, usually the rects it drew.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// Persistent state that reacts to input while it has focus.
pub trait EventHandler {
    /// What the handler reports back to the event loop.
    type Event;

    /// Consume a terminal event. `None` means nothing for the loop to do.
    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event>;
}
