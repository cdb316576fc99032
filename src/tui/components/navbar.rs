//! # Navbar Component
//!
//! Top bar with the brand on the left and section links on the right.
//! Clicking the brand leaves a ripple that expands and fades.
//!
//! ## Layout
//!
//! ```text
//! ➤ Click Studio                         Services  About  Team  Contact
//!   Making people click on your business
//! ```
//!
//! Always two rows. On narrow terminals the links are dropped before the
//! brand is truncated.
//!
//! ## Ripples
//!
//! Each click on the brand records a `Ripple` at the pointer cell. A ripple
//! is drawn for `RIPPLE_VISIBLE` and kept around for `RIPPLE_LIFETIME`, then
//! pruned. The ring grows through `RIPPLE_FRAMES` as it ages.

use std::time::Duration;

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

pub const RIPPLE_LIFETIME: Duration = Duration::from_millis(1000);
const RIPPLE_VISIBLE: Duration = Duration::from_millis(600);
const RIPPLE_FRAMES: [&str; 3] = ["•", "○", "◯"];

const BRAND: &str = "➤ Click Studio";
const TAGLINE: &str = "  Making people click on your business";
const LINKS: &str = "Services  About  Team  Contact ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ripple {
    pub col: u16,
    pub row: u16,
    /// Elapsed app time when the click happened.
    pub born: Duration,
}

/// Persistent navbar state: live ripples and where the brand was drawn.
#[derive(Debug, Default)]
pub struct NavbarState {
    pub ripples: Vec<Ripple>,
    pub brand: Rect,
}

impl NavbarState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a click. Returns `true` if it landed on the brand.
    pub fn click(&mut self, col: u16, row: u16, now: Duration) -> bool {
        if !self.brand.contains(Position::new(col, row)) {
            return false;
        }
        self.ripples.push(Ripple { col, row, born: now });
        true
    }

    pub fn prune(&mut self, now: Duration) {
        self.ripples
            .retain(|r| now.saturating_sub(r.born) < RIPPLE_LIFETIME);
    }

    pub fn is_animating(&self) -> bool {
        !self.ripples.is_empty()
    }
}

/// Transient render wrapper for the navbar.
pub struct Navbar<'a> {
    state: &'a mut NavbarState,
    now: Duration,
}

impl<'a> Navbar<'a> {
    pub fn new(state: &'a mut NavbarState, now: Duration) -> Self {
        Self { state, now }
    }
}

impl Component for Navbar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if area.height == 0 {
            return;
        }

        let brand_width = BRAND.chars().count() as u16;
        let show_links = area.width >= brand_width + LINKS.len() as u16 + 2;

        let mut top = vec![Span::styled(
            BRAND,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )];
        if show_links {
            let padding = area.width - brand_width - LINKS.len() as u16;
            top.push(Span::raw(" ".repeat(padding as usize)));
            top.push(Span::styled(LINKS, Style::default().fg(Color::Gray)));
        }

        let lines = vec![
            Line::from(top),
            Line::styled(TAGLINE, Style::default().fg(Color::DarkGray)),
        ];
        frame.render_widget(Paragraph::new(lines), area);

        self.state.brand = Rect::new(
            area.x,
            area.y,
            brand_width.min(area.width),
            area.height.min(2),
        );

        let buffer = frame.buffer_mut();
        for ripple in &self.state.ripples {
            let age = self.now.saturating_sub(ripple.born);
            if age >= RIPPLE_VISIBLE {
                continue;
            }
            let step = (age.as_millis() * RIPPLE_FRAMES.len() as u128
                / RIPPLE_VISIBLE.as_millis()) as usize;
            let glyph = RIPPLE_FRAMES[step.min(RIPPLE_FRAMES.len() - 1)];
            if area.contains(Position::new(ripple.col, ripple.row)) {
                buffer.set_string(ripple.col, ripple.row, glyph, Style::default().fg(Color::White));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(state: &mut NavbarState, width: u16, now: Duration) -> String {
        let backend = TestBackend::new(width, 2);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| Navbar::new(state, now).render(f, f.area()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_navbar_shows_brand_and_links() {
        let mut state = NavbarState::new();
        let text = render(&mut state, 80, Duration::ZERO);
        assert!(text.contains("Click Studio"));
        assert!(text.contains("Contact"));
        assert!(text.contains("Making people click"));
        assert_eq!(state.brand.width, BRAND.chars().count() as u16);
    }

    #[test]
    fn test_narrow_navbar_drops_links() {
        let mut state = NavbarState::new();
        let text = render(&mut state, 30, Duration::ZERO);
        assert!(text.contains("Click Studio"));
        assert!(!text.contains("Contact"));
    }

    #[test]
    fn test_click_outside_brand_is_ignored() {
        let mut state = NavbarState::new();
        render(&mut state, 80, Duration::ZERO);
        assert!(!state.click(70, 0, Duration::ZERO));
        assert!(state.click(2, 0, Duration::ZERO));
        assert_eq!(state.ripples.len(), 1);
    }

    #[test]
    fn test_ripples_expire() {
        let mut state = NavbarState::new();
        render(&mut state, 80, Duration::ZERO);
        state.click(1, 0, Duration::from_millis(100));
        state.prune(Duration::from_millis(1099));
        assert!(state.is_animating());
        state.prune(Duration::from_millis(1100));
        assert!(!state.is_animating());
    }

    #[test]
    fn test_ripple_drawn_while_young() {
        let mut state = NavbarState::new();
        render(&mut state, 80, Duration::ZERO);
        state.click(3, 1, Duration::ZERO);
        let text = render(&mut state, 80, Duration::from_millis(250));
        assert!(text.contains('○'));
        let text = render(&mut state, 80, Duration::from_millis(700));
        assert!(!text.contains('○') && !text.contains('◯'));
    }
}
