//! # Pagination Dots
//!
//! One dot per card under the stack, the active one filled and wider.
//! Nothing is drawn when the navigator reports no dots.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

const ACTIVE_DOT: &str = "━━";
const DOT: &str = "•";

#[derive(Debug, Default)]
pub struct PaginationState {
    pub hits: Vec<(usize, Rect)>,
}

impl PaginationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hit_test(&self, col: u16, row: u16) -> Option<usize> {
        self.hits
            .iter()
            .find(|(_, rect)| rect.contains(Position::new(col, row)))
            .map(|(index, _)| *index)
    }
}

pub struct Pagination<'a> {
    state: &'a mut PaginationState,
    dots: &'a [bool],
}

impl<'a> Pagination<'a> {
    pub fn new(state: &'a mut PaginationState, dots: &'a [bool]) -> Self {
        Self { state, dots }
    }
}

impl Component for Pagination<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.hits.clear();
        if self.dots.is_empty() || area.height == 0 {
            return;
        }

        let width_of = |active: bool| -> u16 { if active { 2 } else { 1 } };
        let total: u16 = self.dots.iter().map(|a| width_of(*a) + 1).sum::<u16>() - 1;
        let start = area.x + area.width.saturating_sub(total) / 2;
        let mut x = start;

        let mut spans = Vec::new();
        for (index, active) in self.dots.iter().copied().enumerate() {
            if index > 0 {
                spans.push(Span::raw(" "));
            }
            let (glyph, color) = if active {
                (ACTIVE_DOT, Color::White)
            } else {
                (DOT, Color::DarkGray)
            };
            spans.push(Span::styled(glyph, Style::default().fg(color)));

            let rect = Rect::new(x, area.y, width_of(active), 1).intersection(area);
            if !rect.is_empty() {
                self.state.hits.push((index, rect));
            }
            x += width_of(active) + 1;
        }

        let row = Rect::new(start, area.y, total, 1).intersection(area);
        frame.render_widget(Paragraph::new(Line::from(spans)), row);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(state: &mut PaginationState, dots: &[bool]) -> String {
        let mut terminal = Terminal::new(TestBackend::new(30, 1)).unwrap();
        terminal
            .draw(|f| Pagination::new(state, dots).render(f, f.area()))
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
    fn test_dots_hit_test_to_index() {
        let mut state = PaginationState::new();
        let text = draw(&mut state, &[false, true, false, false]);
        assert!(text.contains("━━"));
        assert_eq!(state.hits.len(), 4);
        for (index, rect) in state.hits.clone() {
            assert_eq!(state.hit_test(rect.x, rect.y), Some(index));
        }
        // the gap between dots is not a hit
        let (_, first) = state.hits[0];
        assert_eq!(state.hit_test(first.x + 1, first.y), None);
    }

    #[test]
    fn test_no_dots_draws_nothing() {
        let mut state = PaginationState::new();
        let text = draw(&mut state, &[]);
        assert!(text.trim().is_empty());
        assert!(state.hits.is_empty());
    }
}
