//! # Layout Switcher
//!
//! Row of three toggle buttons above the cards. The active mode is drawn
//! inverted. Button rects are remembered for mouse hit-testing.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::core::layout::LayoutMode;
use crate::tui::component::Component;

#[derive(Debug, Default)]
pub struct LayoutSwitcherState {
    pub hits: Vec<(LayoutMode, Rect)>,
}

impl LayoutSwitcherState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hit_test(&self, col: u16, row: u16) -> Option<LayoutMode> {
        self.hits
            .iter()
            .find(|(_, rect)| rect.contains(Position::new(col, row)))
            .map(|(mode, _)| *mode)
    }
}

pub struct LayoutSwitcher<'a> {
    state: &'a mut LayoutSwitcherState,
    active: LayoutMode,
}

impl<'a> LayoutSwitcher<'a> {
    pub fn new(state: &'a mut LayoutSwitcherState, active: LayoutMode) -> Self {
        Self { state, active }
    }
}

fn button_label(mode: LayoutMode) -> String {
    format!(" {} ", mode.label())
}

impl Component for LayoutSwitcher<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.hits.clear();
        if area.height == 0 {
            return;
        }

        let total: u16 = LayoutMode::ALL
            .iter()
            .map(|m| button_label(*m).width() as u16 + 1)
            .sum::<u16>()
            .saturating_sub(1);
        let start = area.x + area.width.saturating_sub(total) / 2;
        let mut x = start;

        let mut spans = Vec::new();
        for mode in LayoutMode::ALL {
            let label = button_label(mode);
            let width = label.width() as u16;
            let style = if mode == self.active {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };

            let rect = Rect::new(x, area.y, width, 1).intersection(area);
            if !rect.is_empty() {
                self.state.hits.push((mode, rect));
            }
            x += width + 1;

            if !spans.is_empty() {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(label, style));
        }

        let row = Rect::new(start, area.y, total, 1).intersection(area);
        frame.render_widget(Paragraph::new(Line::from(spans)), row);
    }
}
