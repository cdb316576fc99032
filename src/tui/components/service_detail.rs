//! # Service Detail Overlay
//!
//! Centered overlay with the full copy for the activated service. Opens
//! when a card expands, closes on Esc or a click outside it. Scrolls with
//! Up/Down when the feature list does not fit.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `ServiceDetailState` lives in `TuiState`
//! - `ServiceDetail` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Clear, Padding, Paragraph, Wrap};

use crate::core::services::Service;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Persistent state for the detail overlay.
#[derive(Debug, Default)]
pub struct ServiceDetailState {
    pub scroll: u16,
    /// Where the overlay was drawn last frame. Empty while closed.
    pub area: Rect,
}

impl ServiceDetailState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from the top for a freshly opened service.
    pub fn reset(&mut self) {
        self.scroll = 0;
    }

    pub fn contains(&self, col: u16, row: u16) -> bool {
        self.area.contains(Position::new(col, row))
    }
}

/// Events emitted by the detail overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailEvent {
    Dismiss,
}

impl EventHandler for ServiceDetailState {
    type Event = DetailEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<DetailEvent> {
        match event {
            TuiEvent::Escape | TuiEvent::InputChar('q') => Some(DetailEvent::Dismiss),
            TuiEvent::CursorUp => {
                self.scroll = self.scroll.saturating_sub(1);
                None
            }
            TuiEvent::CursorDown => {
                self.scroll = self.scroll.saturating_add(1);
                None
            }
            _ => None,
        }
    }
}

/// Transient render wrapper for the detail overlay.
pub struct ServiceDetail<'a> {
    state: &'a mut ServiceDetailState,
    service: &'a Service,
}

impl<'a> ServiceDetail<'a> {
    pub fn new(state: &'a mut ServiceDetailState, service: &'a Service) -> Self {
        Self { state, service }
    }

    fn body(&self) -> Vec<Line<'a>> {
        let service = self.service;
        let mut lines = vec![
            Line::styled(
                service.description.as_str(),
                Style::default().fg(Color::White),
            ),
            Line::default(),
            Line::styled(
                service.full_description.as_str(),
                Style::default().fg(Color::Gray),
            ),
        ];

        if !service.features.is_empty() {
            lines.push(Line::default());
            lines.push(Line::styled(
                "What's Included:",
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ));
            for feature in &service.features {
                lines.push(Line::from(vec![
                    Span::styled("  ✓ ", Style::default().fg(Color::Green)),
                    Span::styled(feature.as_str(), Style::default().fg(Color::Gray)),
                ]));
            }
        }

        lines.push(Line::default());
        lines.push(Line::styled(
            "Get Started →",
            Style::default().fg(Color::Black).bg(Color::White).add_modifier(Modifier::BOLD),
        ));
        lines
    }
}

impl Component for ServiceDetail<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(70, 70, area);
        self.state.area = overlay;

        frame.render_widget(Clear, overlay);

        let title = match &self.service.icon {
            Some(icon) => format!(" {} {} ", icon, self.service.title),
            None => format!(" {} ", self.service.title),
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::White))
            .title(title)
            .title_style(Style::default().add_modifier(Modifier::BOLD))
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" ↑↓ Scroll  Esc Close ").centered())
            .padding(Padding::horizontal(1));

        let lines = self.body();
        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });

        // Keep the scroll from running past the end of the content.
        let inner = block.inner(overlay);
        let content_height = paragraph.line_count(inner.width) as u16;
        let max_scroll = content_height.saturating_sub(inner.height);
        self.state.scroll = self.state.scroll.min(max_scroll);

        frame.render_widget(paragraph.scroll((self.state.scroll, 0)).block(block), overlay);
    }
}

/// Compute a centered rect using percentage of the outer rect.
fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}
