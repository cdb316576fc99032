//! # Card Stack Component
//!
//! Draws the navigator's render model and remembers where every card landed
//! so mouse events can be hit-tested against the last frame.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `CardStackState` lives in `TuiState` (focus, hit rects, drag offset)
//! - `CardStack` is created each frame with borrowed state and props
//!
//! ## Geometry
//!
//! Stack mode converts each card's transform from display units to cells
//! (`UNITS_PER_COLUMN`, `UNITS_PER_ROW`), so the deck fans two columns right
//! and one row down per position. Cards are painted in render-model order,
//! each clearing what is beneath it, so the active card ends up in front.
//! Rotation has no cell equivalent and is dropped.
//!
//! Grid mode uses two columns when there is room, List a single column.
//! Both scroll just enough to keep the focused card on screen.

use ratatui::Frame;
use ratatui::layout::{Alignment, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{BorderType, Block, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::action::Action;
use crate::core::layout::LayoutMode;
use crate::core::navigator::{Navigator, RenderEntry};
use crate::core::stack::STACK_OFFSET_STEP;
use crate::tui::component::Component;
use crate::tui::drag::{UNITS_PER_COLUMN, UNITS_PER_ROW};
use crate::tui::event::TuiEvent;

const STACK_CARD_WIDTH: u16 = 46;
const STACK_CARD_HEIGHT: u16 = 11;
const GRID_MIN_WIDTH: u16 = 60;
const GAP: u16 = 1;

/// Where a card was drawn on the last frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardHit {
    pub id: String,
    pub rect: Rect,
    pub draggable: bool,
}

/// Persistent state for the card stack.
#[derive(Debug, Default)]
pub struct CardStackState {
    /// Registry index with keyboard focus in Grid and List.
    pub focused: usize,
    /// Cards drawn last frame, in paint order.
    pub hits: Vec<CardHit>,
    /// Horizontal offset of the top card while it is being dragged, in columns.
    pub drag_offset: i32,
}

impl CardStackState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Topmost card under the given cell.
    pub fn hit_test(&self, col: u16, row: u16) -> Option<&CardHit> {
        self.hits
            .iter()
            .rev()
            .find(|hit| hit.rect.contains(Position::new(col, row)))
    }

    /// Map a key to a core action given the navigator's current state.
    pub fn handle_key(&mut self, event: &TuiEvent, navigator: &Navigator) -> Option<Action> {
        let layout = navigator.layout_mode();
        let count = navigator.cards().count();
        if count > 0 {
            self.focused = self.focused.min(count - 1);
        }

        match event {
            TuiEvent::Tab => Some(Action::CycleLayout),
            TuiEvent::InputChar('s') => Some(Action::SetLayout(LayoutMode::Stack)),
            TuiEvent::InputChar('g') => Some(Action::SetLayout(LayoutMode::Grid)),
            TuiEvent::InputChar('l') => Some(Action::SetLayout(LayoutMode::List)),
            // Digits pick a dot, and dots only exist in Stack
            TuiEvent::InputChar(c @ '1'..='9') if layout == LayoutMode::Stack => {
                let index = c.to_digit(10).map(|d| d as i64 - 1)?;
                Some(Action::SelectDot(index))
            }
            TuiEvent::Submit | TuiEvent::InputChar(' ') => {
                let card = match layout {
                    LayoutMode::Stack => navigator.top_card().ok(),
                    LayoutMode::Grid | LayoutMode::List => {
                        navigator.cards().at(self.focused as i64).ok()
                    }
                };
                card.map(|c| Action::CardClicked(c.id.clone()))
            }
            TuiEvent::CursorRight if layout == LayoutMode::Stack => Some(Action::Advance),
            TuiEvent::CursorLeft if layout == LayoutMode::Stack => Some(Action::Retreat),
            TuiEvent::CursorLeft
            | TuiEvent::CursorRight
            | TuiEvent::CursorUp
            | TuiEvent::CursorDown => {
                self.move_focus(event, layout, count);
                None
            }
            _ => None,
        }
    }

    fn move_focus(&mut self, event: &TuiEvent, layout: LayoutMode, count: usize) {
        if count == 0 || layout == LayoutMode::Stack {
            return;
        }
        let columns = match layout {
            LayoutMode::Grid if self.grid_columns_last_frame() > 1 => 2,
            _ => 1,
        };
        let delta: i64 = match event {
            TuiEvent::CursorLeft => -1,
            TuiEvent::CursorRight => 1,
            TuiEvent::CursorUp => -(columns as i64),
            TuiEvent::CursorDown => columns as i64,
            _ => 0,
        };
        self.focused = (self.focused as i64 + delta).rem_euclid(count as i64) as usize;
    }

    fn grid_columns_last_frame(&self) -> usize {
        match (self.hits.first(), self.hits.get(1)) {
            (Some(a), Some(b)) if a.rect.y == b.rect.y => 2,
            _ => 1,
        }
    }
}

/// Transient render wrapper for the card stack.
pub struct CardStack<'a> {
    state: &'a mut CardStackState,
    entries: &'a [RenderEntry<'a>],
    layout: LayoutMode,
}

impl<'a> CardStack<'a> {
    pub fn new(
        state: &'a mut CardStackState,
        entries: &'a [RenderEntry<'a>],
        layout: LayoutMode,
    ) -> Self {
        Self {
            state,
            entries,
            layout,
        }
    }

    fn render_stack(&mut self, frame: &mut Frame, area: Rect) {
        let deepest = self.entries.len().saturating_sub(1) as f64;
        let spread_x = (deepest * STACK_OFFSET_STEP / UNITS_PER_COLUMN) as u16;
        let spread_y = (deepest * STACK_OFFSET_STEP / UNITS_PER_ROW) as u16;

        let width = STACK_CARD_WIDTH.min(area.width.saturating_sub(spread_x));
        let height = STACK_CARD_HEIGHT.min(area.height.saturating_sub(spread_y));
        if width < 12 || height < 4 {
            render_too_small(frame, area);
            return;
        }

        let origin_x = area.x as i32 + (area.width.saturating_sub(width + spread_x) / 2) as i32;
        let origin_y = area.y as i32;
        let max_x = (area.x + area.width - width) as i32;

        for entry in self.entries {
            let mut dx = (entry.transform.offset_x / UNITS_PER_COLUMN).round() as i32;
            let dy = (entry.transform.offset_y / UNITS_PER_ROW).round() as i32;
            if entry.is_top {
                dx += self.state.drag_offset;
            }
            let x = (origin_x + dx).clamp(area.x as i32, max_x) as u16;
            let y = (origin_y + dy) as u16;
            let rect = Rect::new(x, y, width, height).intersection(area);

            render_card(frame, rect, entry, self.layout, entry.is_top);
            self.state.hits.push(CardHit {
                id: entry.card.id.clone(),
                rect,
                draggable: entry.is_draggable,
            });
        }
    }

    fn render_flow(&mut self, frame: &mut Frame, area: Rect) {
        let columns: u16 = if self.layout == LayoutMode::Grid && area.width >= GRID_MIN_WIDTH {
            2
        } else {
            1
        };
        // Title sits on the border, so height is clamp lines + 2 borders.
        let row_height = self.layout.description_lines() as u16 + 2;
        let cell_width = (area.width.saturating_sub(GAP * (columns - 1))) / columns;
        if cell_width < 12 || area.height < row_height {
            render_too_small(frame, area);
            return;
        }

        let visible_rows = ((area.height + GAP) / (row_height + GAP)).max(1) as usize;
        let focused_row = self.state.focused / columns as usize;
        let first_row = (focused_row + 1).saturating_sub(visible_rows);

        for (index, entry) in self.entries.iter().enumerate() {
            let row = index / columns as usize;
            if row < first_row || row >= first_row + visible_rows {
                continue;
            }
            let col = (index % columns as usize) as u16;
            let rect = Rect::new(
                area.x + col * (cell_width + GAP),
                area.y + (row - first_row) as u16 * (row_height + GAP),
                cell_width,
                row_height,
            );

            render_card(frame, rect, entry, self.layout, index == self.state.focused);
            self.state.hits.push(CardHit {
                id: entry.card.id.clone(),
                rect,
                draggable: false,
            });
        }
    }
}

impl Component for CardStack<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.hits.clear();
        if self.entries.is_empty() {
            return;
        }
        match self.layout {
            LayoutMode::Stack => self.render_stack(frame, area),
            LayoutMode::Grid | LayoutMode::List => self.render_flow(frame, area),
        }
    }
}

fn render_card(
    frame: &mut Frame,
    rect: Rect,
    entry: &RenderEntry,
    layout: LayoutMode,
    focused: bool,
) {
    let card = entry.card;

    let mut border_style = if focused {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let border_type = if entry.is_expanded {
        border_style = border_style.add_modifier(Modifier::BOLD);
        BorderType::Double
    } else {
        BorderType::Rounded
    };

    let title = match &card.icon {
        Some(icon) => format!(" {} {} ", icon, card.title),
        None => format!(" {} ", card.title),
    };

    let mut block = Block::bordered()
        .border_type(border_type)
        .border_style(border_style)
        .title(title)
        .title_style(border_style.add_modifier(Modifier::BOLD));

    if entry.is_top {
        block = block.title_bottom(Line::from(" Swipe to navigate → ").centered());
    }

    let mut style = Style::default();
    if let Some(bg) = card.color.as_deref().and_then(|c| c.parse::<Color>().ok()) {
        style = style.bg(bg);
    }

    let inner_width = rect.width.saturating_sub(2) as usize;
    let lines: Vec<Line> = clamp_lines(&card.description, inner_width, layout.description_lines())
        .into_iter()
        .map(|l| Line::styled(l, Style::default().fg(Color::Gray)))
        .collect();

    frame.render_widget(Clear, rect);
    frame.render_widget(Paragraph::new(lines).style(style).block(block), rect);
}

fn render_too_small(frame: &mut Frame, area: Rect) {
    let message = Paragraph::new("Terminal too small for cards")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(message, area);
}

/// Wrap `text` to `width` and keep at most `max_lines`, marking the cut with "…".
pub fn clamp_lines(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    if width == 0 || max_lines == 0 {
        return Vec::new();
    }
    let wrapped: Vec<String> = textwrap::wrap(text, width)
        .into_iter()
        .map(|l| l.into_owned())
        .collect();
    if wrapped.len() <= max_lines {
        return wrapped;
    }

    let mut lines: Vec<String> = wrapped.into_iter().take(max_lines).collect();
    if let Some(last) = lines.last_mut() {
        while !last.is_empty() && last.width() + 1 > width {
            last.pop();
        }
        last.push('…');
    }
    lines
}
