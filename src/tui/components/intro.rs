//! # Intro Overlay
//!
//! Full-screen click-reveal shown before the page. Each `IntroStage` has
//! its own frame; `stage_progress` eases movement inside a stage.
//!
//! ```text
//! Button     [ Your Business ]
//! Cursor     [ Your Business ]            ➤
//! Aim        [ Your Business ]   ➤           (pointer glides in)
//! Click      ◯ [ Your Business ] ◯
//! Expansion  solid block grows from the button
//! Grid       grid lines sweep left to right
//! Text       CLICK → ← STUDIO
//! ```

use std::time::Duration;

use ratatui::Frame;
use ratatui::layout::{Alignment, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};

use crate::core::intro::{IntroStage, IntroTimeline};
use crate::tui::component::Component;

const BUTTON: &str = "[ Your Business ]";
const POINTER: &str = "➤";
const GRID_SPACING_X: u16 = 8;
const GRID_SPACING_Y: u16 = 4;

pub struct Intro<'a> {
    timeline: &'a IntroTimeline,
    elapsed: Duration,
}

impl<'a> Intro<'a> {
    pub fn new(timeline: &'a IntroTimeline, elapsed: Duration) -> Self {
        Self { timeline, elapsed }
    }
}

impl Component for Intro<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Block::default().style(Style::default().bg(Color::Black)), area);

        let stage = self.timeline.stage_at(self.elapsed);
        let progress = self.timeline.stage_progress(self.elapsed);
        let button = button_rect(area);

        match stage {
            IntroStage::Blank | IntroStage::Complete => {}
            IntroStage::Button => {
                let color = if progress < 0.5 { Color::DarkGray } else { Color::White };
                draw_button(frame, button, Style::default().fg(color));
            }
            IntroStage::Cursor | IntroStage::Aim => {
                draw_button(frame, button, Style::default().fg(Color::White));
                let start = button.right().saturating_add(12).min(area.right().saturating_sub(1));
                let target = button.x + button.width / 2;
                let travel = if stage == IntroStage::Aim { progress } else { 0.0 };
                let x = start as f32 - (start.saturating_sub(target)) as f32 * travel;
                let y = button.y + 1;
                let y = y.min(area.bottom().saturating_sub(1));
                put(frame, area, x.round() as u16, y, POINTER, Color::White);
            }
            IntroStage::Click => {
                draw_button(
                    frame,
                    button,
                    Style::default().fg(Color::Black).bg(Color::White).add_modifier(Modifier::BOLD),
                );
                let ring = (progress * 6.0) as u16 + 2;
                put(frame, area, button.x.saturating_sub(ring), button.y, "◯", Color::Gray);
                put(frame, area, button.right() + ring - 1, button.y, "◯", Color::Gray);
            }
            IntroStage::Expansion => {
                let half_w = (area.width as f32 / 2.0 * progress).ceil() as u16;
                let half_h = (area.height as f32 / 2.0 * progress).ceil() as u16;
                let cx = area.x + area.width / 2;
                let cy = area.y + area.height / 2;
                let rect = Rect::new(
                    cx.saturating_sub(half_w),
                    cy.saturating_sub(half_h),
                    half_w * 2,
                    half_h * 2,
                )
                .intersection(area);
                frame.render_widget(paper(), rect);
            }
            IntroStage::Grid => {
                frame.render_widget(paper(), area);
                let reach = area.x + (area.width as f32 * progress) as u16;
                let buffer = frame.buffer_mut();
                for y in area.top()..area.bottom() {
                    for x in area.left()..reach.min(area.right()) {
                        let on_col = (x - area.x) % GRID_SPACING_X == 0;
                        let on_row = (y - area.y) % GRID_SPACING_Y == 0;
                        let glyph = match (on_col, on_row) {
                            (true, true) => "┼",
                            (true, false) => "│",
                            (false, true) => "─",
                            (false, false) => continue,
                        };
                        let style = Style::default().fg(Color::Gray).bg(Color::White);
                        buffer.set_string(x, y, glyph, style);
                    }
                }
            }
            IntroStage::Text => {
                frame.render_widget(paper(), area);
                let slide = ((1.0 - (progress * 3.0).min(1.0)) * area.width as f32 / 2.0) as u16;
                let cy = area.y + area.height / 2;
                let style = Style::default()
                    .fg(Color::Black)
                    .bg(Color::White)
                    .add_modifier(Modifier::BOLD);
                let width = area.width.saturating_sub(slide);
                let click = Rect::new(area.x, cy.saturating_sub(1), width, 1);
                let studio = Rect::new(area.x + slide.min(area.width), cy, width, 1);
                frame.render_widget(
                    Paragraph::new(Line::styled("CLICK", style)).alignment(Alignment::Center),
                    click.intersection(area),
                );
                frame.render_widget(
                    Paragraph::new(Line::styled("STUDIO", style)).alignment(Alignment::Center),
                    studio.intersection(area),
                );
            }
        }

        if area.height > 2 {
            let hint = Rect::new(area.x, area.bottom() - 1, area.width, 1);
            frame.render_widget(
                Paragraph::new("press any key to skip")
                    .style(Style::default().fg(Color::DarkGray))
                    .alignment(Alignment::Center),
                hint,
            );
        }
    }
}

/// Plain white fill the reveal is drawn on.
fn paper() -> Block<'static> {
    Block::default().style(Style::default().bg(Color::White))
}

fn button_rect(area: Rect) -> Rect {
    let width = (BUTTON.len() as u16).min(area.width);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + area.height.saturating_sub(1) / 2,
        width,
        1,
    )
}

fn draw_button(frame: &mut Frame, rect: Rect, style: Style) {
    frame.render_widget(Paragraph::new(BUTTON).style(style), rect);
}

fn put(frame: &mut Frame, area: Rect, x: u16, y: u16, glyph: &str, color: Color) {
    if area.contains(Position::new(x, y)) {
        frame.buffer_mut().set_string(x, y, glyph, Style::default().fg(color));
    }
}
