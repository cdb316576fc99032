//! # Hero Component
//!
//! Headline block between the navbar and the services section. The first
//! line's closing words rotate on the hero interval.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::tui::component::Component;

const SUBHEADING: &str = "We build businesses.";
const PITCH: &str =
    "Complete solutions from website to working store, social media to marketplace listings.";
const CALL_TO_ACTION: &str = "[ Get started ]";

pub struct Hero<'a> {
    word: &'a str,
}

impl<'a> Hero<'a> {
    pub fn new(word: &'a str) -> Self {
        Self { word }
    }

    pub fn required_height() -> u16 {
        7
    }
}

impl Component for Hero<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(vec![
                Span::styled(
                    "We don't just ",
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    self.word,
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD | Modifier::ITALIC),
                ),
            ]),
            Line::styled(
                SUBHEADING,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::default(),
            Line::styled(PITCH, Style::default().fg(Color::Gray)),
            Line::default(),
            Line::styled(
                CALL_TO_ACTION,
                Style::default().fg(Color::Black).bg(Color::White).add_modifier(Modifier::BOLD),
            ),
        ];

        let [body] = Layout::vertical([Constraint::Length(lines.len() as u16)])
            .flex(Flex::Center)
            .areas(area);

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, body);
    }
}
