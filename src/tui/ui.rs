//! # Page Layout
//!
//! Composes the components into the landing page.
//!
//! ```text
//! ┌ navbar (2) ─────────────────────────────────────┐
//! │ hero (7, only on tall terminals)                │
//! │ Our Services                                    │
//! │ Swipe through our services or switch views ...  │
//! │              stack  grid  list                  │
//! │ cards                                           │
//! │                 • ━━ • •                        │
//! └ footer (1) ─────────────────────────────────────┘
//! ```
//!
//! While the intro runs it owns the whole screen. The detail overlay is
//! drawn last, over everything else.

use std::time::Duration;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{
    CardStack, Hero, Intro, LayoutSwitcher, Navbar, Pagination, ServiceDetail,
};

const HERO_MIN_TERMINAL_HEIGHT: u16 = 30;
const SERVICES_SUBTITLE: &str = "Swipe through our services or switch views to explore what we offer";
const KEY_HINTS: &str = " Tab view  ←→ swipe  Enter open  Esc close  q quit ";

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, elapsed: Duration) {
    use Constraint::{Length, Min};

    let area = frame.area();
    if !app.intro.is_complete(elapsed) {
        Intro::new(&app.intro, elapsed).render(frame, area);
        return;
    }

    let hero_height = if area.height >= HERO_MIN_TERMINAL_HEIGHT {
        Hero::required_height()
    } else {
        0
    };
    let [navbar_area, hero_area, services_area, footer_area] =
        Layout::vertical([Length(2), Length(hero_height), Min(0), Length(1)]).areas(area);

    Navbar::new(&mut tui.navbar, elapsed).render(frame, navbar_area);
    if hero_height > 0 {
        Hero::new(app.hero.word_at(elapsed)).render(frame, hero_area);
    }
    draw_services(frame, services_area, app, tui);
    draw_footer(frame, footer_area, &app.status_message);

    match app.detail_service() {
        Some(service) => ServiceDetail::new(&mut tui.detail, service).render(frame, area),
        None => tui.detail.area = Rect::default(),
    }
}

fn draw_services(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};

    let [heading, subtitle, _, switcher, _, cards, dots_area] = Layout::vertical([
        Length(1),
        Length(1),
        Length(1),
        Length(1),
        Length(1),
        Min(0),
        Length(1),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(Line::styled(
            "Our Services",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        heading,
    );
    frame.render_widget(
        Paragraph::new(SERVICES_SUBTITLE)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center),
        subtitle,
    );

    let navigator = &app.navigator;
    LayoutSwitcher::new(&mut tui.switcher, navigator.layout_mode()).render(frame, switcher);

    let entries = navigator.render_model();
    CardStack::new(&mut tui.card_stack, &entries, navigator.layout_mode()).render(frame, cards);

    let dots = navigator.dots();
    Pagination::new(&mut tui.pagination, &dots).render(frame, dots_area);
}

fn draw_footer(frame: &mut Frame, area: Rect, status: &str) {
    let hints_width = KEY_HINTS.chars().count() as u16;
    let show_hints = area.width > hints_width + 10;

    let mut spans = vec![Span::styled(
        format!(" {}", status),
        Style::default().fg(Color::Gray),
    )];
    if show_hints {
        let used = status.chars().count() as u16 + 1;
        let padding = area.width.saturating_sub(used + hints_width);
        spans.push(Span::raw(" ".repeat(padding as usize)));
        spans.push(Span::styled(KEY_HINTS, Style::default().fg(Color::DarkGray)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
