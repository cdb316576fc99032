//! # Actions
//!
//! Everything that can happen on the page becomes an `Action`.
//! User swipes the top card? That's `Action::DragEnd { .. }`.
//! User clicks a pagination dot? That's `Action::SelectDot(index)`.
//!
//! The `update()` function takes the current state and an action,
//! mutates it, and returns an `Effect` for the adapter to carry out.
//! No I/O here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! This makes everything testable: `assert_eq!(update(&mut app, action), expected)`.
//! And debuggable: log every action, replay the exact session.

use log::debug;

use crate::core::card::Card;
use crate::core::gesture::Command;
use crate::core::layout::LayoutMode;
use crate::core::navigator::ClickOutcome;
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetLayout(LayoutMode),
    CycleLayout,
    DragStart,
    DragEnd { offset_x: f64, velocity_x: f64 },
    SelectDot(i64),
    Advance,
    Retreat,
    CardClicked(String),
    /// Collapse the expanded card.
    CollapseCard,
    /// Dismiss the detail overlay.
    CloseDetail,
    ReplaceCards(Vec<Card>),
    SkipIntro,
    Quit,
}

/// Side effects the adapter must carry out after `update`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// A card became expanded; carries its id.
    CardActivated(String),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::SetLayout(mode) => {
            app.navigator.set_layout(mode);
            app.status_message = format!("View: {}", mode);
            Effect::None
        }
        Action::CycleLayout => {
            let mode = app.navigator.layout_mode().next();
            update(app, Action::SetLayout(mode))
        }
        Action::DragStart => {
            app.navigator.drag_start();
            Effect::None
        }
        Action::DragEnd {
            offset_x,
            velocity_x,
        } => {
            let command = app.navigator.drag_end(offset_x, velocity_x);
            if command != Command::None {
                announce_top(app);
            }
            Effect::None
        }
        Action::SelectDot(index) => {
            app.navigator.select_active_by_dot(index);
            announce_top(app);
            Effect::None
        }
        Action::Advance => {
            app.navigator.advance();
            announce_top(app);
            Effect::None
        }
        Action::Retreat => {
            app.navigator.retreat();
            announce_top(app);
            Effect::None
        }
        Action::CardClicked(id) => match app.navigator.card_clicked(&id) {
            ClickOutcome::Expanded => {
                app.detail = Some(id.clone());
                Effect::CardActivated(id)
            }
            ClickOutcome::Collapsed | ClickOutcome::Suppressed | ClickOutcome::Ignored => {
                Effect::None
            }
        },
        Action::CollapseCard => {
            app.navigator.close();
            Effect::None
        }
        Action::CloseDetail => {
            app.detail = None;
            Effect::None
        }
        Action::ReplaceCards(cards) => {
            app.navigator.replace_cards(cards);
            let stale = app
                .detail
                .as_deref()
                .is_some_and(|id| !app.navigator.cards().contains(id));
            if stale {
                app.detail = None;
            }
            Effect::None
        }
        Action::SkipIntro => {
            app.intro.skip();
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

fn announce_top(app: &mut App) {
    if app.navigator.layout_mode() != LayoutMode::Stack {
        return;
    }
    if let Ok(card) = app.navigator.top_card() {
        app.status_message = format!(
            "{} ({}/{})",
            card.title,
            app.navigator.active_index() + 1,
            app.navigator.cards().count()
        );
    }
}
