//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the page,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Animating** (intro, navbar ripples, a card mid-drag): draws every ~50ms.
//! - **Idle**: sleeps up to 250ms and only redraws on events, terminal
//!   resize, or when the hero word changes.
//!
//! ## Pointer Mapping
//!
//! ```text
//! MouseDown on card    → DragTracker::press
//! MouseDrag (1st move) → Action::DragStart
//! MouseUp after move   → Action::DragEnd { offset, velocity }
//! MouseUp              → Action::CardClicked(id)
//! ```
//!
//! The click is always sent after a release on the card, drag or not. The
//! navigator decides whether a swipe swallows it.

mod component;
mod components;
mod drag;
mod event;
mod ui;

use log::{debug, info};
use std::io::stdout;
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, Show};
use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{
    CardStackState, DetailEvent, LayoutSwitcherState, NavbarState, PaginationState,
    ServiceDetailState,
};
use crate::tui::drag::DragTracker;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const ANIMATION_FRAME: Duration = Duration::from_millis(50);
const IDLE_POLL: Duration = Duration::from_millis(250);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    // Persistent component states
    pub card_stack: CardStackState,
    pub switcher: LayoutSwitcherState,
    pub pagination: PaginationState,
    pub navbar: NavbarState,
    pub detail: ServiceDetailState,
    // Pointer held on a card (None = no press in progress)
    pub drag: Option<DragTracker>,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            card_stack: CardStackState::new(),
            switcher: LayoutSwitcherState::new(),
            pagination: PaginationState::new(),
            navbar: NavbarState::new(),
            detail: ServiceDetailState::new(),
            drag: None,
        }
    }

    fn is_animating(&self) -> bool {
        self.navbar.is_animating() || self.drag.is_some()
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // REPORT_EVENT_TYPES lets us ignore key release events
        execute!(
            stdout(),
            EnableMouseCapture,
            Hide,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
        info!("Terminal modes enabled (mouse, hidden cursor, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableMouseCapture,
            Show
        );
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame
    let mut hero_index = usize::MAX;

    loop {
        let elapsed = start_time.elapsed();
        tui.navbar.prune(elapsed);

        let animating = !app.intro.is_complete(elapsed) || tui.is_animating();
        if animating {
            needs_redraw = true;
        }

        // Idle pages still need a frame when the hero word rotates
        let current_hero = app.hero.index_at(elapsed);
        if current_hero != hero_index {
            hero_index = current_hero;
            needs_redraw = true;
        }

        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, elapsed))?;
            needs_redraw = false;
        }

        let timeout = if animating { ANIMATION_FRAME } else { IDLE_POLL };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if handle_event(&mut app, &mut tui, &event, start_time.elapsed(), Instant::now()) {
                should_quit = true;
            }
        }

        if should_quit {
            break;
        }
    }

    info!("Shutting down");
    ratatui::restore();
    Ok(())
}

/// Route one terminal event. Returns `true` when the app should quit.
///
/// `elapsed` is time since startup (drives the intro and ripples), `now` is
/// the wall clock used for drag velocity.
fn handle_event(
    app: &mut App,
    tui: &mut TuiState,
    event: &TuiEvent,
    elapsed: Duration,
    now: Instant,
) -> bool {
    match event {
        // Resize just needs a redraw
        TuiEvent::Resize => return false,
        // ForceQuit (Ctrl+C) always quits regardless of mode
        TuiEvent::ForceQuit => return apply(app, tui, Action::Quit),
        _ => {}
    }

    // Any key or click skips the intro; drags and releases are ignored
    if !app.intro.is_complete(elapsed) {
        if !matches!(event, TuiEvent::MouseDrag(..) | TuiEvent::MouseUp(..)) {
            return apply(app, tui, Action::SkipIntro);
        }
        return false;
    }

    // When the detail overlay is open, route all events to it
    if app.detail.is_some() {
        match *event {
            TuiEvent::MouseDown(col, row) if !tui.detail.contains(col, row) => {
                return apply(app, tui, Action::CloseDetail);
            }
            TuiEvent::MouseDown(..) | TuiEvent::MouseDrag(..) | TuiEvent::MouseUp(..) => {}
            _ => {
                if let Some(DetailEvent::Dismiss) = tui.detail.handle_event(event) {
                    return apply(app, tui, Action::CloseDetail);
                }
            }
        }
        return false;
    }

    match *event {
        TuiEvent::Escape => apply(app, tui, Action::CollapseCard),
        TuiEvent::InputChar('q') => apply(app, tui, Action::Quit),
        TuiEvent::MouseDown(col, row) => on_mouse_down(app, tui, col, row, elapsed, now),
        TuiEvent::MouseDrag(col, _) => on_mouse_drag(app, tui, col, now),
        TuiEvent::MouseUp(col, row) => on_mouse_up(app, tui, col, row, now),
        _ => match tui.card_stack.handle_key(event, &app.navigator) {
            Some(action) => apply(app, tui, action),
            None => false,
        },
    }
}

fn on_mouse_down(
    app: &mut App,
    tui: &mut TuiState,
    col: u16,
    row: u16,
    elapsed: Duration,
    now: Instant,
) -> bool {
    if tui.navbar.click(col, row, elapsed) {
        debug!("Navbar ripple at ({col}, {row})");
        return false;
    }
    if let Some(mode) = tui.switcher.hit_test(col, row) {
        return apply(app, tui, Action::SetLayout(mode));
    }
    if let Some(index) = tui.pagination.hit_test(col, row) {
        return apply(app, tui, Action::SelectDot(index as i64));
    }
    if let Some(hit) = tui.card_stack.hit_test(col, row).cloned() {
        if let Some(position) = app.navigator.cards().position_of(&hit.id) {
            tui.card_stack.focused = position;
        }
        tui.drag = Some(DragTracker::press(hit.id, hit.draggable, col, now));
    }
    false
}

fn on_mouse_drag(app: &mut App, tui: &mut TuiState, col: u16, now: Instant) -> bool {
    let Some(tracker) = tui.drag.as_mut() else {
        return false;
    };
    let started = tracker.move_to(col, now);
    tui.card_stack.drag_offset = tracker.offset_columns();
    if started {
        return apply(app, tui, Action::DragStart);
    }
    false
}

fn on_mouse_up(app: &mut App, tui: &mut TuiState, col: u16, row: u16, now: Instant) -> bool {
    let Some(tracker) = tui.drag.take() else {
        return false;
    };
    tui.card_stack.drag_offset = 0;
    let release = tracker.release(col, now);

    if release.dragged {
        let quit = apply(
            app,
            tui,
            Action::DragEnd {
                offset_x: release.offset_x,
                velocity_x: release.velocity_x,
            },
        );
        if quit {
            return true;
        }
    } else if tui.card_stack.hit_test(col, row).map(|hit| hit.id.as_str())
        != Some(release.card_id.as_str())
    {
        // Pressed on one card, released elsewhere: not a click
        return false;
    }

    apply(app, tui, Action::CardClicked(release.card_id))
}

/// Run an action through the core and carry out its effect.
fn apply(app: &mut App, tui: &mut TuiState, action: Action) -> bool {
    match update(app, action) {
        Effect::Quit => true,
        Effect::CardActivated(id) => {
            info!("Opened service detail: {id}");
            tui.detail.reset();
            false
        }
        Effect::None => false,
    }
}
