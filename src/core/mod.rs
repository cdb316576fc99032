//! # Core Application Logic
//!
//! This module contains the landing page's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Navigator (cards)    │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │    Web     │      │    JSON    │
//!     │  Adapter   │      │  Adapter   │      │    dump    │
//!     │ (ratatui)  │      │  (future)  │      │  (--dump)  │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! The card stack, leaf to root:
//!
//! - [`card`]: `Card` and the `CardRegistry`
//! - [`layout`]: `LayoutMode` and the layout selector
//! - [`stack`]: stacking order and per-card transforms
//! - [`gesture`]: drag → navigation command
//! - [`selection`]: the single expanded card
//! - [`navigator`]: the façade tying them together
//!
//! Around it:
//!
//! - [`services`]: the service catalog behind the cards
//! - [`intro`], [`hero`]: timed presentation sequences
//! - [`state`]: the `App` struct, all application state in one place
//! - [`action`]: the `Action` enum and `update()` reducer
//! - [`config`]: layered settings

pub mod action;
pub mod card;
pub mod config;
pub mod gesture;
pub mod hero;
pub mod intro;
pub mod layout;
pub mod navigator;
pub mod selection;
pub mod services;
pub mod stack;
pub mod state;
