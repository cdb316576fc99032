//! Click Studio library exports for testing

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

pub use crate::core::card::Card;
pub use crate::core::layout::LayoutMode;
pub use crate::core::navigator::{ClickOutcome, Navigator, RenderEntry};
