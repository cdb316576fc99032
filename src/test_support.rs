//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::card::Card;
use crate::core::layout::LayoutMode;
use crate::core::services::ServiceCatalog;
use crate::core::state::App;

/// Three cards with ids `a`, `b`, `c`.
pub fn abc_cards() -> Vec<Card> {
    ["a", "b", "c"]
        .into_iter()
        .map(|id| {
            Card::new(
                id,
                format!("Card {}", id.to_uppercase()),
                format!("Description of {id}"),
            )
        })
        .collect()
}

/// `count` cards with ids `card-0`, `card-1`, ...
pub fn numbered_cards(count: usize) -> Vec<Card> {
    (0..count)
        .map(|i| Card::new(format!("card-{i}"), format!("Card {i}"), "Numbered card"))
        .collect()
}

/// Creates a test App over the built-in services in Stack mode.
pub fn test_app() -> App {
    App::new(ServiceCatalog::builtin(), LayoutMode::Stack)
}
