//! # Cards
//!
//! A `Card` is one item of content in the stack. The `CardRegistry` holds the
//! ordered sequence the navigator works over. Cards are owned by the caller
//! and never mutated once handed over; replacing them means replacing the
//! whole registry.

use serde::Serialize;
use std::fmt;

/// An immutable item of content shown in the stack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Short glyph drawn in the card corner (the terminal stand-in for an icon).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Display hint for the card background, e.g. `"#f5f5f5"` or `"cyan"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Card {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            icon: None,
            color: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryError {
    EmptyRegistry,
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::EmptyRegistry => write!(f, "card registry is empty"),
        }
    }
}

impl std::error::Error for RegistryError {}

/// Ordered, read-only sequence of cards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardRegistry {
    cards: Vec<Card>,
}

impl CardRegistry {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn count(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Card at `logical_index` taken modulo `count()`. Negative indices wrap
    /// from the end, so `at(-1)` is the last card.
    pub fn at(&self, logical_index: i64) -> Result<&Card, RegistryError> {
        if self.cards.is_empty() {
            return Err(RegistryError::EmptyRegistry);
        }
        let index = wrap_index(logical_index, self.cards.len());
        Ok(&self.cards[index])
    }

    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.cards.iter().position(|card| card.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position_of(id).is_some()
    }

    pub fn get(&self, id: &str) -> Option<&Card> {
        self.cards.iter().find(|card| card.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

/// Euclidean modulo into `[0, count)`. `count` must be non-zero.
pub fn wrap_index(index: i64, count: usize) -> usize {
    index.rem_euclid(count as i64) as usize
}
