//! # Layout Modes
//!
//! The stack can be arranged three ways. Only `Stack` re-indexes cards around
//! the active card; `Grid` and `List` keep registry order and leave placement
//! to the presentation layer.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    #[default]
    Stack,
    Grid,
    List,
}

impl LayoutMode {
    /// Switcher order.
    pub const ALL: [LayoutMode; 3] = [LayoutMode::Stack, LayoutMode::Grid, LayoutMode::List];

    pub fn label(self) -> &'static str {
        match self {
            LayoutMode::Stack => "stack",
            LayoutMode::Grid => "grid",
            LayoutMode::List => "list",
        }
    }

    /// Next mode in switcher order, wrapping around.
    pub fn next(self) -> Self {
        match self {
            LayoutMode::Stack => LayoutMode::Grid,
            LayoutMode::Grid => LayoutMode::List,
            LayoutMode::List => LayoutMode::Stack,
        }
    }

    /// How many description lines a card shows before clamping.
    pub fn description_lines(self) -> usize {
        match self {
            LayoutMode::Stack => 4,
            LayoutMode::Grid => 5,
            LayoutMode::List => 3,
        }
    }
}

impl fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for LayoutMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stack" => Ok(LayoutMode::Stack),
            "grid" => Ok(LayoutMode::Grid),
            "list" => Ok(LayoutMode::List),
            other => Err(format!("unknown layout mode: {other}")),
        }
    }
}

/// Records the active layout mode.
///
/// Switching is a pure state change. Card positions are recomputed lazily the
/// next time a render model is requested.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutSelector {
    mode: LayoutMode,
}

impl LayoutSelector {
    pub fn new(mode: LayoutMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    /// Returns `true` if the mode actually changed.
    pub fn set_mode(&mut self, mode: LayoutMode) -> bool {
        let changed = self.mode != mode;
        self.mode = mode;
        changed
    }
}
