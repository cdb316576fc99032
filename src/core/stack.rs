//! # Stack Order Engine
//!
//! Maps `(active_index, card_count, layout)` to a placement for every card.
//!
//! ```text
//! Stack mode, 4 cards, active = 1
//!
//!   logical:   1  2  3  0        (active first, wrapping)
//!   position:  0  1  2  3
//!   paint:     0  3  2  1  ← reversed: back cards first, active card last
//! ```
//!
//! In `Grid` and `List` the registry order is passed straight through with
//! no offset or rotation. Layout changes never reorder the registry itself.

use serde::Serialize;

use crate::core::layout::LayoutMode;

/// Offset per stack position, both axes, in display units.
pub const STACK_OFFSET_STEP: f64 = 6.0;
/// Rotation per stack position in degrees. Position 1 is rotation-neutral.
pub const STACK_ROTATION_STEP: f64 = 1.5;
/// z-order shared by every card outside Stack mode.
pub const FLAT_Z_ORDER: usize = 1;

/// Geometric transform for one card, in display units and degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Transform {
    pub offset_x: f64,
    pub offset_y: f64,
    pub z_order: usize,
    pub rotation: f64,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        offset_x: 0.0,
        offset_y: 0.0,
        z_order: FLAT_Z_ORDER,
        rotation: 0.0,
    };

    /// Fanned deck transform for a card at `stack_position` in a stack of `card_count`.
    pub fn for_stack_position(stack_position: usize, card_count: usize) -> Self {
        let step = stack_position as f64;
        Self {
            offset_x: step * STACK_OFFSET_STEP,
            offset_y: step * STACK_OFFSET_STEP,
            z_order: card_count - stack_position,
            rotation: (step - 1.0) * STACK_ROTATION_STEP,
        }
    }
}

/// Where one card lands in the current layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Index into the card registry.
    pub logical_index: usize,
    /// 0 = visually front.
    pub stack_position: usize,
    pub transform: Transform,
}

/// Placements for every card, in paint order.
///
/// Stack mode returns back-to-front so the active card is painted last.
/// Grid and List return registry order. Empty when `card_count == 0`.
pub fn stack_order(active_index: usize, card_count: usize, layout: LayoutMode) -> Vec<Placement> {
    if card_count == 0 {
        return Vec::new();
    }

    match layout {
        LayoutMode::Stack => {
            let mut placements: Vec<Placement> = (0..card_count)
                .map(|stack_position| Placement {
                    logical_index: (active_index + stack_position) % card_count,
                    stack_position,
                    transform: Transform::for_stack_position(stack_position, card_count),
                })
                .collect();
            placements.reverse();
            placements
        }
        LayoutMode::Grid | LayoutMode::List => (0..card_count)
            .map(|index| Placement {
                logical_index: index,
                stack_position: index,
                transform: Transform::IDENTITY,
            })
            .collect(),
    }
}
