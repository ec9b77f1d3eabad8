//! Traversal direction for the circular zone.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The direction of travel around the circular zone.
///
/// Clockwise follows the circular sequence in array order (都庁前 →
/// 新宿西口 → ...); counter-clockwise walks it backwards. The direction
/// is irrelevant for a route confined to the linear zone, where the
/// endpoints imply the direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Clockwise,
    Counterclockwise,
}

impl Direction {
    /// Step a sequence index one station in this direction, wrapping
    /// modulo `len`. The backward step is normalized explicitly rather
    /// than relying on negative-modulo behavior.
    pub fn step(&self, index: usize, len: usize) -> usize {
        match self {
            Direction::Clockwise => (index + 1) % len,
            Direction::Counterclockwise => (index + len - 1) % len,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Clockwise => f.write_str("clockwise"),
            Direction::Counterclockwise => f.write_str("counterclockwise"),
        }
    }
}
