//! Move notation - layer-turn sequences as compact text
//!
//! A sequence is a `.`-separated list of tokens `[-]<axis><far-index>`:
//!
//! ```text
//! sequence := token ("." token)* ["."]
//! token    := ["-"] AXISCHAR DIGIT+
//! ```
//!
//! The index in the text counts layers from the far side of the cube.
//! Parsed [`MoveToken`]s store the near-side index instead, which is what
//! face addressing uses: `layer = row_size - far_index - 1`.
//!
//! # Example
//!
//! ```
//! use bigcube::notation::{invert_moves, parse_moves, Direction};
//!
//! let moves = parse_moves("r1.-f0", 4).unwrap();
//! assert_eq!(moves[0].layer, 2);
//! assert_eq!(moves[1].direction, Direction::Reverse);
//!
//! assert_eq!(invert_moves("r1.-f0"), "f0.-r1");
//! ```

pub mod format;
pub mod parser;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced while parsing move notation. Each carries the offending
/// token text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    #[error("empty move token")]
    EmptyToken,

    /// Token does not match `[-]<axis><digits>`
    #[error("malformed move token '{token}'")]
    Malformed { token: String },

    /// Digits do not fit a layer index
    #[error("invalid layer index in move token '{token}'")]
    InvalidIndex { token: String },

    #[error("layer index {index} in move token '{token}' is out of range for row size {row_size}")]
    IndexOutOfRange {
        token: String,
        index: u32,
        row_size: u32,
    },
}

/// Turn direction of a single move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Default direction, written without a sign
    Forward,
    /// Written with a leading `-`
    Reverse,
}

impl Direction {
    /// `+1` or `-1`.
    pub fn sign(self) -> i32 {
        match self {
            Direction::Forward => 1,
            Direction::Reverse => -1,
        }
    }

    pub fn inverse(self) -> Self {
        match self {
            Direction::Forward => Direction::Reverse,
            Direction::Reverse => Direction::Forward,
        }
    }

    /// Direction of a signed step; `None` for zero.
    pub fn from_step(step: i32) -> Option<Self> {
        match step.signum() {
            1 => Some(Direction::Forward),
            -1 => Some(Direction::Reverse),
            _ => None,
        }
    }
}

/// One layer turn: axis, near-side layer index and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveToken {
    pub axis: char,
    pub layer: u32,
    pub direction: Direction,
}

impl MoveToken {
    pub fn new(axis: char, layer: u32, direction: Direction) -> Self {
        Self {
            axis,
            layer,
            direction,
        }
    }

    /// The move that undoes this one.
    pub fn inverse(self) -> Self {
        Self {
            direction: self.direction.inverse(),
            ..self
        }
    }

    pub fn step(self) -> i32 {
        self.direction.sign()
    }

    /// Far-side index as written in notation; `None` unless `layer < row_size`.
    pub fn far_index(self, row_size: u32) -> Option<u32> {
        row_size.checked_sub(self.layer)?.checked_sub(1)
    }

    /// Text form of this move for a cube of side `row_size`, without
    /// separator. `None` if the layer does not exist on that cube.
    pub fn to_notation(self, row_size: u32) -> Option<String> {
        let sign = match self.direction {
            Direction::Forward => "",
            Direction::Reverse => "-",
        };
        let far_index = self.far_index(row_size)?;
        Some(format!("{}{}{}", sign, self.axis, far_index))
    }
}

/// Token-level inverse of a sequence: reversed order, every direction flipped.
pub fn invert_sequence(moves: &[MoveToken]) -> Vec<MoveToken> {
    moves.iter().rev().map(|m| m.inverse()).collect()
}

/// Non-empty `.`-separated segments of a sequence string.
pub(crate) fn segments(text: &str) -> impl DoubleEndedIterator<Item = &str> {
    text.split('.').filter(|segment| !segment.is_empty())
}

// Re-export public API
pub use format::{format_move, format_moves, invert_moves, reverse_moves};
pub use parser::{parse_move, parse_moves};
