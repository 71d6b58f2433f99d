//! Face storage and move notation for very large NxNxN cube puzzles.
//!
//! - [`core`](crate::core): [`GridFace`], a padded byte grid addressed with shifts
//! - [`io`]: binary face-state files and a file-backed [`FaceStore`]
//! - [`notation`]: parsing, formatting and inverting move sequences
//! - [`config`]: where face states are stored

pub mod config;
pub mod core;
pub mod io;
pub mod notation;

pub use config::{ConfigError, StoreConfig};
pub use crate::core::{FaceError, FaceGeometry, GridFace, COLOR_COUNT, MAX_ROW_SIZE};
pub use io::{FaceStateError, FaceStore, FileFaceStore};
pub use notation::{
    format_move, format_moves, invert_moves, parse_move, parse_moves, reverse_moves, Direction,
    MoveToken, NotationError,
};
