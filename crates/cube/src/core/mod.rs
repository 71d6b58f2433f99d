// Core face storage and addressing

pub mod error;
pub mod face;
pub mod geometry;

// Re-export main types
pub use error::FaceError;
pub use face::{GridFace, COLOR_COUNT};
pub use geometry::{FaceGeometry, MAX_ROW_SIZE};
