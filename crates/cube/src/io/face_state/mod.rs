//! Face State Format - binary persistence for a single [`GridFace`]
//!
//! A face-state file is a fixed-size header holding only scalar fields,
//! followed by the raw padded buffer. Nothing address-like is ever written,
//! so a file can be reloaded by any process on any run.
//!
//! # Example
//!
//! ```
//! use bigcube::GridFace;
//! use bigcube::io::face_state::{parse_face, serialize_face};
//!
//! let mut face = GridFace::with_row_size(1, 3).unwrap();
//! face.paint(1);
//! face.record_counts();
//!
//! let bytes = serialize_face(&face);
//! let loaded = parse_face(&bytes).unwrap();
//! assert_eq!(face, loaded);
//! ```
//!
//! # File Format
//!
//! ```text
//! [Header: 78 bytes, little-endian]
//!   Magic: 'FCE1' (0x46434531)        4 bytes
//!   Version: 0x01                      1 byte
//!   Face id                            1 byte
//!   Row size                           4 bytes
//!   Memory row size                    4 bytes
//!   Shift                              4 bytes
//!   Buffer size in bytes               8 bytes
//!   Orientation (i32)                  4 bytes
//!   Expected counts, 6 x u64          48 bytes
//!
//! [Body: buffer size bytes]
//!   Row-major over the padded stride, one byte per cell
//! ```
//!
//! Expected counts are 8 bytes each rather than 4: a uniform 65536x65536
//! face holds 2^32 pieces of one color, which does not fit in a u32. The
//! magic and version prefix lets a loader reject foreign or older files
//! before trusting any size field.

pub mod parser;
pub mod serializer;
pub mod store;

use crate::core::{FaceError, FaceGeometry, GridFace, COLOR_COUNT};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Face state format errors
#[derive(Error, Debug)]
pub enum FaceStateError {
    /// No state has been saved for this face
    #[error("face state file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Magic number doesn't match 'FCE1'
    #[error("invalid face state magic: expected 0x{expected:08X}, found 0x{found:08X}")]
    InvalidMagic { expected: u32, found: u32 },

    #[error("unsupported face state version: 0x{found:02X}")]
    UnsupportedVersion { found: u8 },

    /// Header or body ended early
    #[error("truncated data: expected {expected_bytes} bytes, only {available_bytes} available")]
    TruncatedData {
        expected_bytes: u64,
        available_bytes: u64,
    },

    /// Header geometry or id violates the face invariants
    #[error("invalid face header: {0}")]
    Face(#[from] FaceError),

    /// Header fields disagree with each other or with the file name
    #[error("inconsistent face header: {0}")]
    InconsistentHeader(String),
}

/// Face state format constants
pub mod constants {
    /// Magic number: 'FCE1' in ASCII
    pub const MAGIC: u32 = 0x46434531;

    /// Current format version
    pub const VERSION: u8 = 0x01;

    /// Header size in bytes
    pub const HEADER_SIZE: usize = 78;

    // Field offsets
    pub const OFFSET_MAGIC: usize = 0;
    pub const OFFSET_VERSION: usize = 4;
    pub const OFFSET_ID: usize = 5;
    pub const OFFSET_ROW_SIZE: usize = 6;
    pub const OFFSET_MEM_ROW_SIZE: usize = 10;
    pub const OFFSET_SHIFT: usize = 14;
    pub const OFFSET_BUFFER_SIZE: usize = 18;
    pub const OFFSET_ORIENTATION: usize = 26;
    pub const OFFSET_COUNTS: usize = 30;
}

/// Scalar fields of a persisted face, exactly as stored in the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceHeader {
    pub id: u8,
    pub row_size: u32,
    pub mem_row_size: u32,
    pub shift: u32,
    pub buffer_size_bytes: u64,
    pub orientation: i32,
    pub expected_counts: [u64; COLOR_COUNT],
}

impl FaceHeader {
    pub fn from_face(face: &GridFace) -> Self {
        Self {
            id: face.id(),
            row_size: face.row_size(),
            mem_row_size: face.mem_row_size(),
            shift: face.shift_amount(),
            buffer_size_bytes: face.buffer_size_bytes(),
            orientation: face.orientation(),
            expected_counts: face.expected_counts(),
        }
    }

    /// Rebuild and cross-check the geometry described by this header.
    pub fn geometry(&self) -> Result<FaceGeometry, FaceStateError> {
        let geometry = FaceGeometry::new(self.row_size, self.mem_row_size)?;

        if geometry.shift() != self.shift {
            return Err(FaceStateError::InconsistentHeader(format!(
                "shift {} does not match memory row size {}",
                self.shift, self.mem_row_size
            )));
        }
        if geometry.buffer_size_bytes() != self.buffer_size_bytes {
            return Err(FaceStateError::InconsistentHeader(format!(
                "buffer size {} does not match memory row size {}",
                self.buffer_size_bytes, self.mem_row_size
            )));
        }

        Ok(geometry)
    }
}

// Re-export public API
pub use parser::{decode_header, parse_face, read_face};
pub use serializer::{encode_header, serialize_face, write_face};
pub use store::{face_state_path, load_face_state, save_face_state, FaceStore, FileFaceStore};
