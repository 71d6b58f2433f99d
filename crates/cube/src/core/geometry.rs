//! FaceGeometry - stride and shift arithmetic for padded face buffers
//!
//! A face of side `row_size` is stored in a square buffer whose row stride
//! `mem_row_size` is a power of two. Row offsets are then `row << shift`
//! instead of `row * row_size`, which keeps the innermost scan loops free of
//! multiplies even at 65536x65536.
//!
//! # Memory Layout
//!
//! ```text
//! row_size = 3, mem_row_size = 4, shift = 2
//!
//!   col   0  1  2  3
//! row 0 [ a  b  c  . ]   offsets  0..4
//! row 1 [ d  e  f  . ]   offsets  4..8
//! row 2 [ g  h  i  . ]   offsets  8..12
//! row 3 [ .  .  .  . ]   offsets 12..16
//! ```
//!
//! Cells marked `.` are padding: allocated, never read by logical scans.

use super::FaceError;

/// Largest supported cube side length
pub const MAX_ROW_SIZE: u32 = 65536;

/// Validated size and addressing parameters of a face buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FaceGeometry {
    row_size: u32,
    mem_row_size: u32,
    shift: u32,
    buffer_size_bytes: u64,
}

impl FaceGeometry {
    /// Create a geometry for an explicit stride.
    ///
    /// Fails unless `1 <= row_size <= 65536` and `mem_row_size` is a power of
    /// two no smaller than `row_size`.
    pub fn new(row_size: u32, mem_row_size: u32) -> Result<Self, FaceError> {
        if row_size == 0 || row_size > MAX_ROW_SIZE {
            return Err(FaceError::InvalidRowSize(row_size));
        }
        if !mem_row_size.is_power_of_two() {
            return Err(FaceError::StrideNotPowerOfTwo(mem_row_size));
        }
        if mem_row_size < row_size {
            return Err(FaceError::StrideTooSmall {
                row_size,
                mem_row_size,
            });
        }

        let shift = mem_row_size.trailing_zeros();
        let buffer_size_bytes = u64::from(mem_row_size) * u64::from(mem_row_size);

        Ok(Self {
            row_size,
            mem_row_size,
            shift,
            buffer_size_bytes,
        })
    }

    /// Create a geometry with the tightest power-of-two stride for `row_size`.
    pub fn for_row_size(row_size: u32) -> Result<Self, FaceError> {
        if row_size == 0 || row_size > MAX_ROW_SIZE {
            return Err(FaceError::InvalidRowSize(row_size));
        }
        Self::new(row_size, row_size.next_power_of_two())
    }

    /// Logical side length of the face.
    #[inline]
    pub fn row_size(&self) -> u32 {
        self.row_size
    }

    /// Allocated row stride (a power of two).
    #[inline]
    pub fn mem_row_size(&self) -> u32 {
        self.mem_row_size
    }

    /// `log2(mem_row_size)`.
    #[inline]
    pub fn shift(&self) -> u32 {
        self.shift
    }

    /// Allocated footprint, `mem_row_size²`, padding included.
    #[inline]
    pub fn buffer_size_bytes(&self) -> u64 {
        self.buffer_size_bytes
    }

    /// Number of logical cells, `row_size²`.
    #[inline]
    pub fn cell_count(&self) -> u64 {
        u64::from(self.row_size) * u64::from(self.row_size)
    }

    /// Check if a coordinate names a logical cell.
    #[inline]
    pub fn in_bounds(&self, row: u32, col: u32) -> bool {
        row < self.row_size && col < self.row_size
    }

    /// Buffer offset of `(row, col)`.
    ///
    /// Computed as `(row << shift) + col`. The result is only meaningful for
    /// logical coordinates; callers are responsible for bounds.
    #[inline]
    pub fn address(&self, row: u32, col: u32) -> usize {
        ((row as usize) << self.shift) + col as usize
    }
}
