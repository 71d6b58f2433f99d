//! GridFace - one face of an NxNxN cube stored as a padded byte grid
//!
//! Each cell holds the color index (0-5) of the sticker at that position.
//! Rows are laid out with a power-of-two stride (see [`FaceGeometry`]) so
//! that `(row, col)` resolves to `(row << shift) + col`.
//!
//! # Example
//!
//! ```
//! use bigcube::GridFace;
//!
//! let mut face = GridFace::with_row_size(2, 5).unwrap();
//! face.paint(2);
//! assert!(face.is_solved());
//! assert_eq!(face.count(2), 25);
//!
//! face.set_rc(4, 4, 3);
//! assert_eq!(face.get_rc(4, 4), 3);
//! assert!(!face.is_solved());
//! ```

use super::{FaceError, FaceGeometry};
use std::fmt;

/// Number of sticker colors, which is also the number of faces on a cube
pub const COLOR_COUNT: usize = 6;

/// A single cube face backed by an exclusively owned, padded byte buffer.
///
/// There is no empty state: every constructed face has a buffer of exactly
/// `mem_row_size²` bytes. Cloning deep-copies the buffer.
#[derive(Clone, PartialEq, Eq)]
pub struct GridFace {
    id: u8,
    geometry: FaceGeometry,
    /// Opaque transform tag owned by the cube container
    orientation: i32,
    expected_counts: [u64; COLOR_COUNT],
    buffer: Vec<u8>,
}

impl GridFace {
    /// Create a face with an explicit memory stride.
    ///
    /// The buffer is allocated and filled with the initial debug pattern
    /// (see [`GridFace::paint_initial_pattern`]).
    pub fn new(id: u8, row_size: u32, mem_row_size: u32) -> Result<Self, FaceError> {
        let geometry = FaceGeometry::new(row_size, mem_row_size)?;
        Self::from_geometry(id, geometry)
    }

    /// Create a face using the tightest power-of-two stride for `row_size`.
    pub fn with_row_size(id: u8, row_size: u32) -> Result<Self, FaceError> {
        let geometry = FaceGeometry::for_row_size(row_size)?;
        Self::from_geometry(id, geometry)
    }

    /// Create a face from an already validated geometry.
    pub fn from_geometry(id: u8, geometry: FaceGeometry) -> Result<Self, FaceError> {
        validate_id(id)?;
        let buffer = allocate_buffer(geometry.buffer_size_bytes())?;

        tracing::debug!(
            "Allocated face {}: row size {}, stride {}, {} bytes",
            id,
            geometry.row_size(),
            geometry.mem_row_size(),
            geometry.buffer_size_bytes()
        );

        let mut face = Self {
            id,
            geometry,
            orientation: 0,
            expected_counts: [0; COLOR_COUNT],
            buffer,
        };
        face.paint_initial_pattern();
        Ok(face)
    }

    /// Assemble a face from persisted parts. `buffer` must already hold
    /// exactly `geometry.buffer_size_bytes()` bytes.
    pub(crate) fn from_parts(
        id: u8,
        geometry: FaceGeometry,
        orientation: i32,
        expected_counts: [u64; COLOR_COUNT],
        buffer: Vec<u8>,
    ) -> Result<Self, FaceError> {
        validate_id(id)?;
        debug_assert_eq!(buffer.len() as u64, geometry.buffer_size_bytes());
        Ok(Self {
            id,
            geometry,
            orientation,
            expected_counts,
            buffer,
        })
    }

    /// Face id, which is also the color of a solved face.
    #[inline]
    pub fn id(&self) -> u8 {
        self.id
    }

    #[inline]
    pub fn geometry(&self) -> FaceGeometry {
        self.geometry
    }

    #[inline]
    pub fn row_size(&self) -> u32 {
        self.geometry.row_size()
    }

    #[inline]
    pub fn mem_row_size(&self) -> u32 {
        self.geometry.mem_row_size()
    }

    #[inline]
    pub fn shift_amount(&self) -> u32 {
        self.geometry.shift()
    }

    #[inline]
    pub fn buffer_size_bytes(&self) -> u64 {
        self.geometry.buffer_size_bytes()
    }

    pub fn orientation(&self) -> i32 {
        self.orientation
    }

    pub fn set_orientation(&mut self, orientation: i32) {
        self.orientation = orientation;
    }

    /// Expected number of pieces per color, checked by [`GridFace::verify_counts`].
    pub fn expected_counts(&self) -> [u64; COLOR_COUNT] {
        self.expected_counts
    }

    pub fn set_expected_counts(&mut self, counts: [u64; COLOR_COUNT]) {
        self.expected_counts = counts;
    }

    /// Snapshot the current piece counts as the expected counts.
    pub fn record_counts(&mut self) {
        self.expected_counts = self.get_counts();
    }

    /// Raw padded buffer, row-major over `mem_row_size`.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.buffer
    }

    /// Buffer offset of `(row, col)`. See [`FaceGeometry::address`].
    #[inline]
    pub fn address(&self, row: u32, col: u32) -> usize {
        self.geometry.address(row, col)
    }

    /// Read the cell at `(row, col)`.
    ///
    /// The caller guarantees `row, col < row_size`; this is only asserted in
    /// debug builds. Padding cells are reachable in release builds but never
    /// memory outside the buffer.
    #[inline]
    pub fn get_rc(&self, row: u32, col: u32) -> u8 {
        debug_assert!(
            self.geometry.in_bounds(row, col),
            "({}, {}) outside face of size {}",
            row,
            col,
            self.row_size()
        );
        self.buffer[self.geometry.address(row, col)]
    }

    /// Write the cell at `(row, col)`. Same bounds contract as [`GridFace::get_rc`].
    #[inline]
    pub fn set_rc(&mut self, row: u32, col: u32, value: u8) {
        debug_assert!(
            self.geometry.in_bounds(row, col),
            "({}, {}) outside face of size {}",
            row,
            col,
            self.row_size()
        );
        let offset = self.geometry.address(row, col);
        self.buffer[offset] = value;
    }

    /// Checked read: `None` for anything outside the logical grid.
    pub fn try_get_rc(&self, row: u32, col: u32) -> Option<u8> {
        if self.geometry.in_bounds(row, col) {
            Some(self.buffer[self.geometry.address(row, col)])
        } else {
            None
        }
    }

    /// The logical cells of `row` (padding excluded).
    #[inline]
    pub fn row(&self, row: u32) -> &[u8] {
        debug_assert!(row < self.row_size());
        let start = self.geometry.address(row, 0);
        &self.buffer[start..start + self.row_size() as usize]
    }

    #[inline]
    pub fn row_mut(&mut self, row: u32) -> &mut [u8] {
        debug_assert!(row < self.row_size());
        let start = self.geometry.address(row, 0);
        let end = start + self.row_size() as usize;
        &mut self.buffer[start..end]
    }

    /// The logical cells of `col`, top to bottom.
    pub fn column(&self, col: u32) -> impl Iterator<Item = u8> + '_ {
        debug_assert!(col < self.row_size());
        (0..self.row_size()).map(move |row| self.buffer[self.geometry.address(row, col)])
    }

    /// Fill the whole buffer with the construction-time debug pattern.
    ///
    /// With `n = 0` for face 5 and `n = id + 1` otherwise, byte `k` of the
    /// padded buffer becomes `(n² + k) mod 256`. This is not a solved state.
    pub fn paint_initial_pattern(&mut self) {
        let n = if self.id == 5 { 0 } else { usize::from(self.id) + 1 };
        let base = n * n;
        for (k, cell) in self.buffer.iter_mut().enumerate() {
            *cell = (base + k) as u8;
        }
    }

    /// Set every allocated byte, padding included, to `color`.
    pub fn paint(&mut self, color: u8) {
        self.buffer.fill(color);
    }

    /// Number of logical cells holding `color`.
    pub fn count(&self, color: u8) -> u64 {
        (0..self.row_size())
            .map(|row| self.row(row).iter().filter(|&&cell| cell == color).count() as u64)
            .sum()
    }

    /// Piece counts for colors 0-5 in a single scan.
    ///
    /// Bytes outside the color range are not tallied.
    pub fn get_counts(&self) -> [u64; COLOR_COUNT] {
        let mut histogram = [0u64; 256];
        for row in 0..self.row_size() {
            for &cell in self.row(row) {
                histogram[cell as usize] += 1;
            }
        }

        let mut counts = [0u64; COLOR_COUNT];
        counts.copy_from_slice(&histogram[..COLOR_COUNT]);
        counts
    }

    /// Compare the current piece counts with the expected counts.
    ///
    /// A mismatch is logged and reported, never treated as an error here.
    pub fn verify_counts(&self) -> bool {
        let counts = self.get_counts();
        let mut matches = true;

        for (color, (&observed, &expected)) in
            counts.iter().zip(self.expected_counts.iter()).enumerate()
        {
            tracing::debug!(
                "Face {} : Color {} : {} {}",
                self.id,
                color,
                observed,
                expected
            );
            if observed != expected {
                matches = false;
            }
        }

        if !matches {
            tracing::warn!(
                "Face {} piece counts {:?} do not match expected {:?}",
                self.id,
                counts,
                self.expected_counts
            );
        }

        matches
    }

    /// True if every logical cell holds this face's own color.
    pub fn is_solved(&self) -> bool {
        (0..self.row_size()).all(|row| self.row(row).iter().all(|&cell| cell == self.id))
    }
}

impl fmt::Debug for GridFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridFace")
            .field("id", &self.id)
            .field("geometry", &self.geometry)
            .field("orientation", &self.orientation)
            .field("expected_counts", &self.expected_counts)
            .finish_non_exhaustive()
    }
}

fn validate_id(id: u8) -> Result<(), FaceError> {
    if usize::from(id) < COLOR_COUNT {
        Ok(())
    } else {
        Err(FaceError::InvalidFaceId(id))
    }
}

/// Allocate a zeroed buffer, reporting failure instead of aborting.
fn allocate_buffer(bytes: u64) -> Result<Vec<u8>, FaceError> {
    let len = usize::try_from(bytes).map_err(|_| FaceError::Allocation { bytes })?;
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(len)
        .map_err(|_| FaceError::Allocation { bytes })?;
    buffer.resize(len, 0);
    Ok(buffer)
}
