use thiserror::Error;

/// Errors raised while building a face or validating its geometry
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FaceError {
    /// Face ids name one of the six cube colors
    #[error("invalid face id {0}: must be below 6")]
    InvalidFaceId(u8),

    /// Row size is zero or larger than the largest supported cube
    #[error("invalid row size {0}: must be in 1..=65536")]
    InvalidRowSize(u32),

    /// Memory stride must allow shift-based row addressing
    #[error("memory row size {0} is not a power of two")]
    StrideNotPowerOfTwo(u32),

    /// Memory stride cannot hold a full logical row
    #[error("memory row size {mem_row_size} is smaller than row size {row_size}")]
    StrideTooSmall { row_size: u32, mem_row_size: u32 },

    /// The face buffer could not be allocated
    #[error("failed to allocate {bytes} bytes for face buffer")]
    Allocation { bytes: u64 },
}
