//! Face state deserialization - binary format to GridFace

use super::constants::*;
use super::{FaceHeader, FaceStateError};
use crate::core::{FaceError, GridFace, COLOR_COUNT};
use std::io::{self, Read};

/// Decode and validate the fixed-size header record.
///
/// Only the magic and version are checked here; geometry is checked by
/// [`FaceHeader::geometry`].
pub fn decode_header(data: &[u8]) -> Result<FaceHeader, FaceStateError> {
    if data.len() < HEADER_SIZE {
        return Err(FaceStateError::TruncatedData {
            expected_bytes: HEADER_SIZE as u64,
            available_bytes: data.len() as u64,
        });
    }

    let magic = le_u32(data, OFFSET_MAGIC);
    if magic != MAGIC {
        return Err(FaceStateError::InvalidMagic {
            expected: MAGIC,
            found: magic,
        });
    }

    let version = data[OFFSET_VERSION];
    if version != VERSION {
        return Err(FaceStateError::UnsupportedVersion { found: version });
    }

    let mut expected_counts = [0u64; COLOR_COUNT];
    for (i, count) in expected_counts.iter_mut().enumerate() {
        *count = le_u64(data, OFFSET_COUNTS + i * 8);
    }

    Ok(FaceHeader {
        id: data[OFFSET_ID],
        row_size: le_u32(data, OFFSET_ROW_SIZE),
        mem_row_size: le_u32(data, OFFSET_MEM_ROW_SIZE),
        shift: le_u32(data, OFFSET_SHIFT),
        buffer_size_bytes: le_u64(data, OFFSET_BUFFER_SIZE),
        orientation: le_u32(data, OFFSET_ORIENTATION) as i32,
        expected_counts,
    })
}

/// Bytes requested per read while filling a face body
const BODY_CHUNK: u64 = 1 << 20;

/// Read a complete face from `reader`.
///
/// The body is read in bounded chunks, so memory grows only with the bytes
/// actually present. The face is only assembled once the whole body has been
/// read, so a short or corrupt stream never yields a partially initialized
/// face.
pub fn read_face<R: Read>(reader: &mut R) -> Result<GridFace, FaceStateError> {
    read_face_limited(reader, None)
}

/// Like [`read_face`], with `available` the total stream length when known.
/// A body longer than the stream is rejected before anything is read.
pub(crate) fn read_face_limited<R: Read>(
    reader: &mut R,
    available: Option<u64>,
) -> Result<GridFace, FaceStateError> {
    let mut header_bytes = [0u8; HEADER_SIZE];
    let read = read_fully(reader, &mut header_bytes)?;
    if read < HEADER_SIZE {
        return Err(FaceStateError::TruncatedData {
            expected_bytes: HEADER_SIZE as u64,
            available_bytes: read as u64,
        });
    }

    let header = decode_header(&header_bytes)?;
    let geometry = header.geometry()?;
    let body_len = geometry.buffer_size_bytes();

    if let Some(total) = available {
        let body_available = total.saturating_sub(HEADER_SIZE as u64);
        if body_available < body_len {
            return Err(FaceStateError::TruncatedData {
                expected_bytes: body_len,
                available_bytes: body_available,
            });
        }
    }

    let buffer = read_body(reader, body_len)?;

    let face = GridFace::from_parts(
        header.id,
        geometry,
        header.orientation,
        header.expected_counts,
        buffer,
    )?;
    Ok(face)
}

/// Read exactly `len` body bytes, growing the buffer one chunk at a time.
fn read_body<R: Read>(reader: &mut R, len: u64) -> Result<Vec<u8>, FaceStateError> {
    usize::try_from(len).map_err(|_| FaceError::Allocation { bytes: len })?;

    let mut buffer = Vec::new();
    while (buffer.len() as u64) < len {
        let chunk = (len - buffer.len() as u64).min(BODY_CHUNK);
        buffer
            .try_reserve_exact(chunk as usize)
            .map_err(|_| FaceError::Allocation { bytes: len })?;

        let read = reader.by_ref().take(chunk).read_to_end(&mut buffer)?;
        if (read as u64) < chunk {
            return Err(FaceStateError::TruncatedData {
                expected_bytes: len,
                available_bytes: buffer.len() as u64,
            });
        }
    }
    Ok(buffer)
}

/// Parse a face from an in-memory byte slice.
pub fn parse_face(data: &[u8]) -> Result<GridFace, FaceStateError> {
    let mut reader = data;
    read_face(&mut reader)
}

/// Fill as much of `buf` as the reader provides, returning the byte count.
fn read_fully<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        }
    }
    Ok(filled)
}

fn le_u32(data: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ])
}

fn le_u64(data: &[u8], offset: usize) -> u64 {
    let mut raw = [0u8; 8];
    raw.copy_from_slice(&data[offset..offset + 8]);
    u64::from_le_bytes(raw)
}
