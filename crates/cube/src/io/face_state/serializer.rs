//! Face state serialization - GridFace to binary format

use super::constants::*;
use super::FaceHeader;
use crate::core::GridFace;
use std::io::{self, Write};

/// Encode the fixed-size header record.
pub fn encode_header(header: &FaceHeader) -> [u8; HEADER_SIZE] {
    let mut bytes = [0u8; HEADER_SIZE];

    bytes[OFFSET_MAGIC..OFFSET_MAGIC + 4].copy_from_slice(&MAGIC.to_le_bytes());
    bytes[OFFSET_VERSION] = VERSION;
    bytes[OFFSET_ID] = header.id;
    bytes[OFFSET_ROW_SIZE..OFFSET_ROW_SIZE + 4].copy_from_slice(&header.row_size.to_le_bytes());
    bytes[OFFSET_MEM_ROW_SIZE..OFFSET_MEM_ROW_SIZE + 4]
        .copy_from_slice(&header.mem_row_size.to_le_bytes());
    bytes[OFFSET_SHIFT..OFFSET_SHIFT + 4].copy_from_slice(&header.shift.to_le_bytes());
    bytes[OFFSET_BUFFER_SIZE..OFFSET_BUFFER_SIZE + 8]
        .copy_from_slice(&header.buffer_size_bytes.to_le_bytes());
    bytes[OFFSET_ORIENTATION..OFFSET_ORIENTATION + 4]
        .copy_from_slice(&header.orientation.to_le_bytes());

    for (i, count) in header.expected_counts.iter().enumerate() {
        let offset = OFFSET_COUNTS + i * 8;
        bytes[offset..offset + 8].copy_from_slice(&count.to_le_bytes());
    }

    bytes
}

/// Write a face (header then padded buffer) to `writer`.
pub fn write_face<W: Write>(face: &GridFace, writer: &mut W) -> io::Result<()> {
    writer.write_all(&encode_header(&FaceHeader::from_face(face)))?;
    writer.write_all(face.as_bytes())?;
    Ok(())
}

/// Serialize a face to an in-memory byte vector.
pub fn serialize_face(face: &GridFace) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(HEADER_SIZE + face.as_bytes().len());
    bytes.extend_from_slice(&encode_header(&FaceHeader::from_face(face)));
    bytes.extend_from_slice(face.as_bytes());
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_layout() {
        let header = FaceHeader {
            id: 3,
            row_size: 5,
            mem_row_size: 8,
            shift: 3,
            buffer_size_bytes: 64,
            orientation: -2,
            expected_counts: [1, 2, 3, 4, 5, 6],
        };
        let bytes = encode_header(&header);

        assert_eq!(&bytes[0..4], &MAGIC.to_le_bytes());
        assert_eq!(bytes[4], VERSION);
        assert_eq!(bytes[5], 3);
        assert_eq!(&bytes[6..10], &[5, 0, 0, 0]);
        assert_eq!(&bytes[10..14], &[8, 0, 0, 0]);
        assert_eq!(&bytes[14..18], &[3, 0, 0, 0]);
        assert_eq!(&bytes[18..26], &[64, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(&bytes[26..30], &(-2i32).to_le_bytes());
        assert_eq!(&bytes[30..38], &1u64.to_le_bytes());
        assert_eq!(&bytes[70..78], &6u64.to_le_bytes());
    }

    #[test]
    fn test_serialized_size_is_header_plus_buffer() {
        let face = GridFace::new(0, 3, 4).unwrap();
        let bytes = serialize_face(&face);
        assert_eq!(bytes.len(), HEADER_SIZE + 16);
        assert_eq!(&bytes[HEADER_SIZE..], face.as_bytes());
    }

    #[test]
    fn test_write_face_matches_serialize_face() {
        let face = GridFace::new(4, 7, 8).unwrap();
        let mut written = Vec::new();
        write_face(&face, &mut written).unwrap();
        assert_eq!(written, serialize_face(&face));
    }
}
