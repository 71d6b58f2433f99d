//! Face state save/load round-trip tests
//!
//! Verifies that a face written to disk comes back with identical geometry,
//! metadata and logical cells, and that damaged files never yield a face.

use bigcube::io::face_state::constants::HEADER_SIZE;
use bigcube::io::{
    face_state_path, load_face_state, parse_face, save_face_state, serialize_face,
    FaceStateError,
};
use bigcube::{FaceStore, FileFaceStore, GridFace, StoreConfig};
use std::fs;

/// Helper: a face with a recognizable, color-valid pattern
fn patterned_face(id: u8, row_size: u32, mem_row_size: u32) -> GridFace {
    let mut face = GridFace::new(id, row_size, mem_row_size).unwrap();
    face.paint(id);
    for r in 0..row_size {
        for c in 0..row_size {
            if (r + c) % 3 == 0 {
                face.set_rc(r, c, ((r + 2 * c) % 6) as u8);
            }
        }
    }
    face.set_orientation(i32::from(id) - 3);
    face.record_counts();
    face
}

/// Helper: assert that two faces hold the same logical cells
fn assert_same_cells(a: &GridFace, b: &GridFace) {
    assert_eq!(a.row_size(), b.row_size());
    for r in 0..a.row_size() {
        assert_eq!(a.row(r), b.row(r), "row {} differs", r);
    }
}

#[test]
fn test_roundtrip_every_face_id() {
    let dir = tempfile::tempdir().unwrap();

    for id in 0..6 {
        let face = patterned_face(id, 7, 8);
        save_face_state(&face, dir.path()).unwrap();
        let loaded = load_face_state(dir.path(), id).unwrap();

        assert_eq!(loaded.id(), id);
        assert_eq!(loaded.mem_row_size(), 8);
        assert_eq!(loaded.shift_amount(), 3);
        assert_eq!(loaded.buffer_size_bytes(), 64);
        assert_eq!(loaded.orientation(), face.orientation());
        assert_eq!(loaded.expected_counts(), face.expected_counts());
        assert!(loaded.verify_counts());
        assert_same_cells(&face, &loaded);
    }
}

#[test]
fn test_roundtrip_preserves_padding_bytes() {
    // Initial pattern also fills padding; the body is stored verbatim
    let face = GridFace::new(4, 3, 4).unwrap();
    let loaded = parse_face(&serialize_face(&face)).unwrap();
    assert_eq!(loaded.as_bytes(), face.as_bytes());
}

#[test]
fn test_resave_overwrites_previous_state() {
    let dir = tempfile::tempdir().unwrap();
    let mut face = patterned_face(2, 5, 8);
    save_face_state(&face, dir.path()).unwrap();

    face.paint(2);
    face.record_counts();
    save_face_state(&face, dir.path()).unwrap();

    let loaded = load_face_state(dir.path(), 2).unwrap();
    assert!(loaded.is_solved());
    assert_eq!(
        fs::read_dir(dir.path()).unwrap().count(),
        1,
        "only face2.bin should remain"
    );
}

#[test]
fn test_file_size_is_header_plus_buffer() {
    let dir = tempfile::tempdir().unwrap();
    let face = patterned_face(0, 9, 16);
    let path = save_face_state(&face, dir.path()).unwrap();

    assert_eq!(path, face_state_path(dir.path(), 0));
    let len = fs::metadata(&path).unwrap().len();
    assert_eq!(len, HEADER_SIZE as u64 + 256);
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    match load_face_state(dir.path(), 1) {
        Err(FaceStateError::NotFound(path)) => assert_eq!(path, dir.path().join("face1.bin")),
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[test]
fn test_load_truncated_body() {
    let dir = tempfile::tempdir().unwrap();
    let face = patterned_face(3, 6, 8);
    let path = save_face_state(&face, dir.path()).unwrap();

    let bytes = fs::read(&path).unwrap();
    fs::write(&path, &bytes[..bytes.len() - 1]).unwrap();

    assert!(matches!(
        load_face_state(dir.path(), 3),
        Err(FaceStateError::TruncatedData {
            expected_bytes: 64,
            available_bytes: 63
        })
    ));
}

#[test]
fn test_load_truncated_header() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(face_state_path(dir.path(), 5), [0u8; 12]).unwrap();

    assert!(matches!(
        load_face_state(dir.path(), 5),
        Err(FaceStateError::TruncatedData {
            available_bytes: 12,
            ..
        })
    ));
}

#[test]
fn test_file_store_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileFaceStore::new(StoreConfig {
        data_dir: dir.path().to_path_buf(),
        verify_on_load: true,
    });

    let face = patterned_face(1, 4, 4);
    store.save_face(&face).unwrap();
    let loaded = store.load_face(1).unwrap();

    assert_eq!(loaded, face);
    assert_eq!(store.path_for(1), store.config().face_path(1));
}

#[test]
fn test_file_store_returns_face_even_when_counts_mismatch() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileFaceStore::new(StoreConfig {
        data_dir: dir.path().to_path_buf(),
        verify_on_load: true,
    });

    let mut face = patterned_face(0, 4, 4);
    face.set_expected_counts([16, 0, 0, 0, 0, 0]);
    store.save_face(&face).unwrap();

    let loaded = store.load_face(0).unwrap();
    assert!(!loaded.verify_counts());
}
