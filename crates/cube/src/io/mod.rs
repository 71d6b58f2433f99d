// Input/Output: face state persistence

pub mod face_state;

// Re-export main types and functions
pub use face_state::{
    face_state_path, load_face_state, parse_face, save_face_state, serialize_face, FaceHeader,
    FaceStateError, FaceStore, FileFaceStore,
};
