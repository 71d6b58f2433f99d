//! File-backed persistence of faces, one file per face id.

use super::parser::read_face_limited;
use super::serializer::write_face;
use super::FaceStateError;
use crate::config::StoreConfig;
use crate::core::GridFace;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Path of the state file for face `id` inside `dir`.
pub fn face_state_path(dir: &Path, id: u8) -> PathBuf {
    dir.join(format!("face{}.bin", id))
}

/// Save `face` to `dir/face<id>.bin`, replacing any previous state.
///
/// The file is written next to its final location and renamed into place,
/// so an interrupted save leaves the previous state intact. A failed save
/// removes its temporary file.
pub fn save_face_state(face: &GridFace, dir: &Path) -> Result<PathBuf, FaceStateError> {
    let path = face_state_path(dir, face.id());
    let tmp = path.with_extension("tmp");

    if let Err(err) = write_and_replace(face, &tmp, &path) {
        if let Err(cleanup) = fs::remove_file(&tmp) {
            if cleanup.kind() != io::ErrorKind::NotFound {
                tracing::warn!("Failed to remove {}: {}", tmp.display(), cleanup);
            }
        }
        return Err(err.into());
    }

    tracing::info!(
        "Saved face {} ({} bytes) to {}",
        face.id(),
        face.buffer_size_bytes(),
        path.display()
    );
    Ok(path)
}

fn write_and_replace(face: &GridFace, tmp: &Path, path: &Path) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(tmp)?);
    write_face(face, &mut writer)?;
    writer.flush()?;
    let file = writer.into_inner().map_err(|err| err.into_error())?;
    file.sync_all()?;
    drop(file);

    fs::rename(tmp, path)
}

/// Load the state saved for face `id` in `dir`.
pub fn load_face_state(dir: &Path, id: u8) -> Result<GridFace, FaceStateError> {
    let path = face_state_path(dir, id);

    let file = match File::open(&path) {
        Ok(file) => file,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(FaceStateError::NotFound(path));
        }
        Err(err) => return Err(FaceStateError::Io(err)),
    };

    let len = file.metadata()?.len();
    let face = read_face_limited(&mut BufReader::new(file), Some(len))?;
    if face.id() != id {
        return Err(FaceStateError::InconsistentHeader(format!(
            "{} holds face {}, expected face {}",
            path.display(),
            face.id(),
            id
        )));
    }

    tracing::info!("Loaded face {} from {}", id, path.display());
    Ok(face)
}

/// Backend trait for persisting faces.
pub trait FaceStore: Send + Sync + 'static {
    fn save_face(&self, face: &GridFace) -> Result<(), FaceStateError>;
    fn load_face(&self, id: u8) -> Result<GridFace, FaceStateError>;
}

/// File storage rooted at the configured data directory.
#[derive(Debug, Clone)]
pub struct FileFaceStore {
    config: StoreConfig,
}

impl FileFaceStore {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn path_for(&self, id: u8) -> PathBuf {
        face_state_path(&self.config.data_dir, id)
    }

    /// Check if a state file exists for face `id`.
    pub fn contains(&self, id: u8) -> bool {
        self.path_for(id).is_file()
    }
}

impl FaceStore for FileFaceStore {
    fn save_face(&self, face: &GridFace) -> Result<(), FaceStateError> {
        fs::create_dir_all(&self.config.data_dir)?;
        save_face_state(face, &self.config.data_dir)?;
        Ok(())
    }

    fn load_face(&self, id: u8) -> Result<GridFace, FaceStateError> {
        let face = load_face_state(&self.config.data_dir, id)?;
        if self.config.verify_on_load && !face.verify_counts() {
            tracing::warn!("Face {} failed count verification after load", id);
        }
        Ok(face)
    }
}
