//! Filesystem snapshot storage.
//!
//! Each slot is stored as `<key>.json` inside a single data directory. Writes
//! go to `<key>.json.tmp` first and are renamed into place, so readers only
//! ever observe a complete snapshot.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use tracing::{debug, warn};

use crate::task::ports::{
    SnapshotStorage, SnapshotStorageError, SnapshotStorageResult, validate_storage_key,
};

/// Snapshot storage backed by a directory on the local filesystem.
#[derive(Debug)]
pub struct FileSnapshotStorage {
    root: Utf8PathBuf,
    dir: Dir,
}

impl FileSnapshotStorage {
    /// Opens storage rooted at `data_dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotStorageError::Io`] when the directory cannot be
    /// created or opened.
    pub fn open(data_dir: impl AsRef<Utf8Path>) -> SnapshotStorageResult<Self> {
        let root = data_dir.as_ref().to_path_buf();
        Dir::create_ambient_dir_all(&root, ambient_authority())
            .map_err(SnapshotStorageError::io)?;
        let dir = Dir::open_ambient_dir(&root, ambient_authority())
            .map_err(SnapshotStorageError::io)?;
        debug!(data_dir = %root, "opened snapshot directory");
        Ok(Self { root, dir })
    }

    /// Returns the data directory.
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Returns the full path of the file backing `key`.
    #[must_use]
    pub fn slot_path(&self, key: &str) -> Utf8PathBuf {
        self.root.join(slot_file_name(key))
    }
}

fn slot_file_name(key: &str) -> String {
    format!("{key}.json")
}

fn temp_file_name(key: &str) -> String {
    format!("{key}.json.tmp")
}

impl SnapshotStorage for FileSnapshotStorage {
    fn read(&self, key: &str) -> SnapshotStorageResult<Option<String>> {
        validate_storage_key(key)?;
        match self.dir.read_to_string(slot_file_name(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(SnapshotStorageError::io(err)),
        }
    }

    fn write(&self, key: &str, snapshot: &str) -> SnapshotStorageResult<()> {
        validate_storage_key(key)?;
        let temp_name = temp_file_name(key);
        self.dir
            .write(&temp_name, snapshot)
            .map_err(SnapshotStorageError::io)?;
        if let Err(err) = self.dir.rename(&temp_name, &self.dir, slot_file_name(key)) {
            if let Err(cleanup) = self.dir.remove_file(&temp_name) {
                warn!(
                    path = %self.root.join(&temp_name),
                    error = %cleanup,
                    "failed to remove temporary snapshot"
                );
            }
            return Err(SnapshotStorageError::io(err));
        }
        debug!(path = %self.slot_path(key), bytes = snapshot.len(), "wrote snapshot");
        Ok(())
    }
}
