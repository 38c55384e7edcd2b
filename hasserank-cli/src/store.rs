/// Session file storage, keyed by session name.
///
/// Writes are atomic per judgment: bytes land in a temp file next to the
/// destination, then rename into place. A failed write leaves any previous
/// blob intact; a missing data directory is created, not treated as fatal.
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// File-backed store for one named session.
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// `<data_dir>/<name>.session.json`
    pub fn new(data_dir: &Path, name: &str) -> Self {
        SessionStore { path: data_dir.join(format!("{name}.session.json")) }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Read the persisted blob.
    pub fn read(&self) -> io::Result<Vec<u8>> {
        fs::read(&self.path)
    }

    /// Atomically replace the persisted blob.
    pub fn write(&self, bytes: &[u8]) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, bytes)?;
        fs::rename(&tmp, &self.path)
    }

    /// Discard any persisted blob. Missing files are fine.
    pub fn reset(&self) -> io::Result<()> {
        match fs::remove_file(&self.path) {
            Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_read_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path(), "movies");

        assert!(!store.exists());
        store.write(b"{\"version\": 1}").unwrap();
        assert!(store.exists());
        assert_eq!(store.read().unwrap(), b"{\"version\": 1}");
    }

    #[test]
    fn test_write_creates_missing_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("sessions");
        let store = SessionStore::new(&nested, "movies");

        store.write(b"x").unwrap();
        assert!(store.exists());
    }

    #[test]
    fn test_write_replaces_previous_blob() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path(), "movies");

        store.write(b"first").unwrap();
        store.write(b"second").unwrap();
        assert_eq!(store.read().unwrap(), b"second");
        // No temp leftovers after a successful write.
        assert!(!dir.path().join("movies.session.json.tmp").exists());
    }

    #[test]
    fn test_reset_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path(), "movies");

        store.reset().unwrap();
        store.write(b"x").unwrap();
        store.reset().unwrap();
        assert!(!store.exists());
        store.reset().unwrap();
    }
}
