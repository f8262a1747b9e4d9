use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

/// Whole-file text storage consumed by the file-backed stores.
///
/// Failures are plain `io::Error`s and propagate to the caller
/// unmodified; implementations do not retry.
pub trait FileStorage {
    /// Whether a file exists at the path.
    fn exists(&self, path: &Path) -> bool;

    /// Reads the entire file as text.
    fn read(&self, path: &Path) -> io::Result<String>;

    /// Replaces the entire file contents, creating the file if needed.
    fn write(&self, path: &Path, contents: &str) -> io::Result<()>;

    /// Creates an empty file, truncating an existing one.
    fn create(&self, path: &Path) -> io::Result<()>;

    /// Deletes the file. Deleting a missing file is a no-op.
    fn delete(&self, path: &Path) -> io::Result<()>;
}

/// Local file system storage.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        LocalStorage
    }
}

impl FileStorage for LocalStorage {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        std::fs::write(path, contents)
    }

    fn create(&self, path: &Path) -> io::Result<()> {
        std::fs::write(path, "")
    }

    fn delete(&self, path: &Path) -> io::Result<()> {
        match std::fs::remove_file(path) {
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            other => other,
        }
    }
}

/// In-memory file storage, not persistent. Useful for unit testing and
/// quick prototyping. Clones share the same files.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    files: Arc<RwLock<HashMap<PathBuf, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        MemoryStorage::default()
    }
}

impl FileStorage for MemoryStorage {
    fn exists(&self, path: &Path) -> bool {
        self.files
            .read()
            .map(|files| files.contains_key(path))
            .unwrap_or(false)
    }

    fn read(&self, path: &Path) -> io::Result<String> {
        let files = self.files.read().map_err(|_| poisoned())?;
        files.get(path).cloned().ok_or_else(|| missing(path))
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        let mut files = self.files.write().map_err(|_| poisoned())?;
        files.insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }

    fn create(&self, path: &Path) -> io::Result<()> {
        self.write(path, "")
    }

    fn delete(&self, path: &Path) -> io::Result<()> {
        let mut files = self.files.write().map_err(|_| poisoned())?;
        files.remove(path);
        Ok(())
    }
}

fn missing(path: &Path) -> io::Error {
    io::Error::new(
        io::ErrorKind::NotFound,
        format!("no file at '{}'", path.display()),
    )
}

fn poisoned() -> io::Error {
    io::Error::new(io::ErrorKind::Other, "file storage lock poisoned")
}
