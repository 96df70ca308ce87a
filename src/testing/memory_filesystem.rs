//! In-memory `HostFilesystem` for unit tests.

use std::collections::HashMap;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::HostFilesystem;

#[derive(Clone, Debug, Default)]
pub struct MemoryFilesystem {
    files: Arc<Mutex<HashMap<PathBuf, String>>>,
    dirs: Arc<Mutex<Vec<PathBuf>>>,
}

impl MemoryFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file.
    pub fn add_file(&self, path: impl Into<PathBuf>, content: &str) {
        self.files.lock().unwrap().insert(path.into(), content.to_string());
    }

    /// Seed an (empty) directory.
    pub fn add_dir(&self, path: impl Into<PathBuf>) {
        self.dirs.lock().unwrap().push(path.into());
    }

    pub fn content(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.lock().unwrap().get(path.as_ref()).cloned()
    }
}

impl HostFilesystem for MemoryFilesystem {
    fn read_file(&self, path: &Path) -> Result<String, AppError> {
        self.content(path).ok_or_else(|| {
            AppError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "Mock file not found"))
        })
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError> {
        self.add_file(path, content);
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.is_file(path)
            || self.dirs.lock().unwrap().iter().any(|dir| dir == path)
            || self.files.lock().unwrap().keys().any(|file| file.starts_with(path))
    }

    fn is_file(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }

    /// Seeded files count as programs when their parent directory is on `search_path`.
    fn find_program(&self, program: &str, search_path: &OsStr, _cwd: &Path) -> Option<PathBuf> {
        std::env::split_paths(search_path)
            .map(|dir| dir.join(program))
            .find(|candidate| self.is_file(candidate))
    }
}
