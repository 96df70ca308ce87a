//! Host filesystem operations used by the launcher.
//!
//! Paths are taken as-is. The launcher only reads its config, probes for
//! library files and resolves the server program; `init` is the sole writer.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// Port for host filesystem access.
pub trait HostFilesystem {
    /// Read a file as UTF-8 text.
    fn read_file(&self, path: &Path) -> Result<String, AppError>;

    /// Write UTF-8 content to a file, creating parent directories as needed.
    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError>;

    /// Check whether a file or directory exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check whether a path is a regular file.
    fn is_file(&self, path: &Path) -> bool;

    /// Resolve `program` against `search_path`, relative names against `cwd`.
    fn find_program(&self, program: &str, search_path: &OsStr, cwd: &Path) -> Option<PathBuf>;
}
