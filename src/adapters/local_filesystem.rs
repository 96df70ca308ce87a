//! `HostFilesystem` implementation backed by `std::fs`.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::HostFilesystem;

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl HostFilesystem for LocalFilesystem {
    fn read_file(&self, path: &Path) -> Result<String, AppError> {
        fs::read_to_string(path).map_err(AppError::from)
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(AppError::from)?;
        }
        fs::write(path, content).map_err(AppError::from)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn find_program(&self, program: &str, search_path: &OsStr, cwd: &Path) -> Option<PathBuf> {
        which::which_in(program, Some(search_path), cwd).ok()
    }
}
