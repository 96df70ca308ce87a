//! Shared libraries the launcher expects to find before starting the server.

use std::path::PathBuf;

use crate::domain::LaunchConfig;

/// A library file expected under one of the configured roots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpectedLibrary {
    /// Component the library belongs to (`CUDA` or `cuDNN`).
    pub component: &'static str,
    pub file_name: String,
    pub path: PathBuf,
}

/// Outcome of probing one expected library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryCheck {
    pub library: ExpectedLibrary,
    pub found: bool,
}

/// The toolkit library under `<cuda>/bin` and the cuDNN library under `<cudnn>/bin`.
pub fn expected_libraries(config: &LaunchConfig) -> [ExpectedLibrary; 2] {
    [
        ExpectedLibrary {
            component: "CUDA",
            file_name: config.cuda.library.clone(),
            path: config.cuda.root.join("bin").join(&config.cuda.library),
        },
        ExpectedLibrary {
            component: "cuDNN",
            file_name: config.cudnn.library.clone(),
            path: config.cudnn.root.join("bin").join(&config.cudnn.library),
        },
    ]
}

/// File names of the checks that did not find their library.
pub fn missing(checks: &[LibraryCheck]) -> Vec<String> {
    checks
        .iter()
        .filter(|check| !check.found)
        .map(|check| check.library.file_name.clone())
        .collect()
}
