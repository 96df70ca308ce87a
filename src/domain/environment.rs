//! Child-process environment derived from a [`LaunchConfig`].
//!
//! The launcher never mutates its own environment. Everything the server needs
//! is collected into a [`LaunchEnvironment`] and applied to the spawned child.

use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

use crate::domain::LaunchConfig;

/// Variable consulted for executable and DLL lookup.
pub const SEARCH_PATH_VAR: &str = "PATH";

#[cfg(windows)]
pub const SEARCH_PATH_SEPARATOR: &str = ";";
#[cfg(not(windows))]
pub const SEARCH_PATH_SEPARATOR: &str = ":";

pub const CUDA_PATH: &str = "CUDA_PATH";
pub const CUDNN_PATH: &str = "CUDNN_PATH";
pub const CUDA_HOME: &str = "CUDA_HOME";
pub const CUDA_ROOT: &str = "CUDA_ROOT";

/// Ordered set of variables to set on the child process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchEnvironment {
    vars: Vec<(String, OsString)>,
}

impl LaunchEnvironment {
    /// Build the child environment.
    ///
    /// `inherited_path` is the caller's current search path. The toolkit and
    /// cuDNN directories are prepended without deduplication, so feeding the
    /// result back in prepends them a second time.
    pub fn build(config: &LaunchConfig, inherited_path: Option<&OsStr>) -> Self {
        let cuda_root = config.cuda.root.as_os_str().to_os_string();
        let cudnn_root = config.cudnn.root.as_os_str().to_os_string();

        let mut search_path = OsString::new();
        for (index, entry) in prepended_entries(config).iter().enumerate() {
            if index > 0 {
                search_path.push(SEARCH_PATH_SEPARATOR);
            }
            search_path.push(entry.as_os_str());
        }
        if let Some(inherited) = inherited_path.filter(|value| !value.is_empty()) {
            search_path.push(SEARCH_PATH_SEPARATOR);
            search_path.push(inherited);
        }

        let vars = vec![
            (CUDA_PATH.to_string(), cuda_root.clone()),
            (config.cuda.versioned_path_var(), cuda_root.clone()),
            (CUDNN_PATH.to_string(), cudnn_root),
            (SEARCH_PATH_VAR.to_string(), search_path),
            (CUDA_HOME.to_string(), cuda_root.clone()),
            (CUDA_ROOT.to_string(), cuda_root),
        ];

        Self { vars }
    }

    pub fn vars(&self) -> &[(String, OsString)] {
        &self.vars
    }

    pub fn get(&self, name: &str) -> Option<&OsStr> {
        self.vars.iter().find(|(key, _)| key == name).map(|(_, value)| value.as_os_str())
    }

    /// The constructed search path value.
    pub fn search_path(&self) -> &OsStr {
        self.get(SEARCH_PATH_VAR).unwrap_or_default()
    }
}

/// Directories placed ahead of the inherited search path, highest priority first.
pub fn prepended_entries(config: &LaunchConfig) -> [PathBuf; 3] {
    [
        config.cuda.root.join("bin"),
        config.cudnn.root.join("bin"),
        config.cuda.root.join("libnvvp"),
    ]
}
