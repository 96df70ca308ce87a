//! Launcher configuration models.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// Configuration for a launch, loaded from `launch.toml` and layered overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LaunchConfig {
    /// CUDA toolkit installation.
    #[serde(default)]
    pub cuda: CudaConfig,
    /// cuDNN installation.
    #[serde(default)]
    pub cudnn: CudnnConfig,
    /// Delegated server process.
    #[serde(default)]
    pub server: ServerConfig,
    /// Pre-launch checks.
    #[serde(default)]
    pub checks: ChecksConfig,
}

impl LaunchConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.cuda.validate()?;
        self.cudnn.validate()?;
        self.server.validate()?;
        Ok(())
    }
}

/// CUDA toolkit location and probe target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CudaConfig {
    /// Toolkit root directory.
    #[serde(default = "default_cuda_root")]
    pub root: PathBuf,
    /// Toolkit version, `major.minor`.
    #[serde(default = "default_cuda_version")]
    pub version: String,
    /// Library expected under `<root>/bin`.
    #[serde(default = "default_cuda_library")]
    pub library: String,
}

impl Default for CudaConfig {
    fn default() -> Self {
        Self {
            root: default_cuda_root(),
            version: default_cuda_version(),
            library: default_cuda_library(),
        }
    }
}

impl CudaConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.root.as_os_str().is_empty() {
            return Err(AppError::config_error("cuda.root must not be empty"));
        }
        validate_version(&self.version)?;
        validate_library_name("cuda.library", &self.library)
    }

    /// Name of the versioned toolkit variable, e.g. `CUDA_PATH_V12_6`.
    pub fn versioned_path_var(&self) -> String {
        format!("CUDA_PATH_V{}", self.version.replace('.', "_"))
    }
}

/// cuDNN location and probe target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CudnnConfig {
    /// cuDNN root directory.
    #[serde(default = "default_cudnn_root")]
    pub root: PathBuf,
    /// Library expected under `<root>/bin`.
    #[serde(default = "default_cudnn_library")]
    pub library: String,
}

impl Default for CudnnConfig {
    fn default() -> Self {
        Self { root: default_cudnn_root(), library: default_cudnn_library() }
    }
}

impl CudnnConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.root.as_os_str().is_empty() {
            return Err(AppError::config_error("cudnn.root must not be empty"));
        }
        validate_library_name("cudnn.library", &self.library)
    }
}

/// Server process the launcher delegates to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Program name or path.
    #[serde(default = "default_program")]
    pub program: String,
    /// Arguments placed before the forwarded caller arguments.
    #[serde(default = "default_server_args")]
    pub args: Vec<String>,
    /// Working directory for the server. Defaults to the launcher's directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub working_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { program: default_program(), args: default_server_args(), working_dir: None }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.program.trim().is_empty() {
            return Err(AppError::config_error("server.program must not be empty"));
        }
        Ok(())
    }
}

/// Pre-launch check behavior.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChecksConfig {
    /// Abort before spawning when an expected library is missing.
    #[serde(default)]
    pub require_libraries: bool,
}

fn validate_version(version: &str) -> Result<(), AppError> {
    let well_formed = version
        .split('.')
        .all(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_digit()));
    if !well_formed {
        return Err(AppError::config_error(format!(
            "cuda.version '{}' must be dot-separated digits, e.g. 12.6",
            version
        )));
    }
    Ok(())
}

fn validate_library_name(key: &str, name: &str) -> Result<(), AppError> {
    if name.is_empty() || name.contains(['/', '\\']) {
        return Err(AppError::config_error(format!(
            "{} must be a bare file name, got '{}'",
            key, name
        )));
    }
    Ok(())
}

fn default_cuda_root() -> PathBuf {
    PathBuf::from(r"C:\Program Files\NVIDIA GPU Computing Toolkit\CUDA\v12.6")
}

fn default_cuda_version() -> String {
    "12.6".to_string()
}

fn default_cuda_library() -> String {
    "cublas64_12.dll".to_string()
}

fn default_cudnn_root() -> PathBuf {
    PathBuf::from(r"C:\Program Files\NVIDIA\CUDNN\v9.5")
}

fn default_cudnn_library() -> String {
    "cudnn64_9.dll".to_string()
}

fn default_program() -> String {
    "uv".to_string()
}

fn default_server_args() -> Vec<String> {
    vec!["run".to_string(), "run_server.py".to_string()]
}
