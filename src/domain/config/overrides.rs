//! Environment and command-line overrides layered on top of `launch.toml`.

use std::ffi::OsString;
use std::path::PathBuf;

use crate::domain::{AppError, LaunchConfig};

pub const ENV_CUDA_ROOT: &str = "GPU_LAUNCH_CUDA_ROOT";
pub const ENV_CUDA_VERSION: &str = "GPU_LAUNCH_CUDA_VERSION";
pub const ENV_CUDNN_ROOT: &str = "GPU_LAUNCH_CUDNN_ROOT";
pub const ENV_PROGRAM: &str = "GPU_LAUNCH_PROGRAM";
pub const ENV_WORKING_DIR: &str = "GPU_LAUNCH_WORKING_DIR";
pub const ENV_REQUIRE_LIBRARIES: &str = "GPU_LAUNCH_REQUIRE_LIBRARIES";
/// Config file location; read by the launcher alongside the overrides.
pub const ENV_CONFIG: &str = "GPU_LAUNCH_CONFIG";

/// Partial configuration; `None` fields leave the lower layer untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub cuda_root: Option<PathBuf>,
    pub cuda_version: Option<String>,
    pub cudnn_root: Option<PathBuf>,
    pub program: Option<String>,
    pub working_dir: Option<PathBuf>,
    pub require_libraries: bool,
}

impl ConfigOverrides {
    /// Collect overrides from `GPU_LAUNCH_*` variables.
    ///
    /// Empty values are treated as unset.
    pub fn from_env<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let read = |name: &str| lookup(name).filter(|value| !value.is_empty());
        let read_utf8 = |name: &str| -> Result<Option<String>, AppError> {
            read(name)
                .map(|value| {
                    value.into_string().map_err(|_| {
                        AppError::config_error(format!("{} is not valid UTF-8", name))
                    })
                })
                .transpose()
        };

        Ok(Self {
            cuda_root: read(ENV_CUDA_ROOT).map(PathBuf::from),
            cuda_version: read_utf8(ENV_CUDA_VERSION)?,
            cudnn_root: read(ENV_CUDNN_ROOT).map(PathBuf::from),
            program: read_utf8(ENV_PROGRAM)?,
            working_dir: read(ENV_WORKING_DIR).map(PathBuf::from),
            require_libraries: read_utf8(ENV_REQUIRE_LIBRARIES)?
                .map(|value| parse_flag(ENV_REQUIRE_LIBRARIES, &value))
                .transpose()?
                .unwrap_or(false),
        })
    }

    /// Combine two layers, with `higher` winning where it is set.
    pub fn merge(self, higher: ConfigOverrides) -> ConfigOverrides {
        ConfigOverrides {
            cuda_root: higher.cuda_root.or(self.cuda_root),
            cuda_version: higher.cuda_version.or(self.cuda_version),
            cudnn_root: higher.cudnn_root.or(self.cudnn_root),
            program: higher.program.or(self.program),
            working_dir: higher.working_dir.or(self.working_dir),
            require_libraries: self.require_libraries || higher.require_libraries,
        }
    }

    /// Apply onto a base configuration and validate the result.
    pub fn apply(self, mut config: LaunchConfig) -> Result<LaunchConfig, AppError> {
        if let Some(root) = self.cuda_root {
            config.cuda.root = root;
        }
        if let Some(version) = self.cuda_version {
            config.cuda.version = version;
        }
        if let Some(root) = self.cudnn_root {
            config.cudnn.root = root;
        }
        if let Some(program) = self.program {
            config.server.program = program;
        }
        if let Some(dir) = self.working_dir {
            config.server.working_dir = Some(dir);
        }
        if self.require_libraries {
            config.checks.require_libraries = true;
        }
        config.validate()?;
        Ok(config)
    }
}

fn parse_flag(name: &str, value: &str) -> Result<bool, AppError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(AppError::config_error(format!(
            "{} must be a boolean (1/0, true/false), got '{}'",
            name, value
        ))),
    }
}
