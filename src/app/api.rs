//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together configuration
//! loading, context creation and command execution.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use crate::adapters::local_filesystem::LocalFilesystem;
use crate::adapters::process_command::CommandProcessRunner;
use crate::app::AppContext;
use crate::app::commands::{backends, doctor, env, init, launch};
use crate::app::config::{LoadedConfig, load_config};
use crate::domain::config::overrides::ENV_CONFIG;
use crate::domain::config::paths;
use crate::domain::{AppError, ConfigOverrides, LaunchEnvironment, environment::SEARCH_PATH_VAR};

pub use crate::app::commands::doctor::{DoctorOptions, DoctorOutcome};
pub use crate::app::commands::env::EnvFormat;
pub use crate::app::commands::launch::LaunchOutcome;

/// Where configuration comes from, besides built-in defaults.
#[derive(Debug, Clone, Default)]
pub struct LaunchSettings {
    /// Explicit config file. Falls back to `GPU_LAUNCH_CONFIG`, then to
    /// `launch.toml` beside the launcher.
    pub config_path: Option<PathBuf>,
    /// Command-line overrides. Environment overrides are read by the facade.
    pub overrides: ConfigOverrides,
}

/// Directory containing the running executable.
///
/// This is the resolved executable location: on Linux `current_exe()` follows
/// symlinks, so a launcher started through a symlink uses the directory of the
/// link target, not the directory the link lives in.
pub fn launcher_dir() -> Result<PathBuf, AppError> {
    let exe = std::env::current_exe()?;
    exe.parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| AppError::LauncherDirUnavailable(exe.display().to_string()))
}

fn inherited_search_path() -> Option<OsString> {
    std::env::var_os(SEARCH_PATH_VAR)
}

fn load(launcher_dir: &Path, settings: LaunchSettings) -> Result<LoadedConfig, AppError> {
    let env_overrides = ConfigOverrides::from_env(|name| std::env::var_os(name))?;
    let overrides = env_overrides.merge(settings.overrides);
    let config_path = settings.config_path.or_else(|| {
        std::env::var_os(ENV_CONFIG).filter(|value| !value.is_empty()).map(PathBuf::from)
    });
    load_config(&LocalFilesystem, launcher_dir, config_path.as_deref(), overrides)
}

// =============================================================================
// Launch API
// =============================================================================

/// Configure the environment and run the server from the launcher's directory.
pub fn launch(settings: LaunchSettings, forwarded: &[OsString]) -> Result<LaunchOutcome, AppError> {
    launch_at(launcher_dir()?, settings, forwarded)
}

/// Launch as if the launcher lived in `launcher_dir`.
pub fn launch_at(
    launcher_dir: impl Into<PathBuf>,
    settings: LaunchSettings,
    forwarded: &[OsString],
) -> Result<LaunchOutcome, AppError> {
    let launcher_dir = launcher_dir.into();
    let loaded = load(&launcher_dir, settings)?;
    let ctx = AppContext::new(LocalFilesystem, CommandProcessRunner);
    launch::execute(
        &ctx,
        &loaded.config,
        &launcher_dir,
        inherited_search_path().as_deref(),
        forwarded,
    )
}

// =============================================================================
// Inspection APIs
// =============================================================================

/// Check the installation without launching.
pub fn doctor(settings: LaunchSettings, options: DoctorOptions) -> Result<DoctorOutcome, AppError> {
    doctor_at(launcher_dir()?, settings, options)
}

/// Check the installation for a launcher living in `launcher_dir`.
pub fn doctor_at(
    launcher_dir: impl Into<PathBuf>,
    settings: LaunchSettings,
    options: DoctorOptions,
) -> Result<DoctorOutcome, AppError> {
    let launcher_dir = launcher_dir.into();
    let loaded = load(&launcher_dir, settings)?;
    doctor::execute(
        &LocalFilesystem,
        &loaded,
        &launcher_dir,
        inherited_search_path().as_deref(),
        options,
    )
}

/// The environment the server would receive.
pub fn environment(settings: LaunchSettings) -> Result<LaunchEnvironment, AppError> {
    environment_at(launcher_dir()?, settings, inherited_search_path().as_deref())
}

/// The environment for a launcher in `launcher_dir` with an explicit inherited search path.
pub fn environment_at(
    launcher_dir: impl Into<PathBuf>,
    settings: LaunchSettings,
    inherited_path: Option<&OsStr>,
) -> Result<LaunchEnvironment, AppError> {
    let loaded = load(&launcher_dir.into(), settings)?;
    Ok(LaunchEnvironment::build(&loaded.config, inherited_path))
}

/// Render the environment in the requested format.
pub fn render_environment(
    environment: &LaunchEnvironment,
    format: EnvFormat,
) -> Result<String, AppError> {
    env::render(environment, format)
}

// =============================================================================
// Init API
// =============================================================================

/// Write the default config template; beside the launcher unless `path` is given.
pub fn init(path: Option<PathBuf>, force: bool) -> Result<PathBuf, AppError> {
    let target = match path {
        Some(path) => path,
        None => paths::config(&launcher_dir()?),
    };
    init::execute(&LocalFilesystem, &target, force)
}

// =============================================================================
// Backend Reference API
// =============================================================================

/// Names of the documented TTS backends.
pub fn backend_names() -> Result<Vec<String>, AppError> {
    backends::list()
}

/// Reference text for one backend.
pub fn backend_reference(name: &str) -> Result<String, AppError> {
    backends::show(name)
}
