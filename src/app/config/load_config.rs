//! Launcher configuration loading from the host filesystem.

use std::path::{Path, PathBuf};

use log::debug;

use crate::domain::config::{self, paths};
use crate::domain::{AppError, ConfigOverrides, LaunchConfig};
use crate::ports::HostFilesystem;

/// Effective configuration and the file it came from, if any.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: LaunchConfig,
    pub source: Option<PathBuf>,
}

/// Load configuration for a launcher living in `launcher_dir`.
///
/// An explicit `config_path` must exist. Without one, `launch.toml` next to the
/// launcher is used when present and built-in defaults otherwise.
pub fn load_config<F: HostFilesystem>(
    filesystem: &F,
    launcher_dir: &Path,
    config_path: Option<&Path>,
    overrides: ConfigOverrides,
) -> Result<LoadedConfig, AppError> {
    let source = match config_path {
        Some(path) if !filesystem.is_file(path) => {
            return Err(AppError::ConfigNotFound(path.to_path_buf()));
        }
        Some(path) => Some(path.to_path_buf()),
        None => {
            let candidate = paths::config(launcher_dir);
            filesystem.is_file(&candidate).then_some(candidate)
        }
    };

    let base = match &source {
        Some(path) => {
            debug!("loading config from {}", path.display());
            let content = filesystem.read_file(path)?;
            config::parse_config_content(&content)?
        }
        None => {
            debug!("no config file, using defaults");
            LaunchConfig::default()
        }
    };

    let config = overrides.apply(base)?;
    Ok(LoadedConfig { config, source })
}

/// Working directory for the server: the configured one (relative to the
/// launcher directory) or the launcher directory itself.
pub fn resolve_working_dir(config: &LaunchConfig, launcher_dir: &Path) -> PathBuf {
    match &config.server.working_dir {
        Some(dir) if dir.is_absolute() => dir.clone(),
        Some(dir) => launcher_dir.join(dir),
        None => launcher_dir.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MemoryFilesystem;

    #[test]
    fn defaults_when_no_file_present() {
        let fs = MemoryFilesystem::new();
        let loaded =
            load_config(&fs, Path::new("/launcher"), None, ConfigOverrides::default()).unwrap();

        assert_eq!(loaded.config, LaunchConfig::default());
        assert!(loaded.source.is_none());
    }

    #[test]
    fn reads_launch_toml_next_to_launcher() {
        let fs = MemoryFilesystem::new();
        fs.add_file("/launcher/launch.toml", "[server]\nprogram = \"python\"\n");

        let loaded =
            load_config(&fs, Path::new("/launcher"), None, ConfigOverrides::default()).unwrap();

        assert_eq!(loaded.config.server.program, "python");
        assert_eq!(loaded.source, Some(PathBuf::from("/launcher/launch.toml")));
    }

    #[test]
    fn explicit_path_must_exist() {
        let fs = MemoryFilesystem::new();
        let result = load_config(
            &fs,
            Path::new("/launcher"),
            Some(Path::new("/etc/missing.toml")),
            ConfigOverrides::default(),
        );
        assert!(matches!(result, Err(AppError::ConfigNotFound(_))));
    }

    #[test]
    fn overrides_beat_file_values() {
        let fs = MemoryFilesystem::new();
        fs.add_file("/cfg/custom.toml", "[cuda]\nroot = \"/file/cuda\"\nversion = \"11.8\"\n");
        let overrides =
            ConfigOverrides { cuda_root: Some("/flag/cuda".into()), ..ConfigOverrides::default() };

        let loaded =
            load_config(&fs, Path::new("/launcher"), Some(Path::new("/cfg/custom.toml")), overrides)
                .unwrap();

        assert_eq!(loaded.config.cuda.root, PathBuf::from("/flag/cuda"));
        assert_eq!(loaded.config.cuda.version, "11.8");
    }

    #[test]
    fn working_dir_defaults_to_launcher_dir() {
        let mut config = LaunchConfig::default();
        assert_eq!(
            resolve_working_dir(&config, Path::new("/launcher")),
            PathBuf::from("/launcher")
        );

        config.server.working_dir = Some("server".into());
        assert_eq!(
            resolve_working_dir(&config, Path::new("/launcher")),
            PathBuf::from("/launcher/server")
        );
    }
}
