use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for gpu-launch operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration value is present but unusable.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Explicitly requested config file does not exist.
    #[error("Config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Launcher directory could not be determined.
    #[error("Cannot determine launcher directory: {0}")]
    LauncherDirUnavailable(String),

    /// Expected shared libraries are missing and the run requires them.
    #[error("Required libraries not found: {}", .0.join(", "))]
    MissingLibraries(Vec<String>),

    /// Server program could not be located.
    #[error("Program '{program}' not found on the configured search path")]
    ProgramNotFound { program: String },

    /// Server program was found but could not be started.
    #[error("Failed to start '{program}': {details}")]
    Spawn { program: String, details: String },

    /// Target file for `init` already exists.
    #[error("{} already exists (use --force to overwrite)", .0.display())]
    ConfigExists(PathBuf),

    /// Backend section not present in the embedded reference.
    #[error("Backend '{name}' not found. Available: {available}")]
    BackendNotFound { name: String, available: String },

    /// Embedded asset missing from the binary.
    #[error("Internal error: {0}")]
    InternalError(String),

    /// Serialization failure while rendering output.
    #[error("Failed to serialize {what}: {details}")]
    Serialize { what: String, details: String },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::InvalidConfig(message.into())
    }

    /// Process exit code the CLI reports for this error.
    ///
    /// Spawn failures follow the POSIX shell convention (127 not found, 126 not runnable).
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::ProgramNotFound { .. } => 127,
            AppError::Spawn { .. } => 126,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_errors_use_shell_exit_codes() {
        let missing = AppError::ProgramNotFound { program: "uv".into() };
        let denied = AppError::Spawn { program: "uv".into(), details: "denied".into() };

        assert_eq!(missing.exit_code(), 127);
        assert_eq!(denied.exit_code(), 126);
        assert_eq!(AppError::config_error("bad").exit_code(), 1);
    }

    #[test]
    fn missing_libraries_lists_every_file() {
        let err = AppError::MissingLibraries(vec!["a.dll".into(), "b.dll".into()]);
        assert_eq!(err.to_string(), "Required libraries not found: a.dll, b.dll");
    }
}
