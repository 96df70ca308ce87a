//! Render the computed child environment without launching.

use std::str::FromStr;

use serde::Serialize;

use crate::domain::{AppError, LaunchEnvironment};

/// Output format for `env`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EnvFormat {
    /// `NAME=value` lines.
    #[default]
    Shell,
    Json,
}

impl FromStr for EnvFormat {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "shell" => Ok(EnvFormat::Shell),
            "json" => Ok(EnvFormat::Json),
            other => Err(AppError::config_error(format!(
                "Unknown env format '{}': expected shell or json",
                other
            ))),
        }
    }
}

#[derive(Debug, Serialize)]
struct EnvEntry {
    name: String,
    value: String,
}

pub fn render(environment: &LaunchEnvironment, format: EnvFormat) -> Result<String, AppError> {
    let entries: Vec<EnvEntry> = environment
        .vars()
        .iter()
        .map(|(name, value)| EnvEntry {
            name: name.clone(),
            value: value.to_string_lossy().to_string(),
        })
        .collect();

    match format {
        EnvFormat::Shell => Ok(entries
            .iter()
            .map(|entry| format!("{}={}", entry.name, entry.value))
            .collect::<Vec<_>>()
            .join("\n")),
        EnvFormat::Json => serde_json::to_string_pretty(&entries).map_err(|e| AppError::Serialize {
            what: "environment".to_string(),
            details: e.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LaunchConfig;
    use std::ffi::OsStr;
    use std::path::PathBuf;

    fn environment() -> LaunchEnvironment {
        let mut config = LaunchConfig::default();
        config.cuda.root = PathBuf::from("/opt/cuda");
        config.cudnn.root = PathBuf::from("/opt/cudnn");
        LaunchEnvironment::build(&config, Some(OsStr::new("/usr/bin")))
    }

    #[test]
    fn shell_format_lists_variables_in_order() {
        let rendered = render(&environment(), EnvFormat::Shell).unwrap();
        let names: Vec<&str> =
            rendered.lines().map(|line| line.split('=').next().unwrap()).collect();

        assert_eq!(
            names,
            vec!["CUDA_PATH", "CUDA_PATH_V12_6", "CUDNN_PATH", "PATH", "CUDA_HOME", "CUDA_ROOT"]
        );
        assert!(rendered.contains("CUDA_HOME=/opt/cuda"));
    }

    #[test]
    fn json_format_is_an_array_of_entries() {
        let rendered = render(&environment(), EnvFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        let entries = value.as_array().unwrap();
        assert_eq!(entries.len(), 6);
        assert_eq!(entries[2]["name"], "CUDNN_PATH");
        assert_eq!(entries[2]["value"], "/opt/cudnn");
    }

    #[test]
    fn parses_format_names() {
        assert_eq!("json".parse::<EnvFormat>().unwrap(), EnvFormat::Json);
        assert!("yaml".parse::<EnvFormat>().is_err());
    }
}
