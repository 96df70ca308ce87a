//! Pure parse/validate for launcher configuration (`launch.toml`).

use crate::domain::{AppError, LaunchConfig};

/// Parse and validate launcher configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<LaunchConfig, AppError> {
    let config: LaunchConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
