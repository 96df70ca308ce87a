use std::path::{Path, PathBuf};

use crate::adapters::embedded_assets::{CONFIG_TEMPLATE, asset_content};
use crate::domain::AppError;
use crate::ports::HostFilesystem;

/// Write the default `launch.toml` template to `target`.
pub fn execute<F: HostFilesystem>(
    filesystem: &F,
    target: &Path,
    force: bool,
) -> Result<PathBuf, AppError> {
    if filesystem.exists(target) && !force {
        return Err(AppError::ConfigExists(target.to_path_buf()));
    }

    let template = asset_content(CONFIG_TEMPLATE)?;
    filesystem.write_file(target, template)?;
    Ok(target.to_path_buf())
}
