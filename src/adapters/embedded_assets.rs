use include_dir::{Dir, include_dir};

use crate::domain::AppError;

static ASSETS_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets");

pub const CONFIG_TEMPLATE: &str = "launch.toml";
pub const BACKENDS_REFERENCE: &str = "tts_backends.md";

/// UTF-8 content of an embedded asset.
pub fn asset_content(path: &str) -> Result<&'static str, AppError> {
    ASSETS_DIR
        .get_file(path)
        .and_then(|file| file.contents_utf8())
        .ok_or_else(|| AppError::InternalError(format!("Missing embedded asset: {}", path)))
}
