use std::path::PathBuf;

use crate::domain::AppError;

pub fn run_init(path: Option<PathBuf>, force: bool) -> Result<(), AppError> {
    let written = crate::app::api::init(path, force)?;
    println!("✅ Wrote {}", written.display());
    Ok(())
}
