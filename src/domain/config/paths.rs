use std::path::{Path, PathBuf};

/// Config file name looked up next to the launcher executable.
pub const CONFIG_FILE: &str = "launch.toml";

/// `<launcher_dir>/launch.toml`
pub fn config(launcher_dir: &Path) -> PathBuf {
    launcher_dir.join(CONFIG_FILE)
}
