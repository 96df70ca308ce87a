//! Layered launcher configuration loading.
//!
//! Defaults, then `launch.toml`, then `GPU_LAUNCH_*` variables, then flags.
//! Pure parsing and validation live in `domain::config`.

mod load_config;

pub use load_config::{LoadedConfig, load_config, resolve_working_dir};
