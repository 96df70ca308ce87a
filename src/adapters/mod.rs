pub mod embedded_assets;
pub mod local_filesystem;
pub mod process_command;
