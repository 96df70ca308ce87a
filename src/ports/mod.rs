mod host_filesystem;
mod process_runner;

pub use host_filesystem::HostFilesystem;
pub use process_runner::ProcessRunner;
