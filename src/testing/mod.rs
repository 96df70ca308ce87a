mod memory_filesystem;
mod recording_runner;

pub use memory_filesystem::MemoryFilesystem;
pub use recording_runner::RecordingRunner;
