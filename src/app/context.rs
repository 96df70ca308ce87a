use crate::ports::{HostFilesystem, ProcessRunner};

/// Application context holding dependencies for command execution.
pub struct AppContext<F: HostFilesystem, R: ProcessRunner> {
    filesystem: F,
    runner: R,
}

impl<F: HostFilesystem, R: ProcessRunner> AppContext<F, R> {
    /// Create a new application context.
    pub fn new(filesystem: F, runner: R) -> Self {
        Self { filesystem, runner }
    }

    /// Get a reference to the host filesystem.
    pub fn filesystem(&self) -> &F {
        &self.filesystem
    }

    /// Get a reference to the process runner.
    pub fn runner(&self) -> &R {
        &self.runner
    }
}
