use crate::domain::{AppError, Invocation};

/// Port for starting the delegated server process.
pub trait ProcessRunner {
    /// Spawn the invocation, wait for it, and return its exit code.
    fn run(&self, invocation: &Invocation) -> Result<i32, AppError>;
}
