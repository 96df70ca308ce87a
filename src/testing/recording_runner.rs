use std::sync::Mutex;

use crate::domain::{AppError, Invocation};
use crate::ports::ProcessRunner;

/// Records invocations instead of spawning, returning a fixed exit code.
#[derive(Debug, Default)]
pub struct RecordingRunner {
    pub invocations: Mutex<Vec<Invocation>>,
    pub exit_code: i32,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_exit_code(exit_code: i32) -> Self {
        Self { invocations: Mutex::new(Vec::new()), exit_code }
    }

    pub fn last(&self) -> Option<Invocation> {
        self.invocations.lock().unwrap().last().cloned()
    }

    pub fn count(&self) -> usize {
        self.invocations.lock().unwrap().len()
    }
}

impl ProcessRunner for RecordingRunner {
    fn run(&self, invocation: &Invocation) -> Result<i32, AppError> {
        self.invocations.lock().unwrap().push(invocation.clone());
        Ok(self.exit_code)
    }
}
