use std::io::ErrorKind;
use std::process::{Command, ExitStatus};
use std::time::Instant;

use log::{debug, info};

use crate::domain::{AppError, Invocation};
use crate::ports::ProcessRunner;

/// Runs the server with `std::process::Command`, inheriting stdio.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandProcessRunner;

impl ProcessRunner for CommandProcessRunner {
    fn run(&self, invocation: &Invocation) -> Result<i32, AppError> {
        if !invocation.working_dir.is_dir() {
            return Err(AppError::Io(std::io::Error::new(
                ErrorKind::NotFound,
                format!("working directory not found: {}", invocation.working_dir.display()),
            )));
        }

        let mut command = Command::new(&invocation.program);
        command.args(&invocation.args);
        command.current_dir(&invocation.working_dir);
        command.envs(invocation.environment.vars().iter().map(|(k, v)| (k, v)));

        debug!("spawning {:?} in {}", command, invocation.working_dir.display());
        let started = Instant::now();

        let status = command.status().map_err(|e| match e.kind() {
            ErrorKind::NotFound => {
                AppError::ProgramNotFound { program: invocation.program.clone() }
            }
            _ => AppError::Spawn { program: invocation.program.clone(), details: e.to_string() },
        })?;

        let code = exit_code(status);
        info!("{} exited with {} after {:.1?}", invocation.program, code, started.elapsed());
        Ok(code)
    }
}

/// Map a child status to the code the launcher exits with.
///
/// Unix signal terminations become `128 + signal`.
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    1
}
