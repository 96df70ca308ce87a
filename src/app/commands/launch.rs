//! Default command: configure the environment and hand off to the server.

use std::ffi::{OsStr, OsString};
use std::path::Path;

use log::debug;

use crate::app::AppContext;
use crate::app::commands::libraries::check_libraries;
use crate::app::config::resolve_working_dir;
use crate::domain::libraries::missing;
use crate::domain::{AppError, Invocation, LaunchConfig, LaunchEnvironment, LibraryCheck};
use crate::ports::{HostFilesystem, ProcessRunner};

/// Result of a completed launch.
#[derive(Debug, Clone)]
pub struct LaunchOutcome {
    pub invocation: Invocation,
    pub checks: Vec<LibraryCheck>,
    /// Exit code of the server process.
    pub exit_code: i32,
}

pub fn execute<F: HostFilesystem, R: ProcessRunner>(
    ctx: &AppContext<F, R>,
    config: &LaunchConfig,
    launcher_dir: &Path,
    inherited_path: Option<&OsStr>,
    forwarded: &[OsString],
) -> Result<LaunchOutcome, AppError> {
    let environment = LaunchEnvironment::build(config, inherited_path);

    println!("CUDA toolkit: {}", config.cuda.root.display());
    println!("cuDNN library: {}", config.cudnn.root.display());

    let checks = check_libraries(ctx.filesystem(), config);
    for check in &checks {
        if check.found {
            println!("✅ Found {} at {}", check.library.file_name, check.library.path.display());
        } else {
            println!(
                "⚠️  {} not found at {}",
                check.library.file_name,
                check.library.path.display()
            );
        }
    }

    let absent = missing(&checks);
    if config.checks.require_libraries && !absent.is_empty() {
        return Err(AppError::MissingLibraries(absent));
    }

    let working_dir = resolve_working_dir(config, launcher_dir);
    let invocation = Invocation::new(config, forwarded, working_dir, environment);
    debug!("search path: {}", invocation.environment.search_path().to_string_lossy());

    println!(
        "🚀 Starting {} (in {})",
        invocation.display_command(),
        invocation.working_dir.display()
    );
    let exit_code = ctx.runner().run(&invocation)?;

    Ok(LaunchOutcome { invocation, checks, exit_code })
}
