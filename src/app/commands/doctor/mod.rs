mod checks;
mod diagnostics;

use std::ffi::OsStr;
use std::path::Path;

use crate::app::config::{LoadedConfig, resolve_working_dir};
use crate::domain::{AppError, LaunchEnvironment};
use crate::ports::HostFilesystem;

pub use diagnostics::{Diagnostic, Diagnostics, Severity};

#[derive(Debug, Clone, Default)]
pub struct DoctorOptions {
    pub strict: bool,
}

#[derive(Debug, Clone)]
pub struct DoctorOutcome {
    pub errors: usize,
    pub warnings: usize,
    pub exit_code: i32,
    pub diagnostics: Vec<Diagnostic>,
}

pub fn execute<F: HostFilesystem>(
    filesystem: &F,
    loaded: &LoadedConfig,
    launcher_dir: &Path,
    inherited_path: Option<&OsStr>,
    options: DoctorOptions,
) -> Result<DoctorOutcome, AppError> {
    let config = &loaded.config;
    match &loaded.source {
        Some(path) => println!("Config: {}", path.display()),
        None => println!("Config: built-in defaults"),
    }

    let environment = LaunchEnvironment::build(config, inherited_path);
    let working_dir = resolve_working_dir(config, launcher_dir);

    let mut diagnostics = Diagnostics::default();
    checks::install_checks(filesystem, config, &mut diagnostics);
    checks::server_checks(filesystem, config, &environment, &working_dir, &mut diagnostics);

    diagnostics.emit();

    let errors = diagnostics.error_count();
    let warnings = diagnostics.warning_count();
    let exit_code = if errors > 0 {
        1
    } else if warnings > 0 && options.strict {
        2
    } else {
        0
    };

    if errors == 0 && warnings == 0 {
        println!("All checks passed.");
    } else if errors == 0 && !options.strict {
        eprintln!("Check completed with {} warning(s).", warnings);
    } else {
        eprintln!("Check failed: {} error(s), {} warning(s) found.", errors, warnings);
    }

    let diagnostics = diagnostics.iter().cloned().collect();
    Ok(DoctorOutcome { errors, warnings, exit_code, diagnostics })
}
