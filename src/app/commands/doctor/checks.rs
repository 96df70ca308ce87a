use std::path::Path;

use crate::app::commands::libraries::check_libraries;
use crate::domain::{LaunchConfig, LaunchEnvironment};
use crate::ports::HostFilesystem;

use super::Diagnostics;

pub fn install_checks<F: HostFilesystem>(
    filesystem: &F,
    config: &LaunchConfig,
    diagnostics: &mut Diagnostics,
) {
    if !filesystem.exists(&config.cuda.root) {
        diagnostics
            .push_warning("cuda.root", format!("{} does not exist", config.cuda.root.display()));
    }
    if !filesystem.exists(&config.cudnn.root) {
        diagnostics
            .push_warning("cudnn.root", format!("{} does not exist", config.cudnn.root.display()));
    }

    for check in check_libraries(filesystem, config) {
        if check.found {
            continue;
        }
        let subject = check.library.file_name.clone();
        let message = format!(
            "{} library not found at {}",
            check.library.component,
            check.library.path.display()
        );
        if config.checks.require_libraries {
            diagnostics.push_error(subject, message);
        } else {
            diagnostics.push_warning(subject, message);
        }
    }
}

pub fn server_checks<F: HostFilesystem>(
    filesystem: &F,
    config: &LaunchConfig,
    environment: &LaunchEnvironment,
    working_dir: &Path,
    diagnostics: &mut Diagnostics,
) {
    if !filesystem.exists(working_dir) {
        diagnostics.push_error(
            "server.working_dir",
            format!("{} does not exist", working_dir.display()),
        );
    }

    let program = &config.server.program;
    if filesystem.find_program(program, environment.search_path(), working_dir).is_none() {
        diagnostics.push_error(
            "server.program",
            format!("'{}' is not resolvable on the launch search path", program),
        );
    }
}
