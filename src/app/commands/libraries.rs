use crate::domain::libraries::expected_libraries;
use crate::domain::{LaunchConfig, LibraryCheck};
use crate::ports::HostFilesystem;

/// Probe each expected library on the host.
pub fn check_libraries<F: HostFilesystem>(
    filesystem: &F,
    config: &LaunchConfig,
) -> Vec<LibraryCheck> {
    expected_libraries(config)
        .into_iter()
        .map(|library| {
            let found = filesystem.is_file(&library.path);
            LibraryCheck { library, found }
        })
        .collect()
}
