use std::ffi::OsString;
use std::path::PathBuf;

use crate::domain::{LaunchConfig, LaunchEnvironment};

/// Fully resolved server invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    /// Configured entry arguments followed by the forwarded caller arguments.
    pub args: Vec<OsString>,
    pub working_dir: PathBuf,
    pub environment: LaunchEnvironment,
}

impl Invocation {
    pub fn new(
        config: &LaunchConfig,
        forwarded: &[OsString],
        working_dir: PathBuf,
        environment: LaunchEnvironment,
    ) -> Self {
        let args = config
            .server
            .args
            .iter()
            .map(OsString::from)
            .chain(forwarded.iter().cloned())
            .collect();
        Self { program: config.server.program.clone(), args, working_dir, environment }
    }

    /// Arguments after the configured entry arguments.
    pub fn forwarded_args(&self, config: &LaunchConfig) -> &[OsString] {
        &self.args[config.server.args.len().min(self.args.len())..]
    }

    /// Command line for display, lossy on non-UTF-8 arguments.
    pub fn display_command(&self) -> String {
        std::iter::once(self.program.clone())
            .chain(self.args.iter().map(|arg| arg.to_string_lossy().to_string()))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn invocation(config: &LaunchConfig, forwarded: &[OsString]) -> Invocation {
        let environment = LaunchEnvironment::build(config, None);
        Invocation::new(config, forwarded, PathBuf::from("/srv"), environment)
    }

    #[test]
    fn entry_args_precede_forwarded_args() {
        let config = LaunchConfig::default();
        let forwarded = vec![OsString::from("--port"), OsString::from("12393")];
        let inv = invocation(&config, &forwarded);

        assert_eq!(inv.program, "uv");
        assert_eq!(inv.args, vec!["run", "run_server.py", "--port", "12393"]);
        assert_eq!(inv.display_command(), "uv run run_server.py --port 12393");
    }

    proptest! {
        #[test]
        fn forwarded_args_pass_through_unchanged(
            args in proptest::collection::vec(".*", 0..8),
        ) {
            let config = LaunchConfig::default();
            let forwarded: Vec<OsString> = args.iter().map(OsString::from).collect();
            let inv = invocation(&config, &forwarded);

            prop_assert_eq!(inv.forwarded_args(&config), forwarded.as_slice());
        }
    }
}
