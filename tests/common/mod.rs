//! Shared testing utilities for gpu-launch CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated environment for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    /// Caller's working directory for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `gpu-launch` binary.
    ///
    /// `GPU_LAUNCH_*` variables are cleared so the host cannot leak overrides.
    pub fn cli(&self) -> Command {
        self.command("gpu-launch")
    }

    /// Build a command for invoking the compiled `gpu-launch-tools` binary.
    pub fn tools(&self) -> Command {
        self.command("gpu-launch-tools")
    }

    fn command(&self, bin: &str) -> Command {
        let mut cmd = Command::cargo_bin(bin).expect("Failed to locate binary");
        cmd.current_dir(&self.work_dir);
        for name in [
            "GPU_LAUNCH_CONFIG",
            "GPU_LAUNCH_CUDA_ROOT",
            "GPU_LAUNCH_CUDA_VERSION",
            "GPU_LAUNCH_CUDNN_ROOT",
            "GPU_LAUNCH_PROGRAM",
            "GPU_LAUNCH_WORKING_DIR",
            "GPU_LAUNCH_REQUIRE_LIBRARIES",
        ] {
            cmd.env_remove(name);
        }
        cmd
    }

    /// Launcher command reading its config from `config` via `GPU_LAUNCH_CONFIG`.
    pub fn launch_with(&self, config: &Path) -> Command {
        let mut cmd = self.cli();
        cmd.env("GPU_LAUNCH_CONFIG", config);
        cmd
    }

    /// Directory containing the compiled binary, canonicalized.
    pub fn launcher_dir(&self) -> PathBuf {
        let bin = assert_cmd::cargo::cargo_bin("gpu-launch");
        let dir = bin.parent().expect("binary has a parent directory");
        dir.canonicalize().expect("Failed to canonicalize launcher dir")
    }

    /// Fake CUDA and cuDNN roots under the temp dir, optionally with their libraries.
    pub fn install_toolkit(&self, cuda_library: bool, cudnn_library: bool) -> (PathBuf, PathBuf) {
        let cuda = self.root().join("cuda");
        let cudnn = self.root().join("cudnn");
        fs::create_dir_all(cuda.join("bin")).unwrap();
        fs::create_dir_all(cudnn.join("bin")).unwrap();
        if cuda_library {
            fs::write(cuda.join("bin/cublas64_12.dll"), "").unwrap();
        }
        if cudnn_library {
            fs::write(cudnn.join("bin/cudnn64_9.dll"), "").unwrap();
        }
        (cuda, cudnn)
    }

    /// Write a `launch.toml` into the temp dir and return its path.
    pub fn write_config(&self, content: &str) -> PathBuf {
        let path = self.root().join("launch.toml");
        fs::write(&path, content).expect("Failed to write launch.toml");
        path
    }

    /// Config pointing at the fake toolkit and running `script` through `sh -c`.
    ///
    /// Forwarded arguments arrive in the script as `$@`.
    pub fn write_sh_config(&self, script: &str, require_libraries: bool) -> PathBuf {
        let cuda = self.root().join("cuda");
        let cudnn = self.root().join("cudnn");
        let content = format!(
            r#"[cuda]
root = {cuda:?}

[cudnn]
root = {cudnn:?}

[server]
program = "sh"
args = ["-c", {script:?}, "server"]

[checks]
require_libraries = {require_libraries}
"#,
            cuda = cuda.display().to_string(),
            cudnn = cudnn.display().to_string(),
            script = script,
            require_libraries = require_libraries,
        );
        self.write_config(&content)
    }
}
