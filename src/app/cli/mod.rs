//! CLI Adapter.

mod backends;
mod doctor;
mod env;
mod init;
mod launch;

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::app::api::{EnvFormat, LaunchSettings};
use crate::domain::{AppError, ConfigOverrides};

#[derive(Parser)]
#[command(name = "gpu-launch-tools")]
#[command(version)]
#[command(
    about = "Inspect and set up the gpu-launch environment without starting the server",
    long_about = None
)]
struct ToolsCli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check toolkit, libraries and server program without launching
    Doctor {
        #[command(flatten)]
        config: ConfigArgs,
        /// Treat warnings as failures
        #[arg(long)]
        strict: bool,
    },
    /// Print the environment the server would receive
    Env {
        #[command(flatten)]
        config: ConfigArgs,
        /// Output format: shell or json
        #[arg(short, long, default_value = "shell")]
        format: EnvFormat,
    },
    /// Write a launch.toml with the default settings
    Init {
        /// Target file (defaults to launch.toml beside the gpu-launch executable)
        #[arg(short, long)]
        path: Option<PathBuf>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Show the TTS backend configuration reference
    #[clap(visible_alias = "b")]
    Backends {
        /// Backend to show (lists all when omitted)
        name: Option<String>,
    },
}

/// Options shared by every command that resolves configuration.
#[derive(Args, Debug, Clone)]
struct ConfigArgs {
    /// Config file (defaults to GPU_LAUNCH_CONFIG, then launch.toml beside the executable)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// CUDA toolkit root
    #[arg(long, value_name = "DIR")]
    cuda_root: Option<PathBuf>,
    /// CUDA toolkit version, e.g. 12.6
    #[arg(long, value_name = "VERSION")]
    cuda_version: Option<String>,
    /// cuDNN root
    #[arg(long, value_name = "DIR")]
    cudnn_root: Option<PathBuf>,
    /// Server working directory (defaults to the executable's directory)
    #[arg(long, value_name = "DIR")]
    working_dir: Option<PathBuf>,
    /// Treat missing libraries as errors
    #[arg(long)]
    require_libraries: bool,
}

impl ConfigArgs {
    fn into_settings(self) -> LaunchSettings {
        LaunchSettings {
            config_path: self.config,
            overrides: ConfigOverrides {
                cuda_root: self.cuda_root,
                cuda_version: self.cuda_version,
                cudnn_root: self.cudnn_root,
                program: None,
                working_dir: self.working_dir,
                require_libraries: self.require_libraries,
            },
        }
    }
}

/// Arguments handed to the server: everything after the program name, untouched.
///
/// The launcher defines no flags of its own. Its settings come from
/// `launch.toml` and `GPU_LAUNCH_*` variables.
fn forwarded_args<I>(args_os: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args_os.into_iter().skip(1).collect()
}

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}

fn exit_with(result: Result<i32, AppError>) {
    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}

/// Entry point for `gpu-launch`: configure the environment and run the server.
pub fn run() {
    init_logging();

    let forwarded = forwarded_args(std::env::args_os());
    exit_with(launch::run_launch(LaunchSettings::default(), forwarded));
}

/// Entry point for `gpu-launch-tools`.
pub fn run_tools() {
    init_logging();

    let cli = ToolsCli::parse();

    let result: Result<i32, AppError> = match cli.command {
        Commands::Doctor { config, strict } => doctor::run_doctor(config.into_settings(), strict),
        Commands::Env { config, format } => env::run_env(config.into_settings(), format).map(|_| 0),
        Commands::Init { path, force } => init::run_init(path, force).map(|_| 0),
        Commands::Backends { name } => backends::run_backends(name).map(|_| 0),
    };

    exit_with(result);
}
