pub mod config;
pub mod environment;
pub mod error;
pub mod invocation;
pub mod libraries;

pub use config::{
    ChecksConfig, ConfigOverrides, CudaConfig, CudnnConfig, LaunchConfig, ServerConfig,
};
pub use environment::LaunchEnvironment;
pub use error::AppError;
pub use invocation::Invocation;
pub use libraries::{ExpectedLibrary, LibraryCheck};
