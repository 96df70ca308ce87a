//! gpu-launch: prepare CUDA/cuDNN search paths and delegate to an external speech server.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    DoctorOptions, DoctorOutcome, EnvFormat, LaunchOutcome, LaunchSettings, backend_names,
    backend_reference, doctor, doctor_at, environment, environment_at, init, launch, launch_at,
    launcher_dir, render_environment,
};
pub use domain::{AppError, ConfigOverrides, Invocation, LaunchConfig, LaunchEnvironment};
