//! Doctor command implementation.

use crate::app::api::{DoctorOptions, LaunchSettings};
use crate::domain::AppError;

pub fn run_doctor(settings: LaunchSettings, strict: bool) -> Result<i32, AppError> {
    let options = DoctorOptions { strict };
    let outcome = crate::app::api::doctor(settings, options)?;

    Ok(outcome.exit_code)
}
