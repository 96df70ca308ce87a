use std::ffi::OsString;

use crate::app::api::LaunchSettings;
use crate::domain::AppError;

pub fn run_launch(settings: LaunchSettings, forwarded: Vec<OsString>) -> Result<i32, AppError> {
    let outcome = crate::app::api::launch(settings, &forwarded)?;
    Ok(outcome.exit_code)
}
