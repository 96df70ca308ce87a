use crate::app::api::{EnvFormat, LaunchSettings};
use crate::domain::AppError;

pub fn run_env(settings: LaunchSettings, format: EnvFormat) -> Result<(), AppError> {
    let environment = crate::app::api::environment(settings)?;
    println!("{}", crate::app::api::render_environment(&environment, format)?);
    Ok(())
}
