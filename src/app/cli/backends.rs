use crate::domain::AppError;

pub fn run_backends(name: Option<String>) -> Result<(), AppError> {
    match name {
        Some(name) => println!("{}", crate::app::api::backend_reference(&name)?),
        None => {
            for backend in crate::app::api::backend_names()? {
                println!("{}", backend);
            }
        }
    }
    Ok(())
}
