pub mod backends;
pub mod doctor;
pub mod env;
pub mod init;
pub mod launch;
mod libraries;
