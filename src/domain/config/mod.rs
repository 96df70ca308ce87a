pub mod model;
pub mod overrides;
pub mod parse;
pub mod paths;

pub use model::{ChecksConfig, CudaConfig, CudnnConfig, LaunchConfig, ServerConfig};
pub use overrides::ConfigOverrides;
pub use parse::parse_config_content;
