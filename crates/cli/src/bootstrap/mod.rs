mod config;
mod logging;

pub use config::{load_config, load_env_file};
pub use logging::init_logging;
