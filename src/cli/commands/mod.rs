pub mod config;
pub mod generate;

pub use config::run_config_command;
pub use generate::run_generate_command;
