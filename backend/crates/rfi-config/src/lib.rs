mod client_config;
mod config;
mod error;
mod log_level;
mod logging_config;

#[cfg(test)]
mod tests;

pub use client_config::ClientConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;

pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8080";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const MAX_TIMEOUT_SECS: u64 = 600;

const DEFAULT_LOG_LEVEL_STRING: &str = "warn";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;
const DEFAULT_LOG_COLORED: bool = true;

const CONFIG_DIR_ENV: &str = "RFI_CONFIG_DIR";
const CONFIG_DIR_NAME: &str = ".rfi";
const CONFIG_FILE_NAME: &str = "config.toml";
