use crate::{
    CONFIG_DIR_ENV, CONFIG_DIR_NAME, CONFIG_FILE_NAME, ClientConfig, ConfigError,
    ConfigErrorResult, LoggingConfig,
};

use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub client: ClientConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for RFI_CONFIG_DIR env var, else use ./.rfi/
    /// 2. Load config.toml if it exists, else use defaults
    /// 3. Apply RFI_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_path = Self::config_dir()?.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: RFI_CONFIG_DIR env var > ./.rfi/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(CONFIG_DIR_NAME))
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.client.validate()?;
        self.validate_logging()
    }

    /// Validate only the `[logging]` section, for commands that never contact the server
    pub fn validate_logging(&self) -> ConfigErrorResult<()> {
        if let Some(file) = &self.logging.file
            && file.trim().is_empty()
        {
            return Err(ConfigError::logging("logging.file must not be blank when set"));
        }

        Ok(())
    }

    /// Log configuration summary (NEVER logs the token).
    pub fn log_summary(&self) {
        debug!("Configuration loaded:");
        debug!(
            "  client: {} (timeout {}s, token: {})",
            self.client.server_url,
            self.client.timeout_secs,
            if self.client.token.is_some() {
                "set"
            } else {
                "none"
            }
        );
        debug!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stderr")
        );
    }

    fn apply_env_overrides(&mut self) {
        // Client
        Self::apply_env_string("RFI_SERVER_URL", &mut self.client.server_url);
        Self::apply_env_option_string("RFI_TOKEN", &mut self.client.token);
        Self::apply_env_parse("RFI_TIMEOUT_SECS", &mut self.client.timeout_secs);

        // Logging
        Self::apply_env_parse("RFI_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("RFI_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("RFI_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
