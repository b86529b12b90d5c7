use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_SERVER_URL, DEFAULT_TIMEOUT_SECS, MAX_TIMEOUT_SECS,
};

use std::time::Duration;

use serde::Deserialize;

/// Connection settings for the RFI service
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the RFI service, e.g. "http://127.0.0.1:8080"
    pub server_url: String,
    /// Bearer token sent in the Authorization header
    pub token: Option<String>,
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: String::from(DEFAULT_SERVER_URL),
            token: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let url = self.server_url.trim();
        if url.is_empty() {
            return Err(ConfigError::client("client.server_url must not be empty"));
        }
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ConfigError::client(format!(
                "client.server_url must start with http:// or https://, got '{}'",
                url
            )));
        }

        if self.timeout_secs == 0 || self.timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::client(format!(
                "client.timeout_secs must be 1-{}, got {}",
                MAX_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        if let Some(token) = &self.token
            && token.trim().is_empty()
        {
            return Err(ConfigError::client("client.token must not be blank when set"));
        }

        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
