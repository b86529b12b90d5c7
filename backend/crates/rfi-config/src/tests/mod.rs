
use std::env;

use tempfile::TempDir;

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Every variable `Config::load` reads, cleared for the duration of a test
const RFI_ENV_VARS: [&str; 6] = [
    "RFI_SERVER_URL",
    "RFI_TOKEN",
    "RFI_TIMEOUT_SECS",
    "RFI_LOG_LEVEL",
    "RFI_LOG_COLORED",
    "RFI_LOG_FILE",
];

/// Create a temp config directory, point RFI_CONFIG_DIR at it and clear RFI_* overrides
pub(crate) fn setup_config_dir() -> (TempDir, EnvGuard, Vec<EnvGuard>) {
    let temp = TempDir::new().unwrap();
    let dir_guard = EnvGuard::set("RFI_CONFIG_DIR", temp.path().to_str().unwrap());
    let cleared = RFI_ENV_VARS.into_iter().map(EnvGuard::remove).collect();
    (temp, dir_guard, cleared)
}
