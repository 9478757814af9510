//! Application configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling
//! `dotenvy::dotenv()`. The server forwards the relevant subset to the
//! browser as the `window.RUNTIME_CONFIG` snapshot.

use crate::core::runtime::RuntimeConfig;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Storage backend the deployment uses for accounts and user data.
    /// Example: redis, d1. Absent means localStorage-only (no accounts).
    pub storage_type: Option<String>,

    /// Whether self-registration is offered on the login page.
    pub enable_register: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self {
            storage_type: std::env::var("STORAGE_TYPE").ok(),
            enable_register: std::env::var("ENABLE_REGISTER")
                .map(|v| truthy(&v))
                .unwrap_or(false),
        }
    }

    /// Check if a storage backend is configured
    pub fn has_storage(&self) -> bool {
        self.storage_type.is_some()
    }

    /// The subset of the configuration the browser needs.
    pub fn runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            storage_type: self.storage_type.clone(),
            register_enabled: self.enable_register,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Interpret the usual spellings of an enabled flag.
fn truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
