//! Runtime configuration snapshot for the client
//!
//! The server injects a `window.RUNTIME_CONFIG` object into the document
//! shell (see `app::shell`). The login form samples it exactly once per
//! mount; it is never re-read and never mutated.

use serde::{Deserialize, Serialize};

/// The storage backend name that means "no user accounts".
///
/// With localStorage-backed storage there is a single shared password and no
/// usernames, so the login form only asks for a password.
pub const LOCAL_STORAGE: &str = "localstorage";

/// Runtime configuration exposed to the browser.
///
/// Field names follow the wire format of the injected global.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// Storage backend the deployment uses (e.g. "redis", "d1").
    /// Absent or `"localstorage"` means password-only login.
    #[serde(default, rename = "STORAGE_TYPE")]
    pub storage_type: Option<String>,
    /// Whether self-registration is offered on the login page.
    #[serde(default, rename = "ENABLE_REGISTER")]
    pub register_enabled: bool,
}

impl RuntimeConfig {
    /// Whether the login form should show and require a username field.
    ///
    /// True iff a storage backend is configured and it is not the
    /// localStorage sentinel.
    pub fn asks_username(&self) -> bool {
        match self.storage_type.as_deref() {
            Some(storage) => !storage.is_empty() && storage != LOCAL_STORAGE,
            None => false,
        }
    }

    /// Read the injected `window.RUNTIME_CONFIG` object.
    ///
    /// Tolerates a missing global and missing or oddly-typed fields by
    /// falling back to the default snapshot, so a broken deployment
    /// degrades to password-only login instead of a crash.
    #[cfg(not(feature = "ssr"))]
    pub fn from_window() -> Self {
        use wasm_bindgen::JsValue;

        let Some(window) = web_sys::window() else {
            return Self::default();
        };
        let Ok(config) = js_sys::Reflect::get(&window, &JsValue::from_str("RUNTIME_CONFIG"))
        else {
            return Self::default();
        };
        if config.is_undefined() || config.is_null() {
            return Self::default();
        }

        let storage_type = js_sys::Reflect::get(&config, &JsValue::from_str("STORAGE_TYPE"))
            .ok()
            .and_then(|v| v.as_string());
        // Boolean-ish on purpose: deployments set this to true, 1, or "1".
        let register_enabled = js_sys::Reflect::get(&config, &JsValue::from_str("ENABLE_REGISTER"))
            .map(|v| v.is_truthy())
            .unwrap_or(false);

        Self {
            storage_type,
            register_enabled,
        }
    }

    /// Server-rendered HTML never reads the browser global.
    #[cfg(feature = "ssr")]
    pub fn from_window() -> Self {
        Self::default()
    }
}
