//! Credential submission and response classification
//!
//! The authentication backend is an external service reached through two
//! JSON endpoints. This module owns the request payloads, the mapping from
//! HTTP outcomes to user-facing errors, and the gating predicates the login
//! form uses to decide whether a submit is allowed at all.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Login endpoint on the backing auth service.
pub const LOGIN_ENDPOINT: &str = "/api/login";
/// Registration endpoint on the backing auth service.
pub const REGISTER_ENDPOINT: &str = "/api/register";

/// Fallback message when the backend reports a failure without a usable body.
pub const SERVER_ERROR_MESSAGE: &str = "Server error";

/// Body of a login request.
///
/// The `username` key is omitted entirely for password-only deployments,
/// matching what the backend expects.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

/// Body of a registration request. Both fields are always present.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

/// Lenient mirror of the backend's error payload (`{"error": "..."}`).
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

/// What went wrong with a submit. `Display` is the text shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// The backend rejected the credentials (login only, HTTP 401).
    #[error("Incorrect password")]
    InvalidCredentials,
    /// The backend reported a failure; carries its message when it sent one.
    #[error("{0}")]
    Server(String),
    /// The request never completed.
    #[error("Network error, please try again later")]
    Network,
}

/// Whether the login button is enabled / a login submit may proceed.
///
/// Requires a password, a username when the deployment asks for one, and no
/// request already in flight. The in-flight check is what prevents duplicate
/// concurrent submissions from one form instance.
pub fn submit_allowed(password: &str, username: &str, ask_username: bool, loading: bool) -> bool {
    !loading && !password.is_empty() && (!ask_username || !username.is_empty())
}

/// Whether the register button is enabled. Registration always needs both
/// fields.
pub fn register_allowed(password: &str, username: &str, loading: bool) -> bool {
    !loading && !password.is_empty() && !username.is_empty()
}

/// Classify a non-2xx login response.
///
/// 401 is the backend's "wrong credentials" answer and gets a fixed message;
/// everything else surfaces the backend's own error text when present.
pub fn classify_login_failure(status: u16, body: &str) -> SubmitError {
    if status == 401 {
        SubmitError::InvalidCredentials
    } else {
        SubmitError::Server(error_from_body(body))
    }
}

/// Classify a non-2xx registration response.
///
/// Registration has no dedicated 401 branch; every failure takes the server
/// path.
pub fn classify_register_failure(_status: u16, body: &str) -> SubmitError {
    SubmitError::Server(error_from_body(body))
}

/// Pull the `error` field out of a failure body, tolerating garbage.
fn error_from_body(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .unwrap_or_else(|| SERVER_ERROR_MESSAGE.to_string())
}

/// Resolve the post-success navigation target from the `redirect` query
/// parameter.
///
/// Only same-origin relative paths are honored; absolute URLs and
/// protocol-relative (`//host`) or backslash-smuggled (`/\host`) values
/// would let a crafted link bounce a freshly logged-in user to an attacker
/// origin, so they collapse to `/`.
pub fn resolve_redirect(raw: Option<&str>) -> String {
    match raw {
        Some(path)
            if path.starts_with('/') && !path.starts_with("//") && !path.starts_with("/\\") =>
        {
            path.to_string()
        }
        _ => "/".to_string(),
    }
}

/// POST the credentials to the login endpoint.
///
/// `username` must already reflect the deployment's shape: `Some` when the
/// form asks for a username, `None` otherwise.
#[cfg(not(feature = "ssr"))]
pub async fn submit_login(password: String, username: Option<String>) -> Result<(), SubmitError> {
    use gloo_net::http::Request;

    let payload = LoginRequest { password, username };

    let response = Request::post(LOGIN_ENDPOINT)
        .header("Content-Type", "application/json")
        .json(&payload)
        .map_err(|_| SubmitError::Network)?
        .send()
        .await
        .map_err(|_| SubmitError::Network)?;

    if response.ok() {
        return Ok(());
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(classify_login_failure(status, &body))
}

#[cfg(feature = "ssr")]
pub async fn submit_login(_password: String, _username: Option<String>) -> Result<(), SubmitError> {
    Err(SubmitError::Server(
        "Login is not available during server rendering".to_string(),
    ))
}

/// POST the credentials to the registration endpoint.
#[cfg(not(feature = "ssr"))]
pub async fn submit_register(username: String, password: String) -> Result<(), SubmitError> {
    use gloo_net::http::Request;

    let payload = RegisterRequest { username, password };

    let response = Request::post(REGISTER_ENDPOINT)
        .header("Content-Type", "application/json")
        .json(&payload)
        .map_err(|_| SubmitError::Network)?
        .send()
        .await
        .map_err(|_| SubmitError::Network)?;

    if response.ok() {
        return Ok(());
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(classify_register_failure(status, &body))
}

#[cfg(feature = "ssr")]
pub async fn submit_register(_username: String, _password: String) -> Result<(), SubmitError> {
    Err(SubmitError::Server(
        "Registration is not available during server rendering".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Submit gating
    // ========================================================================

    #[test]
    fn test_submit_blocked_without_password() {
        assert!(!submit_allowed("", "", false, false));
        assert!(!submit_allowed("", "alice", true, false));
    }

    #[test]
    fn test_submit_blocked_without_username_when_asked() {
        assert!(!submit_allowed("hunter2", "", true, false));
    }

    #[test]
    fn test_submit_allowed_password_only_deployment() {
        assert!(submit_allowed("hunter2", "", false, false));
    }

    #[test]
    fn test_submit_allowed_with_both_fields() {
        assert!(submit_allowed("hunter2", "alice", true, false));
    }

    #[test]
    fn test_submit_blocked_while_in_flight() {
        assert!(!submit_allowed("hunter2", "alice", true, true));
        assert!(!submit_allowed("hunter2", "", false, true));
    }

    #[test]
    fn test_register_requires_both_fields() {
        assert!(!register_allowed("", "", false));
        assert!(!register_allowed("hunter2", "", false));
        assert!(!register_allowed("", "alice", false));
        assert!(register_allowed("hunter2", "alice", false));
    }

    #[test]
    fn test_register_blocked_while_in_flight() {
        assert!(!register_allowed("hunter2", "alice", true));
    }

    // ========================================================================
    // Response classification
    // ========================================================================

    #[test]
    fn test_login_401_is_invalid_credentials() {
        let err = classify_login_failure(401, "");

        assert_eq!(err, SubmitError::InvalidCredentials);
        assert_eq!(err.to_string(), "Incorrect password");
    }

    #[test]
    fn test_login_401_ignores_body() {
        // The fixed message wins even when the backend sent its own text.
        let err = classify_login_failure(401, r#"{"error":"bad password"}"#);

        assert_eq!(err, SubmitError::InvalidCredentials);
    }

    #[test]
    fn test_login_500_uses_server_message() {
        let err = classify_login_failure(500, r#"{"error":"db down"}"#);

        assert_eq!(err, SubmitError::Server("db down".to_string()));
        assert_eq!(err.to_string(), "db down");
    }

    #[test]
    fn test_login_failure_with_malformed_body() {
        let err = classify_login_failure(500, "<html>Bad Gateway</html>");

        assert_eq!(err, SubmitError::Server(SERVER_ERROR_MESSAGE.to_string()));
    }

    #[test]
    fn test_login_failure_with_empty_body() {
        let err = classify_login_failure(503, "");

        assert_eq!(err, SubmitError::Server(SERVER_ERROR_MESSAGE.to_string()));
    }

    #[test]
    fn test_login_failure_with_body_missing_error_field() {
        let err = classify_login_failure(500, r#"{"detail":"nope"}"#);

        assert_eq!(err, SubmitError::Server(SERVER_ERROR_MESSAGE.to_string()));
    }

    #[test]
    fn test_register_has_no_401_branch() {
        let err = classify_register_failure(401, "");

        assert_eq!(err, SubmitError::Server(SERVER_ERROR_MESSAGE.to_string()));
    }

    #[test]
    fn test_register_failure_uses_server_message() {
        let err = classify_register_failure(409, r#"{"error":"username taken"}"#);

        assert_eq!(err, SubmitError::Server("username taken".to_string()));
    }

    #[test]
    fn test_network_error_message() {
        assert_eq!(
            SubmitError::Network.to_string(),
            "Network error, please try again later"
        );
    }

    #[test]
    fn test_classification_is_deterministic() {
        // Resubmitting against the same backend answer classifies identically.
        let first = classify_login_failure(500, r#"{"error":"db down"}"#);
        let second = classify_login_failure(500, r#"{"error":"db down"}"#);

        assert_eq!(first, second);
    }

    // ========================================================================
    // Redirect resolution
    // ========================================================================

    #[test]
    fn test_redirect_defaults_to_root() {
        assert_eq!(resolve_redirect(None), "/");
    }

    #[test]
    fn test_redirect_relative_path_is_kept() {
        assert_eq!(resolve_redirect(Some("/dashboard")), "/dashboard");
        assert_eq!(resolve_redirect(Some("/watch?id=42")), "/watch?id=42");
    }

    #[test]
    fn test_redirect_empty_value_falls_back() {
        assert_eq!(resolve_redirect(Some("")), "/");
    }

    #[test]
    fn test_redirect_absolute_url_is_rejected() {
        assert_eq!(resolve_redirect(Some("https://evil.example/")), "/");
        assert_eq!(resolve_redirect(Some("javascript:alert(1)")), "/");
    }

    #[test]
    fn test_redirect_protocol_relative_is_rejected() {
        assert_eq!(resolve_redirect(Some("//evil.example/")), "/");
        assert_eq!(resolve_redirect(Some("/\\evil.example")), "/");
    }

    // ========================================================================
    // Request payloads
    // ========================================================================

    #[test]
    fn test_login_payload_omits_absent_username() {
        let body = serde_json::to_string(&LoginRequest {
            password: "hunter2".to_string(),
            username: None,
        })
        .unwrap();

        assert_eq!(body, r#"{"password":"hunter2"}"#);
    }

    #[test]
    fn test_login_payload_includes_username_when_asked() {
        let body = serde_json::to_string(&LoginRequest {
            password: "hunter2".to_string(),
            username: Some("alice".to_string()),
        })
        .unwrap();

        assert_eq!(body, r#"{"password":"hunter2","username":"alice"}"#);
    }

    #[test]
    fn test_register_payload_always_has_both_fields() {
        let body = serde_json::to_string(&RegisterRequest {
            username: "alice".to_string(),
            password: "hunter2".to_string(),
        })
        .unwrap();

        assert_eq!(body, r#"{"username":"alice","password":"hunter2"}"#);
    }
}
