//! URL helpers for talking to the backend.
//!
//! Base addresses come from the build environment, see
//! [`contracts::shared::config`].

use contracts::shared::config::AppConfig;

/// Build a full backend URL from a path
///
/// # Example
/// ```text
/// backend_url("/auth/login") -> "http://localhost:8000/auth/login"
/// ```
pub fn backend_url(path: &str) -> String {
    AppConfig::from_build_env().backend_url(path)
}

/// Build a full public API URL from a path
pub fn api_url(path: &str) -> String {
    AppConfig::from_build_env().api_url(path)
}
