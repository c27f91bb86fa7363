//! Build-time configuration.
//!
//! Both base URLs are read from the environment when the crate is compiled,
//! e.g. `BACKEND_URL=https://api.clinic.example trunk build --release`.
//! Without the variable the local development address is used.

/// Base URL of the backend server (auth endpoints, form posts).
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "http://localhost:8000",
};

/// Base URL of the public REST API.
pub const PUBLIC_API_URL: &str = match option_env!("PUBLIC_API_URL") {
    Some(url) => url,
    None => "http://localhost:8000/api",
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub backend_url: String,
    pub public_api_url: String,
}

impl AppConfig {
    pub fn from_build_env() -> Self {
        Self {
            backend_url: BACKEND_URL.to_string(),
            public_api_url: PUBLIC_API_URL.to_string(),
        }
    }

    /// Full backend URL for `path`, e.g. `backend_url("/auth/login")`.
    pub fn backend_url(&self, path: &str) -> String {
        join_url(&self.backend_url, path)
    }

    /// Full public API URL for `path`, e.g. `api_url("patients")`.
    pub fn api_url(&self, path: &str) -> String {
        join_url(&self.public_api_url, path)
    }

    /// Checks that both base URLs carry an http(s) scheme and a host.
    pub fn validate(&self) -> anyhow::Result<()> {
        check_base_url("BACKEND_URL", &self.backend_url)?;
        check_base_url("PUBLIC_API_URL", &self.public_api_url)?;
        Ok(())
    }
}

fn check_base_url(name: &str, url: &str) -> anyhow::Result<()> {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .ok_or_else(|| anyhow::anyhow!("{} must start with http:// or https://, got '{}'", name, url))?;

    if rest.trim_matches('/').is_empty() {
        anyhow::bail!("{} has no host: '{}'", name, url);
    }
    Ok(())
}

/// Joins a base URL and a path with exactly one `/` between them.
pub fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        base.to_string()
    } else {
        format!("{}/{}", base, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(backend: &str, api: &str) -> AppConfig {
        AppConfig {
            backend_url: backend.to_string(),
            public_api_url: api.to_string(),
        }
    }

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("http://h:8000", "/auth/login"), "http://h:8000/auth/login");
        assert_eq!(join_url("http://h:8000/", "auth/login"), "http://h:8000/auth/login");
        assert_eq!(join_url("http://h:8000//", "//auth"), "http://h:8000/auth");
        assert_eq!(join_url("http://h:8000/api", ""), "http://h:8000/api");
    }

    #[test]
    fn test_api_and_backend_urls() {
        let cfg = config("http://localhost:8000", "http://localhost:8000/api/");
        assert_eq!(cfg.backend_url("/auth/login"), "http://localhost:8000/auth/login");
        assert_eq!(cfg.api_url("patients"), "http://localhost:8000/api/patients");
    }

    #[test]
    fn test_build_env_config_is_valid() {
        let cfg = AppConfig::from_build_env();
        assert_eq!(cfg.backend_url, BACKEND_URL);
        assert_eq!(cfg.public_api_url, PUBLIC_API_URL);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_urls() {
        let err = config("localhost:8000", "http://x/api").validate().unwrap_err();
        assert!(err.to_string().contains("BACKEND_URL"));

        let err = config("http://x", "https://").validate().unwrap_err();
        assert!(err.to_string().contains("PUBLIC_API_URL"));
    }
}
