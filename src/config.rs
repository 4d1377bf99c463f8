// src/config.rs
use std::{env, time::Duration};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct ConsoleConfig {
    backend_url: String,
    listen_addr: String,
    http_timeout: Duration,
    validate_with_backend: bool,
    login_path: String,
    autosave_interval: Duration,
    allowed_origins: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_backend_url() -> String {
    "http://localhost:5002".into()
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_login_path() -> String {
    "/AdminLogin".into()
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".into()]
}

fn secs_var(lookup: &impl Fn(&str) -> Option<String>, name: &str, default: u64) -> Duration {
    let secs = lookup(name)
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default);
    Duration::from_secs(secs)
}

impl ConsoleConfig {
    /// Build configuration from environment variables, falling back to
    /// local development defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let backend_url = lookup("BACKEND_URL").unwrap_or_else(default_backend_url);
        if !(backend_url.starts_with("http://") || backend_url.starts_with("https://")) {
            return Err(ConfigError::Invalid(format!(
                "BACKEND_URL must be an http(s) origin, got '{backend_url}'"
            )));
        }

        let login_path = lookup("LOGIN_PATH").unwrap_or_else(default_login_path);
        if !login_path.starts_with('/') {
            return Err(ConfigError::Invalid("LOGIN_PATH must start with '/'".into()));
        }

        let validate_with_backend = lookup("VALIDATE_WITH_BACKEND")
            .is_none_or(|v| !(v == "0" || v.eq_ignore_ascii_case("false")));

        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .map(|s| {
                s.split(',')
                    .map(|p| p.trim().to_string())
                    .filter(|p| !p.is_empty())
                    .collect()
            })
            .unwrap_or_else(default_allowed_origins);

        Ok(Self {
            backend_url,
            listen_addr: lookup("LISTEN_ADDR").unwrap_or_else(default_listen_addr),
            http_timeout: secs_var(&lookup, "HTTP_TIMEOUT_SECS", 10),
            validate_with_backend,
            login_path,
            autosave_interval: secs_var(&lookup, "AUTOSAVE_INTERVAL_SECS", 30),
            allowed_origins,
        })
    }

    pub fn backend_url(&self) -> &str {
        &self.backend_url
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn http_timeout(&self) -> Duration {
        self.http_timeout
    }

    /// Whether elevated roles are reconfirmed against the backend.
    pub fn validate_with_backend(&self) -> bool {
        self.validate_with_backend
    }

    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    pub fn autosave_interval(&self) -> Duration {
        self.autosave_interval
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<ConsoleConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        ConsoleConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = config(&[]).unwrap();
        assert_eq!(config.backend_url(), "http://localhost:5002");
        assert_eq!(config.login_path(), "/AdminLogin");
        assert_eq!(config.autosave_interval(), Duration::from_secs(30));
        assert!(config.validate_with_backend());
        assert_eq!(config.allowed_origins(), ["http://localhost:3000"]);
    }

    #[test]
    fn overrides_are_read() {
        let config = config(&[
            ("VALIDATE_WITH_BACKEND", "false"),
            ("HTTP_TIMEOUT_SECS", "3"),
            ("ALLOWED_ORIGINS", "https://a.example, https://b.example,"),
        ])
        .unwrap();
        assert!(!config.validate_with_backend());
        assert_eq!(config.http_timeout(), Duration::from_secs(3));
        assert_eq!(config.allowed_origins().len(), 2);
    }

    #[test]
    fn rejects_non_http_backend_and_relative_login_path() {
        assert!(config(&[("BACKEND_URL", "localhost:5002")]).is_err());
        assert!(config(&[("LOGIN_PATH", "AdminLogin")]).is_err());
    }
}
