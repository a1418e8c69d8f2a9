use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub api: ApiSettings,
    pub http: HttpSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSettings {
    /// Root of the backend API, without a trailing slash.
    pub base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpSettings {
    pub timeout_secs: u64,
    /// One extra attempt for idempotent GETs on transient failures.
    pub retry_idempotent: bool,
}

impl Settings {
    pub fn from_env() -> Self {
        Self::defaults().with_env_overrides()
    }

    fn defaults() -> Self {
        Self {
            api: ApiSettings { base_url: "http://127.0.0.1:8000".to_string() },
            http: HttpSettings { timeout_secs: 30, retry_idempotent: true },
        }
    }

    fn with_env_overrides(mut self) -> Self {
        if let Ok(v) = env::var("AEGIS_API_URL") {
            if !v.is_empty() {
                self.api.base_url = v.trim_end_matches('/').to_string();
            }
        }
        if let Ok(v) = env::var("AEGIS_HTTP_TIMEOUT_SECS") {
            self.http.timeout_secs = v.parse().unwrap_or(self.http.timeout_secs);
        }
        if let Ok(v) = env::var("AEGIS_HTTP_RETRY") {
            self.http.retry_idempotent = v.parse().unwrap_or(self.http.retry_idempotent);
        }
        self
    }
}

// Global singleton settings - initialized once at startup.
// Credentials are deliberately not part of this: authentication is an
// explicit per-client value (see crate::session::Auth), never shared state.
pub static SETTINGS: Lazy<Settings> = Lazy::new(Settings::from_env);

// Convenience function for accessing settings
pub fn settings() -> &'static Settings {
    &SETTINGS
}
