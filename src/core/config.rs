use std::env;
use std::time::Duration;

/// Base URL used by the query-parameter route when `NEXT_PUBLIC_API_URL` is unset.
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Deep link into the companion mobile app.
pub const DEFAULT_DEEP_LINK: &str = "agilcurn://home";

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_url: Option<String>,
    pub deep_link: String,
    pub request_timeout_secs: u64,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let request_timeout_secs = match env::var("REQUEST_TIMEOUT_SECS") {
            Ok(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|e| format!("REQUEST_TIMEOUT_SECS: {}", e))?,
            Err(_) => DEFAULT_REQUEST_TIMEOUT_SECS,
        };

        Ok(Self {
            api_url: env::var("NEXT_PUBLIC_API_URL")
                .ok()
                .filter(|v| !v.trim().is_empty()),
            deep_link: env::var("APP_DEEP_LINK")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_DEEP_LINK.to_string()),
            request_timeout_secs,
        })
    }

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: None,
            deep_link: DEFAULT_DEEP_LINK.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}
