//! Projects API client
//!
//! The confirmer only sees `InvitationClient`, so tests can hand it canned
//! bodies instead of a live backend.

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::ACCEPT;
use serde_json::Value;
use std::time::Duration;
use url::Url;

use crate::errors::ConfirmError;

#[async_trait]
pub trait InvitationClient: Send + Sync {
    /// GET `url` and return the body.
    ///
    /// A 2xx body that is not JSON comes back as `Value::String` so the caller
    /// decides what an acceptable shape is. Transport errors and non-2xx
    /// statuses are `NetworkError`.
    async fn get_json(&self, url: &Url) -> Result<Value, ConfirmError>;
}

/// `InvitationClient` backed by reqwest.
#[derive(Debug, Clone)]
pub struct HttpInvitationClient {
    http: Client,
}

impl HttpInvitationClient {
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { http }
    }
}

#[async_trait]
impl InvitationClient for HttpInvitationClient {
    async fn get_json(&self, url: &Url) -> Result<Value, ConfirmError> {
        let response = self
            .http
            .get(url.as_str())
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ConfirmError::NetworkError(format!(
                "projects API returned HTTP {status}"
            )));
        }

        let body = response.text().await?;

        Ok(decode_body(body))
    }
}

fn decode_body(body: String) -> Value {
    match serde_json::from_str::<Value>(&body) {
        Ok(value) => value,
        Err(_) => Value::String(body),
    }
}
