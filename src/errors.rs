use thiserror::Error;

/// Message shown to the user whenever a confirmation does not succeed.
///
/// The page never distinguishes "already confirmed", "not found" and transient
/// failures; the cause only reaches the logs.
pub const CONFIRM_FAILED_MESSAGE: &str = "Failed to confirm invitation. The invitation may have already been confirmed or does not exist.";

#[derive(Debug, Error)]
pub enum ConfirmError {
    #[error("Failed to reach projects API: {0}")]
    NetworkError(String),

    #[error("Unexpected response from projects API: {0}")]
    UnexpectedResponse(String),

    #[error("Invalid identifier in route: {0}")]
    InvalidIdentifier(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Failed to render page: {0}")]
    RenderError(String),
}

impl ConfirmError {
    /// The text a visitor sees for this error. Always the same fixed message.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        CONFIRM_FAILED_MESSAGE
    }
}

impl From<reqwest::Error> for ConfirmError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            ConfirmError::UnexpectedResponse(error.to_string())
        } else {
            ConfirmError::NetworkError(error.to_string())
        }
    }
}

impl From<serde_json::Error> for ConfirmError {
    fn from(error: serde_json::Error) -> Self {
        ConfirmError::UnexpectedResponse(error.to_string())
    }
}

impl From<url::ParseError> for ConfirmError {
    fn from(error: url::ParseError) -> Self {
        ConfirmError::ConfigError(format!("invalid base URL: {error}"))
    }
}

impl From<handlebars::RenderError> for ConfirmError {
    fn from(error: handlebars::RenderError) -> Self {
        ConfirmError::RenderError(error.to_string())
    }
}
