//! invite-confirm - confirms project invitations and renders the result as a page.
//!
//! A single API Lambda receives `/projects/confirm-invitation/{id}` and
//! `/projects/confirm-invitation/{id}/{roleId}` requests from API Gateway,
//! calls the projects backend once, and answers with an HTML page showing the
//! project team or a generic error.
//!
//! # Architecture
//!
//! The system uses:
//! - AWS Lambda for serverless execution
//! - reqwest for the backend call, behind the `InvitationClient` trait
//! - handlebars for the page views
//! - Tokio for async runtime
//!
//! # Example
//!
//! ```no_run
//! use invite_confirm::core::config::AppConfig;
//! use invite_confirm::invitation::{
//!     HttpInvitationClient, InvitationConfirmer, InvitationRequest, RoleSource,
//! };
//! use invite_confirm::views::render_page;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     invite_confirm::setup_logging();
//!
//!     let config = AppConfig {
//!         api_url: Some("https://api.example.com".to_string()),
//!         deep_link: "agilcurn://home".to_string(),
//!         request_timeout_secs: 30,
//!     };
//!
//!     let client = HttpInvitationClient::new(config.request_timeout());
//!     let confirmer = InvitationConfirmer::new(client, &config);
//!
//!     // Confirm project 42 with the default role taken from the query string
//!     let request = InvitationRequest::parse(RoleSource::QueryParameter, "42", None)?;
//!     let state = confirmer.confirm(&request).await;
//!
//!     println!("{}", render_page(&state, &config.deep_link)?);
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod api;
pub mod core;
pub mod errors;
pub mod invitation;
pub mod views;

pub use errors::ConfirmError;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. Calling it more than once is harmless; only
/// the first subscriber is installed.
///
/// # Example
///
/// ```
/// invite_confirm::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
}
