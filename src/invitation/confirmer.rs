use tracing::{debug, info};
use url::Url;

use super::client::InvitationClient;
use super::request::InvitationRequest;
use super::role_source::RoleSource;
use super::state::{PageState, json_kind};
use crate::core::config::AppConfig;
use crate::errors::ConfirmError;

/// Confirms one invitation against the projects API.
pub struct InvitationConfirmer<C: InvitationClient> {
    client: C,
    api_url: Option<String>,
}

impl<C: InvitationClient> InvitationConfirmer<C> {
    pub fn new(client: C, config: &AppConfig) -> Self {
        Self {
            client,
            api_url: config.api_url.clone(),
        }
    }

    /// Backend URL for `request`, honouring the flavour's base URL fallback.
    pub fn confirmation_url(&self, request: &InvitationRequest) -> Result<Url, ConfirmError> {
        let base = request
            .source
            .base_url(self.api_url.as_deref())
            .ok_or_else(|| ConfirmError::ConfigError("NEXT_PUBLIC_API_URL is not set".into()))?;

        request
            .source
            .confirmation_url(&base, request.project_id, request.role_id)
    }

    /// Parse the raw route values and confirm.
    ///
    /// Identifiers that do not parse end in `Error` without contacting the
    /// backend.
    pub async fn confirm_raw(
        &self,
        source: RoleSource,
        raw_id: &str,
        raw_role_id: Option<&str>,
    ) -> PageState {
        match InvitationRequest::parse(source, raw_id, raw_role_id) {
            Ok(request) => self.confirm(&request).await,
            Err(e) => PageState::default().resolve(Err(e)),
        }
    }

    /// Issue the single confirmation GET and map the outcome to a page state.
    pub async fn confirm(&self, request: &InvitationRequest) -> PageState {
        let state = PageState::default();

        let url = match self.confirmation_url(request) {
            Ok(url) => url,
            Err(e) => return state.resolve(Err(e)),
        };

        info!(
            base_url = self.api_url.as_deref().unwrap_or("<unset>"),
            project_id = request.project_id,
            role_id = request.role_id,
            source = ?request.source,
            url = %url,
            "Confirming invitation"
        );

        let outcome = self.client.get_json(&url).await;

        if let Ok(body) = &outcome {
            debug!(kind = json_kind(body), content = %body, "Projects API response");
        }

        state.resolve(outcome)
    }
}
