use url::Url;

use crate::core::config::DEFAULT_API_URL;
use crate::errors::ConfirmError;

/// Role assigned when an invitation link carries no role ("Developer").
pub const DEVELOPER_ROLE_ID: u64 = 3;

/// Where the role identifier of an invitation link comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleSource {
    /// `/projects/confirm-invitation/{id}/{roleId}`; the role is mandatory.
    PathSegment,
    /// `/projects/confirm-invitation/{id}?roleId=N`; defaults to [`DEVELOPER_ROLE_ID`].
    QueryParameter,
}

impl RoleSource {
    /// Pick the backend base URL for this flavour.
    ///
    /// Only the query-parameter flavour falls back to [`DEFAULT_API_URL`].
    #[must_use]
    pub fn base_url(self, configured: Option<&str>) -> Option<String> {
        let configured = configured
            .map(|u| u.trim().trim_end_matches('/'))
            .filter(|u| !u.is_empty());

        match (self, configured) {
            (_, Some(url)) => Some(url.to_string()),
            (RoleSource::QueryParameter, None) => Some(DEFAULT_API_URL.to_string()),
            (RoleSource::PathSegment, None) => None,
        }
    }

    /// Turn the raw role value from the route into a role id.
    pub fn resolve_role_id(self, raw: Option<&str>) -> Result<u64, ConfirmError> {
        let raw = raw.map(str::trim).filter(|r| !r.is_empty());

        match (self, raw) {
            (_, Some(value)) => parse_identifier("roleId", value),
            (RoleSource::QueryParameter, None) => Ok(DEVELOPER_ROLE_ID),
            (RoleSource::PathSegment, None) => Err(ConfirmError::InvalidIdentifier(
                "roleId path segment is missing".to_string(),
            )),
        }
    }

    /// Build `{base}/projects/confirm-invitation/{id}` plus the role in the
    /// position this flavour expects.
    pub fn confirmation_url(
        self,
        base: &str,
        project_id: u64,
        role_id: u64,
    ) -> Result<Url, ConfirmError> {
        let mut url = Url::parse(base.trim().trim_end_matches('/'))?;

        {
            let mut segments = url.path_segments_mut().map_err(|()| {
                ConfirmError::ConfigError(format!("base URL cannot carry a path: {base}"))
            })?;
            segments
                .pop_if_empty()
                .push("projects")
                .push("confirm-invitation")
                .push(&project_id.to_string());

            if self == RoleSource::PathSegment {
                segments.push(&role_id.to_string());
            }
        }

        if self == RoleSource::QueryParameter {
            url.query_pairs_mut()
                .append_pair("roleId", &role_id.to_string());
        }

        Ok(url)
    }
}

pub(crate) fn parse_identifier(name: &str, raw: &str) -> Result<u64, ConfirmError> {
    raw.trim()
        .parse::<u64>()
        .map_err(|_| ConfirmError::InvalidIdentifier(format!("{name} is not numeric: {raw:?}")))
}
