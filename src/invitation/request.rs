use super::role_source::{RoleSource, parse_identifier};
use crate::errors::ConfirmError;

/// Identifiers of one invitation, resolved from the route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvitationRequest {
    pub source: RoleSource,
    pub project_id: u64,
    pub role_id: u64,
}

impl InvitationRequest {
    /// Parse the raw id and role values captured from the route.
    ///
    /// # Errors
    ///
    /// Returns `InvalidIdentifier` when the id is not numeric, or the role is
    /// not numeric, or the role is missing for [`RoleSource::PathSegment`].
    pub fn parse(
        source: RoleSource,
        raw_id: &str,
        raw_role_id: Option<&str>,
    ) -> Result<Self, ConfirmError> {
        let project_id = parse_identifier("id", raw_id)?;
        let role_id = source.resolve_role_id(raw_role_id)?;

        Ok(Self {
            source,
            project_id,
            role_id,
        })
    }
}
