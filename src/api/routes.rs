use regex::Regex;
use std::sync::LazyLock;

use super::parsing::decode_component;
use crate::invitation::RoleSource;

// Anything before `/projects` is an API Gateway stage or custom-domain prefix
static CONFIRM_ROUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/projects/confirm-invitation/([^/]+)(?:/([^/]+))?/?$").expect("static regex compile")
});

/// A confirm-invitation page request, with the raw route values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmRoute {
    pub source: RoleSource,
    pub id: String,
    /// Role id from the path; `None` for the query-parameter flavour.
    pub role_segment: Option<String>,
}

/// Match a request path against the confirm-invitation routes.
#[must_use]
pub fn match_route(path: &str) -> Option<ConfirmRoute> {
    let caps = CONFIRM_ROUTE.captures(path)?;
    let id = decode_component(caps.get(1)?.as_str());
    let role_segment = caps.get(2).map(|m| decode_component(m.as_str()));

    let source = if role_segment.is_some() {
        RoleSource::PathSegment
    } else {
        RoleSource::QueryParameter
    };

    Some(ConfirmRoute {
        source,
        id,
        role_segment,
    })
}
