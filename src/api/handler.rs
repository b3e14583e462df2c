//! API Lambda handler - thin router in front of the invitation confirmer.
//!
//! This module handles:
//! - Request validation (method, path)
//! - Route matching for both confirm-invitation flavours
//! - Rendering the resulting page state as HTML

use super::{helpers, parsing, routes};
use crate::core::config::AppConfig;
use crate::invitation::{HttpInvitationClient, InvitationClient, InvitationConfirmer, RoleSource};
use crate::views::render_page;
use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use std::sync::OnceLock;
use tracing::{error, info, warn};
use uuid::Uuid;

pub use self::function_handler as handler;

// Built on the first invocation and reused while the Lambda container is warm
static HTTP_CLIENT: OnceLock<HttpInvitationClient> = OnceLock::new();

/// Lambda handler for the API entrypoint.
///
/// # Errors
///
/// Never fails at the Lambda level; configuration and routing problems are
/// returned as JSON error payloads, and confirmation failures as the error page.
#[tracing::instrument(level = "info", skip(event), fields(request_id = %Uuid::new_v4()))]
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<Value, Error> {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Config error: {}", e);
            return Ok(helpers::err_response(500, "Service is misconfigured"));
        }
    };

    let client = HTTP_CLIENT
        .get_or_init(|| HttpInvitationClient::new(config.request_timeout()))
        .clone();

    Ok(handle_request(&config, client, &event.payload).await)
}

/// Route one proxy event and produce the proxy response.
pub async fn handle_request<C: InvitationClient>(
    config: &AppConfig,
    client: C,
    payload: &Value,
) -> Value {
    let trace_id = payload
        .get("headers")
        .and_then(|h| parsing::get_header_value(h, "X-Amzn-Trace-Id"))
        .unwrap_or("");

    if let Some(method) = parsing::request_method(payload)
        && !method.eq_ignore_ascii_case("GET")
    {
        warn!(method = %method, "Rejecting non-GET request");
        return helpers::method_not_allowed();
    }

    let Some(path) = parsing::request_path(payload) else {
        error!("Request missing path");
        return helpers::err_response(400, "Missing path");
    };

    info!(raw_path = %path, xray_trace_id = %trace_id, "Request path");

    let Some(route) = routes::match_route(path) else {
        return helpers::not_found(path);
    };

    let raw_role_id = match route.source {
        RoleSource::PathSegment => route.role_segment.clone(),
        RoleSource::QueryParameter => parsing::query_param(payload, "roleId"),
    };

    let confirmer = InvitationConfirmer::new(client, config);
    let state = confirmer
        .confirm_raw(route.source, &route.id, raw_role_id.as_deref())
        .await;

    match render_page(&state, &config.deep_link) {
        Ok(html) => helpers::html_response(200, &html),
        Err(e) => {
            error!("Failed to render page: {}", e);
            helpers::err_response(500, "Failed to render page")
        }
    }
}
