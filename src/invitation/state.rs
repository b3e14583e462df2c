use serde_json::Value;
use tracing::{error, warn};

use crate::core::models::Project;
use crate::errors::ConfirmError;

/// What the confirmation page currently shows.
///
/// Starts in `Loading`; the first outcome moves it to `Error` or `Success`,
/// and both of those are final.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum PageState {
    #[default]
    Loading,
    Error(String),
    Success(Project),
}

impl PageState {
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, PageState::Loading)
    }

    /// Apply the outcome of the backend call.
    ///
    /// Only an object body counts as success; anything else, and any error,
    /// yields the fixed user-facing message. Outcomes that arrive after the
    /// state is final are dropped.
    #[must_use]
    pub fn resolve(self, outcome: Result<Value, ConfirmError>) -> Self {
        if self.is_terminal() {
            warn!("Ignoring confirmation outcome for a finished page");
            return self;
        }

        let project = outcome.and_then(|body| match body {
            Value::Object(_) => serde_json::from_value::<Project>(body).map_err(ConfirmError::from),
            other => Err(ConfirmError::UnexpectedResponse(format!(
                "expected a JSON object, got {}",
                json_kind(&other)
            ))),
        });

        match project {
            Ok(project) => PageState::Success(project),
            Err(e) => {
                error!("Error confirming invitation: {}", e);
                PageState::Error(e.user_message().to_string())
            }
        }
    }
}

#[must_use]
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CONFIRM_FAILED_MESSAGE;
    use serde_json::json;

    fn project_body() -> Value {
        json!({ "id": 1, "projectName": "Apollo", "userRoles": [] })
    }

    #[test]
    fn test_initial_state_is_loading() {
        assert_eq!(PageState::default(), PageState::Loading);
    }

    #[test]
    fn test_loading_is_not_terminal() {
        assert!(!PageState::Loading.is_terminal());
        assert!(PageState::Error("x".into()).is_terminal());
    }

    #[test]
    fn test_object_resolves_to_success() {
        let state = PageState::Loading.resolve(Ok(project_body()));
        match state {
            PageState::Success(project) => assert_eq!(project.project_name, "Apollo"),
            other => panic!("Expected Success, got: {other:?}"),
        }
    }

    #[test]
    fn test_non_object_resolves_to_error() {
        for body in [json!("ok"), Value::Null, json!([1, 2]), json!(5)] {
            assert_eq!(
                PageState::Loading.resolve(Ok(body)),
                PageState::Error(CONFIRM_FAILED_MESSAGE.to_string())
            );
        }
    }

    #[test]
    fn test_undecodable_object_resolves_to_error() {
        let state = PageState::Loading.resolve(Ok(json!({ "message": "already confirmed" })));
        assert_eq!(state, PageState::Error(CONFIRM_FAILED_MESSAGE.to_string()));
    }

    #[test]
    fn test_terminal_states_ignore_later_outcomes() {
        let failed = PageState::Loading.resolve(Err(ConfirmError::NetworkError("down".into())));
        let still_failed = failed.clone().resolve(Ok(project_body()));
        assert_eq!(failed, still_failed);

        let done = PageState::Loading.resolve(Ok(project_body()));
        let still_done = done
            .clone()
            .resolve(Err(ConfirmError::NetworkError("late".into())));
        assert_eq!(done, still_done);
    }

    #[test]
    fn test_json_kind() {
        assert_eq!(json_kind(&Value::Null), "null");
        assert_eq!(json_kind(&json!({})), "object");
        assert_eq!(json_kind(&json!("s")), "string");
    }
}
