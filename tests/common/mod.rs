#![allow(dead_code)]

use async_trait::async_trait;
use invite_confirm::ConfirmError;
use invite_confirm::invitation::InvitationClient;
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};
use url::Url;

/// What the fake projects API answers with.
#[derive(Debug, Clone)]
pub enum Canned {
    Body(Value),
    NetworkFailure,
    Status(u16),
}

/// In-memory `InvitationClient` that records every URL it is asked for.
#[derive(Debug, Clone)]
pub struct RecordingClient {
    answer: Canned,
    calls: Arc<Mutex<Vec<String>>>,
}

impl RecordingClient {
    pub fn new(answer: Canned) -> Self {
        Self {
            answer,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl InvitationClient for RecordingClient {
    async fn get_json(&self, url: &Url) -> Result<Value, ConfirmError> {
        self.calls.lock().unwrap().push(url.to_string());
        match &self.answer {
            Canned::Body(body) => Ok(body.clone()),
            Canned::NetworkFailure => Err(ConfirmError::NetworkError(
                "connection refused".to_string(),
            )),
            Canned::Status(code) => Err(ConfirmError::NetworkError(format!(
                "projects API returned HTTP {code}"
            ))),
        }
    }
}

pub fn user_role(id: i64, fullname: &str, role_name: &str, email: &str) -> Value {
    json!({
        "id": id,
        "userId": id + 100,
        "projectId": 42,
        "roleId": 3,
        "user": { "id": id + 100, "fullname": fullname, "email": email },
        "role": { "id": 3, "roleName": role_name, "description": "Team member" }
    })
}

pub fn project_body(user_roles: Vec<Value>) -> Value {
    json!({
        "id": 42,
        "projectName": "Apollo",
        "userRoles": user_roles
    })
}

pub fn team_body() -> Value {
    project_body(vec![
        user_role(1, "Ada Lovelace", "Developer", "ada@example.com"),
        user_role(2, "Grace Hopper", "Scrum Master", "grace@example.com"),
    ])
}
