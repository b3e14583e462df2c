use serde::{Deserialize, Serialize};

/// A project as returned by the confirm-invitation endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i64,
    pub project_name: String,
    // The backend omits the key for projects without members
    #[serde(default)]
    pub user_roles: Vec<UserRole>,
}

/// Membership of one user in a project, with the role they hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRole {
    pub id: i64,
    pub user_id: i64,
    pub project_id: i64,
    pub role_id: i64,
    pub user: User,
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub fullname: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub id: i64,
    pub role_name: String,
    pub description: String,
}
