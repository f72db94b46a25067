//! Wire types for the Jobly API. Field names are camelCase on the wire.
//! Credential-bearing requests redact their secrets from `Debug`.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub is_admin: bool,
    /// Ids of jobs this user has applied to.
    #[serde(default)]
    pub applications: Vec<u64>,
}

impl UserProfile {
    #[must_use]
    pub fn has_applied(&self, job_id: u64) -> bool {
        self.applications.contains(&job_id)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub handle: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub num_employees: Option<u32>,
    #[serde(default)]
    pub logo_url: Option<String>,
    /// Present on the detail endpoint only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jobs: Option<Vec<Job>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub salary: Option<u64>,
    /// Decimal fraction as text, e.g. `"0.05"`.
    #[serde(default)]
    pub equity: Option<String>,
    #[serde(default)]
    pub company_handle: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
}

/// Filter for the company list. Absent fields are not sent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanySearch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_like: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_employees: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_employees: Option<u32>,
}

/// Filter for the job list. Absent fields are not sent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSearch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_salary: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_equity: Option<bool>,
}

#[derive(Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl fmt::Debug for RegisterRequest {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("RegisterRequest")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .finish()
    }
}

/// Editable profile fields. The username addresses the user and is never
/// part of the body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(skip_serializing)]
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl From<&UserProfile> for ProfileUpdate {
    fn from(user: &UserProfile) -> Self {
        Self {
            username: user.username.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn user_profile_reads_backend_shape() {
        let user: UserProfile = serde_json::from_value(json!({
            "username": "alice",
            "firstName": "Alice",
            "lastName": "Liddell",
            "email": "alice@example.com",
            "isAdmin": true,
            "applications": [1, 5]
        }))
        .unwrap();
        assert!(user.is_admin);
        assert!(user.has_applied(5));
        assert!(!user.has_applied(2));
    }

    #[test]
    fn user_profile_defaults_optional_fields() {
        let user: UserProfile = serde_json::from_value(json!({
            "username": "alice",
            "firstName": "Alice",
            "lastName": "Liddell",
            "email": "alice@example.com"
        }))
        .unwrap();
        assert!(!user.is_admin);
        assert!(user.applications.is_empty());
    }

    #[test]
    fn profile_update_never_serializes_username() {
        let update = ProfileUpdate {
            username: "alice".to_string(),
            first_name: "Al".to_string(),
            last_name: "B".to_string(),
            email: "a@b.com".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({ "firstName": "Al", "lastName": "B", "email": "a@b.com" })
        );
    }

    #[test]
    fn empty_filters_serialize_to_empty_objects() {
        assert_eq!(
            serde_json::to_value(CompanySearch::default()).unwrap(),
            json!({})
        );
        let search = JobSearch {
            min_salary: Some(50_000),
            ..JobSearch::default()
        };
        assert_eq!(
            serde_json::to_value(search).unwrap(),
            json!({ "minSalary": 50_000 })
        );
    }

    #[test]
    fn credentials_are_redacted_from_debug() {
        let login = LoginRequest {
            username: "alice".to_string(),
            password: "secret".to_string(),
        };
        assert!(!format!("{login:?}").contains("secret"));
        let register = RegisterRequest {
            password: "secret".to_string(),
            ..RegisterRequest::default()
        };
        assert!(!format!("{register:?}").contains("secret"));
    }
}
