use serde::{Deserialize, Serialize};

/// A user record as the directory reports it. Remote-owned; the client only
/// displays it and never persists it.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct User {
    /// Record id.
    pub id: i64,
    /// Login name.
    pub username: String,
    /// Display name.
    pub name: String,
    /// Age in years.
    pub age: i64,
    /// Contact email.
    pub email: String,
    /// Whether the account has the admin role.
    pub is_admin: bool,
}

/// Partial update of the calling user's profile.
///
/// Fields left unset are omitted from the request body entirely; a blank
/// form field must never reach the server as an empty-string overwrite.
#[derive(Serialize, Debug, Default)]
pub struct UpdateUserRequest {
    /// New display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New age in years.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i64>,
    /// New contact email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Server response listing the whole directory.
#[derive(Deserialize, Debug)]
pub struct UserListResponse {
    /// Whether the listing succeeded.
    #[serde(default)]
    pub success: bool,
    /// Human-readable failure reason.
    pub message: Option<String>,
    /// The directory records.
    pub users: Vec<User>,
}

/// Server response carrying a single record.
#[derive(Deserialize, Debug)]
pub struct UserResponse {
    /// Whether the lookup succeeded.
    #[serde(default)]
    pub success: bool,
    /// Human-readable failure reason.
    pub message: Option<String>,
    /// The requested record.
    pub user: Option<User>,
}

/// Server response to a deletion.
#[derive(Deserialize, Debug)]
pub struct RemoveUserResponse {
    /// Whether the record was removed.
    #[serde(default)]
    pub success: bool,
    /// Human-readable failure reason.
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_request_omits_unset_fields() {
        let request = UpdateUserRequest {
            name: None,
            age: Some(30),
            email: None,
        };

        let body = serde_json::to_string(&request).expect("serialization should succeed");
        assert_eq!(body, r#"{"age":30}"#);
    }

    #[test]
    fn test_update_request_with_all_fields() {
        let request = UpdateUserRequest {
            name: Some("Jane Doe".into()),
            age: Some(34),
            email: Some("jdoe@example.com".into()),
        };

        let body: serde_json::Value =
            serde_json::to_value(&request).expect("serialization should succeed");
        assert_eq!(
            body,
            serde_json::json!({
                "name": "Jane Doe",
                "age": 34,
                "email": "jdoe@example.com",
            })
        );
    }

    #[test]
    fn test_user_tolerates_unknown_response_fields() {
        let user: User = serde_json::from_value(serde_json::json!({
            "id": 5,
            "username": "jdoe",
            "name": "Jane Doe",
            "age": 34,
            "email": "jdoe@example.com",
            "is_admin": false,
            "created_at": "2024-01-01T00:00:00Z",
            "is_enable_otp": true,
        }))
        .expect("deserialization should succeed");

        assert_eq!(user.id, 5);
        assert!(!user.is_admin);
    }
}
