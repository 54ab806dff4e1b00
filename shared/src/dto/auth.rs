use serde::{Deserialize, Serialize};

/// Login request. The backend accepts either a username or an email address
/// in `identifier`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub identifier: String,
    pub password: String,
}

/// Registration request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Authentication response (login/registration success):
/// `{ "user": {...}, "access_token": "..." }`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    pub user: UserInfo,
    pub access_token: String,
}

/// User information (public, safe to hold client-side)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub username: String,
}

/// Error body returned by the backend on failures: `{ "message": ... }`.
///
/// NestJS-style backends return either a string or an array of strings in
/// `message`, so the raw value is kept as JSON and flattened on demand.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<serde_json::Value>,
}

impl ErrorBody {
    /// Flatten the `message` field into a single human-readable string.
    pub fn message_text(&self) -> Option<String> {
        match &self.message {
            Some(serde_json::Value::String(s)) if !s.is_empty() => Some(s.clone()),
            Some(serde_json::Value::Array(items)) => {
                let parts: Vec<&str> = items.iter().filter_map(|v| v.as_str()).collect();
                if parts.is_empty() {
                    None
                } else {
                    Some(parts.join(", "))
                }
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_response_wire_format() {
        let json = r#"{
            "user": { "id": "1", "email": "a@b.com", "username": "a" },
            "access_token": "tok1"
        }"#;

        let response: AuthResponse = serde_json::from_str(json).expect("valid auth response");
        assert_eq!(response.user.id, "1");
        assert_eq!(response.user.email, "a@b.com");
        assert_eq!(response.user.username, "a");
        assert_eq!(response.access_token, "tok1");
    }

    #[test]
    fn test_login_request_serializes_identifier() {
        let request = LoginRequest {
            identifier: "a@b.com".to_string(),
            password: "secret".to_string(),
        };

        let json = serde_json::to_value(&request).expect("serializable");
        assert_eq!(json["identifier"], "a@b.com");
        assert_eq!(json["password"], "secret");
    }

    #[test]
    fn test_error_body_message_string() {
        let body: ErrorBody = serde_json::from_str(r#"{"message":"Invalid credentials"}"#)
            .expect("valid error body");
        assert_eq!(body.message_text().as_deref(), Some("Invalid credentials"));
    }

    #[test]
    fn test_error_body_message_array() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"message":["email must be an email","password too short"]}"#)
                .expect("valid error body");
        assert_eq!(
            body.message_text().as_deref(),
            Some("email must be an email, password too short")
        );
    }

    #[test]
    fn test_error_body_missing_message() {
        let body: ErrorBody = serde_json::from_str(r#"{"statusCode":500}"#).expect("valid body");
        assert!(body.message_text().is_none());
    }
}
