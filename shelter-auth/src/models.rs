use serde::{Deserialize, Serialize};

/// Login request body sent to the backend
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Profile of the signed-in shelter worker
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Option<String>,
}

/// Response from a successful login
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserProfile,
}

/// State of the current session
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// No token held
    Anonymous,
    /// Token and profile held in memory and in storage
    Authenticated { token: String, user: UserProfile },
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated { .. })
    }

    pub fn token(&self) -> Option<&str> {
        match self {
            SessionState::Authenticated { token, .. } => Some(token),
            SessionState::Anonymous => None,
        }
    }

    pub fn user(&self) -> Option<&UserProfile> {
        match self {
            SessionState::Authenticated { user, .. } => Some(user),
            SessionState::Anonymous => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> UserProfile {
        UserProfile {
            id: 1,
            name: "Ana".to_string(),
            email: "ana@example.org".to_string(),
            role: None,
        }
    }

    #[test]
    fn test_anonymous_has_no_token() {
        let state = SessionState::Anonymous;
        assert!(!state.is_authenticated());
        assert_eq!(state.token(), None);
        assert!(state.user().is_none());
    }

    #[test]
    fn test_authenticated_exposes_token_and_user() {
        let state = SessionState::Authenticated {
            token: "abc".to_string(),
            user: profile(),
        };
        assert!(state.is_authenticated());
        assert_eq!(state.token(), Some("abc"));
        assert_eq!(state.user().map(|u| u.name.as_str()), Some("Ana"));
    }

    #[test]
    fn test_login_response_deserialization() {
        let json = r#"{"token":"t-123","user":{"id":7,"name":"Ana","email":"ana@example.org"}}"#;
        let response: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.token, "t-123");
        assert_eq!(response.user.id, 7);
        assert_eq!(response.user.role, None);
    }
}
