use crate::models::{Credentials, LoginResponse};

/// Error type for authentication operations
#[derive(Debug)]
pub enum AuthError {
    NetworkError(String),
    JsonError(String),
    InvalidCredentials,
    ServerError(String),
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            AuthError::JsonError(msg) => write!(f, "JSON error: {}", msg),
            AuthError::InvalidCredentials => write!(f, "Invalid email or password"),
            AuthError::ServerError(msg) => write!(f, "Server error: {}", msg),
        }
    }
}

impl std::error::Error for AuthError {}

/// Bearer-token authentication service
///
/// Posts credentials to the backend's login endpoint and returns the
/// issued token together with the user profile. Storing the session is
/// the application's responsibility (see [`crate::storage`]).
pub struct AuthService {
    base_url: String,
}

impl AuthService {
    /// Create a new authentication service against an API base URL
    pub fn new(base_url: String) -> Self {
        Self { base_url }
    }

    fn login_url(&self) -> String {
        format!("{}/auth/login", self.base_url.trim_end_matches('/'))
    }

    /// Exchange credentials for a bearer token and user profile.
    ///
    /// The login endpoint is public: no Authorization header is sent.
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, AuthError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .connect_timeout(std::time::Duration::from_secs(10))
            .user_agent("ShelterAuth/0.1.0")
            .build()
            .map_err(|e| AuthError::NetworkError(format!("Client build failed: {}", e)))?;

        let response = client
            .post(self.login_url())
            .json(credentials)
            .send()
            .await
            .map_err(|e| AuthError::NetworkError(format!("Request failed: {}", e)))?;

        match response.status().as_u16() {
            200 => response
                .json::<LoginResponse>()
                .await
                .map_err(|e| AuthError::JsonError(format!("Failed to parse response: {}", e))),
            401 | 403 => Err(AuthError::InvalidCredentials),
            status => Err(AuthError::ServerError(format!(
                "Unexpected status code: {}",
                status
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_url_strips_trailing_slash() {
        let service = AuthService::new("https://api.example.org/".to_string());
        assert_eq!(service.login_url(), "https://api.example.org/auth/login");

        let service = AuthService::new("https://api.example.org".to_string());
        assert_eq!(service.login_url(), "https://api.example.org/auth/login");
    }
}
