use crate::config;
use crate::error::AppError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::RwLock;
use std::time::Duration;

/// Bearer token of the current session, shared by every client instance.
///
/// Written by the session module on login/logout; read when a client is
/// built. Requests issued before login simply carry no Authorization
/// header.
static TOKEN: RwLock<Option<String>> = RwLock::new(None);

pub fn set_token(token: Option<String>) {
    if let Ok(mut slot) = TOKEN.write() {
        *slot = token;
    }
}

fn current_token() -> Option<String> {
    TOKEN.read().ok().and_then(|slot| slot.clone())
}

/// Error body shape returned by the backend on failures
#[derive(Debug, serde::Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
}

/// HTTP client for the shelter REST backend.
///
/// One instance per load cycle: built from the loaded configuration and
/// a snapshot of the session token, then shared across the requests the
/// cycle fans out.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

/// Builds a client from the loaded configuration and the stored session token.
pub fn connect() -> Result<ApiClient, AppError> {
    ApiClient::new(&config::get().api_base_url, current_token())
}

impl ApiClient {
    pub fn new(base_url: &str, token: Option<String>) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("Gatil/0.1.0")
            .build()
            .map_err(|e| AppError::Network(format!("Client build failed: {}", e)))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let mut builder = self.http.request(method, self.url(path));
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<T, AppError> {
        let response = self
            .request(reqwest::Method::GET, path)
            .query(query)
            .send()
            .await?;
        decode(response).await
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        let response = self
            .request(reqwest::Method::POST, path)
            .json(body)
            .send()
            .await?;
        decode(response).await
    }

    pub async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        let response = self
            .request(reqwest::Method::PUT, path)
            .json(body)
            .send()
            .await?;
        decode(response).await
    }

    /// DELETE with no response body expected.
    pub async fn delete(&self, path: &str) -> Result<(), AppError> {
        let response = self.request(reqwest::Method::DELETE, path).send().await?;
        check_status(response).await.map(|_| ())
    }

    /// Multipart POST returning the raw response text (the upload
    /// endpoint answers with a bare URL string).
    pub async fn post_multipart_text(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<String, AppError> {
        let response = self
            .request(reqwest::Method::POST, path)
            .multipart(form)
            .send()
            .await?;
        let response = check_status(response).await?;
        let text = response.text().await?;
        Ok(text.trim().trim_matches('"').to_string())
    }
}

/// Maps a non-success status to `AppError::Api`, keeping the backend's
/// message field when its error body parses.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, AppError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response
        .json::<ApiErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message);
    Err(AppError::Api {
        status: status.as_u16(),
        message,
    })
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, AppError> {
    let response = check_status(response).await?;
    response
        .json::<T>()
        .await
        .map_err(|e| AppError::Json(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_base_and_path() {
        let client = ApiClient::new("https://api.example.org/", None).unwrap();
        assert_eq!(client.url("/cats"), "https://api.example.org/cats");

        let client = ApiClient::new("https://api.example.org", None).unwrap();
        assert_eq!(client.url("/cats/7"), "https://api.example.org/cats/7");
    }

    #[test]
    fn test_error_body_message_parses() {
        let body: ApiErrorBody =
            serde_json::from_str(r#"{"message":"Cat not found","timestamp":"2024-01-01"}"#)
                .unwrap();
        assert_eq!(body.message.as_deref(), Some("Cat not found"));

        let body: ApiErrorBody = serde_json::from_str(r#"{"error":"oops"}"#).unwrap();
        assert!(body.message.is_none());
    }
}
