//! The shared fetch wrapper every endpoint goes through.
//!
//! [`ApiClient`] attaches the JSON content type and, when present, the bearer
//! token, performs exactly one attempt per call, and normalizes failures into
//! [`ApiError`]. Cloning is cheap — `reqwest::Client` is reference-counted —
//! so a fresh client is constructed per call site with whatever token the
//! session currently holds.

use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::models::Envelope;

#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            http: reqwest::Client::new(),
        }
    }

    /// Attach (or clear) the bearer token used for authenticated calls.
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    /// One request, one attempt. Returns the status and raw body on any
    /// success-ish status (2xx or 304); everything else becomes
    /// [`ApiError::Status`] with a best-effort message.
    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<(StatusCode, String), ApiError> {
        let mut request = self
            .http
            .request(method, self.url(path))
            .header("Content-Type", "application/json");
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() && status != StatusCode::NOT_MODIFIED {
            tracing::warn!(%status, path, "api request failed");
            return Err(ApiError::status(status, &text));
        }
        Ok((status, text))
    }

    fn decode<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
        if text.trim().is_empty() {
            return Err(ApiError::EmptyBody);
        }
        Ok(serde_json::from_str(text)?)
    }

    /// GET returning the raw response type (no envelope assumed).
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let (_, text) = self.execute(Method::GET, path, None).await?;
        Self::decode(&text)
    }

    /// POST returning the raw response type (no envelope assumed).
    pub async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, ApiError> {
        let body = serde_json::to_value(body)?;
        let (_, text) = self.execute(Method::POST, path, Some(body)).await?;
        Self::decode(&text)
    }

    /// PUT returning the raw response type (no envelope assumed).
    pub async fn put_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, ApiError> {
        let body = serde_json::to_value(body)?;
        let (_, text) = self.execute(Method::PUT, path, Some(body)).await?;
        Self::decode(&text)
    }

    /// GET unwrapping the standard envelope.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        Ok(self.get_json::<Envelope<T>>(path).await?.data)
    }

    /// GET returning the whole envelope (for list calls that need `count`).
    pub async fn get_enveloped<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Envelope<T>, ApiError> {
        self.get_json(path).await
    }

    /// POST unwrapping the standard envelope.
    pub async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, ApiError> {
        Ok(self.post_json::<Envelope<T>>(path, body).await?.data)
    }

    /// PUT unwrapping the standard envelope.
    pub async fn put<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, ApiError> {
        Ok(self.put_json::<Envelope<T>>(path, body).await?.data)
    }

    /// DELETE, ignoring whatever body the server sends back.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.execute(Method::DELETE, path, None).await?;
        Ok(())
    }
}

/// Join a base URL and a path without doubling slashes.
fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{base}/{path}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Technology;

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("http://localhost:5000/api/v1", "/products"),
            "http://localhost:5000/api/v1/products"
        );
        assert_eq!(
            join_url("http://localhost:5000/api/v1/", "products?page=1&limit=10"),
            "http://localhost:5000/api/v1/products?page=1&limit=10"
        );
    }

    #[test]
    fn test_decode_empty_body() {
        let result = ApiClient::decode::<Envelope<Vec<Technology>>>("  ");
        assert!(matches!(result, Err(ApiError::EmptyBody)));
    }

    #[test]
    fn test_decode_envelope() {
        let env: Envelope<Vec<Technology>> = ApiClient::decode(
            r#"{"success":true,"data":[{"_id":"t1","name":"Rust"}],"count":1}"#,
        )
        .unwrap();
        assert_eq!(env.data[0].name, "Rust");
        assert_eq!(env.count, Some(1));
    }

    #[test]
    fn test_decode_garbage_is_decode_error() {
        let result = ApiClient::decode::<Envelope<Vec<Technology>>>("<html></html>");
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_client_token_plumbing() {
        let client = ApiClient::new("http://localhost:5000/api/v1");
        assert!(client.token().is_none());

        let client = client.with_token(Some("abc".to_string()));
        assert_eq!(client.token(), Some("abc"));

        let client = client.with_token(None);
        assert!(client.token().is_none());
    }
}
