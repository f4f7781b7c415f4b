use std::sync::RwLock;
use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::config::ApiSettings;
use crate::models::ApiErrorBody;

/// Errors that can occur when talking to the ESPE Connect backend.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API returned error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Unauthorized: session token missing or expired")]
    Unauthorized,

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Shared HTTP client for the ESPE Connect REST API.
///
/// Handles the concerns every service wrapper needs:
/// - base URL joining
/// - bearer-token auth header (token is opaque; storage is the host's job)
/// - per-request correlation ids and request logging
/// - 401 handling: the stale token is dropped so the host can re-login
pub struct ApiClient {
    base_url: String,
    client: Client,
    token: RwLock<Option<String>>,
}

impl ApiClient {
    /// Create a new API client against `base_url` (e.g. `http://host:3000/api`).
    pub fn new(base_url: impl Into<String>, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.into(),
            client,
            token: RwLock::new(None),
        }
    }

    pub fn from_settings(settings: &ApiSettings) -> Self {
        let client = Self::new(settings.base_url.clone(), settings.timeout_secs.unwrap_or(30));
        if let Some(token) = &settings.token {
            client.set_token(token.clone());
        }
        client
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Install the opaque session token sent as `Authorization: Bearer …`.
    pub fn set_token(&self, token: String) {
        *self.token.write().expect("token lock poisoned") = Some(token);
    }

    /// Drop the session token (logout, or a 401 from the backend).
    pub fn clear_token(&self) {
        *self.token.write().expect("token lock poisoned") = None;
    }

    pub fn has_token(&self) -> bool {
        self.token.read().expect("token lock poisoned").is_some()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let request_id = uuid::Uuid::new_v4();
        tracing::debug!("{} {} [{}]", method, path, request_id);

        let mut builder = self
            .client
            .request(method, self.url(path))
            .header("Content-Type", "application/json")
            .header("X-Request-Id", request_id.to_string());

        if let Some(token) = self.token.read().expect("token lock poisoned").as_deref() {
            builder = builder.bearer_auth(token);
        }

        builder
    }

    async fn check(&self, response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            // Token is stale; drop it so the host re-authenticates.
            self.clear_token();
            return Err(ApiError::Unauthorized);
        }
        if !status.is_success() {
            let body: ApiErrorBody = response.json().await.unwrap_or(ApiErrorBody {
                status: None,
                message: None,
            });
            return Err(ApiError::Api {
                status: status.as_u16(),
                message: body.message.unwrap_or_else(|| status.to_string()),
            });
        }
        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(&self, response: Response) -> Result<T, ApiError> {
        let response = self.check(response).await?;
        response
            .json()
            .await
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.request(Method::GET, path).send().await?;
        self.decode(response).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.request(Method::POST, path).json(body).send().await?;
        self.decode(response).await
    }

    /// POST with an empty JSON body (the like/dislike endpoints take none).
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .request(Method::POST, path)
            .json(&serde_json::json!({}))
            .send()
            .await?;
        self.decode(response).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.request(Method::PUT, path).json(body).send().await?;
        self.decode(response).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.request(Method::DELETE, path).send().await?;
        self.decode(response).await
    }

    /// DELETE for endpoints that acknowledge with an empty or ignorable body.
    pub async fn delete_empty(&self, path: &str) -> Result<(), ApiError> {
        let response = self.request(Method::DELETE, path).send().await?;
        self.check(response).await?;
        Ok(())
    }
}
