use std::sync::Arc;

use validator::Validate;

use crate::models::{
    Envelope, LoginRequest, RegisterRequest, RegisterResponse, Session, SessionData,
};
use crate::services::api::{ApiClient, ApiError};

/// Typed client for the authentication endpoints.
///
/// A successful login or register installs the session token into the
/// shared [`ApiClient`], so every other service wrapper picks it up.
/// Nothing is persisted — durable token storage belongs to the host.
#[derive(Clone)]
pub struct AuthClient {
    api: Arc<ApiClient>,
}

impl AuthClient {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn login(&self, credentials: &LoginRequest) -> Result<Session, ApiError> {
        credentials
            .validate()
            .map_err(|e| ApiError::Validation(e.to_string()))?;

        let envelope: Envelope<SessionData> = self.api.post("/auth/login", credentials).await?;
        self.api.set_token(envelope.data.token.clone());
        tracing::info!("logged in as {}", envelope.data.user.email);

        Ok(Session {
            token: envelope.data.token,
            user: envelope.data.user,
        })
    }

    /// Register responds with the session fields at the top level rather
    /// than under `data`.
    pub async fn register(&self, payload: &RegisterRequest) -> Result<Session, ApiError> {
        payload
            .validate()
            .map_err(|e| ApiError::Validation(e.to_string()))?;

        let response: RegisterResponse = self.api.post("/auth/register", payload).await?;
        self.api.set_token(response.token.clone());
        tracing::info!("registered account {}", response.user.email);

        Ok(Session {
            token: response.token,
            user: response.user,
        })
    }

    /// Drop the in-memory session token. Purely local.
    pub fn logout(&self) {
        self.api.clear_token();
    }

    pub fn is_authenticated(&self) -> bool {
        self.api.has_token()
    }
}
