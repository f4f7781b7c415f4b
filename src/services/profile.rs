use std::sync::Arc;

use validator::Validate;

use crate::models::{AccountProfile, Envelope, ProfileData, UpdateProfile};
use crate::services::api::{ApiClient, ApiError};

/// Typed client for the caller's own profile.
#[derive(Clone)]
pub struct ProfileClient {
    api: Arc<ApiClient>,
}

impl ProfileClient {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn get(&self) -> Result<AccountProfile, ApiError> {
        let envelope: Envelope<ProfileData> = self.api.get("/users/profile").await?;
        Ok(envelope.data.user)
    }

    pub async fn update(&self, payload: &UpdateProfile) -> Result<AccountProfile, ApiError> {
        payload
            .validate()
            .map_err(|e| ApiError::Validation(e.to_string()))?;

        let envelope: Envelope<ProfileData> = self.api.put("/users/profile", payload).await?;
        Ok(envelope.data.user)
    }
}
