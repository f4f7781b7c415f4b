use std::sync::Arc;

use crate::models::{Candidate, Envelope, LikeAck, MatchCheckData, MatchFilters, MatchesData};
use crate::services::api::{ApiClient, ApiError};

/// The candidate fetch gateway the swipe deck controller depends on.
///
/// The controller treats this purely as an asynchronous function boundary;
/// [`MatchClient`] is the HTTP implementation, and tests substitute an
/// in-memory one.
#[allow(async_fn_in_trait)]
pub trait MatchGateway {
    /// Fetch a batch of potential matches, optionally filtered.
    async fn fetch_candidates(&self, filters: &MatchFilters) -> Result<Vec<Candidate>, ApiError>;

    /// Register a like. The acknowledgement may already carry the
    /// mutual-match status.
    async fn like(&self, candidate_id: &str) -> Result<LikeAck, ApiError>;

    /// Register a pass on a candidate.
    async fn dislike(&self, candidate_id: &str) -> Result<(), ApiError>;

    /// Query mutual-match status for a previously liked candidate.
    async fn check_match(&self, candidate_id: &str) -> Result<bool, ApiError>;
}

/// HTTP implementation of [`MatchGateway`] over the ESPE Connect matching
/// endpoints.
#[derive(Clone)]
pub struct MatchClient {
    api: Arc<ApiClient>,
}

impl MatchClient {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

impl MatchGateway for MatchClient {
    async fn fetch_candidates(&self, filters: &MatchFilters) -> Result<Vec<Candidate>, ApiError> {
        let path = format!("/users/potential-matches{}", filters.to_query_string());
        let envelope: Envelope<MatchesData> = self.api.get(&path).await?;
        tracing::debug!("fetched {} potential matches", envelope.data.users.len());
        Ok(envelope.data.users)
    }

    async fn like(&self, candidate_id: &str) -> Result<LikeAck, ApiError> {
        self.api
            .post_empty(&format!("/matches/like/{}", candidate_id))
            .await
    }

    async fn dislike(&self, candidate_id: &str) -> Result<(), ApiError> {
        self.api
            .delete_empty(&format!("/matches/dislike/{}", candidate_id))
            .await
    }

    async fn check_match(&self, candidate_id: &str) -> Result<bool, ApiError> {
        let envelope: Envelope<MatchCheckData> = self
            .api
            .get(&format!("/matches/check/{}", candidate_id))
            .await?;
        Ok(envelope.data.is_match)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_potential_matches_path_with_filters() {
        let filters = MatchFilters {
            interest: Some("chess".to_string()),
            faculty: Some("FICA".to_string()),
            search: None,
        };

        assert_eq!(
            format!("/users/potential-matches{}", filters.to_query_string()),
            "/users/potential-matches?interest=chess&faculty=FICA"
        );
    }

    #[test]
    fn test_potential_matches_path_without_filters() {
        let filters = MatchFilters::default();
        assert_eq!(
            format!("/users/potential-matches{}", filters.to_query_string()),
            "/users/potential-matches"
        );
    }
}
