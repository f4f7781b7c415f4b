use serde::{Deserialize, Serialize};

use crate::models::domain::{AccountProfile, Candidate, Comment, Pagination, Post, Promotion};

/// Generic `{ status, data }` envelope used by most ESPE Connect endpoints.
///
/// Some endpoints (the posts list, register) omit `status`, so it is
/// tolerated as absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub status: Option<String>,
    pub data: T,
}

/// Candidate batch from `GET /users/potential-matches`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchesData {
    pub users: Vec<Candidate>,
}

/// Mutual-match status from `GET /matches/check/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchCheckData {
    #[serde(rename = "isMatch")]
    pub is_match: bool,
}

/// Acknowledgement from `POST /matches/like/{id}`.
///
/// `is_match` is only present on backends that resolve mutual-match status
/// inline; absence means the caller must query `/matches/check/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LikeAck {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(rename = "isMatch", default)]
    pub is_match: Option<bool>,
}

/// Posts list from `GET /posts`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostsData {
    pub posts: Vec<Post>,
}

/// Single comment wrapper from `POST /posts/{id}/comments`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentData {
    pub comment: Comment,
}

/// Paginated comments from `GET /posts/{id}/comments`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentsData {
    pub comments: Vec<Comment>,
    pub pagination: Pagination,
}

/// Promotions list, with pagination when the backend provides it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromotionsData {
    pub promotions: Vec<Promotion>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

/// Single promotion wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromotionData {
    pub promotion: Promotion,
}

/// Login payload: token plus signed-in user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionData {
    pub token: String,
    pub user: AccountProfile,
}

/// Register responds with the session fields at the top level,
/// not nested under `data`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub token: String,
    pub user: AccountProfile,
}

/// Own-profile wrapper from `GET /users/profile`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileData {
    pub user: AccountProfile,
}

/// Error body returned by the backend on non-2xx responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}
