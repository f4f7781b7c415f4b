use serde::{Deserialize, Serialize};

/// A profile eligible for a like/reject decision on the swipe deck.
///
/// Immutable once fetched; sourced from the matching endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    pub name: String,
    pub career: String,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(rename = "avatarUrl", default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub interests: Vec<String>,
}

/// Outcome of a swipe gesture or a manual like/skip press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Accept,
    Reject,
}

/// Feed post categories exposed by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PostKind {
    Confession,
    Marketplace,
    LostAndFound,
}

impl PostKind {
    /// Wire value used in query strings (`?type=CONFESSION`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Confession => "CONFESSION",
            Self::Marketplace => "MARKETPLACE",
            Self::LostAndFound => "LOST_AND_FOUND",
        }
    }
}

/// Condensed author info embedded in posts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostAuthor {
    pub id: String,
    pub name: String,
    pub username: String,
}

/// A social feed post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    pub content: String,
    #[serde(rename = "authorId")]
    pub author_id: String,
    #[serde(rename = "imageUrl", default)]
    pub image_url: Option<String>,
    #[serde(rename = "type")]
    pub kind: PostKind,
    pub author: PostAuthor,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
    #[serde(default)]
    pub likes: u32,
    #[serde(default)]
    pub comments: u32,
}

/// Condensed author info embedded in comments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentAuthor {
    pub id: String,
    pub name: String,
    #[serde(rename = "avatarUrl", default)]
    pub avatar_url: Option<String>,
}

/// A comment on a feed post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub content: String,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub author: CommentAuthor,
}

/// Promotion categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PromotionCategory {
    Food,
    Drinks,
    Events,
    Parties,
    Other,
}

impl PromotionCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "FOOD",
            Self::Drinks => "DRINKS",
            Self::Events => "EVENTS",
            Self::Parties => "PARTIES",
            Self::Other => "OTHER",
        }
    }
}

/// A campus promotion (discount, event, party announcement).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Promotion {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "imageUrl", default)]
    pub image_url: Option<String>,
    #[serde(rename = "startDate")]
    pub start_date: chrono::DateTime<chrono::Utc>,
    #[serde(rename = "endDate")]
    pub end_date: chrono::DateTime<chrono::Utc>,
    pub location: String,
    pub category: PromotionCategory,
    #[serde(rename = "isActive")]
    pub is_active: bool,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// A promotional banner shown on the home screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Banner {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    #[serde(rename = "isActive")]
    pub is_active: bool,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// The authenticated user's own profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub career: String,
    pub gender: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(rename = "avatarUrl", default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub interests: Vec<String>,
}

/// Pagination metadata returned by list endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: u32,
    pub pages: u32,
}

/// An authenticated session: the opaque bearer token plus the signed-in user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: AccountProfile,
}
