use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{PostKind, PromotionCategory};

/// Filter criteria for the potential-matches query.
///
/// All fields optional; empty filters fetch the default candidate batch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchFilters {
    #[serde(default)]
    pub interest: Option<String>,
    #[serde(default)]
    pub faculty: Option<String>,
    #[serde(default)]
    pub search: Option<String>,
}

impl MatchFilters {
    /// Render the filters as a URL query string (leading `?` included),
    /// or an empty string when no filter is set.
    pub fn to_query_string(&self) -> String {
        let mut params = Vec::new();
        if let Some(interest) = &self.interest {
            params.push(format!("interest={}", urlencoding::encode(interest)));
        }
        if let Some(faculty) = &self.faculty {
            params.push(format!("faculty={}", urlencoding::encode(faculty)));
        }
        if let Some(search) = &self.search {
            params.push(format!("search={}", urlencoding::encode(search)));
        }
        if params.is_empty() {
            String::new()
        } else {
            format!("?{}", params.join("&"))
        }
    }
}

/// Payload to create a feed post.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePost {
    #[validate(length(min = 1, max = 120))]
    pub title: String,
    #[validate(length(min = 1, max = 5000))]
    pub content: String,
    #[serde(rename = "type")]
    pub kind: PostKind,
    #[serde(rename = "imageUrl", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Partial update for an existing post.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdatePost {
    #[validate(length(min = 1, max = 120))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[validate(length(min = 1, max = 5000))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// Payload to add a comment to a post.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewComment {
    #[validate(length(min = 1, max = 1000))]
    pub content: String,
}

/// Query parameters for the promotions list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PromotionQuery {
    #[serde(default)]
    pub category: Option<PromotionCategory>,
    #[serde(rename = "isActive", default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub limit: Option<u32>,
}

impl PromotionQuery {
    pub fn to_query_string(&self) -> String {
        let mut params = Vec::new();
        if let Some(category) = self.category {
            params.push(format!("category={}", category.as_str()));
        }
        if let Some(is_active) = self.is_active {
            params.push(format!("isActive={}", is_active));
        }
        if let Some(page) = self.page {
            params.push(format!("page={}", page));
        }
        if let Some(limit) = self.limit {
            params.push(format!("limit={}", limit));
        }
        if params.is_empty() {
            String::new()
        } else {
            format!("?{}", params.join("&"))
        }
    }
}

/// Payload to create a promotion.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePromotion {
    #[validate(length(min = 1, max = 120))]
    pub title: String,
    #[validate(length(min = 1, max = 2000))]
    pub description: String,
    #[serde(rename = "imageUrl", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(rename = "startDate")]
    pub start_date: chrono::DateTime<chrono::Utc>,
    #[serde(rename = "endDate")]
    pub end_date: chrono::DateTime<chrono::Utc>,
    #[validate(length(min = 1, max = 200))]
    pub location: String,
    pub category: PromotionCategory,
    #[serde(rename = "isActive", skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Partial update for an existing promotion.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdatePromotion {
    #[validate(length(min = 1, max = 120))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[validate(length(min = 1, max = 2000))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "imageUrl", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(rename = "startDate", skip_serializing_if = "Option::is_none")]
    pub start_date: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(rename = "endDate", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<PromotionCategory>,
    #[serde(rename = "isActive", skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Payload to create a banner (id and timestamp are server-assigned).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateBanner {
    #[validate(length(min = 1, max = 120))]
    pub title: String,
    #[validate(length(min = 1, max = 2000))]
    pub description: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    #[serde(rename = "isActive")]
    pub is_active: bool,
}

/// Partial update for an existing banner.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateBanner {
    #[validate(length(min = 1, max = 120))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[validate(length(min = 1, max = 2000))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "imageUrl", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(rename = "isActive", skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Credentials for login.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8))]
    pub password: String,
}

/// Payload to register a new account.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8))]
    pub password: String,
    #[validate(length(min = 1, max = 80))]
    pub name: String,
    #[validate(length(min = 1, max = 120))]
    pub career: String,
    pub gender: String,
    pub interests: Vec<String>,
}

/// Partial update for the caller's own profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateProfile {
    #[validate(length(min = 1, max = 80))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 120))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub career: Option<String>,
    #[validate(length(max = 500))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interests: Option<Vec<String>>,
}
