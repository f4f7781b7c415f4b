use std::sync::Arc;

use validator::Validate;

use crate::models::{
    Comment, CommentData, CommentsData, CreatePost, Envelope, NewComment, Pagination, Post,
    PostKind, PostsData, UpdatePost,
};
use crate::services::api::{ApiClient, ApiError};

/// A page of comments plus its pagination metadata.
#[derive(Debug, Clone)]
pub struct CommentPage {
    pub comments: Vec<Comment>,
    pub pagination: Pagination,
}

/// Typed client for the social feed endpoints (posts and their comments).
#[derive(Clone)]
pub struct PostClient {
    api: Arc<ApiClient>,
}

impl PostClient {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// List posts of one kind (the feed is segmented by tab).
    pub async fn list(&self, kind: PostKind) -> Result<Vec<Post>, ApiError> {
        let envelope: Envelope<PostsData> =
            self.api.get(&format!("/posts?type={}", kind.as_str())).await?;
        Ok(envelope.data.posts)
    }

    /// Fetch a single post; the detail endpoint returns the bare entity.
    pub async fn get(&self, id: &str) -> Result<Post, ApiError> {
        self.api.get(&format!("/posts/{}", id)).await
    }

    pub async fn create(&self, payload: &CreatePost) -> Result<Post, ApiError> {
        payload
            .validate()
            .map_err(|e| ApiError::Validation(e.to_string()))?;
        self.api.post("/posts", payload).await
    }

    pub async fn update(&self, id: &str, payload: &UpdatePost) -> Result<Post, ApiError> {
        payload
            .validate()
            .map_err(|e| ApiError::Validation(e.to_string()))?;
        self.api.put(&format!("/posts/{}", id), payload).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.api.delete_empty(&format!("/posts/{}", id)).await
    }

    pub async fn like(&self, id: &str) -> Result<Post, ApiError> {
        self.api.post_empty(&format!("/posts/{}/like", id)).await
    }

    pub async fn unlike(&self, id: &str) -> Result<Post, ApiError> {
        self.api.delete(&format!("/posts/{}/like", id)).await
    }

    /// Paginated comments for a post.
    pub async fn comments(
        &self,
        post_id: &str,
        page: u32,
        limit: u32,
    ) -> Result<CommentPage, ApiError> {
        let envelope: Envelope<CommentsData> = self
            .api
            .get(&format!("/posts/{}/comments?page={}&limit={}", post_id, page, limit))
            .await?;
        Ok(CommentPage {
            comments: envelope.data.comments,
            pagination: envelope.data.pagination,
        })
    }

    pub async fn add_comment(&self, post_id: &str, content: &str) -> Result<Comment, ApiError> {
        let payload = NewComment {
            content: content.to_string(),
        };
        payload
            .validate()
            .map_err(|e| ApiError::Validation(e.to_string()))?;

        let envelope: Envelope<CommentData> = self
            .api
            .post(&format!("/posts/{}/comments", post_id), &payload)
            .await?;
        Ok(envelope.data.comment)
    }
}
