use std::sync::Arc;

use validator::Validate;

use crate::models::{
    Banner, CreateBanner, CreatePromotion, Envelope, Pagination, Promotion, PromotionCategory,
    PromotionData, PromotionQuery, PromotionsData, UpdateBanner, UpdatePromotion,
};
use crate::services::api::{ApiClient, ApiError};

/// A page of promotions; pagination is present only when the backend
/// paginates the listing.
#[derive(Debug, Clone)]
pub struct PromotionPage {
    pub promotions: Vec<Promotion>,
    pub pagination: Option<Pagination>,
}

/// Typed client for the campus promotions endpoints.
#[derive(Clone)]
pub struct PromotionClient {
    api: Arc<ApiClient>,
}

impl PromotionClient {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn list(&self, query: &PromotionQuery) -> Result<PromotionPage, ApiError> {
        let envelope: Envelope<PromotionsData> = self
            .api
            .get(&format!("/promotions{}", query.to_query_string()))
            .await?;
        Ok(PromotionPage {
            promotions: envelope.data.promotions,
            pagination: envelope.data.pagination,
        })
    }

    pub async fn get(&self, id: &str) -> Result<Promotion, ApiError> {
        let envelope: Envelope<PromotionData> =
            self.api.get(&format!("/promotions/{}", id)).await?;
        Ok(envelope.data.promotion)
    }

    pub async fn by_category(
        &self,
        category: PromotionCategory,
        page: Option<u32>,
        limit: Option<u32>,
    ) -> Result<PromotionPage, ApiError> {
        let query = PromotionQuery {
            category: None,
            is_active: None,
            page,
            limit,
        };
        let envelope: Envelope<PromotionsData> = self
            .api
            .get(&format!(
                "/promotions/category/{}{}",
                category.as_str(),
                query.to_query_string()
            ))
            .await?;
        Ok(PromotionPage {
            promotions: envelope.data.promotions,
            pagination: envelope.data.pagination,
        })
    }

    pub async fn create(&self, payload: &CreatePromotion) -> Result<Promotion, ApiError> {
        payload
            .validate()
            .map_err(|e| ApiError::Validation(e.to_string()))?;
        let envelope: Envelope<PromotionData> = self.api.post("/promotions", payload).await?;
        Ok(envelope.data.promotion)
    }

    pub async fn update(&self, id: &str, payload: &UpdatePromotion) -> Result<Promotion, ApiError> {
        payload
            .validate()
            .map_err(|e| ApiError::Validation(e.to_string()))?;
        let envelope: Envelope<PromotionData> =
            self.api.put(&format!("/promotions/{}", id), payload).await?;
        Ok(envelope.data.promotion)
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.api.delete_empty(&format!("/promotions/{}", id)).await
    }
}

/// Typed client for the home-screen banner endpoints.
///
/// Banners are served as a bare array, no `{ status, data }` envelope.
#[derive(Clone)]
pub struct BannerClient {
    api: Arc<ApiClient>,
}

impl BannerClient {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn all(&self) -> Result<Vec<Banner>, ApiError> {
        self.api.get("/banners").await
    }

    pub async fn create(&self, payload: &CreateBanner) -> Result<Banner, ApiError> {
        payload
            .validate()
            .map_err(|e| ApiError::Validation(e.to_string()))?;
        self.api.post("/banners", payload).await
    }

    pub async fn update(&self, id: &str, payload: &UpdateBanner) -> Result<Banner, ApiError> {
        payload
            .validate()
            .map_err(|e| ApiError::Validation(e.to_string()))?;
        self.api.put(&format!("/banners/{}", id), payload).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.api.delete_empty(&format!("/banners/{}", id)).await
    }
}
