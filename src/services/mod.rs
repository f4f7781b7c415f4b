// Service exports
pub mod api;
pub mod auth;
pub mod matches;
pub mod posts;
pub mod profile;
pub mod promotions;

pub use api::{ApiClient, ApiError};
pub use auth::AuthClient;
pub use matches::{MatchClient, MatchGateway};
pub use posts::{CommentPage, PostClient};
pub use profile::ProfileClient;
pub use promotions::{BannerClient, PromotionClient, PromotionPage};
