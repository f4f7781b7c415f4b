// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    AccountProfile, Banner, Candidate, Comment, CommentAuthor, Decision, Pagination, Post,
    PostAuthor, PostKind, Promotion, PromotionCategory, Session,
};
pub use requests::{
    CreateBanner, CreatePost, CreatePromotion, LoginRequest, MatchFilters, NewComment,
    PromotionQuery, RegisterRequest, UpdateBanner, UpdatePost, UpdateProfile, UpdatePromotion,
};
pub use responses::{
    ApiErrorBody, CommentData, CommentsData, Envelope, LikeAck, MatchCheckData, MatchesData,
    PostsData, ProfileData, PromotionData, PromotionsData, RegisterResponse, SessionData,
};
