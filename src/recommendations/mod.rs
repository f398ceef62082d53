//! 推荐查询

pub mod fetcher;
pub mod model;

pub use fetcher::RecommendationFetcher;
pub use model::Recommendation;
