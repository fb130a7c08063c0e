pub mod recommender;
pub mod scoring;
pub mod selector;

pub use recommender::{recommend, RecommendationResult};
pub use selector::{select, CategorySelection};
