mod attribute;
mod context;
mod item;

pub use attribute::{AttributeDefinition, ItemAttributeValue};
pub use context::{RecommendationContext, Season};
pub use item::{CandidateItem, ClothesType};
