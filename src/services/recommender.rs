use rand::Rng;

use crate::models::{CandidateItem, ClothesType, RecommendationContext};

use super::selector::{self, CategorySelection};

/// A complete outfit assembled from the wardrobe snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationResult {
    /// One item per category that had candidates, in fixed category order
    pub items: Vec<CandidateItem>,
    /// True when any category had to fall back to a random pick
    pub used_fallback: bool,
}

/// Assembles one outfit from the wardrobe
///
/// Categories are visited in [`ClothesType::ALL`] order regardless of how
/// the wardrobe is ordered, and categories without candidates are simply
/// omitted. Pure function of its inputs: every weather- and time-derived
/// value arrives pre-resolved in the context, and the only non-determinism
/// is the injected `rng` used for fallback draws.
pub fn recommend<R: Rng + ?Sized>(
    wardrobe: &[CandidateItem],
    context: &RecommendationContext,
    rng: &mut R,
) -> RecommendationResult {
    let mut items = Vec::new();
    let mut used_fallback = false;

    for category in ClothesType::ALL {
        if let Some(CategorySelection {
            item,
            used_fallback: fell_back,
        }) = selector::select(category, wardrobe, context, rng)
        {
            used_fallback |= fell_back;
            items.push(item);
        }
    }

    tracing::debug!(
        wardrobe_size = wardrobe.len(),
        selected = items.len(),
        used_fallback,
        "Outfit assembled"
    );

    RecommendationResult {
        items,
        used_fallback,
    }
}
