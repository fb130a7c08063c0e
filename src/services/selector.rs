use rand::Rng;

use crate::models::{CandidateItem, ClothesType, RecommendationContext};

use super::scoring::{self, ACCEPTANCE_THRESHOLD};

/// Outcome of selecting one clothing category
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySelection {
    /// The chosen item, always from the requested category
    pub item: CandidateItem,
    /// True when no candidate reached the acceptance threshold and the
    /// pick was drawn at random instead
    pub used_fallback: bool,
}

/// Picks the best candidate for one category
///
/// Every candidate in the category is scored and the maximum wins; ties on
/// the maximum break on the lowest item id, so the pick is reproducible for
/// identical input. When the best score is below [`ACCEPTANCE_THRESHOLD`]
/// the selector draws uniformly over all candidates in the category via the
/// injected `rng` and flags the result as a fallback, so the user still gets
/// a suggestion without a low-confidence pick being presented as confident.
///
/// Returns `None` only when the category has no candidates at all.
pub fn select<R: Rng + ?Sized>(
    category: ClothesType,
    candidates: &[CandidateItem],
    context: &RecommendationContext,
    rng: &mut R,
) -> Option<CategorySelection> {
    let scored: Vec<(f64, &CandidateItem)> = candidates
        .iter()
        .filter(|item| item.category == category)
        .map(|item| (scoring::score(item, context), item))
        .collect();

    if scored.is_empty() {
        return None;
    }

    // Scores are never NaN, so the partial comparison always resolves.
    // On equal scores the comparator favors the lower id.
    let (best_score, best_item) = scored
        .iter()
        .copied()
        .max_by(|(score_a, item_a), (score_b, item_b)| {
            score_a
                .partial_cmp(score_b)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| item_b.id.cmp(&item_a.id))
        })?;

    if best_score >= ACCEPTANCE_THRESHOLD {
        return Some(CategorySelection {
            item: best_item.clone(),
            used_fallback: false,
        });
    }

    tracing::debug!(
        ?category,
        candidates = scored.len(),
        best_score,
        "No candidate met the acceptance threshold, falling back to random pick"
    );

    let (_, pick) = scored[rng.gen_range(0..scored.len())];
    Some(CategorySelection {
        item: pick.clone(),
        used_fallback: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ItemAttributeValue;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use uuid::Uuid;

    fn attr(name: &str, value: &str) -> ItemAttributeValue {
        ItemAttributeValue {
            definition_id: Uuid::new_v4(),
            definition_name: name.to_string(),
            value: Some(value.to_string()),
        }
    }

    fn item(name: &str, category: ClothesType, attributes: Vec<ItemAttributeValue>) -> CandidateItem {
        CandidateItem::new(name.to_string(), None, category, attributes)
    }

    fn context(temperature: f64, precipitating: bool, month: u32) -> RecommendationContext {
        RecommendationContext::new(temperature, precipitating, month).unwrap()
    }

    #[test]
    fn test_empty_category_returns_none() {
        let ctx = context(10.0, false, 4);
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(select(ClothesType::Outer, &[], &ctx, &mut rng), None);
    }

    #[test]
    fn test_candidates_from_other_categories_are_ignored() {
        let wardrobe = vec![item(
            "sneakers",
            ClothesType::Shoes,
            vec![attr("warmth", "medium")],
        )];
        let ctx = context(10.0, false, 4);
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(select(ClothesType::Outer, &wardrobe, &ctx, &mut rng), None);
    }

    #[test]
    fn test_best_scorer_wins_on_merit() {
        let good = item("parka", ClothesType::Outer, vec![attr("warmth", "heavy")]);
        let bad = item("windbreaker", ClothesType::Outer, vec![attr("warmth", "light")]);
        let wardrobe = vec![bad, good.clone()];
        let ctx = context(-5.0, false, 1);
        let mut rng = StdRng::seed_from_u64(0);

        let selection = select(ClothesType::Outer, &wardrobe, &ctx, &mut rng).unwrap();
        assert_eq!(selection.item.id, good.id);
        assert!(!selection.used_fallback);
    }

    #[test]
    fn test_tie_breaks_on_lowest_id() {
        // Identical attributes, identical scores
        let a = item("coat a", ClothesType::Outer, vec![attr("warmth", "heavy")]);
        let b = item("coat b", ClothesType::Outer, vec![attr("warmth", "heavy")]);
        let expected = if a.id < b.id { a.id } else { b.id };
        let ctx = context(-5.0, false, 1);

        for seed in 0..5 {
            let mut rng = StdRng::seed_from_u64(seed);
            let wardrobe = vec![a.clone(), b.clone()];
            let selection = select(ClothesType::Outer, &wardrobe, &ctx, &mut rng).unwrap();
            assert_eq!(selection.item.id, expected);
            assert!(!selection.used_fallback);
        }
    }

    #[test]
    fn test_tie_break_independent_of_input_order() {
        let a = item("coat a", ClothesType::Outer, vec![attr("warmth", "heavy")]);
        let b = item("coat b", ClothesType::Outer, vec![attr("warmth", "heavy")]);
        let ctx = context(-5.0, false, 1);
        let mut rng = StdRng::seed_from_u64(0);

        let forward = select(ClothesType::Outer, &[a.clone(), b.clone()], &ctx, &mut rng).unwrap();
        let reversed = select(ClothesType::Outer, &[b, a], &ctx, &mut rng).unwrap();
        assert_eq!(forward.item.id, reversed.item.id);
    }

    #[test]
    fn test_below_threshold_falls_back_within_category() {
        // Hot, rainy July: winter bottoms all score far below the threshold
        let wardrobe = vec![
            item(
                "wool trousers",
                ClothesType::Bottom,
                vec![
                    attr("warmth", "heavy"),
                    attr("water_resistance", "non_resistant"),
                    attr("season", "winter"),
                ],
            ),
            item(
                "fleece joggers",
                ClothesType::Bottom,
                vec![attr("warmth", "heavy"), attr("season", "winter")],
            ),
            item(
                "thermal leggings",
                ClothesType::Bottom,
                vec![attr("warmth", "heavy")],
            ),
        ];
        let ctx = context(30.0, true, 7);
        let ids: Vec<Uuid> = wardrobe.iter().map(|i| i.id).collect();

        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let selection = select(ClothesType::Bottom, &wardrobe, &ctx, &mut rng).unwrap();
            assert!(selection.used_fallback);
            assert!(ids.contains(&selection.item.id));
            assert_eq!(selection.item.category, ClothesType::Bottom);
        }
    }

    #[test]
    fn test_fallback_is_deterministic_for_seeded_rng() {
        let wardrobe = vec![
            item("scarf", ClothesType::Accessory, vec![]),
            item("cap", ClothesType::Accessory, vec![]),
            item("belt", ClothesType::Accessory, vec![]),
        ];
        let ctx = context(10.0, false, 4);

        let mut first_rng = StdRng::seed_from_u64(42);
        let mut second_rng = StdRng::seed_from_u64(42);
        let first = select(ClothesType::Accessory, &wardrobe, &ctx, &mut first_rng).unwrap();
        let second = select(ClothesType::Accessory, &wardrobe, &ctx, &mut second_rng).unwrap();

        assert!(first.used_fallback);
        assert_eq!(first.item.id, second.item.id);
    }

    #[test]
    fn test_unscorable_candidates_fall_back() {
        let wardrobe = vec![item("plain tee", ClothesType::Top, vec![])];
        let ctx = context(20.0, false, 6);
        let mut rng = StdRng::seed_from_u64(0);

        let selection = select(ClothesType::Top, &wardrobe, &ctx, &mut rng).unwrap();
        assert!(selection.used_fallback);
        assert_eq!(selection.item.name, "plain tee");
    }
}
