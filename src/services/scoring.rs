use crate::models::{CandidateItem, ClothesType, RecommendationContext, Season};

/// Inclusive bounds of an item score
pub const SCORE_MIN: f64 = 0.0;
pub const SCORE_MAX: f64 = 100.0;

/// Minimum score a candidate must reach to be picked on merit
pub const ACCEPTANCE_THRESHOLD: f64 = 40.0;

/// Catalog attribute names the scorer recognizes
pub const WARMTH_ATTRIBUTE: &str = "warmth";
pub const WATER_RESISTANCE_ATTRIBUTE: &str = "water_resistance";
pub const SEASON_ATTRIBUTE: &str = "season";

/// Warmth tier declared on an item, ordered lightest to heaviest
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarmthTier {
    Light,
    Medium,
    Heavy,
}

impl WarmthTier {
    fn from_value(value: &str) -> Option<WarmthTier> {
        match value {
            "light" => Some(WarmthTier::Light),
            "medium" => Some(WarmthTier::Medium),
            "heavy" => Some(WarmthTier::Heavy),
            _ => None,
        }
    }

    /// Tier an ideal item would declare for the given perceived temperature
    fn ideal_for(temperature: f64) -> WarmthTier {
        if temperature >= 20.0 {
            WarmthTier::Light
        } else if temperature >= 5.0 {
            WarmthTier::Medium
        } else {
            WarmthTier::Heavy
        }
    }

    fn rank(self) -> i32 {
        match self {
            WarmthTier::Light => 0,
            WarmthTier::Medium => 1,
            WarmthTier::Heavy => 2,
        }
    }

    fn distance(self, other: WarmthTier) -> f64 {
        (self.rank() - other.rank()).abs() as f64
    }
}

/// Water-resistance marking declared on an item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaterResistance {
    Resistant,
    NonResistant,
}

impl WaterResistance {
    fn from_value(value: &str) -> Option<WaterResistance> {
        match value {
            "resistant" => Some(WaterResistance::Resistant),
            "non_resistant" => Some(WaterResistance::NonResistant),
            _ => None,
        }
    }
}

/// Scoring rule set for one clothing category
///
/// Every row in the table keeps `warmth_points + rain_bonus + season_bonus`
/// at or below [`SCORE_MAX`], and `rain_penalty` strictly below `rain_bonus`.
#[derive(Debug, Clone, Copy)]
pub struct CategoryRules {
    /// Maximum contribution from a perfect warmth match
    pub warmth_points: f64,
    /// Deduction per tier of warmth mismatch, contribution floored at zero
    pub warmth_step_penalty: f64,
    /// Added when precipitating and the item is water-resistant
    pub rain_bonus: f64,
    /// Subtracted when precipitating and the item is marked non-resistant
    pub rain_penalty: f64,
    /// Added when the item's season tag matches the current season
    pub season_bonus: f64,
}

/// Rule table keyed by category
///
/// Kept as a plain lookup rather than trait dispatch so adding a category
/// or tuning a rule set means editing one row.
pub fn rules_for(category: ClothesType) -> CategoryRules {
    match category {
        ClothesType::Outer => CategoryRules {
            warmth_points: 60.0,
            warmth_step_penalty: 25.0,
            rain_bonus: 25.0,
            rain_penalty: 10.0,
            season_bonus: 15.0,
        },
        ClothesType::Top => CategoryRules {
            warmth_points: 60.0,
            warmth_step_penalty: 25.0,
            rain_bonus: 20.0,
            rain_penalty: 8.0,
            season_bonus: 15.0,
        },
        ClothesType::Bottom => CategoryRules {
            warmth_points: 60.0,
            warmth_step_penalty: 25.0,
            rain_bonus: 15.0,
            rain_penalty: 5.0,
            season_bonus: 15.0,
        },
        ClothesType::Shoes => CategoryRules {
            warmth_points: 50.0,
            warmth_step_penalty: 20.0,
            rain_bonus: 30.0,
            rain_penalty: 12.0,
            season_bonus: 15.0,
        },
        ClothesType::Accessory => CategoryRules {
            warmth_points: 40.0,
            warmth_step_penalty: 15.0,
            rain_bonus: 30.0,
            rain_penalty: 10.0,
            season_bonus: 15.0,
        },
    }
}

/// Typed view of the attributes the scorer understands
///
/// Parsed once per item. Unknown definition names, out-of-set values, and
/// unset values all leave the field empty; partial data never fails scoring.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ScorableAttributes {
    pub warmth: Option<WarmthTier>,
    pub water_resistance: Option<WaterResistance>,
    pub season: Option<Season>,
}

impl ScorableAttributes {
    /// Extracts the recognized attributes from an item
    ///
    /// The first occurrence of each attribute wins, so the view is
    /// deterministic even for items with duplicate definitions.
    pub fn from_item(item: &CandidateItem) -> Self {
        let mut parsed = Self::default();

        for attr in &item.attributes {
            let Some(value) = attr.value.as_deref() else {
                continue;
            };
            match attr.definition_name.as_str() {
                WARMTH_ATTRIBUTE if parsed.warmth.is_none() => {
                    parsed.warmth = WarmthTier::from_value(value);
                }
                WATER_RESISTANCE_ATTRIBUTE if parsed.water_resistance.is_none() => {
                    parsed.water_resistance = WaterResistance::from_value(value);
                }
                SEASON_ATTRIBUTE if parsed.season.is_none() => {
                    parsed.season = Season::from_value(value);
                }
                _ => {}
            }
        }

        parsed
    }
}

/// Scores one candidate against the context
///
/// The result always lies within [`SCORE_MIN`, `SCORE_MAX`]. Contributions
/// are independent and commutative, so the total does not depend on the
/// item's attribute ordering.
pub fn score(item: &CandidateItem, context: &RecommendationContext) -> f64 {
    let rules = rules_for(item.category);
    let attrs = ScorableAttributes::from_item(item);

    let mut total = 0.0;

    if let Some(tier) = attrs.warmth {
        let distance = tier.distance(WarmthTier::ideal_for(context.adjusted_temperature));
        total += (rules.warmth_points - rules.warmth_step_penalty * distance).max(0.0);
    }

    if context.is_precipitating {
        match attrs.water_resistance {
            Some(WaterResistance::Resistant) => total += rules.rain_bonus,
            Some(WaterResistance::NonResistant) => total -= rules.rain_penalty,
            // Unknown is neutral, not unsuitable
            None => {}
        }
    }

    if attrs.season == Some(context.season()) {
        total += rules.season_bonus;
    }

    total.clamp(SCORE_MIN, SCORE_MAX)
}
