use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ItemAttributeValue;

/// Closed set of clothing categories an item can belong to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ClothesType {
    Outer,
    Top,
    Bottom,
    Shoes,
    Accessory,
}

impl ClothesType {
    /// Fixed category order used when assembling an outfit
    pub const ALL: [ClothesType; 5] = [
        ClothesType::Outer,
        ClothesType::Top,
        ClothesType::Bottom,
        ClothesType::Shoes,
        ClothesType::Accessory,
    ];
}

/// One wardrobe entry, with attribute references already resolved against
/// the catalog
///
/// Supplied fresh per recommendation request; the engine never mutates it
/// and holds no copy across calls.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CandidateItem {
    /// Unique identifier for the item
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Reference to the stored item image, if any
    pub image_url: Option<String>,
    /// Clothing category
    pub category: ClothesType,
    /// Attribute values declared for this item
    pub attributes: Vec<ItemAttributeValue>,
    /// When the item entered the wardrobe
    pub created_at: DateTime<Utc>,
}

impl CandidateItem {
    /// Creates a new wardrobe item with a fresh id
    pub fn new(
        name: String,
        image_url: Option<String>,
        category: ClothesType,
        attributes: Vec<ItemAttributeValue>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            image_url,
            category,
            attributes,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_item() {
        let item = CandidateItem::new("Rain jacket".to_string(), None, ClothesType::Outer, vec![]);
        assert_eq!(item.name, "Rain jacket");
        assert_eq!(item.category, ClothesType::Outer);
        assert!(item.attributes.is_empty());
    }

    #[test]
    fn test_clothes_type_serialization() {
        let json = serde_json::to_string(&ClothesType::Outer).unwrap();
        assert_eq!(json, "\"outer\"");

        let parsed: ClothesType = serde_json::from_str("\"accessory\"").unwrap();
        assert_eq!(parsed, ClothesType::Accessory);
    }

    #[test]
    fn test_category_order_is_fixed() {
        assert_eq!(ClothesType::ALL.len(), 5);
        assert_eq!(ClothesType::ALL[0], ClothesType::Outer);
        assert_eq!(ClothesType::ALL[4], ClothesType::Accessory);
    }
}
