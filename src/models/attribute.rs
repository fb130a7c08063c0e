use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A clothing attribute definition from the catalog (e.g. warmth, season)
///
/// Definitions are immutable after creation. The engine only reads them;
/// ownership lives with the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AttributeDefinition {
    /// Unique identifier for the definition
    pub id: Uuid,
    /// Attribute name (e.g. "warmth", "water_resistance")
    pub name: String,
    /// Closed enumeration of permitted values, in declaration order
    pub selectable_values: Vec<String>,
    /// When the definition entered the catalog
    pub created_at: DateTime<Utc>,
}

impl AttributeDefinition {
    /// Creates a new definition with a fresh id
    pub fn new(name: String, selectable_values: Vec<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            selectable_values,
            created_at: Utc::now(),
        }
    }

    /// Whether `value` belongs to this definition's closed value set
    pub fn allows(&self, value: &str) -> bool {
        self.selectable_values.iter().any(|v| v == value)
    }
}

/// The value one clothing item holds for a single attribute definition
///
/// The definition name is resolved when the item enters the wardrobe, so
/// scoring never needs a catalog lookup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItemAttributeValue {
    /// The referenced attribute definition
    pub definition_id: Uuid,
    /// Name copied from the definition at item creation
    pub definition_name: String,
    /// Value within the definition's selectable set, or unset
    pub value: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_definition() {
        let def = AttributeDefinition::new(
            "warmth".to_string(),
            vec!["light".to_string(), "medium".to_string(), "heavy".to_string()],
        );
        assert_eq!(def.name, "warmth");
        assert_eq!(def.selectable_values.len(), 3);
    }

    #[test]
    fn test_allows_only_selectable_values() {
        let def = AttributeDefinition::new(
            "season".to_string(),
            vec!["spring".to_string(), "summer".to_string()],
        );
        assert!(def.allows("spring"));
        assert!(def.allows("summer"));
        assert!(!def.allows("winter"));
        assert!(!def.allows(""));
    }
}
